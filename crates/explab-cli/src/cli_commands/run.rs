use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use explab_core::config::{load_config, merge};
use explab_core::{ConfigMap, to_args, to_command};

use crate::execution::{self, RunCommand};
use crate::overrides;
use crate::print_info;
use crate::registry::{self, PresetName};

/// Trainer the rendered flags are appended to when `--trainer` is absent.
pub const DEFAULT_TRAINER: &str = "python scripts/run_experiment.py";

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Built-in experiment preset to start from
    #[clap(value_enum)]
    pub preset: Option<PresetName>,

    /// Experiment configuration files (JSON), merged left to right
    #[clap(short = 'c', long = "config", value_name = "FILE")]
    pub configs: Vec<PathBuf>,

    /// Dotted-path overrides applied last, e.g. --set algo.batch_size=2000
    #[clap(short = 's', long = "set", value_name = "PATH=VALUE")]
    pub overrides: Vec<String>,

    /// External trainer command the rendered flags are appended to
    #[clap(long, default_value = DEFAULT_TRAINER)]
    pub trainer: String,

    /// Print the rendered command without executing it
    #[clap(long)]
    pub dry_run: bool,
}

pub(crate) fn handle_command(args: RunArgs) -> anyhow::Result<()> {
    let run_command =
        resolve_run_command(args.preset, &args.configs, &args.overrides, &args.trainer)?;

    if args.dry_run {
        println!("{}", run_command.rendered);
        print_info!("Dry run requested; trainer not executed.");
        return Ok(());
    }

    execution::execute_run_command(&run_command)
}

/// Resolve the preset, configuration files and overrides into one launchable
/// run: preset first, files merged left to right, `--set` entries last.
///
/// All serialization happens here, before any process is spawned; a bad
/// value aborts with its key path and the trainer never starts.
pub(crate) fn resolve_run_command(
    preset: Option<PresetName>,
    configs: &[PathBuf],
    overrides: &[String],
    trainer: &str,
) -> anyhow::Result<RunCommand> {
    if preset.is_none() && configs.is_empty() {
        anyhow::bail!("nothing to run: provide a preset or at least one --config file");
    }

    let mut config = match &preset {
        Some(name) => registry::preset_config(name),
        None => ConfigMap::new(),
    };
    for path in configs {
        let overlay = load_config(path)
            .with_context(|| format!("failed to load configuration file `{}`", path.display()))?;
        config = merge(&config, &overlay)?;
    }
    for entry in overrides {
        let overlay = overrides::parse_set(entry)?;
        config = merge(&config, &overlay)?;
    }

    let trainer: Vec<String> = trainer.split_whitespace().map(str::to_owned).collect();
    if trainer.is_empty() {
        anyhow::bail!("trainer command is empty");
    }

    let rendered = to_command(&trainer, &config)?;
    let args = to_args(&config)?;

    Ok(RunCommand {
        trainer,
        args,
        rendered,
    })
}
