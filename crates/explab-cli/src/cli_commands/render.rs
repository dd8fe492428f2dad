use std::path::PathBuf;

use clap::Parser;

use crate::cli_commands::run::{self, DEFAULT_TRAINER};
use crate::registry::PresetName;

#[derive(Parser, Debug)]
pub struct RenderArgs {
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
}

pub(crate) fn handle_command(args: RenderArgs) -> anyhow::Result<()> {
    let run_command =
        run::resolve_run_command(args.preset, &args.configs, &args.overrides, &args.trainer)?;
    // bare stdout so the output can be piped or copy-pasted directly
    println!("{}", run_command.rendered);
    Ok(())
}
