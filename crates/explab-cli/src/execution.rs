use std::process::{Command, ExitStatus};

use anyhow::Context as _;

use crate::{print_info, print_success};

/// Contains the data necessary to launch one training run.
#[derive(Debug, Clone)]
pub struct RunCommand {
    /// Trainer command prefix, whitespace-split: program plus leading args.
    pub trainer: Vec<String>,
    /// Flattened configuration argument tokens, one `--flag value` pair per leaf.
    pub args: Vec<String>,
    /// Shell-quoted command string shown to the operator.
    pub rendered: String,
}

/// The external trainer exited unsuccessfully.
#[derive(Debug, thiserror::Error)]
#[error("trainer failed: {status}")]
pub struct ChildProcessFailure {
    pub status: ExitStatus,
}

impl ChildProcessFailure {
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }
}

fn make_run_command(cmd_desc: &RunCommand) -> anyhow::Result<Command> {
    let (program, leading_args) = cmd_desc
        .trainer
        .split_first()
        .context("trainer command is empty")?;
    let mut command = Command::new(program);
    command.args(leading_args).args(&cmd_desc.args);
    Ok(command)
}

/// Execute the run command for an experiment.
///
/// The rendered command is printed before the spawn so a failing run can be
/// reproduced by hand. The child's exit status is surfaced unchanged; there
/// is no retry and no output capture.
pub(crate) fn execute_run_command(cmd_desc: &RunCommand) -> anyhow::Result<()> {
    print_info!("Running experiment with command: {}", cmd_desc.rendered);

    let run_status = make_run_command(cmd_desc)?
        .status()
        .with_context(|| format!("failed to spawn trainer `{}`", cmd_desc.trainer[0]))?;

    if !run_status.success() {
        return Err(ChildProcessFailure { status: run_status }.into());
    }

    print_success!("Experiment ran successfully.");
    Ok(())
}
