use clap::{Parser, Subcommand};

use crate::cli_commands;
use crate::execution::ChildProcessFailure;
use crate::print_err;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch a training run from a preset and/or configuration files.
    Run(cli_commands::run::RunArgs),
    /// Print the rendered trainer command without executing it.
    Render(cli_commands::render::RenderArgs),
    /// List the built-in experiment presets.
    List,
}

pub fn cli_main() {
    let args = CliArgs::parse();

    let cli_res = match args.command {
        Commands::Run(run_args) => cli_commands::run::handle_command(run_args),
        Commands::Render(render_args) => cli_commands::render::handle_command(render_args),
        Commands::List => cli_commands::list::handle_command(),
    };

    if let Err(e) = cli_res {
        print_err!("{:#}", e);
        // A trainer failure surfaces the child's own exit code; everything
        // else (bad config, unsupported value) is our error.
        let code = e
            .downcast_ref::<ChildProcessFailure>()
            .and_then(ChildProcessFailure::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
