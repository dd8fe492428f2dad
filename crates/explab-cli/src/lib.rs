pub mod cli;

mod cli_commands;
mod execution;
mod logging;
mod overrides;
mod registry;
