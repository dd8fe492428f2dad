pub mod command;
pub mod config;
pub mod error;

pub use command::{to_args, to_command};
pub use config::{ConfigMap, Scalar, Value};
pub use error::{CommandError, ConfigError};
