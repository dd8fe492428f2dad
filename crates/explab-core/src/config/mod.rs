mod interop;
mod merge;
mod value;

pub use interop::load_config;
pub use merge::merge;
pub use value::{ConfigMap, Scalar, Value};
