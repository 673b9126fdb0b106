pub mod cli;
pub mod config;
pub mod datetime;
pub mod env;
pub mod fs_op;
pub mod logging;
pub mod msg;
pub mod stopwatch;

pub use crate::env::Env;
pub use crate::fs_op::{dir, file, FsOpError};
pub use crate::msg::OrAbort;
pub use crate::stopwatch::Stopwatch;
