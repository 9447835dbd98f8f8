//! CLI argument structs.
//!
//! Every value is optional on the command line; unset flags fall back to the
//! environment and then to the defaults in [`crate::RunConfig`].

mod log;
mod probe;
mod target;

pub use log::LogArgs;
pub use probe::ProbeArgs;
pub use target::TargetArgs;
