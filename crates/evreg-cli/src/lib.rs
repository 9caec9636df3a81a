//! Library side of the `evreg` command-line tool.

pub mod logging;
pub mod settings;
pub mod store;
pub mod workflow;
