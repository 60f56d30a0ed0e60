//! Common infrastructure shared across the tools

pub mod cli;
mod error;
pub mod fs;

pub use error::{ExitCode, RomError, RomResult};
