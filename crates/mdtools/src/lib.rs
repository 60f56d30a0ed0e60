//! mdtools - utilities for Sega Mega Drive/Genesis ROM images
//!
//! This library holds the transforms behind the `mdtools` binaries.
//!
//! ## Architecture
//!
//! - **ROM** (`rom/`): checksum, padding, splitting and SMD/BIN conversion
//! - **Common** (`common/`): errors, exit codes, file helpers and CLI plumbing
//!
//! Every transform works on plain `Read`/`Write` handles or byte slices, so
//! the binaries only decide where bytes come from and where they go.

pub mod common;
pub mod rom;

// Re-exports for convenience
pub use common::{RomError, RomResult};
pub use rom::{
    CHECKSUM_LOCATION, DATA_START, HalfOrder, SIZE_FIELD_LOCATION, SMD_BLOCK_SIZE,
    SMD_HALF_SIZE, SMD_HEADER_SIZE, SizeSource, SPLIT_BLOCK_SIZE,
};
