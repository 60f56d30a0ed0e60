//! Sega Mega Drive/Genesis ROM image transforms
//!
//! Layout facts shared by the tools:
//! - The 16-bit header checksum lives at 0x18E and covers 0x200..EOF
//! - The header's ROM size field lives at 0x1A4
//! - SMD copier dumps carry a 512-byte header followed by 16KB blocks,
//!   each split into two 8KB halves

pub mod checksum;
pub mod image;
pub mod interleave;
pub mod pad;
pub mod smd;
pub mod split;

pub use checksum::{
    ChecksumReport, calculate_checksum, check_checksum, find_stored_checksum, fix_checksum,
    update_checksum,
};
pub use image::load_image;
pub use interleave::deinterleave;
pub use pad::{MBIT, mbits_to_bytes, pad};
pub use smd::{bin_to_smd, smd_header, smd_to_bin};
pub use split::{SplitStats, split_128k, split_128k_file, split_hilo};

/// First byte included in the checksum
pub const DATA_START: usize = 0x200;
/// Offset of the stored big-endian checksum
pub const CHECKSUM_LOCATION: usize = 0x18E;
/// Offset of the 4-byte big-endian ROM size field
pub const SIZE_FIELD_LOCATION: usize = 0x1A4;
/// Length of the SMD copier header
pub const SMD_HEADER_SIZE: usize = 0x200;
/// SMD interleave block (two halves)
pub const SMD_BLOCK_SIZE: usize = 0x4000;
/// One half of an SMD block
pub const SMD_HALF_SIZE: usize = SMD_BLOCK_SIZE / 2;
/// Input consumed per even/odd file pair by the 128KB splitter
pub const SPLIT_BLOCK_SIZE: usize = 0x20000;

/// How the checksum tool decides how many bytes make up the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeSource {
    /// Read the stream to its end
    #[default]
    Actual,
    /// Trust the 32-bit size field at 0x1A4 in the header
    Declared,
}

/// Which output byte parity the first 8KB half of an SMD block holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalfOrder {
    /// First half fills offsets 0, 2, 4, ...
    #[default]
    Even,
    /// First half fills offsets 1, 3, 5, ... (common copier layout)
    Odd,
}
