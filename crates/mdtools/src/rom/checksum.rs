//! Sega Megadrive ROM checksum calculation
//!
//! The checksum is calculated as the 16-bit sum of all words from
//! offset 0x200 to the end of the ROM, stored at offset 0x18E.

use super::{CHECKSUM_LOCATION, DATA_START};
use std::fmt;

const CHECKSUM_END: usize = CHECKSUM_LOCATION + 2;

/// Calculate the Sega Megadrive ROM checksum
///
/// The checksum is calculated as the sum of all 16-bit big-endian words
/// from offset 0x200 to the end of the ROM, modulo 65536. An odd trailing
/// byte is summed as the high byte of a word whose low byte is 0. Images
/// no longer than 0x200 bytes have a checksum of 0.
pub fn calculate_checksum(rom_data: &[u8]) -> u16 {
    let Some(data) = rom_data.get(DATA_START..) else {
        return 0;
    };

    data.chunks(2).fold(0u16, |sum, chunk| {
        let word = match *chunk {
            [hi, lo] => u16::from_be_bytes([hi, lo]),
            [hi] => u16::from_be_bytes([hi, 0]),
            _ => unreachable!("chunks(2) yields one or two bytes"),
        };
        sum.wrapping_add(word)
    })
}

/// Read the checksum stored in the header
///
/// Returns `None` if the image is too short to hold the checksum field.
pub fn find_stored_checksum(rom_data: &[u8]) -> Option<u16> {
    match rom_data.get(CHECKSUM_LOCATION..CHECKSUM_END)? {
        &[hi, lo] => Some(u16::from_be_bytes([hi, lo])),
        _ => None,
    }
}

/// Store `checksum` in the header (big-endian)
///
/// Returns `false` and leaves the image untouched if it is too short.
pub fn fix_checksum(rom_data: &mut [u8], checksum: u16) -> bool {
    match rom_data.get_mut(CHECKSUM_LOCATION..CHECKSUM_END) {
        Some(field) => {
            field.copy_from_slice(&checksum.to_be_bytes());
            true
        }
        None => false,
    }
}

/// Update the checksum in a ROM image
///
/// Calculates the checksum and writes it to offset 0x18E. Returns the
/// calculated value whether or not the image was long enough to store it.
pub fn update_checksum(rom_data: &mut [u8]) -> u16 {
    let checksum = calculate_checksum(rom_data);
    fix_checksum(rom_data, checksum);
    checksum
}

/// Stored and calculated checksums of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    pub stored: u16,
    pub calculated: u16,
}

impl ChecksumReport {
    pub fn is_ok(&self) -> bool {
        self.stored == self.calculated
    }
}

impl fmt::Display for ChecksumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "Checksum OK: 0x{:04X}.", self.calculated)
        } else {
            write!(
                f,
                "Bad checksum: expected 0x{:04X}, found 0x{:04X}.",
                self.calculated, self.stored
            )
        }
    }
}

/// Compare the stored checksum against the calculated one
pub fn check_checksum(rom_data: &[u8]) -> Option<ChecksumReport> {
    let stored = find_stored_checksum(rom_data)?;
    Some(ChecksumReport {
        stored,
        calculated: calculate_checksum(rom_data),
    })
}
