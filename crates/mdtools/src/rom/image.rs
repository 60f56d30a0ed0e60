//! Loading whole ROM images into memory

use super::{DATA_START, SIZE_FIELD_LOCATION, SizeSource};
use crate::common::fs::read_up_to;
use crate::common::{RomError, RomResult};
use std::io::Read;

/// Read a complete ROM image.
///
/// With [`SizeSource::Actual`] the stream is read to its end. With
/// [`SizeSource::Declared`] the 512-byte header is read first and the
/// big-endian size field at 0x1A4 decides how many bytes belong to the
/// image; a stream that ends before that length is a short read.
pub fn load_image<R: Read>(mut reader: R, source: SizeSource) -> RomResult<Vec<u8>> {
    match source {
        SizeSource::Actual => {
            let mut rom = Vec::new();
            reader.read_to_end(&mut rom)?;
            log::debug!("read {} bytes to end of stream", rom.len());
            Ok(rom)
        }
        SizeSource::Declared => load_declared(reader),
    }
}

fn load_declared<R: Read>(mut reader: R) -> RomResult<Vec<u8>> {
    let mut header = [0u8; DATA_START];
    let got = read_up_to(&mut reader, &mut header)?;
    if got < header.len() {
        return Err(RomError::short_read(header.len(), got));
    }

    let declared = declared_size(&header);
    log::debug!("header declares {declared} bytes");

    let mut rom = Vec::new();
    rom.try_reserve_exact(declared)
        .map_err(|_| RomError::Alloc { size: declared })?;

    if declared <= header.len() {
        rom.extend_from_slice(&header[..declared]);
        return Ok(rom);
    }

    rom.extend_from_slice(&header);
    let remaining = (declared - header.len()) as u64;
    reader.take(remaining).read_to_end(&mut rom)?;
    if rom.len() < declared {
        return Err(RomError::short_read(declared, rom.len()));
    }
    Ok(rom)
}

fn declared_size(header: &[u8; DATA_START]) -> usize {
    let field = [
        header[SIZE_FIELD_LOCATION],
        header[SIZE_FIELD_LOCATION + 1],
        header[SIZE_FIELD_LOCATION + 2],
        header[SIZE_FIELD_LOCATION + 3],
    ];
    u32::from_be_bytes(field) as usize
}
