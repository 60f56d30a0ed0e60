//! Padding images to a megabit boundary

use std::io::{self, Seek, SeekFrom, Write};

/// Bytes per megabit
pub const MBIT: u64 = 1024 * 1024 / 8;

/// Default padding target in megabits
pub const DEFAULT_MBITS: u64 = 8;

/// Default fill byte (erased EPROM)
pub const DEFAULT_FILL: u8 = 0xFF;

const FILL_CHUNK: usize = 0x10000;

pub fn mbits_to_bytes(mbits: u64) -> u64 {
    mbits.saturating_mul(MBIT)
}

/// Append `fill` to the end of `stream` until it is `target` bytes long.
///
/// Never truncates: a stream already at or beyond `target` is left alone.
/// Returns the number of bytes appended.
pub fn pad<W: Write + Seek>(target: u64, fill: u8, stream: &mut W) -> io::Result<u64> {
    let len = stream.seek(SeekFrom::End(0))?;
    if len >= target {
        log::debug!("already {len} bytes, target {target}; nothing to do");
        return Ok(0);
    }

    let missing = target - len;
    let chunk = vec![fill; FILL_CHUNK];
    let mut left = missing;
    while left > 0 {
        let n = left.min(FILL_CHUNK as u64) as usize;
        stream.write_all(&chunk[..n])?;
        left -= n as u64;
    }
    stream.flush()?;

    log::info!("appended {missing} bytes of 0x{fill:02X} ({len} -> {target})");
    Ok(missing)
}
