//! Splitting BIN images into even/odd byte streams
//!
//! - [`split_hilo`]: one high (even offset) and one low (odd offset) stream
//! - [`split_128k`]: Sega's dual-chip layout, a new even/odd file pair for
//!   every 128KB of input, numbered `.0`/`.1`, `.2`/`.3`, ...

use super::SPLIT_BLOCK_SIZE;
use super::interleave::deinterleave;
use crate::common::fs::{create_output, open_input, read_up_to};
use crate::common::RomResult;
use std::ffi::OsString;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

const HILO_CHUNK: usize = 0x8000;

/// Byte counts written by a split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    pub even_bytes: u64,
    pub odd_bytes: u64,
}

/// Write every even-offset byte of `input` to `high` and every odd-offset
/// byte to `low`.
///
/// An odd trailing byte goes to `high`.
pub fn split_hilo<R: Read, H: Write, L: Write>(
    mut input: R,
    mut high: H,
    mut low: L,
) -> RomResult<SplitStats> {
    // Even-sized chunks keep every chunk starting on an even offset
    let mut buf = vec![0u8; HILO_CHUNK];
    let mut stats = SplitStats::default();

    loop {
        let n = read_up_to(&mut input, &mut buf)?;
        if n == 0 {
            break;
        }
        let (even, odd) = deinterleave(&buf[..n]);
        high.write_all(&even)?;
        low.write_all(&odd)?;
        stats.even_bytes += even.len() as u64;
        stats.odd_bytes += odd.len() as u64;
        if n < buf.len() {
            break;
        }
    }

    high.flush()?;
    low.flush()?;
    log::debug!("split {} high / {} low bytes", stats.even_bytes, stats.odd_bytes);
    Ok(stats)
}

/// Split `input` into 128KB slices, writing each slice's even-offset bytes
/// to part `2k` and its odd-offset bytes to part `2k + 1`.
///
/// `open_part` is called with the part number each time a new output is
/// needed. An empty input opens nothing. A trailing unpaired byte goes to
/// the even part. Returns the number of parts written.
pub fn split_128k<R, W, F>(mut input: R, mut open_part: F) -> RomResult<usize>
where
    R: Read,
    W: Write,
    F: FnMut(usize) -> RomResult<W>,
{
    let mut buf = vec![0u8; SPLIT_BLOCK_SIZE];
    let mut parts = 0;

    loop {
        let n = read_up_to(&mut input, &mut buf)?;
        if n == 0 {
            break;
        }

        let (even, odd) = deinterleave(&buf[..n]);
        let mut even_out = open_part(parts)?;
        even_out.write_all(&even)?;
        even_out.flush()?;
        let mut odd_out = open_part(parts + 1)?;
        odd_out.write_all(&odd)?;
        odd_out.flush()?;
        parts += 2;

        if n < buf.len() {
            break;
        }
    }

    Ok(parts)
}

/// Name of split part `n` for `path`: `<path>.<n>`
pub fn part_path(path: &Path, n: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}", n));
    PathBuf::from(name)
}

/// Split the file at `path` into `<path>.0`, `<path>.1`, ...
///
/// Returns the paths that were created, in order.
pub fn split_128k_file(path: &Path) -> RomResult<Vec<PathBuf>> {
    let input = BufReader::new(open_input(path)?);
    let mut created = Vec::new();

    split_128k(input, |n| {
        let part = part_path(path, n);
        let file = create_output(&part)?;
        log::info!("writing {}", part.display());
        created.push(part);
        Ok(BufWriter::new(file))
    })?;

    Ok(created)
}
