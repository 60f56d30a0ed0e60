//! SMD <-> BIN conversion
//!
//! An SMD dump is a 512-byte copier header followed by 16KB blocks. Each
//! block holds one 8KB half per byte parity; [`HalfOrder`] says which
//! parity the first half carries.

use super::interleave::{deinterleave, interleave_into};
use super::{HalfOrder, SMD_BLOCK_SIZE, SMD_HALF_SIZE, SMD_HEADER_SIZE};
use crate::common::fs::read_up_to;
use crate::common::{RomError, RomResult};
use std::io::{Read, Write};

/// Copier magic at bytes 8..10 of the header
pub const SMD_MAGIC: [u8; 2] = [0xAA, 0xBB];

/// Build an SMD header for an image of `blocks` 16KB blocks
pub fn smd_header(blocks: usize) -> [u8; SMD_HEADER_SIZE] {
    let mut header = [0u8; SMD_HEADER_SIZE];
    header[0] = blocks as u8;
    header[1] = 0x03;
    header[8..10].copy_from_slice(&SMD_MAGIC);
    header[10] = 0x06;
    header
}

/// Convert an SMD stream to a flat BIN stream.
///
/// The header is skipped. Every block of input produces twice as many
/// output bytes as its first half holds; a block whose second half is
/// short leaves zeros in the slots it would have filled. Input that ends
/// inside the header is a short read; a bare header produces no output.
/// Returns the number of bytes written.
pub fn smd_to_bin<R: Read, W: Write>(mut input: R, mut output: W, order: HalfOrder) -> RomResult<u64> {
    let mut header = [0u8; SMD_HEADER_SIZE];
    let got = read_up_to(&mut input, &mut header)?;
    if got < SMD_HEADER_SIZE {
        return Err(RomError::short_read(SMD_HEADER_SIZE, got));
    }
    if header[8..10] != SMD_MAGIC {
        log::warn!("SMD magic not found in header (got {:02X?})", &header[8..10]);
    }

    let mut block = vec![0u8; SMD_BLOCK_SIZE];
    let mut out = vec![0u8; SMD_BLOCK_SIZE];
    let mut written = 0u64;
    let mut blocks = 0usize;

    loop {
        let n = read_up_to(&mut input, &mut block)?;
        if n == 0 {
            break;
        }

        let (first, second) = block[..n].split_at(n.min(SMD_HALF_SIZE));
        let dst = &mut out[..first.len() * 2];
        dst.fill(0);
        match order {
            HalfOrder::Even => interleave_into(dst, first, second),
            HalfOrder::Odd => interleave_into(dst, second, first),
        }
        output.write_all(dst)?;
        written += dst.len() as u64;
        blocks += 1;

        if n < SMD_BLOCK_SIZE {
            log::debug!("last block is partial ({n} bytes)");
            break;
        }
    }

    output.flush()?;
    log::info!("converted {blocks} blocks, {written} bytes");
    Ok(written)
}

/// Convert a flat BIN image to SMD layout.
///
/// The image is zero-padded to a whole number of 16KB blocks.
pub fn bin_to_smd(bin: &[u8], order: HalfOrder) -> Vec<u8> {
    let blocks = bin.len().div_ceil(SMD_BLOCK_SIZE);
    let mut smd = Vec::with_capacity(SMD_HEADER_SIZE + blocks * SMD_BLOCK_SIZE);
    smd.extend_from_slice(&smd_header(blocks));

    let mut block = vec![0u8; SMD_BLOCK_SIZE];
    for chunk in bin.chunks(SMD_BLOCK_SIZE) {
        block.fill(0);
        block[..chunk.len()].copy_from_slice(chunk);
        let (even, odd) = deinterleave(&block);
        let (first, second) = match order {
            HalfOrder::Even => (even, odd),
            HalfOrder::Odd => (odd, even),
        };
        smd.extend_from_slice(&first);
        smd.extend_from_slice(&second);
    }

    log::info!("built {blocks} SMD blocks from {} bytes", bin.len());
    smd
}
