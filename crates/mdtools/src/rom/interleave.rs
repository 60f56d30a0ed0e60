//! Even/odd byte interleaving
//!
//! The 68000 sees ROM as 16-bit words; dual-chip boards and copier dumps
//! keep the high (even offset) and low (odd offset) bytes apart.

/// Split `data` into its even-offset and odd-offset bytes.
pub fn deinterleave(data: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut even = Vec::with_capacity(data.len().div_ceil(2));
    let mut odd = Vec::with_capacity(data.len() / 2);
    for pair in data.chunks(2) {
        even.push(pair[0]);
        if let Some(&b) = pair.get(1) {
            odd.push(b);
        }
    }
    (even, odd)
}

/// Scatter `even` into `out[0], out[2], ...` and `odd` into `out[1], out[3], ...`.
///
/// Bytes that would land past the end of `out` are dropped; slots with no
/// source byte keep their current value.
pub fn interleave_into(out: &mut [u8], even: &[u8], odd: &[u8]) {
    for (slot, &b) in out.iter_mut().step_by(2).zip(even) {
        *slot = b;
    }
    for (slot, &b) in out.iter_mut().skip(1).step_by(2).zip(odd) {
        *slot = b;
    }
}

/// Merge even-offset and odd-offset streams back into one image.
///
/// The result is just long enough to hold every source byte; gaps left
/// when one stream is much shorter than the other are zero.
#[cfg(test)]
pub(crate) fn interleave(even: &[u8], odd: &[u8]) -> Vec<u8> {
    let len = (even.len() * 2).saturating_sub(1).max(odd.len() * 2);
    let mut out = vec![0u8; len];
    interleave_into(&mut out, even, odd);
    out
}
