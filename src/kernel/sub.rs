//! Bitfield-masked variants of the row-strided kernels: the decoded key is
//! masked to `[bit_start, bit_end]` (zero-based, MSB-relative, inclusive)
//! before comparison. Within a column used with these kernels, the *masked*
//! values — not necessarily the whole decoded value — must be ascending.

use crate::reader::{read, ByteOrder, UInt};

use super::core::{find_first_by, find_last_by, has_next_by, has_prev_by};

/// Extracts bits `[bit_start, bit_end]` of `value` (bit 0 = MSB of the
/// decoded `w`-bit integer) and right-aligns them to the low bits.
///
/// Shift-then-mask, not mask-then-shift-in-a-truncating-register: the two
/// historical formulations only agree when the intermediate shift happens in
/// a register exactly `w` bits wide, which a width-generic implementation
/// over `u64` does not have. See DESIGN.md for the worked comparison.
#[inline]
pub(crate) fn extract_bits(value: u64, w_bits: u32, bit_start: u32, bit_end: u32) -> u64 {
    let shift = w_bits - 1 - bit_end;
    let width = bit_end - bit_start + 1;
    let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
    (value >> shift) & mask
}

#[inline]
#[allow(clippy::too_many_arguments)]
fn subkey_at<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    bit_start: u32,
    bit_end: u32,
    i: usize,
) -> u64 {
    let raw = read::<T>(data, blklen * i + blkpos, order).as_u64();
    extract_bits(raw, T::WIDTH as u32 * 8, bit_start, bit_end)
}

/// Bitfield-masked [`super::row::find_first`].
#[allow(clippy::too_many_arguments)]
pub fn find_first_sub<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    bit_start: u32,
    bit_end: u32,
    first: &mut usize,
    last: &mut usize,
    search: u64,
) -> usize {
    find_first_by(
        |i| subkey_at::<T>(data, blklen, blkpos, order, bit_start, bit_end, i),
        first,
        last,
        search,
    )
}

/// Bitfield-masked [`super::row::find_last`].
#[allow(clippy::too_many_arguments)]
pub fn find_last_sub<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    bit_start: u32,
    bit_end: u32,
    first: &mut usize,
    last: &mut usize,
    search: u64,
) -> usize {
    find_last_by(
        |i| subkey_at::<T>(data, blklen, blkpos, order, bit_start, bit_end, i),
        first,
        last,
        search,
    )
}

/// Bitfield-masked [`super::row::has_next`].
#[allow(clippy::too_many_arguments)]
pub fn has_next_sub<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    bit_start: u32,
    bit_end: u32,
    pos: &mut usize,
    last: usize,
    search: u64,
) -> bool {
    has_next_by(
        |i| subkey_at::<T>(data, blklen, blkpos, order, bit_start, bit_end, i),
        pos,
        last,
        search,
    )
}

/// Bitfield-masked [`super::row::has_prev`].
#[allow(clippy::too_many_arguments)]
pub fn has_prev_sub<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    bit_start: u32,
    bit_end: u32,
    first: usize,
    pos: &mut usize,
    search: u64,
) -> bool {
    has_prev_by(
        |i| subkey_at::<T>(data, blklen, blkpos, order, bit_start, bit_end, i),
        first,
        pos,
        search,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_bits_matches_worked_example() {
        // 8-bit value 0b1011_0110, bit_start=2, bit_end=5 (MSB-relative) -> 0b1101 = 13.
        assert_eq!(extract_bits(0b1011_0110, 8, 2, 5), 0b1101);
    }

    #[test]
    fn extract_bits_whole_value_is_identity() {
        assert_eq!(extract_bits(0x27F3, 32, 0, 31), 0x27F3);
    }

    #[test]
    fn scenario_8bit_subfield_ascending_and_enumerable() {
        // bit_start=2, bit_end=5 selects a 4-bit subfield occupying bits 2..5
        // (shift=2, mask=0xF); bits 0-1 and 6-7 are free to vary independently
        // as long as the masked values stay ascending. Masked sequence: 2,2,5,9.
        let raw: Vec<u8> = vec![2 << 2, 2 << 2, 5 << 2, 9 << 2];
        let masked: Vec<u64> = raw.iter().map(|&b| extract_bits(b as u64, 8, 2, 5)).collect();
        assert_eq!(masked, vec![2, 2, 5, 9]);
        for w in masked.windows(2) {
            assert!(w[0] <= w[1], "fixture must be ascending under the mask");
        }

        let (mut f, mut l) = (0usize, raw.len() - 1);
        let target = 2u64;
        let mut pos = find_first_sub::<u8>(&raw, 1, 0, ByteOrder::Big, 2, 5, &mut f, &mut l, target);
        assert_eq!(pos, 0);
        assert!(has_next_sub::<u8>(&raw, 1, 0, ByteOrder::Big, 2, 5, &mut pos, raw.len() - 1, target));
        assert_eq!(pos, 1);
        assert!(!has_next_sub::<u8>(&raw, 1, 0, ByteOrder::Big, 2, 5, &mut pos, raw.len() - 1, target));
    }
}
