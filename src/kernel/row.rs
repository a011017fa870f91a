//! Row-strided search kernels: each record is `blklen` bytes wide and the
//! key of interest starts at `blkpos` bytes from the record's start.

use crate::reader::{read, ByteOrder, UInt};

use super::core::{find_first_by, find_last_by, has_next_by, has_prev_by};

#[inline]
fn key_at<T: UInt>(data: &[u8], blklen: usize, blkpos: usize, order: ByteOrder, i: usize) -> u64 {
    read::<T>(data, blklen * i + blkpos, order).as_u64()
}

/// Least index in `[*first, *last]` whose `w`-bit key at `blklen*i + blkpos`
/// (decoded with `order`) equals `search`. Returns `*last + 1` if none.
pub fn find_first<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    first: &mut usize,
    last: &mut usize,
    search: T,
) -> usize {
    find_first_by(|i| key_at::<T>(data, blklen, blkpos, order, i), first, last, search.as_u64())
}

/// Greatest index in `[*first, *last]` whose key equals `search`. Returns
/// `*last + 1` if none.
pub fn find_last<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    first: &mut usize,
    last: &mut usize,
    search: T,
) -> usize {
    find_last_by(|i| key_at::<T>(data, blklen, blkpos, order, i), first, last, search.as_u64())
}

/// Advances `*pos` one row forward if it is still within `[..=last]` and
/// still matches `search`.
#[allow(clippy::too_many_arguments)]
pub fn has_next<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    pos: &mut usize,
    last: usize,
    search: T,
) -> bool {
    has_next_by(|i| key_at::<T>(data, blklen, blkpos, order, i), pos, last, search.as_u64())
}

/// Steps `*pos` one row backward if it is still within `[first..]` and still
/// matches `search`.
#[allow(clippy::too_many_arguments)]
pub fn has_prev<T: UInt>(
    data: &[u8],
    blklen: usize,
    blkpos: usize,
    order: ByteOrder,
    first: usize,
    pos: &mut usize,
    search: T,
) -> bool {
    has_prev_by(|i| key_at::<T>(data, blklen, blkpos, order, i), first, pos, search.as_u64())
}
