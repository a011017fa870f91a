//! Column-contiguous search kernels: the caller targets a single column of
//! same-width elements with no stride or interleaving (`blklen == width`,
//! `blkpos == 0`). Specializes the row-strided kernels to drop the multiply
//! and add per probe. Byte order is whatever the caller declares — Arrow and
//! Feather columns are little-endian on little-endian platforms, but this
//! module does not assume that; it takes `order` explicitly like the
//! row-strided family.

use crate::reader::{read, ByteOrder, UInt};

use super::core::{find_first_by, find_last_by, has_next_by, has_prev_by};

#[inline]
fn key_at<T: UInt>(data: &[u8], order: ByteOrder, i: usize) -> u64 {
    read::<T>(data, i * T::WIDTH, order).as_u64()
}

/// Column-contiguous [`super::row::find_first`].
pub fn find_first<T: UInt>(data: &[u8], order: ByteOrder, first: &mut usize, last: &mut usize, search: T) -> usize {
    find_first_by(|i| key_at::<T>(data, order, i), first, last, search.as_u64())
}

/// Column-contiguous [`super::row::find_last`].
pub fn find_last<T: UInt>(data: &[u8], order: ByteOrder, first: &mut usize, last: &mut usize, search: T) -> usize {
    find_last_by(|i| key_at::<T>(data, order, i), first, last, search.as_u64())
}

/// Column-contiguous [`super::row::has_next`].
pub fn has_next<T: UInt>(data: &[u8], order: ByteOrder, pos: &mut usize, last: usize, search: T) -> bool {
    has_next_by(|i| key_at::<T>(data, order, i), pos, last, search.as_u64())
}

/// Column-contiguous [`super::row::has_prev`].
pub fn has_prev<T: UInt>(data: &[u8], order: ByteOrder, first: usize, pos: &mut usize, search: T) -> bool {
    has_prev_by(|i| key_at::<T>(data, order, i), first, pos, search.as_u64())
}
