//! Byte-slice utilities for bounds-oriented parsing.
//!
//! This module is intentionally tiny and *boring*: it provides a consistent way
//! to read little-endian primitives out of `&[u8]` at fixed offsets, with
//! minimal overhead.
//!
//! There are two layers:
//! - **Option layer** (`read_*`): zero-cost helpers that return `Option<T>`.
//! - **Result layer** (`*_r`): wrappers that map `None` to `Error::OutOfBounds`.
//!
//! All numeric reads are **little-endian** (version resource data is LE), and
//! offsets are interpreted relative to the slice you pass in.

use crate::err::Error;

/// Read `N` raw bytes at `offset`.
///
/// Returns `None` if the range is out of bounds.
pub(crate) fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    let bytes: [u8; N] = buf.get(offset..end)?.try_into().ok()?;
    Some(bytes)
}

/// Read a `u16` (little-endian) at `offset`.
pub(crate) fn read_u16_le(buf: &[u8], offset: usize) -> Option<u16> {
    Some(u16::from_le_bytes(read_array::<2>(buf, offset)?))
}

#[inline]
fn out_of_bounds(what: &'static str, offset: usize, need: usize, len: usize) -> Error {
    Error::OutOfBounds {
        what,
        offset: offset as u64,
        need,
        have: len.saturating_sub(offset),
    }
}

pub(crate) fn slice_r<'a>(
    buf: &'a [u8],
    offset: usize,
    len: usize,
    what: &'static str,
) -> Result<&'a [u8], Error> {
    let end = offset
        .checked_add(len)
        .ok_or_else(|| out_of_bounds(what, offset, len, buf.len()))?;
    buf.get(offset..end)
        .ok_or_else(|| out_of_bounds(what, offset, len, buf.len()))
}

/// Read a `u16` (little-endian) at `offset`, or return `Error::OutOfBounds`.
pub(crate) fn read_u16_le_r(
    buf: &[u8],
    offset: usize,
    what: &'static str,
) -> Result<u16, Error> {
    read_u16_le(buf, offset).ok_or_else(|| out_of_bounds(what, offset, 2, buf.len()))
}
