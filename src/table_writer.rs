use crate::err::{Error, Result};

/// A sequential byte sink with offset back-patching.
///
/// Resource tables are length-prefixed, but the lengths are only known once
/// the payload has been emitted. Instead of seeking back and forth on an IO
/// stream, the writer appends into an owned buffer and lets callers overwrite
/// already-committed length fields by absolute offset. The append position is
/// never disturbed by a patch.
///
/// All writes are little-endian. One writer serves one encode session at a
/// time; the enclosing resource-block serializer appends every sub-table into
/// the same writer so that patch offsets stay absolute.
#[derive(Debug, Clone, Default)]
pub struct TableWriter {
    buf: Vec<u8>,
}

impl TableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Absolute offset of the next appended byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    #[inline]
    pub fn write_bytes(&mut self, b: &[u8]) {
        self.buf.extend_from_slice(b);
    }

    /// Append `s` as UTF-16LE code units followed by a NUL terminator.
    pub fn write_utf16z(&mut self, s: &str) {
        for cu in s.encode_utf16() {
            self.write_u16(cu);
        }
        self.write_u16(0);
    }

    /// Overwrite two bytes at an already-committed absolute offset.
    ///
    /// Fails with `OutOfBounds` if the patch target was not fully written
    /// yet; patching must never extend the buffer.
    pub fn patch_u16_at(&mut self, offset: usize, v: u16, what: &'static str) -> Result<()> {
        let end = offset.checked_add(2).ok_or(Error::OutOfBounds {
            what,
            offset: offset as u64,
            need: 2,
            have: 0,
        })?;
        let have = self.buf.len().saturating_sub(offset);
        let target = self.buf.get_mut(offset..end).ok_or(Error::OutOfBounds {
            what,
            offset: offset as u64,
            need: 2,
            have,
        })?;
        target.copy_from_slice(&v.to_le_bytes());
        Ok(())
    }

    /// Append zero bytes until the position is `DWORD`-aligned.
    pub fn pad_to_dword(&mut self) {
        while self.buf.len() % 4 != 0 {
            self.buf.push(0);
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
