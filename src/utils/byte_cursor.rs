use crate::err::Result;
use crate::utils::bytes;

/// A lightweight cursor over an immutable byte slice.
///
/// This is the slice/offset equivalent of `Cursor<&[u8]>`, intended for
/// parsing data that is already in memory with explicit bounds/offset control
/// and without IO-style error plumbing.
///
/// All reads are little-endian and advance the cursor on success.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    #[inline]
    pub(crate) fn with_pos(buf: &'a [u8], pos: usize) -> Result<Self> {
        // Allow pos == len (EOF), reject pos > len.
        let _ = bytes::slice_r(buf, pos, 0, "cursor.position")?;
        Ok(Self { buf, pos })
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn position(&self) -> u64 {
        self.pos as u64
    }

    /// Bytes left before `limit` (an absolute offset), regardless of how much
    /// of the underlying buffer remains.
    #[inline]
    pub(crate) fn remaining_until(&self, limit: usize) -> usize {
        limit.saturating_sub(self.pos)
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize, what: &'static str) -> Result<()> {
        let _ = bytes::slice_r(self.buf, self.pos, n, what)?;
        self.pos += n;
        Ok(())
    }

    #[inline]
    pub(crate) fn u16_named(&mut self, what: &'static str) -> Result<u16> {
        let v = bytes::read_u16_le_r(self.buf, self.pos, what)?;
        self.pos += 2;
        Ok(v)
    }

    /// Read UTF-16 code units (little-endian) until a NUL (0x0000) code unit
    /// is encountered, and decode them. The terminator is consumed but not
    /// part of the returned string.
    pub(crate) fn null_terminated_utf16_string(&mut self, what: &'static str) -> Result<String> {
        let mut units = Vec::new();
        loop {
            let cu = self.u16_named(what)?;
            if cu == 0 {
                break;
            }
            units.push(cu);
        }

        Ok(String::from_utf16_lossy(&units))
    }

    /// Skip zero padding until the cursor is `DWORD`-aligned relative to
    /// `table_start`.
    pub(crate) fn skip_dword_padding(
        &mut self,
        table_start: usize,
        what: &'static str,
    ) -> Result<()> {
        let consumed = self.pos.saturating_sub(table_start);
        let pad = (4 - consumed % 4) % 4;
        self.advance(pad, what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utf16z(s: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for cu in s.encode_utf16() {
            out.extend_from_slice(&cu.to_le_bytes());
        }
        out.extend_from_slice(&[0, 0]);
        out
    }

    #[test]
    fn rejects_position_past_end() {
        let buf = [0u8; 2];
        assert!(ByteCursor::with_pos(&buf, 2).is_ok());
        assert!(ByteCursor::with_pos(&buf, 3).is_err());
    }

    #[test]
    fn u16_reads_advance_in_order() {
        let buf = [0x09, 0x04, 0xB0, 0x04];
        let mut cursor = ByteCursor::with_pos(&buf, 0).unwrap();
        assert_eq!(cursor.u16_named("a").unwrap(), 0x0409);
        assert_eq!(cursor.u16_named("b").unwrap(), 0x04B0);
        assert_eq!(cursor.pos(), 4);
        assert!(cursor.u16_named("c").is_err());
    }

    #[test]
    fn decodes_null_terminated_utf16() {
        let buf = utf16z("Translation");
        let mut cursor = ByteCursor::with_pos(&buf, 0).unwrap();
        let s = cursor.null_terminated_utf16_string("key").unwrap();
        assert_eq!(s, "Translation");
        // Terminator is consumed.
        assert_eq!(cursor.pos(), buf.len());
    }

    #[test]
    fn missing_terminator_is_out_of_bounds() {
        // "ok" with no trailing NUL.
        let buf = [0x6F, 0x00, 0x6B, 0x00];
        let mut cursor = ByteCursor::with_pos(&buf, 0).unwrap();
        assert!(cursor.null_terminated_utf16_string("key").is_err());
    }

    #[test]
    fn dword_padding_is_relative_to_table_start() {
        let buf = [0u8; 12];
        let mut cursor = ByteCursor::with_pos(&buf, 6).unwrap();
        // 6 - 4 = 2 bytes consumed since table start, so skip 2.
        cursor.skip_dword_padding(4, "padding").unwrap();
        assert_eq!(cursor.pos(), 8);
        // Already aligned, no-op.
        cursor.skip_dword_padding(4, "padding").unwrap();
        assert_eq!(cursor.pos(), 8);
    }

    #[test]
    fn remaining_until_saturates() {
        let buf = [0u8; 8];
        let cursor = ByteCursor::with_pos(&buf, 6).unwrap();
        assert_eq!(cursor.remaining_until(10), 4);
        assert_eq!(cursor.remaining_until(2), 0);
    }
}
