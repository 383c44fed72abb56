use log::trace;

use crate::err::{Error, Result};
use crate::table_writer::TableWriter;
use crate::utils::ByteCursor;

/// Wire type flag: the value that follows the header is binary data.
pub const TYPE_BINARY: u16 = 0;
/// Wire type flag: the value that follows the header is text.
pub const TYPE_TEXT: u16 = 1;

/// The common prologue shared by every sub-table inside a version-information
/// resource (string tables, var tables, version blocks):
///
/// ```text
/// offset  size  field
/// 0       2     total_length  (padded size of the entire sub-table)
/// 2       2     value_length  (unpadded byte size of the value/payload)
/// 4       2     type          (0 = binary, 1 = text)
/// 6       var   key           (UTF-16LE, NUL-terminated)
/// -       0-2   padding       (zeros to a DWORD boundary)
/// ```
///
/// All lengths are little-endian, and alignment is relative to the sub-table
/// start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    pub total_length: u16,
    pub value_length: u16,
    pub is_text: bool,
    pub key: String,
}

/// Absolute offsets of the placeholder fields emitted by
/// [`TableHeader::encode`], so a payload codec can back-patch them once the
/// real sizes are known.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderFixup {
    pub(crate) table_start: usize,
    pub(crate) total_length_field: usize,
    pub(crate) value_length_field: usize,
}

impl TableHeader {
    /// Decode the header at `table_start`, leaving the cursor positioned just
    /// past it (on the first payload byte).
    ///
    /// Any read running past the buffer end yields `TruncatedHeader`.
    pub(crate) fn decode(cursor: &mut ByteCursor<'_>, table_start: usize) -> Result<Self> {
        let total_length = cursor.u16_named("total length").map_err(truncated)?;
        let value_length = cursor.u16_named("value length").map_err(truncated)?;
        let type_flag = cursor.u16_named("type flag").map_err(truncated)?;
        let key = cursor
            .null_terminated_utf16_string("key")
            .map_err(truncated)?;
        cursor
            .skip_dword_padding(table_start, "header padding")
            .map_err(truncated)?;

        trace!(
            "decoded table header at {table_start}: key={key:?}, total_length={total_length}, value_length={value_length}"
        );

        Ok(TableHeader {
            total_length,
            value_length,
            is_text: type_flag == TYPE_TEXT,
            key,
        })
    }

    /// Encode the header with a placeholder (zero) total length, padded to a
    /// DWORD boundary.
    ///
    /// The returned fixup carries the absolute offsets of both length fields;
    /// the payload codec patches them after the payload has been emitted
    /// (value length before the trailing padding, total length after it).
    pub(crate) fn encode(&self, writer: &mut TableWriter) -> HeaderFixup {
        let table_start = writer.position();
        writer.write_u16(0);
        let value_length_field = writer.position();
        writer.write_u16(self.value_length);
        writer.write_u16(if self.is_text { TYPE_TEXT } else { TYPE_BINARY });
        writer.write_utf16z(&self.key);
        writer.pad_to_dword();

        HeaderFixup {
            table_start,
            total_length_field: table_start,
            value_length_field,
        }
    }
}

fn truncated(e: Error) -> Error {
    match e {
        Error::OutOfBounds { what, offset, .. } => Error::TruncatedHeader { what, offset },
        other => other,
    }
}
