use std::fmt;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::err::{Error, Result};
use crate::table_header::TableHeader;
use crate::table_writer::TableWriter;
use crate::utils::ByteCursor;

/// The conventional key of the translation sub-table under `VarFileInfo`.
pub const TRANSLATION_KEY: &str = "Translation";

/// One (language id, code page) wire record: two little-endian `u16`s.
const VAR_RECORD_SIZE: usize = 4;

/// A `Var` sub-table of a version-information resource: the list of language
/// and code page identifier pairs that the binary's version resource supports
/// (the `"Translation"` entries under `VarFileInfo`).
///
/// See <https://learn.microsoft.com/en-us/windows/win32/menurc/var-str>.
///
/// Entries keep insertion order, which is also the on-disk record order, so a
/// decode/encode round trip is byte-stable. Setting an already-present
/// language id overwrites its code page in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarTable {
    key: String,
    translations: IndexMap<u16, u16>,
}

impl Default for VarTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VarTable {
    /// An empty table with the conventional `"Translation"` key.
    pub fn new() -> Self {
        Self::with_key(TRANSLATION_KEY)
    }

    /// An empty table with an explicit key.
    pub fn with_key(key: impl Into<String>) -> Self {
        VarTable {
            key: key.into(),
            translations: IndexMap::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The language → code page mapping, in on-disk order.
    pub fn translations(&self) -> impl ExactSizeIterator<Item = (u16, u16)> + '_ {
        self.translations.iter().map(|(&lang, &cp)| (lang, cp))
    }

    pub fn get(&self, language_id: u16) -> Option<u16> {
        self.translations.get(&language_id).copied()
    }

    /// Map `language_id` to `code_page`. A duplicate language id keeps its
    /// original position and takes the new code page (last write wins).
    pub fn set(&mut self, language_id: u16, code_page: u16) {
        self.translations.insert(language_id, code_page);
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Decode the sub-table starting at `offset` within `buf`.
    ///
    /// Returns the table and the number of bytes it occupies (the header's
    /// padded total length), so an enclosing table can continue parsing the
    /// next sibling at `offset + consumed`.
    ///
    /// The record loop is length-bounded by the header's declared total
    /// length: decoding stops exactly at that boundary and never reads past
    /// it, even when the underlying buffer holds more bytes. A declared
    /// length that cuts a record mid-way yields `TruncatedPayload`.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut cursor = ByteCursor::with_pos(buf, offset)?;
        let header = TableHeader::decode(&mut cursor, offset)?;

        let end = offset
            .checked_add(usize::from(header.total_length))
            .ok_or(Error::TruncatedPayload {
                offset: cursor.position(),
                total_length: header.total_length,
            })?;

        let mut translations = IndexMap::new();
        while cursor.pos() < end {
            if cursor.remaining_until(end) < VAR_RECORD_SIZE {
                return Err(Error::TruncatedPayload {
                    offset: cursor.position(),
                    total_length: header.total_length,
                });
            }
            let language_id = cursor
                .u16_named("languageId")
                .map_err(|e| truncated(e, header.total_length))?;
            let code_page = cursor
                .u16_named("codePage")
                .map_err(|e| truncated(e, header.total_length))?;
            trace!("var table record: languageId={language_id:#06x}, codePage={code_page:#06x}");
            translations.insert(language_id, code_page);
        }

        debug!(
            "decoded var table {:?} at offset {offset}: {} translation(s), {} byte(s)",
            header.key,
            translations.len(),
            header.total_length
        );

        Ok((
            VarTable {
                key: header.key,
                translations,
            },
            usize::from(header.total_length),
        ))
    }

    /// Encode the sub-table into `writer`, returning the number of bytes
    /// written (the padded total length).
    ///
    /// The two length fields are back-patched in two phases: the value length
    /// (raw record bytes) before the trailing padding, the total length
    /// (padded structure size) after it.
    pub fn encode(&self, writer: &mut TableWriter) -> Result<usize> {
        let header = TableHeader {
            total_length: 0,
            value_length: 0,
            is_text: false,
            key: self.key.clone(),
        };
        let fixup = header.encode(writer);

        let value_pos = writer.position();
        for (&language_id, &code_page) in &self.translations {
            writer.write_u16(language_id);
            writer.write_u16(code_page);
        }

        let value_length = length_field(writer.position() - value_pos, value_pos)?;
        writer.patch_u16_at(fixup.value_length_field, value_length, "value length")?;

        writer.pad_to_dword();

        let total = writer.position() - fixup.table_start;
        let total_length = length_field(total, fixup.table_start)?;
        writer.patch_u16_at(fixup.total_length_field, total_length, "total length")?;

        debug!(
            "encoded var table {:?}: {} translation(s), {total} byte(s)",
            self.key,
            self.translations.len()
        );

        Ok(total)
    }

    /// Resource-script-style rendering of the table, `indent` spaces deep.
    ///
    /// ```text
    /// BEGIN
    ///  VALUE "Translation", 0x409, 0x4b0
    /// END
    /// ```
    pub fn to_source_text(&self, indent: usize) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}BEGIN\n", " ".repeat(indent)));
        for (&language_id, &code_page) in &self.translations {
            out.push_str(&format!(
                "{}VALUE \"{}\", {language_id:#x}, {code_page:#x}\n",
                " ".repeat(indent + 1),
                self.key
            ));
        }
        out.push_str(&format!("{}END\n", " ".repeat(indent)));
        out
    }
}

impl fmt::Display for VarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source_text(0))
    }
}

fn truncated(e: Error, total_length: u16) -> Error {
    match e {
        Error::OutOfBounds { offset, .. } => Error::TruncatedPayload {
            offset,
            total_length,
        },
        other => other,
    }
}

/// The wire length fields are 16-bit; anything larger cannot be represented.
fn length_field(len: usize, at: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| Error::OutOfBounds {
        what: "length field",
        offset: at as u64,
        need: len,
        have: usize::from(u16::MAX),
    })
}
