//! A codec for the length-prefixed, DWORD-padded sub-tables found inside
//! Windows PE version-information resources.
//!
//! Every sub-table of a version resource (string tables, var tables, version
//! blocks) shares the same prologue: a padded total length, an unpadded value
//! length, a type flag and a NUL-terminated UTF-16 key, followed by a
//! type-specific payload and zero padding to the next `DWORD` boundary. This
//! crate implements that protocol for the `Var` sub-table, which maps
//! language identifiers to code page identifiers (the `"Translation"` entries
//! under `VarFileInfo`).
//!
//! The crate does not walk the PE resource directory tree and does not decode
//! other resource kinds; an enclosing resource-block codec supplies a raw
//! byte buffer on the read side and a patchable byte sink ([`TableWriter`])
//! on the write side, and treats the sub-table as an opaque, self-delimiting
//! unit:
//!
//! ```
//! use versionres::{TableWriter, VarTable};
//!
//! let mut table = VarTable::new();
//! table.set(0x0409, 0x04B0); // US English, Unicode
//!
//! let mut writer = TableWriter::new();
//! let written = table.encode(&mut writer)?;
//!
//! let (decoded, consumed) = VarTable::decode(writer.as_bytes(), 0)?;
//! assert_eq!(consumed, written);
//! assert_eq!(decoded, table);
//! # Ok::<(), versionres::Error>(())
//! ```
//!
//! References:
//! - [VarFileInfo / Var resource layout](https://learn.microsoft.com/en-us/windows/win32/menurc/var-str)

pub mod err;

mod table_header;
mod table_writer;
mod utils;
mod var_table;

pub use err::{Error, Result};
pub use table_header::{TYPE_BINARY, TYPE_TEXT, TableHeader};
pub use table_writer::TableWriter;
pub use var_table::{TRANSLATION_KEY, VarTable};
