use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures over static resource data.
///
/// All variants are fatal to the current decode/encode call: no partial
/// result is returned and no resynchronization is attempted. The enclosing
/// resource-block codec decides whether to abort the whole load or skip the
/// sub-table.
#[derive(Debug, Error)]
pub enum Error {
    #[error("offset {offset}: reading {what} needs {need} bytes, only {have} available")]
    OutOfBounds {
        what: &'static str,
        offset: u64,
        need: usize,
        have: usize,
    },

    #[error("offset {offset}: resource table header truncated while reading {what}")]
    TruncatedHeader { what: &'static str, offset: u64 },

    #[error(
        "offset {offset}: declared table length {total_length} truncates a translation record"
    )]
    TruncatedPayload { offset: u64, total_length: u16 },
}
