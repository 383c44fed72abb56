pub(crate) mod byte_cursor;
pub(crate) mod bytes;

pub(crate) use byte_cursor::ByteCursor;
