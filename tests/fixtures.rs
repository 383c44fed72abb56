#![allow(dead_code)]

use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

// Rust runs the tests concurrently, so unless we synchronize logging access
// it will crash when attempting to run `cargo test` with some logging facilities.
pub fn ensure_env_logger_initialized() {
    use std::io::Write;

    LOGGER_INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        builder
            .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
            .init();
    });
}

/// A hand-built `Var` sub-table as the resource compiler would emit it:
/// key `"Translation"`, one (0x0409, 0x04B0) record.
pub fn us_english_translation_table() -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&36u16.to_le_bytes()); // total length (padded)
    out.extend_from_slice(&4u16.to_le_bytes()); // value length (unpadded)
    out.extend_from_slice(&0u16.to_le_bytes()); // type: binary
    for cu in "Translation".encode_utf16() {
        out.extend_from_slice(&cu.to_le_bytes());
    }
    out.extend_from_slice(&[0, 0]); // key terminator
    out.extend_from_slice(&[0, 0]); // padding to DWORD
    out.extend_from_slice(&[0x09, 0x04, 0xB0, 0x04]); // languageId, codePage
    out
}
