//! Byte-level escaping of asset content into a C/C++ string literal body.
//!
//! The escaper never decodes text. Each input byte maps to one or more output
//! bytes, so binary files and any text encoding round-trip exactly when the
//! result is placed between double quotes and compiled.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The escaped body of a string literal, without the surrounding quotes.
///
/// Held as bytes because content bytes >= 0x80 pass through unchanged and need
/// not form valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EscapedLiteral(Vec<u8>);

impl EscapedLiteral {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Escape `bytes` so they can be embedded verbatim inside `"..."`.
///
/// | byte            | emitted                                   |
/// |-----------------|-------------------------------------------|
/// | `\`             | `\\`                                      |
/// | `?`             | `\?` (no trigraphs)                       |
/// | `"`             | `\"`                                      |
/// | BEL BS FF       | `\a` `\b` `\f`                            |
/// | LF              | `\n` + `\` + LF (line continuation)       |
/// | CR TAB VT       | `\r` `\t` `\v`                            |
/// | other `< 0x20`  | `\x` + lowercase hex, unpadded            |
/// | `>= 0x20`       | unchanged                                 |
///
/// A hex escape swallows every hex digit after it, so when one is followed by
/// a raw hex digit the literal is closed and reopened with `""`.
///
/// ```
/// use assetgen_core::escape;
///
/// assert_eq!(escape(b"a\"b").as_bytes(), b"a\\\"b");
/// assert_eq!(escape(b"\x01z").as_bytes(), b"\\x1z");
/// assert_eq!(escape(b"\x01a").as_bytes(), b"\\x1\"\"a");
/// ```
pub fn escape(bytes: &[u8]) -> EscapedLiteral {
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / 8);
    let mut after_hex = false;

    for &byte in bytes {
        if after_hex && byte.is_ascii_hexdigit() {
            out.extend_from_slice(b"\"\"");
        }
        after_hex = false;

        match byte {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'?' => out.extend_from_slice(b"\\?"),
            b'"' => out.extend_from_slice(b"\\\""),
            0x07 => out.extend_from_slice(b"\\a"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0c => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n\\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x0b => out.extend_from_slice(b"\\v"),
            0x00..=0x1f => {
                push_hex_escape(&mut out, byte);
                after_hex = true;
            }
            _ => out.push(byte),
        }
    }

    EscapedLiteral(out)
}

fn push_hex_escape(out: &mut Vec<u8>, byte: u8) {
    out.extend_from_slice(b"\\x");
    if byte >= 0x10 {
        out.push(HEX_DIGITS[usize::from(byte >> 4)]);
    }
    out.push(HEX_DIGITS[usize::from(byte & 0x0f)]);
}
