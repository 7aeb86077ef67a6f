// envdoc: Environment override documentation generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for configuration files pulled out of server images.
//!
//! ```text
//! BOM UTF-8     --> strip BOM, UTF-8
//! BOM UTF-16LE  --> UTF-16LE
//! BOM UTF-16BE  --> UTF-16BE
//! valid UTF-8   --> as-is
//! otherwise     --> Windows-1252
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences in BOM-marked input → U+FFFD.

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use std::borrow::Cow;

/// Encoding detected for a decoded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    /// Fallback for bytes that are not valid UTF-8.
    Windows1252,
}

impl TextEncoding {
    /// Whether the text needed a lossy or legacy conversion worth reporting.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Windows1252)
    }
}

/// Decodes file bytes to UTF-8.
///
/// # Example
/// ```
/// use envdoc::sources::encoding::{decode_text, TextEncoding};
///
/// let (text, encoding) = decode_text(b"Name=caf\xe9");
/// assert_eq!(text, "Name=café");
/// assert_eq!(encoding, TextEncoding::Windows1252);
/// ```
#[must_use]
pub fn decode_text(bytes: &[u8]) -> (Cow<'_, str>, TextEncoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let body = &bytes[bom_len..];
        let (text, _had_errors) = encoding.decode_without_bom_handling(body);
        let detected = if encoding == UTF_8 {
            TextEncoding::Utf8Bom
        } else if encoding == UTF_16LE {
            TextEncoding::Utf16Le
        } else if encoding == UTF_16BE {
            TextEncoding::Utf16Be
        } else {
            TextEncoding::Utf8
        };
        return (text, detected);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), TextEncoding::Utf8),
        Err(_) => {
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            (text, TextEncoding::Windows1252)
        }
    }
}
