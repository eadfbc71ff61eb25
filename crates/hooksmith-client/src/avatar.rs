// SPDX-FileCopyrightText: 2026 Hooksmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Avatar image encoding for webhook edits.
//!
//! The webhook API takes avatar updates as a `data:` URI embedded in the
//! PATCH body rather than a file upload.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encodes raw image bytes as a `data:<mime>;base64,<data>` URI.
pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Guesses an image MIME type from a file extension.
///
/// Unknown extensions fall back to `image/png`, which the API accepts for
/// the common case and rejects with a clear error otherwise.
pub fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_has_mime_and_base64_payload() {
        let uri = data_uri(b"abc", "image/png");
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn mime_guessed_from_extension() {
        assert_eq!(guess_mime(Path::new("avatar.jpg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("avatar.JPEG")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("avatar.gif")), "image/gif");
        assert_eq!(guess_mime(Path::new("avatar.webp")), "image/webp");
        assert_eq!(guess_mime(Path::new("avatar.png")), "image/png");
        assert_eq!(guess_mime(Path::new("avatar")), "image/png");
    }
}
