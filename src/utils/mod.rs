//! Utility functions

/// Decode uploaded file bytes into email text.
///
/// Lossy UTF-8 decoding: invalid sequences become replacement characters
/// rather than failing, matching browser `readAsText` behavior. The
/// classifier accepts the result as-is; no size limit is applied here.
pub fn email_text_from_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        assert_eq!(email_text_from_bytes(b"hello"), "hello");
    }

    #[test]
    fn test_invalid_bytes_are_replaced_not_rejected() {
        let text = email_text_from_bytes(&[0x68, 0x69, 0xff, 0xfe]);
        assert!(text.starts_with("hi"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_upload_yields_empty_text() {
        assert_eq!(email_text_from_bytes(b""), "");
    }
}
