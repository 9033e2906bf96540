//! # Base64 Encoding/Decoding
//!
//! Standard (padded) base64, the alphabet Sui uses for transaction bytes.

use base64::{Engine as _, engine::general_purpose};

/// Encode bytes to a standard padded base64 string.
pub fn b64_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(content)
}

/// Decode a standard padded base64 string to bytes.
pub fn b64_decode(b64: &str) -> Result<Vec<u8>, Error> {
    general_purpose::STANDARD
        .decode(b64)
        .map_err(|_| Error::FailToB64Decode)
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b64_encode_pads() {
        // BCS of the string "Cat": length prefix 3 then the bytes
        assert_eq!(b64_encode([3u8, b'C', b'a', b't']), "A0NhdA==");
    }

    #[test]
    fn test_b64_decode() {
        assert_eq!(b64_decode("A0NhdA==").unwrap(), vec![3, b'C', b'a', b't']);
        assert!(b64_decode("not base64!").is_err());
    }
}
