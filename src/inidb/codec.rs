use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::Result;

/// Encode with the standard alphabet, `=`-padded.
pub fn encode(plaintext: &str) -> String {
    BASE64.encode(plaintext.as_bytes())
}

/// Decode standard base64. Trailing NUL bytes are stripped from the result;
/// the original wire format could leave them behind as padding artifacts.
pub fn decode(encoded: &str) -> Result<String> {
    let bytes = BASE64.decode(encoded)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(text.trim_end_matches('\0').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_pads_to_multiple_of_four() {
        assert_eq!(encode("a"), "YQ==");
        assert_eq!(encode("ab"), "YWI=");
        assert_eq!(encode("abc"), "YWJj");
    }

    #[test]
    fn round_trips_arbitrary_text() {
        for input in ["", "x", "hello world", "with|separator", "ünïcode"] {
            assert_eq!(decode(&encode(input)).unwrap(), input);
        }
    }

    #[test]
    fn decode_strips_trailing_nuls() {
        let encoded = BASE64.encode(b"value\0\0");
        assert_eq!(decode(&encoded).unwrap(), "value");
    }

    #[test]
    fn decode_keeps_interior_nuls() {
        let encoded = BASE64.encode(b"a\0b");
        assert_eq!(decode(&encoded).unwrap(), "a\0b");
    }

    #[test]
    fn decode_rejects_invalid_input() {
        assert!(decode("not base64!").is_err());
    }
}
