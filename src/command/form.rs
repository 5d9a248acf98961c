use std::collections::HashMap;
use std::fmt;

/// Why a request body could not be decoded as form data.
#[derive(Debug)]
pub enum DecodeError {
    /// `%` not followed by two hex digits, at the given byte offset.
    InvalidPercentEncoding(usize),
    Deserialize(serde_urlencoded::de::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPercentEncoding(offset) => {
                write!(f, "invalid percent-escape at byte {}", offset)
            }
            Self::Deserialize(err) => write!(f, "invalid form body: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes an `application/x-www-form-urlencoded` body into a key/value
/// map. Keys with blank values are kept, `+` decodes to a space.
///
/// Stricter than the WHATWG parser: a dangling or non-hex percent-escape
/// is rejected instead of being passed through literally.
pub fn decode(body: &str) -> Result<HashMap<String, String>, DecodeError> {
    check_percent_escapes(body)?;
    serde_urlencoded::from_str(body).map_err(DecodeError::Deserialize)
}

fn check_percent_escapes(body: &str) -> Result<(), DecodeError> {
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(DecodeError::InvalidPercentEncoding(i));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_pairs() {
        let params = decode("token=SECRET&text=hello").unwrap();
        assert_eq!(params.get("token").unwrap(), "SECRET");
        assert_eq!(params.get("text").unwrap(), "hello");
    }

    #[test]
    fn plus_decodes_to_space() {
        let params = decode("text=Shipped+the+release").unwrap();
        assert_eq!(params.get("text").unwrap(), "Shipped the release");
    }

    #[test]
    fn percent_escapes_decode() {
        let params = decode("text=50%25%20done").unwrap();
        assert_eq!(params.get("text").unwrap(), "50% done");
    }

    #[test]
    fn blank_values_are_kept() {
        let params = decode("token=SECRET&text=").unwrap();
        assert_eq!(params.get("text").unwrap(), "");
    }

    #[test]
    fn bare_percent_is_rejected() {
        assert!(matches!(
            decode("%"),
            Err(DecodeError::InvalidPercentEncoding(0))
        ));
    }

    #[test]
    fn truncated_escape_is_rejected() {
        assert!(decode("text=%2").is_err());
    }

    #[test]
    fn non_hex_escape_is_rejected() {
        assert!(decode("text=%zz").is_err());
    }

    #[test]
    fn escape_offset_points_at_the_percent() {
        match decode("text=ok&bad=%G1") {
            Err(DecodeError::InvalidPercentEncoding(offset)) => assert_eq!(offset, 12),
            other => panic!("expected escape error, got {:?}", other),
        }
    }
}
