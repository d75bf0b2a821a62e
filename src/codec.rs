// TouchOSC stores names and label texts as base64 of their UTF-8 bytes.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::Result;

pub fn encode(s: &str) -> String {
    STANDARD.encode(s.as_bytes())
}

pub fn decode(e: &str) -> Result<String> {
    let bytes = STANDARD.decode(e)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode("mixname"), "bWl4bmFtZQ==");
        assert_eq!(super::encode("1/volume"), "MS92b2x1bWU=");
        assert_eq!(super::encode(""), "");
    }

    #[test]
    fn round_trip() {
        for s in ["PA", "Monitor for JD", "13/label", "Overheads", "", "Gitarre ü"] {
            assert_eq!(super::decode(&super::encode(s)).unwrap(), s);
        }
    }

    #[test]
    fn decode_invalid() {
        assert!(matches!(super::decode("not base64!"), Err(Error::Base64(_))));
        // 0xFF 0xFE is not valid UTF-8
        assert!(matches!(super::decode("//4="), Err(Error::Utf8(_))));
    }
}
