//! Attribute value encodings for the command line
//!
//! Values are opaque bytes. On input they arrive as text, hex digits, or the
//! contents of a file; on output they are printed as text, hex, or raw bytes.

use crate::error::{CliError, Result};
use std::path::PathBuf;

/// Where a `set` value comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueInput {
    /// UTF-8 text, stored as its bytes
    Text(String),
    /// Hex digits, two per byte
    Hex(String),
    /// Raw file contents
    File(PathBuf),
}

impl ValueInput {
    /// Produce the bytes to store
    ///
    /// # Errors
    ///
    /// Returns an error if hex input is malformed or the file cannot be read.
    pub async fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Text(text) => Ok(text.into_bytes()),
            Self::Hex(digits) => decode_hex(&digits),
            Self::File(path) => compio::fs::read(&path)
                .await
                .map_err(|source| CliError::Io { path, source }),
        }
    }
}

/// How `get` prints a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputEncoding {
    /// Text if the value is valid UTF-8, hex otherwise
    #[default]
    Auto,
    /// Text, replacing invalid UTF-8
    Text,
    /// Lowercase hex digits
    Hex,
    /// Bytes exactly as stored
    Raw,
}

impl OutputEncoding {
    /// Render `value` for stdout
    ///
    /// Text and hex renderings end with a newline; raw output is unmodified.
    #[must_use]
    pub fn render(self, value: &[u8]) -> Vec<u8> {
        match self {
            Self::Raw => value.to_vec(),
            Self::Hex => line(encode_hex(value)),
            Self::Text => line(String::from_utf8_lossy(value).into_owned()),
            Self::Auto => match std::str::from_utf8(value) {
                Ok(text) => line(text.to_string()),
                Err(_) => line(encode_hex(value)),
            },
        }
    }
}

fn line(mut text: String) -> Vec<u8> {
    text.push('\n');
    text.into_bytes()
}

/// Lowercase hex, two digits per byte
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse hex digits into bytes
///
/// Accepts either case and an optional `0x` prefix.
///
/// # Errors
///
/// Returns [`CliError::InvalidValue`] on an odd digit count or a non-hex
/// character.
pub fn decode_hex(digits: &str) -> Result<Vec<u8>> {
    let digits = digits.strip_prefix("0x").unwrap_or(digits);
    hex::decode(digits).map_err(|e| CliError::InvalidValue(format!("invalid hex value: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("4142", vec![0x41, 0x42])]
    #[case("0x00ff", vec![0x00, 0xff])]
    #[case("DeadBeef", vec![0xde, 0xad, 0xbe, 0xef])]
    fn test_decode_hex(#[case] digits: &str, #[case] expected: Vec<u8>) {
        assert_eq!(decode_hex(digits).unwrap(), expected);
    }

    #[rstest]
    #[case("414")]
    #[case("zz")]
    #[case("4g")]
    #[case("+1")]
    fn test_decode_hex_rejects(#[case] digits: &str) {
        assert!(matches!(decode_hex(digits), Err(CliError::InvalidValue(_))));
    }

    #[test]
    fn test_decode_hex_error_text() {
        let err = decode_hex("0x414").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value: invalid hex value: Odd number of digits");

        let err = decode_hex("4g").unwrap_err();
        assert!(err.to_string().contains("Invalid character 'g' at position 1"));
    }

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex(&[]), "");
        assert_eq!(encode_hex(&[0x00, 0x41, 0xff]), "0041ff");
    }

    #[test]
    fn test_render_auto() {
        assert_eq!(OutputEncoding::Auto.render(b"AB"), b"AB\n");
        assert_eq!(OutputEncoding::Auto.render(&[0xff, 0x00]), b"ff00\n");
        assert_eq!(OutputEncoding::Auto.render(b""), b"\n");
    }

    #[test]
    fn test_render_forced() {
        assert_eq!(OutputEncoding::Raw.render(&[0xff, 0x00]), vec![0xff, 0x00]);
        assert_eq!(OutputEncoding::Hex.render(b"AB"), b"4142\n");
        assert_eq!(
            OutputEncoding::Text.render(&[0x41, 0xff]),
            "A\u{fffd}\n".as_bytes()
        );
    }

    #[compio::test]
    async fn test_into_bytes() {
        assert_eq!(
            ValueInput::Text("hi".to_string()).into_bytes().await.unwrap(),
            b"hi"
        );
        assert_eq!(
            ValueInput::Hex("0001".to_string()).into_bytes().await.unwrap(),
            vec![0, 1]
        );

        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("value.bin");
        std::fs::write(&file, [0u8, 159, 146, 150]).unwrap();
        assert_eq!(
            ValueInput::File(file).into_bytes().await.unwrap(),
            vec![0u8, 159, 146, 150]
        );

        let missing = temp_dir.path().join("missing");
        assert!(matches!(
            ValueInput::File(missing).into_bytes().await,
            Err(CliError::Io { .. })
        ));
    }
}
