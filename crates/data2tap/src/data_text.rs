//! Textual payload parsing.
//!
//! Payloads may be supplied as text: byte values in decimal or
//! hexadecimal, separated by whitespace or commas. `" 24 60,90"` parses
//! to `[24, 60, 90]` in decimal.

use crate::error::Data2tapError;

/// Numeric base for textual data values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// The base passed to the integer parser.
    #[must_use]
    pub fn base(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

/// Split data text into tokens on whitespace and commas, dropping
/// empties.
#[must_use]
pub fn split_data_text(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse data text into payload bytes.
///
/// # Errors
///
/// `InvalidDataToken` for a token that is not a number in the selected
/// radix, `ValueOutOfByteRange` for a value above $FF.
pub fn parse_data_text(text: &str, radix: Radix) -> Result<Vec<u8>, Data2tapError> {
    let mut bytes = Vec::new();
    for token in split_data_text(text) {
        let value = u32::from_str_radix(token, radix.base())
            .map_err(|_| Data2tapError::InvalidDataToken(token.to_string()))?;
        if value > 0xFF {
            return Err(Data2tapError::ValueOutOfByteRange { value });
        }
        bytes.push(value as u8);
    }
    Ok(bytes)
}
