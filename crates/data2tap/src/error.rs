//! Error type for TAP construction and validation.

use std::fmt;
use std::io;

/// Errors reported while validating inputs or building TAP blocks.
///
/// None of these are recovered internally; every failure surfaces to the
/// caller with the offending values attached.
#[derive(Debug)]
pub enum Data2tapError {
    /// Address text is neither valid decimal nor valid `0x`-hex.
    InvalidAddressFormat(String),
    /// Numeric address outside the target model's RAM window.
    AddressOutOfRange { address: u32, min: u16, max: u16 },
    /// Block name exceeds the 10-character header field.
    NameTooLong { len: usize },
    /// Block name contains a character with no single-byte encoding.
    InvalidNameCharacter(char),
    /// A textual data value does not fit in one byte.
    ValueOutOfByteRange { value: u32 },
    /// A textual data token is not a number in the selected radix.
    InvalidDataToken(String),
    /// More bytes appended than the block's declared payload length.
    CapacityExceeded { capacity: usize, attempted: usize },
    /// Block finalized before the declared payload was fully appended.
    IncompletePayload { expected: usize, actual: usize },
    /// Append attempted after the block was finalized.
    BlockAlreadyFinalized,
    /// Load address plus data length runs past the top of RAM.
    RangeOverflow {
        address: u16,
        data_len: usize,
        ram_top: u16,
    },
    /// Writing to the output sink failed.
    Io(io::Error),
}

impl fmt::Display for Data2tapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddressFormat(text) => write!(
                f,
                "invalid address \"{text}\" (expected decimal or 0x-prefixed hex)"
            ),
            Self::AddressOutOfRange { address, min, max } => write!(
                f,
                "address {address} is outside the RAM window ${min:04X}-${max:04X}"
            ),
            Self::NameTooLong { len } => {
                write!(f, "name is {len} characters, maximum is 10")
            }
            Self::InvalidNameCharacter(c) => {
                write!(f, "name character {c:?} has no single-byte encoding")
            }
            Self::ValueOutOfByteRange { value } => {
                write!(f, "data value {value} does not fit in a byte (maximum $FF)")
            }
            Self::InvalidDataToken(token) => write!(f, "not a number: \"{token}\""),
            Self::CapacityExceeded {
                capacity,
                attempted,
            } => write!(
                f,
                "block payload capacity is {capacity} bytes, append would make {attempted}"
            ),
            Self::IncompletePayload { expected, actual } => write!(
                f,
                "block declared {expected} payload bytes but only {actual} were appended"
            ),
            Self::BlockAlreadyFinalized => write!(f, "block is already finalized"),
            Self::RangeOverflow {
                address,
                data_len,
                ram_top,
            } => write!(
                f,
                "data overflows RAM: ${address:04X} + {data_len} bytes runs past ${ram_top:04X}"
            ),
            Self::Io(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl std::error::Error for Data2tapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Data2tapError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_values() {
        let err = Data2tapError::AddressOutOfRange {
            address: 70000,
            min: 0x4000,
            max: 0xFFFF,
        };
        let text = err.to_string();
        assert!(text.contains("70000"));
        assert!(text.contains("$4000"));
        assert!(text.contains("$FFFF"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;

        let err = Data2tapError::from(io::Error::other("sink closed"));
        assert!(err.source().is_some());
    }
}
