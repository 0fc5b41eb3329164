//! TAP header block.
//!
//! The header is a flag-$00 block with a fixed 17-byte payload describing
//! the data block that follows: block type, 10-character space-padded
//! name, data length, and two 16-bit parameters. For code/screen blocks
//! param1 is the load address; param2 is reserved and always written as 0.

use crate::block::{HEADER_FLAG, TapBlockWriter};
use crate::error::Data2tapError;

/// Block type declared in byte 0 of the header payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapBlockType {
    /// BASIC program.
    Program,
    /// Number array.
    NumberArray,
    /// Character array.
    CharacterArray,
    /// Machine code or a screen memory dump.
    CodeOrScreen,
}

impl TapBlockType {
    /// Wire value written to the header payload.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Program => 0,
            Self::NumberArray => 1,
            Self::CharacterArray => 2,
            Self::CodeOrScreen => 3,
        }
    }
}

/// Header block contents.
#[derive(Debug, Clone)]
pub struct TapHeader {
    block_type: TapBlockType,
    name: String,
    data_length: u16,
    param1: u16,
    param2: u16,
}

impl TapHeader {
    /// Width of the name field in bytes.
    pub const NAME_LEN: usize = 10;

    /// Header payload size: type + name + length + two parameters.
    pub const PAYLOAD_LEN: usize = 17;

    /// Create a header. `param1` is the load address for code/screen
    /// blocks; the reserved second parameter is fixed at 0.
    ///
    /// # Errors
    ///
    /// `NameTooLong` past 10 characters (names are never truncated),
    /// `InvalidNameCharacter` for anything outside the ASCII range.
    pub fn new(
        block_type: TapBlockType,
        name: &str,
        data_length: u16,
        param1: u16,
    ) -> Result<Self, Data2tapError> {
        let len = name.chars().count();
        if len > Self::NAME_LEN {
            return Err(Data2tapError::NameTooLong { len });
        }
        if let Some(bad) = name.chars().find(|c| !c.is_ascii()) {
            return Err(Data2tapError::InvalidNameCharacter(bad));
        }
        Ok(Self {
            block_type,
            name: name.to_string(),
            data_length,
            param1,
            param2: 0,
        })
    }

    /// Encode the full header block: length word, flag $00, 17-byte
    /// payload, checksum.
    ///
    /// # Errors
    ///
    /// Propagates block-writer failures; with a validated name the
    /// payload always fits, so this does not fail in practice.
    pub fn encode(&self) -> Result<Vec<u8>, Data2tapError> {
        let mut block = TapBlockWriter::new(HEADER_FLAG, Self::PAYLOAD_LEN);
        block.push(self.block_type.code())?;

        let mut name_field = [0x20u8; Self::NAME_LEN];
        for (slot, byte) in name_field.iter_mut().zip(self.name.bytes()) {
            *slot = byte;
        }
        block.extend(&name_field)?;

        block.extend(&self.data_length.to_le_bytes())?;
        block.extend(&self.param1.to_le_bytes())?;
        block.extend(&self.param2.to_le_bytes())?;
        Ok(block.finalize()?.to_vec())
    }
}
