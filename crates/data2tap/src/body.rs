//! TAP data block.
//!
//! The data block is a flag-$FF checksummed block whose payload is the
//! raw bytes being transferred, nothing more.

use crate::block::{DATA_FLAG, TapBlockWriter};
use crate::error::Data2tapError;

/// Data block writer.
#[derive(Debug)]
pub struct TapBody {
    block: TapBlockWriter,
}

impl TapBody {
    /// Create a data block expecting exactly `data_len` payload bytes.
    #[must_use]
    pub fn new(data_len: usize) -> Self {
        Self {
            block: TapBlockWriter::new(DATA_FLAG, data_len),
        }
    }

    /// Build and finalize a data block from a complete payload.
    ///
    /// # Errors
    ///
    /// Never fails for a payload of the declared length; kept as a
    /// `Result` to match the block-writer contract.
    pub fn encode(data: &[u8]) -> Result<Vec<u8>, Data2tapError> {
        let mut body = Self::new(data.len());
        body.extend(data)?;
        Ok(body.finalize()?.to_vec())
    }

    /// Append a single payload byte.
    ///
    /// # Errors
    ///
    /// Same contract as [`TapBlockWriter::push`].
    pub fn push(&mut self, byte: u8) -> Result<(), Data2tapError> {
        self.block.push(byte)
    }

    /// Append a run of payload bytes.
    ///
    /// # Errors
    ///
    /// Same contract as [`TapBlockWriter::extend`].
    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), Data2tapError> {
        self.block.extend(bytes)
    }

    /// Compute the checksum and return the wire encoding. Idempotent.
    ///
    /// # Errors
    ///
    /// Same contract as [`TapBlockWriter::finalize`].
    pub fn finalize(&mut self) -> Result<&[u8], Data2tapError> {
        self.block.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_block() {
        let mut body = TapBody::new(8);
        for byte in [0xFE, 0xEF, 0x13, 0x67, 0x67, 0x67, 0x67, 0x67] {
            body.push(byte).expect("within capacity");
        }
        let encoded = body.finalize().expect("complete payload");

        assert_eq!(
            encoded,
            &[
                0x0A, 0x00, // length = 8 + 2, little-endian
                0xFF, // data flag
                0xFE, 0xEF, 0x13, 0x67, 0x67, 0x67, 0x67, 0x67,
                0x9A, // checksum
            ]
        );
    }

    #[test]
    fn encode_matches_incremental() {
        let data = [0xFEu8, 0xEF, 0x13, 0x67, 0x67, 0x67, 0x67, 0x67];
        let whole = TapBody::encode(&data).expect("encodes");

        let mut body = TapBody::new(data.len());
        body.extend(&data).expect("within capacity");
        assert_eq!(whole, body.finalize().expect("complete payload"));
    }

    #[test]
    fn empty_data_block() {
        let encoded = TapBody::encode(&[]).expect("empty payload is legal");
        assert_eq!(encoded, &[0x02, 0x00, 0xFF, 0xFF]);
    }
}
