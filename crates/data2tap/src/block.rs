//! Generic TAP block writer.
//!
//! Every TAP block shares one shape: a 2-byte little-endian length word,
//! a flag byte, the payload, and a checksum byte (XOR of flag + data).
//! The length word counts flag + payload + checksum.

use crate::error::Data2tapError;

/// Flag byte of a header block.
pub const HEADER_FLAG: u8 = 0x00;

/// Flag byte of a data block.
pub const DATA_FLAG: u8 = 0xFF;

/// Incremental writer for one checksummed TAP block.
///
/// Created with a fixed payload capacity; payload bytes are appended until
/// the capacity is reached, then [`finalize`](Self::finalize) computes the
/// checksum and yields the wire encoding. Finalizing again returns the
/// cached bytes; appending after finalize is an error.
#[derive(Debug)]
pub struct TapBlockWriter {
    flag: u8,
    capacity: usize,
    payload: Vec<u8>,
    encoded: Option<Vec<u8>>,
}

impl TapBlockWriter {
    /// Create a writer for a block with the given flag and declared
    /// payload length.
    #[must_use]
    pub fn new(flag: u8, payload_len: usize) -> Self {
        Self {
            flag,
            capacity: payload_len,
            payload: Vec::with_capacity(payload_len),
            encoded: None,
        }
    }

    /// Append a single payload byte.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` past the declared payload length,
    /// `BlockAlreadyFinalized` after [`finalize`](Self::finalize).
    pub fn push(&mut self, byte: u8) -> Result<(), Data2tapError> {
        self.extend(&[byte])
    }

    /// Append a run of payload bytes.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` past the declared payload length,
    /// `BlockAlreadyFinalized` after [`finalize`](Self::finalize).
    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), Data2tapError> {
        if self.encoded.is_some() {
            return Err(Data2tapError::BlockAlreadyFinalized);
        }
        let attempted = self.payload.len() + bytes.len();
        if attempted > self.capacity {
            return Err(Data2tapError::CapacityExceeded {
                capacity: self.capacity,
                attempted,
            });
        }
        self.payload.extend_from_slice(bytes);
        Ok(())
    }

    /// Payload bytes still owed before the block can be finalized.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.payload.len()
    }

    /// Whether [`finalize`](Self::finalize) has already run.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.encoded.is_some()
    }

    /// Compute the checksum and return the full wire encoding: length
    /// word, flag, payload, checksum.
    ///
    /// Idempotent: a second call returns the same cached bytes.
    ///
    /// # Errors
    ///
    /// `IncompletePayload` if fewer bytes were appended than declared.
    pub fn finalize(&mut self) -> Result<&[u8], Data2tapError> {
        if self.encoded.is_none() {
            self.encoded = Some(self.encode()?);
        }
        Ok(self.encoded.as_deref().unwrap_or_default())
    }

    fn encode(&self) -> Result<Vec<u8>, Data2tapError> {
        if self.payload.len() != self.capacity {
            return Err(Data2tapError::IncompletePayload {
                expected: self.capacity,
                actual: self.payload.len(),
            });
        }
        let mut checksum = self.flag;
        for &byte in &self.payload {
            checksum ^= byte;
        }
        // Length counts flag + payload + checksum.
        let len = (self.payload.len() + 2) as u16;
        let mut encoded = Vec::with_capacity(self.payload.len() + 4);
        encoded.push(len as u8);
        encoded.push((len >> 8) as u8);
        encoded.push(self.flag);
        encoded.extend_from_slice(&self.payload);
        encoded.push(checksum);
        Ok(encoded)
    }
}
