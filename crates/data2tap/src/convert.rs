//! Binary payload to TAP file conversion.
//!
//! [`Data2tap`] gathers everything a conversion needs — target model,
//! block type, name, load address, payload — validates it, and assembles
//! the two-block TAP byte stream: header block first, data block second,
//! nothing else.

use std::io::Write;

use log::{debug, info};

use crate::address::validate_address;
use crate::body::TapBody;
use crate::error::Data2tapError;
use crate::header::{TapBlockType, TapHeader};
use crate::model::ZxModel;

/// One payload-to-TAP conversion.
#[derive(Debug, Clone)]
pub struct Data2tap {
    /// Target machine; fixes the valid address window.
    pub model: ZxModel,
    /// Declared type of the data block.
    pub block_type: TapBlockType,
    /// Block name shown by the loader (max 10 characters).
    pub name: String,
    /// Load address (param1 of the header).
    pub address: u16,
    /// Raw payload bytes.
    pub data: Vec<u8>,
}

impl Data2tap {
    /// Conversion for the common case: a code/screen block targeting the
    /// 48K model.
    #[must_use]
    pub fn code(name: &str, address: u16, data: Vec<u8>) -> Self {
        Self {
            model: ZxModel::Spectrum48K,
            block_type: TapBlockType::CodeOrScreen,
            name: name.to_string(),
            address,
            data,
        }
    }

    /// Validate address and payload against the target model.
    ///
    /// Runs before any block is built; name problems are caught by the
    /// header constructor during [`assemble`](Self::assemble).
    ///
    /// # Errors
    ///
    /// `AddressOutOfRange` when the load address falls outside the
    /// model's RAM window, `RangeOverflow` when address + data length
    /// runs past the top of RAM.
    pub fn validate(&self) -> Result<(), Data2tapError> {
        validate_address(u32::from(self.address), self.model)?;

        let ram_top = self.model.ram_top();
        if usize::from(self.address) + self.data.len() > usize::from(ram_top) {
            return Err(Data2tapError::RangeOverflow {
                address: self.address,
                data_len: self.data.len(),
                ram_top,
            });
        }
        Ok(())
    }

    /// Assemble the complete TAP byte stream: header block bytes followed
    /// by data block bytes, with no container around them.
    ///
    /// # Errors
    ///
    /// Everything [`validate`](Self::validate) reports, plus
    /// `NameTooLong`/`InvalidNameCharacter` from the header.
    pub fn assemble(&self) -> Result<Vec<u8>, Data2tapError> {
        self.validate()?;
        debug!(
            "validated: name \"{}\", address {}, {} data bytes",
            self.name,
            self.address,
            self.data.len()
        );

        let header = TapHeader::new(
            self.block_type,
            &self.name,
            self.data.len() as u16,
            self.address,
        )?;
        let mut tap = header.encode()?;
        tap.extend_from_slice(&TapBody::encode(&self.data)?);
        debug!("tap prepared: {} B total", tap.len());
        Ok(tap)
    }

    /// Assemble and write the TAP stream to a sink.
    ///
    /// # Errors
    ///
    /// Everything [`assemble`](Self::assemble) reports, plus `Io` when
    /// the sink fails.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<(), Data2tapError> {
        let tap = self.assemble()?;
        sink.write_all(&tap)?;
        sink.flush()?;
        info!(
            "tap written: data {} B, file {} B",
            self.data.len(),
            tap.len()
        );
        Ok(())
    }
}
