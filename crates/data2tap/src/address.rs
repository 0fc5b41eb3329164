//! Memory address parsing and validation.

use crate::error::Data2tapError;
use crate::model::ZxModel;

/// Parse an address from decimal or `0x`-prefixed hexadecimal text.
///
/// No whitespace trimming happens here, and no range check: any value the
/// parse accepts is returned, and [`validate_address`] applies the RAM
/// window as a separate step.
///
/// # Errors
///
/// `InvalidAddressFormat` when the text is not an unsigned number in the
/// selected radix, or its magnitude exceeds the 32-bit signed range.
pub fn parse_address(text: &str) -> Result<u32, Data2tapError> {
    let parsed = if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
    {
        i32::from_str_radix(digits, 16)
    } else {
        text.parse::<i32>()
    };
    match parsed {
        Ok(value) if value >= 0 => Ok(value as u32),
        _ => Err(Data2tapError::InvalidAddressFormat(text.to_string())),
    }
}

/// Check an address against the model's RAM window and narrow it to 16
/// bits.
///
/// # Errors
///
/// `AddressOutOfRange` below `ram_begin()` or above `ram_top()`.
pub fn validate_address(address: u32, model: ZxModel) -> Result<u16, Data2tapError> {
    let min = model.ram_begin();
    let max = model.ram_top();
    if address < u32::from(min) || address > u32::from(max) {
        return Err(Data2tapError::AddressOutOfRange { address, min, max });
    }
    Ok(address as u16)
}

/// Well-known 48K-family memory locations, for address pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryAddress {
    /// Start of RAM.
    RamBegin,
    /// Screen bitmap (SCREEN$).
    Screen,
    /// Screen attributes.
    ScreenAttributes,
    /// Printer buffer.
    PrinterBuffer,
    /// User-defined graphics on a 16K machine.
    Udg16K,
    /// Top of physical RAM on a 16K machine.
    PRamt16K,
    /// User-defined graphics on a 48K machine.
    Udg48K,
    /// Top of physical RAM on a 48K machine.
    PRamt48K,
}

impl MemoryAddress {
    /// Every catalog entry, in ascending address order.
    pub const ALL: [Self; 8] = [
        Self::RamBegin,
        Self::Screen,
        Self::ScreenAttributes,
        Self::PrinterBuffer,
        Self::Udg16K,
        Self::PRamt16K,
        Self::Udg48K,
        Self::PRamt48K,
    ];

    /// Numeric address.
    #[must_use]
    pub fn address(self) -> u16 {
        match self {
            Self::RamBegin | Self::Screen => 0x4000,
            Self::ScreenAttributes => 0x5800,
            Self::PrinterBuffer => 0x5B00,
            Self::Udg16K => 0x7F58,
            Self::PRamt16K => 0x7FFF,
            Self::Udg48K => 0xFF58,
            Self::PRamt48K => 0xFFFF,
        }
    }

    /// Canonical hexadecimal text, in the form [`parse_address`] accepts.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::RamBegin | Self::Screen => "0x4000",
            Self::ScreenAttributes => "0x5800",
            Self::PrinterBuffer => "0x5B00",
            Self::Udg16K => "0x7F58",
            Self::PRamt16K => "0x7FFF",
            Self::Udg48K => "0xFF58",
            Self::PRamt48K => "0xFFFF",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::RamBegin => "RAM begin",
            Self::Screen => "Screen memory",
            Self::ScreenAttributes => "Screen memory attributes",
            Self::PrinterBuffer => "Printer buffer",
            Self::Udg16K => "UDG (16K)",
            Self::PRamt16K => "P_RAMT (16K)",
            Self::Udg48K => "UDG (48K)",
            Self::PRamt48K => "P_RAMT (48K)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decimal() {
        assert_eq!(parse_address("16384").expect("decimal"), 16384);
        assert_eq!(parse_address("0").expect("decimal zero"), 0);
    }

    #[test]
    fn parse_hex() {
        assert_eq!(parse_address("0x4000").expect("hex"), 16384);
        assert_eq!(parse_address("0xFFFF").expect("hex"), 65535);
        assert_eq!(parse_address("0Xff58").expect("uppercase prefix"), 0xFF58);
    }

    #[test]
    fn parse_rejects_garbage() {
        for text in ["abc", "0x", "", "12q4", "0x4000 ", " 16384", "-16384"] {
            assert!(matches!(
                parse_address(text),
                Err(Data2tapError::InvalidAddressFormat(_))
            ));
        }
    }

    #[test]
    fn parse_rejects_magnitude_beyond_i32() {
        assert!(matches!(
            parse_address("2147483648"),
            Err(Data2tapError::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            parse_address("0x80000000"),
            Err(Data2tapError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn parse_does_not_range_check() {
        // 70000 is no Spectrum address, but the parse itself accepts it.
        assert_eq!(parse_address("70000").expect("parses fine"), 70000);
    }

    #[test]
    fn validate_window_48k() {
        assert_eq!(
            validate_address(0x4000, ZxModel::Spectrum48K).expect("RAM begin"),
            0x4000
        );
        assert_eq!(
            validate_address(0xFFFF, ZxModel::Spectrum48K).expect("RAM top"),
            0xFFFF
        );
        assert!(matches!(
            validate_address(0x3FFF, ZxModel::Spectrum48K),
            Err(Data2tapError::AddressOutOfRange { .. })
        ));
        assert!(matches!(
            validate_address(70000, ZxModel::Spectrum48K),
            Err(Data2tapError::AddressOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_window_16k() {
        assert_eq!(
            validate_address(0x7FFF, ZxModel::Spectrum16K).expect("16K RAM top"),
            0x7FFF
        );
        assert!(matches!(
            validate_address(0x8000, ZxModel::Spectrum16K),
            Err(Data2tapError::AddressOutOfRange { .. })
        ));
    }

    #[test]
    fn catalog_hex_round_trips() {
        for entry in MemoryAddress::ALL {
            let parsed = parse_address(entry.hex()).expect("catalog hex is valid");
            assert_eq!(parsed, u32::from(entry.address()));
        }
    }

    #[test]
    fn catalog_is_ascending() {
        for pair in MemoryAddress::ALL.windows(2) {
            assert!(pair[0].address() <= pair[1].address());
        }
    }
}
