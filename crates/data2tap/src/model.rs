//! Target Spectrum model configuration.

/// Spectrum models the writer can target.
///
/// The model fixes the addressable RAM window: loadable data must fit
/// between `ram_begin()` and `ram_top()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZxModel {
    Spectrum16K,
    #[default]
    Spectrum48K,
}

impl ZxModel {
    /// First RAM address ($4000 on every Spectrum; below that is ROM).
    #[must_use]
    pub fn ram_begin(self) -> u16 {
        match self {
            Self::Spectrum16K | Self::Spectrum48K => 0x4000,
        }
    }

    /// Last RAM address (P_RAMT): $7FFF for 16K, $FFFF for 48K.
    #[must_use]
    pub fn ram_top(self) -> u16 {
        match self {
            Self::Spectrum16K => 0x7FFF,
            Self::Spectrum48K => 0xFFFF,
        }
    }

    /// RAM size in bytes.
    #[must_use]
    pub fn ram_size(self) -> usize {
        usize::from(self.ram_top()) - usize::from(self.ram_begin()) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ram_sizes() {
        assert_eq!(ZxModel::Spectrum16K.ram_size(), 16 * 1024);
        assert_eq!(ZxModel::Spectrum48K.ram_size(), 48 * 1024);
    }

    #[test]
    fn ram_window() {
        assert_eq!(ZxModel::Spectrum48K.ram_begin(), 0x4000);
        assert_eq!(ZxModel::Spectrum16K.ram_top(), 0x7FFF);
        assert_eq!(ZxModel::Spectrum48K.ram_top(), 0xFFFF);
    }

    #[test]
    fn default_is_48k() {
        assert_eq!(ZxModel::default(), ZxModel::Spectrum48K);
    }
}
