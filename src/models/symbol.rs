use std::fmt;
use std::str::FromStr;

use super::BitMatrix;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Get the version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Width of the byte-mode character count field
    pub fn char_count_bits(self) -> usize {
        if self.0 <= 9 { 8 } else { 16 }
    }

    /// Versions 7+ carry an 18-bit version information block
    pub fn has_version_info(self) -> bool {
        self.0 >= 7
    }

    /// Iterate versions `from..=to` in ascending order
    pub fn range(from: Version, to: Version) -> impl Iterator<Item = Version> {
        (from.0..=to.0).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    #[default]
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Two-bit indicator written into the format information (01=L, 00=M, 11=Q, 10=H)
    pub fn format_bits(self) -> u16 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

impl FromStr for ECLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ECLevel::L),
            "M" | "MEDIUM" => Ok(ECLevel::M),
            "Q" | "QUARTILE" => Ok(ECLevel::Q),
            "H" | "HIGH" => Ok(ECLevel::H),
            other => Err(format!("unknown error correction level '{other}'")),
        }
    }
}

/// Mask pattern (0-7); `i` is the row, `j` the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight candidates in evaluation order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Three-bit mask reference written into the format information
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Check if module at row `i`, column `j` should be inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Finished QR symbol, without quiet zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Version number (1-40)
    pub version: u8,
    /// Modules per side, `4 * version + 17`
    pub size: usize,
    /// Module grid (true = dark)
    pub modules: BitMatrix,
    /// Error correction level announced in the format information
    pub ec_level: ECLevel,
    /// Mask applied to the data modules
    pub mask: MaskPattern,
}

impl Symbol {
    /// Whether the module at column `x`, row `y` is dark
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::MIN.size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::MAX.size(), 177);
        assert!(Version::new(0).is_none());
        assert!(Version::new(41).is_none());
    }

    #[test]
    fn test_char_count_bits() {
        assert_eq!(Version::new(9).unwrap().char_count_bits(), 8);
        assert_eq!(Version::new(10).unwrap().char_count_bits(), 16);
        assert_eq!(Version::range(Version::MIN, Version::MAX).count(), 40);
    }

    #[test]
    fn test_ec_level() {
        assert_eq!(ECLevel::default(), ECLevel::L);
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!(ECLevel::H.format_bits(), 0b10);
        assert_eq!("q".parse::<ECLevel>(), Ok(ECLevel::Q));
        assert_eq!("High".parse::<ECLevel>(), Ok(ECLevel::H));
        assert!("X".parse::<ECLevel>().is_err());
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        assert!(MaskPattern::Pattern1.is_masked(2, 5));
        assert!(!MaskPattern::Pattern1.is_masked(3, 0));
        assert!(MaskPattern::Pattern2.is_masked(1, 3));
        assert!(!MaskPattern::Pattern2.is_masked(3, 1));
    }

    #[test]
    fn test_mask_index_round_trip() {
        for (i, mask) in MaskPattern::ALL.iter().enumerate() {
            assert_eq!(mask.index() as usize, i);
            assert_eq!(MaskPattern::from_index(i as u8), Some(*mask));
        }
        assert_eq!(MaskPattern::from_index(8), None);
    }
}
