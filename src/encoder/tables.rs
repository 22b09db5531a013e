use crate::models::{ECLevel, Version};

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Mode indicator (4 bits) for byte mode
pub const BYTE_MODE_INDICATOR: u32 = 0b0100;
/// Bits taken by the mode indicator
pub const MODE_INDICATOR_BITS: usize = 4;

/// Raw table row for one version/level
pub struct EcBlockInfo {
    /// Error correction blocks
    pub num_blocks: usize,
    /// Parity codewords in every block
    pub ecc_per_block: usize,
}

/// Look up the block table row
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level as usize;
    let v = version.number() as usize;
    // Rows are fully populated for 1..=40, which `Version` guarantees
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Number of modules available for codewords and remainder bits, after all
/// function patterns are excluded.
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Immutable per-version, per-level sizing used by every pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionParams {
    /// Symbol version
    pub version: Version,
    /// Error correction level
    pub ec_level: ECLevel,
    /// Data + ECC codewords
    pub total_codewords: usize,
    /// Data codewords (payload, header, padding)
    pub data_capacity: usize,
    /// Parity codewords in every block
    pub ecc_per_block: usize,
    /// Error correction blocks
    pub num_blocks: usize,
    /// Zero bits appended after the last codeword (0-7)
    pub remainder_bits: usize,
}

impl VersionParams {
    /// Derive the parameters from the tables
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        let raw = raw_data_modules(version);
        let block = ec_block_info(version, ec_level);
        let total_codewords = raw / 8;
        Self {
            version,
            ec_level,
            total_codewords,
            data_capacity: total_codewords - block.ecc_per_block * block.num_blocks,
            ecc_per_block: block.ecc_per_block,
            num_blocks: block.num_blocks,
            remainder_bits: raw % 8,
        }
    }

    /// Bits needed for a byte-mode segment of `length` bytes in this version,
    /// or `None` if the character count field cannot represent the length.
    pub fn segment_bits(&self, length: usize) -> Option<usize> {
        let cc_bits = self.version.char_count_bits();
        if length >= 1 << cc_bits {
            return None;
        }
        Some(MODE_INDICATOR_BITS + cc_bits + length * 8)
    }

    /// Largest byte-mode payload this version holds
    pub fn max_payload_length(&self) -> usize {
        let cc_bits = self.version.char_count_bits();
        let by_bits = (self.data_capacity * 8).saturating_sub(MODE_INDICATOR_BITS + cc_bits) / 8;
        by_bits.min((1 << cc_bits) - 1)
    }

    /// Whether a `length`-byte segment fits the data capacity
    pub fn fits(&self, length: usize) -> bool {
        self.segment_bits(length)
            .is_some_and(|bits| bits <= self.data_capacity * 8)
    }
}

/// Parameters for `version` at `ec_level`
pub fn version_params(version: Version, ec_level: ECLevel) -> VersionParams {
    VersionParams::new(version, ec_level)
}
