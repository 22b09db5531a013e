//! Format information encoding (EC level + mask, BCH(15,5))

use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u16 = 0x537;
/// Keeps the format word from ever being all zero
const FORMAT_XOR_MASK: u16 = 0x5412;

/// 15-bit format word for `ec_level` and `mask`
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = (ec_level.format_bits() << 3) | mask.index() as u16;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_GENERATOR);
    }
    ((data << 10) | (rem & 0x3FF)) ^ FORMAT_XOR_MASK
}

/// Draw both copies of the format word. The cells are already reserved as function modules.
pub fn draw_format_bits(modules: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let bits = format_bits(ec_level, mask);
    let bit = |i: usize| (bits >> i) & 1 != 0;
    let size = modules.width();

    // Copy 1, around the top-left finder
    for i in 0..6 {
        modules.set(8, i, bit(i));
    }
    modules.set(8, 7, bit(6));
    modules.set(8, 8, bit(7));
    modules.set(7, 8, bit(8));
    for i in 9..15 {
        modules.set(14 - i, 8, bit(i));
    }

    // Copy 2, split between the top-right and bottom-left finders
    for i in 0..8 {
        modules.set(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        modules.set(8, size - 15 + i, bit(i));
    }
    // Dark module
    modules.set(8, size - 8, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_reference_values() {
        // Level L
        assert_eq!(format_bits(ECLevel::L, MaskPattern::Pattern0), 0x77C4);
        assert_eq!(format_bits(ECLevel::L, MaskPattern::Pattern4), 0x662F);
        // Level M, mask 0
        assert_eq!(format_bits(ECLevel::M, MaskPattern::Pattern0), 0x5412);
        // Level H, mask 7
        assert_eq!(format_bits(ECLevel::H, MaskPattern::Pattern7), 0x083B);
    }

    #[test]
    fn test_format_bits_are_valid_codewords() {
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for mask in MaskPattern::ALL {
                let mut word = (format_bits(level, mask) ^ FORMAT_XOR_MASK) as u32;
                for shift in (0..5).rev() {
                    if word & (1 << (shift + 10)) != 0 {
                        word ^= (FORMAT_GENERATOR as u32) << shift;
                    }
                }
                assert_eq!(word, 0, "{level:?} {mask:?}");
            }
        }
    }

    #[test]
    fn test_both_copies_agree() {
        let mut modules = BitMatrix::new(21, 21);
        draw_format_bits(&mut modules, ECLevel::L, MaskPattern::Pattern3);

        // Copy 1 read MSB first: row 8 columns 0-5, 7, 8, then column 8 rows 7, 5..0
        let mut first = 0u16;
        let cells = [
            (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (7, 8), (8, 8),
            (8, 7), (8, 5), (8, 4), (8, 3), (8, 2), (8, 1), (8, 0),
        ];
        for (x, y) in cells {
            first = (first << 1) | modules.get(x, y) as u16;
        }

        // Copy 2 read MSB first: column 8 bottom-up, then row 8 right side
        let mut second = 0u16;
        for y in (14..21).rev() {
            second = (second << 1) | modules.get(8, y) as u16;
        }
        for x in 13..21 {
            second = (second << 1) | modules.get(x, 8) as u16;
        }

        let expected = format_bits(ECLevel::L, MaskPattern::Pattern3);
        assert_eq!(first, expected);
        assert_eq!(second, expected);
        assert!(modules.get(8, 13));
    }
}
