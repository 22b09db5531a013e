//! Data bit placement into the QR matrix following the zigzag pattern

use crate::encoder::function_mask::FunctionMask;
use crate::models::BitMatrix;

/// Write `codewords` MSB first into every non-function module.
///
/// Traversal runs over column pairs from the right edge, alternating upward and
/// downward, and skips the vertical timing column. Modules left over once the
/// codewords run out are the remainder bits and stay light. Returns the number of
/// codeword bits placed.
pub fn place_codewords(matrix: &mut BitMatrix, func: &FunctionMask, codewords: &[u8]) -> usize {
    let dimension = func.size();
    let total_bits = codewords.len() * 8;
    let mut bit_index = 0usize;
    let mut upward = true;
    let mut col = dimension as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        for offset in 0..dimension {
            let row = if upward { dimension - 1 - offset } else { offset };
            for x in [col as usize, col as usize - 1] {
                if func.is_function(x, row) {
                    continue;
                }
                let dark = bit_index < total_bits
                    && (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 != 0;
                matrix.set(x, row, dark);
                bit_index += 1;
            }
        }

        upward = !upward;
        col -= 2;
    }

    bit_index.min(total_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::patterns::FunctionPatterns;
    use crate::models::Version;

    #[test]
    fn test_first_codeword_fills_bottom_right() {
        let mut patterns = FunctionPatterns::new(Version::MIN);
        let placed = place_codewords(&mut patterns.modules, &patterns.function, &[0b1011_0001]);
        assert_eq!(placed, 8);

        let m = &patterns.modules;
        // Upward through columns 20/19: (20,20) (19,20) (20,19) (19,19) ...
        assert!(m.get(20, 20));
        assert!(!m.get(19, 20));
        assert!(m.get(20, 19));
        assert!(m.get(19, 19));
        assert!(!m.get(20, 18));
        assert!(!m.get(19, 18));
        assert!(!m.get(20, 17));
        assert!(m.get(19, 17));
    }

    #[test]
    fn test_all_ones_fill_every_data_module() {
        let version = Version::new(2).unwrap();
        let mut patterns = FunctionPatterns::new(version);
        // 44 codewords + 7 remainder bits
        let codewords = vec![0xFFu8; 44];
        let placed = place_codewords(&mut patterns.modules, &patterns.function, &codewords);
        assert_eq!(placed, 44 * 8);

        let size = version.size();
        let mut dark_data = 0;
        let mut light_data = 0;
        for y in 0..size {
            for x in 0..size {
                if !patterns.function.is_function(x, y) {
                    if patterns.modules.get(x, y) {
                        dark_data += 1;
                    } else {
                        light_data += 1;
                    }
                }
            }
        }
        assert_eq!(dark_data, 44 * 8);
        assert_eq!(light_data, 7);
    }

    #[test]
    fn test_extra_bits_are_not_consumed() {
        let mut patterns = FunctionPatterns::new(Version::MIN);
        let placed = place_codewords(&mut patterns.modules, &patterns.function, &[0u8; 30]);
        assert_eq!(placed, 208);
    }

    #[test]
    fn test_function_modules_untouched() {
        let mut patterns = FunctionPatterns::new(Version::MIN);
        let before = patterns.modules.clone();
        place_codewords(&mut patterns.modules, &patterns.function, &[0xFF; 26]);
        for y in 0..21 {
            for x in 0..21 {
                if patterns.function.is_function(x, y) {
                    assert_eq!(patterns.modules.get(x, y), before.get(x, y));
                }
            }
        }
    }
}
