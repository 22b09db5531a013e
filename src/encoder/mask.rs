//! Mask application (XOR of a mask pattern over data modules)

use crate::encoder::function_mask::FunctionMask;
use crate::models::{BitMatrix, MaskPattern};

/// XOR `mask_pattern` into every non-function module. Applying twice restores the input.
pub fn apply_mask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, func: &FunctionMask) {
    let width = matrix.width();
    let height = matrix.height();

    for y in 0..height {
        for x in 0..width {
            if !func.is_function(x, y) && mask_pattern.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::patterns::FunctionPatterns;
    use crate::models::Version;

    #[test]
    fn test_apply_mask() {
        let mut matrix = BitMatrix::new(21, 21);
        matrix.set(10, 10, true);
        matrix.set(11, 10, false);

        let func = FunctionMask::new(Version::MIN);
        apply_mask(&mut matrix, MaskPattern::Pattern0, &func);

        // Pattern0: (i + j) % 2 == 0
        assert!(!matrix.get(10, 10));
        assert!(!matrix.get(11, 10));
        assert!(matrix.get(12, 10));
    }

    #[test]
    fn test_mask_uses_row_then_column() {
        let mut matrix = BitMatrix::new(21, 21);
        let func = FunctionMask::new(Version::MIN);
        apply_mask(&mut matrix, MaskPattern::Pattern1, &func);
        // Pattern1 inverts even rows
        assert!(matrix.get(3, 0));
        assert!(!matrix.get(0, 3));
    }

    #[test]
    fn test_function_modules_never_flipped() {
        let version = Version::new(7).unwrap();
        let patterns = FunctionPatterns::new(version);
        for mask in MaskPattern::ALL {
            let mut masked = patterns.modules.clone();
            apply_mask(&mut masked, mask, &patterns.function);
            for y in 0..version.size() {
                for x in 0..version.size() {
                    if patterns.function.is_function(x, y) {
                        assert_eq!(masked.get(x, y), patterns.modules.get(x, y));
                    }
                }
            }
            apply_mask(&mut masked, mask, &patterns.function);
            assert_eq!(masked, patterns.modules);
        }
    }
}
