use crate::models::{BitMatrix, Version};

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
#[derive(Debug, Clone)]
pub struct FunctionMask {
    mask: BitMatrix,
}

impl FunctionMask {
    /// Empty mask: every module is still free for data
    pub fn new(version: Version) -> Self {
        let size = version.size();
        Self {
            mask: BitMatrix::new(size, size),
        }
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// Claim (x, y) for a function pattern
    pub fn mark(&mut self, x: usize, y: usize) {
        self.mask.set(x, y, true);
    }

    /// Whether (x, y) is reserved
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Cells left for codewords and remainder bits
    pub fn data_modules_count(&self) -> usize {
        let size = self.size();
        size * size - self.mask.count_ones()
    }
}

/// Alignment pattern centers for a given version, ascending, anchored at 6.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    // Stride rounded up to an even number
    let step = (v * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    let last = version.size() - 7;
    // The first gap may be shorter than the stride (v36, v39), so step back from the end
    std::iter::once(6)
        .chain((1..num_align).map(|i| last - (num_align - 1 - i) * step))
        .collect()
}
