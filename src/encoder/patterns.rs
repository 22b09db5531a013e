//! Function pattern drawing: finders, separators, timing, alignment, reserved format
//! area, version information and the dark module

use crate::encoder::function_mask::{FunctionMask, alignment_pattern_positions};
use crate::encoder::version::draw_version_info;
use crate::models::{BitMatrix, Version};

/// Unmasked module grid with every function pattern drawn, plus the matching mask
pub struct FunctionPatterns {
    /// Drawn function modules, data area still light
    pub modules: BitMatrix,
    /// Cells claimed by the patterns
    pub function: FunctionMask,
}

impl FunctionPatterns {
    /// Draw every function pattern for `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut patterns = Self {
            modules: BitMatrix::new(size, size),
            function: FunctionMask::new(version),
        };

        patterns.draw_finder(0, 0);
        patterns.draw_finder(size - 7, 0);
        patterns.draw_finder(0, size - 7);
        patterns.draw_timing();
        patterns.draw_alignment_patterns(version);
        patterns.reserve_format_area();
        draw_version_info(&mut patterns.modules, &mut patterns.function, version);
        patterns.set_function(8, size - 8, true);

        patterns
    }

    /// Modules per side
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.modules.set(x, y, dark);
        self.function.mark(x, y);
    }

    /// 7x7 finder with its top-left corner at (x, y), plus the light separator ring
    fn draw_finder(&mut self, x: usize, y: usize) {
        let size = self.size() as isize;
        for dy in -1..=7isize {
            for dx in -1..=7isize {
                let px = x as isize + dx;
                let py = y as isize + dy;
                if px < 0 || py < 0 || px >= size || py >= size {
                    continue;
                }
                let inside = (0..7).contains(&dx) && (0..7).contains(&dy);
                let ring = dx == 0 || dx == 6 || dy == 0 || dy == 6;
                let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                self.set_function(px as usize, py as usize, inside && (ring || core));
            }
        }
    }

    /// Alternating modules along row 6 and column 6, leaving claimed cells alone
    fn draw_timing(&mut self) {
        for i in 0..self.size() {
            let dark = i % 2 == 0;
            if !self.function.is_function(i, 6) {
                self.set_function(i, 6, dark);
            }
            if !self.function.is_function(6, i) {
                self.set_function(6, i, dark);
            }
        }
    }

    fn draw_alignment_patterns(&mut self, version: Version) {
        let positions = alignment_pattern_positions(version);
        let last = positions.len().saturating_sub(1);
        for (i, &cx) in positions.iter().enumerate() {
            for (j, &cy) in positions.iter().enumerate() {
                // The three centers under the finder patterns
                if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                    continue;
                }
                self.draw_alignment(cx, cy);
            }
        }
    }

    /// 5x5: dark ring, light ring, dark center
    fn draw_alignment(&mut self, cx: usize, cy: usize) {
        for dy in -2..=2isize {
            for dx in -2..=2isize {
                let distance = dx.abs().max(dy.abs());
                let x = (cx as isize + dx) as usize;
                let y = (cy as isize + dy) as usize;
                self.set_function(x, y, distance != 1);
            }
        }
    }

    /// Claim the 31 format cells; they are drawn once a mask is chosen
    fn reserve_format_area(&mut self) {
        let size = self.size();
        for i in 0..=8 {
            if i != 6 {
                self.function.mark(8, i);
                self.function.mark(i, 8);
            }
        }
        for i in 0..8 {
            self.function.mark(size - 1 - i, 8);
        }
        for i in 0..7 {
            self.function.mark(8, size - 1 - i);
        }
    }
}
