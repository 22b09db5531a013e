//! Console and framebuffer rendering of finished symbols
//!
//! Both renderers surround the symbol with a light quiet zone. Neither is part of
//! the encoding itself; they are the hand-off point to whatever displays the code.

use image::{GrayImage, Luma};

use crate::models::Symbol;

/// Quiet zone width (in modules) used by the console renderer
pub const QUIET_ZONE_SIZE: usize = 2;

/// Largest pixels-per-module accepted by [`to_image`]
pub const MAX_SCALE: u32 = 64;

/// Largest quiet zone (in modules) either renderer draws
pub const MAX_QUIET_ZONE: usize = 32;

const DARK_CELL: &str = "██";
const LIGHT_CELL: &str = "  ";

/// Render `symbol` as text, two characters per module, one line per row.
/// `quiet_zone` is clamped to `MAX_QUIET_ZONE`.
pub fn to_text(symbol: &Symbol, quiet_zone: usize) -> String {
    let quiet_zone = quiet_zone.min(MAX_QUIET_ZONE);
    let side = symbol.size + 2 * quiet_zone;
    let mut out = String::with_capacity(side * (side * DARK_CELL.len() + 1));

    for row in 0..side {
        for col in 0..side {
            let dark = module_at(symbol, col, row, quiet_zone);
            out.push_str(if dark { DARK_CELL } else { LIGHT_CELL });
        }
        out.push('\n');
    }
    out
}

/// Pixel side of the image for a `size`-module symbol, after clamping the
/// quiet zone to `MAX_QUIET_ZONE` and the scale to `1..=MAX_SCALE`
pub fn image_side(size: usize, quiet_zone: usize, scale: u32) -> u32 {
    let modules = size.saturating_add(2 * quiet_zone.min(MAX_QUIET_ZONE));
    u32::try_from(modules)
        .unwrap_or(u32::MAX)
        .saturating_mul(scale.clamp(1, MAX_SCALE))
}

/// Render `symbol` as an 8-bit grayscale image with `scale` pixels per module.
/// Dark modules are 0, light modules and the quiet zone are 255.
/// `scale` is clamped to `1..=MAX_SCALE` and `quiet_zone` to `MAX_QUIET_ZONE`.
pub fn to_image(symbol: &Symbol, quiet_zone: usize, scale: u32) -> GrayImage {
    let scale = scale.clamp(1, MAX_SCALE);
    let quiet_zone = quiet_zone.min(MAX_QUIET_ZONE);
    let side = image_side(symbol.size, quiet_zone, scale);

    GrayImage::from_fn(side, side, |x, y| {
        let col = (x / scale) as usize;
        let row = (y / scale) as usize;
        if module_at(symbol, col, row, quiet_zone) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

/// Module lookup in quiet-zone coordinates
fn module_at(symbol: &Symbol, col: usize, row: usize, quiet_zone: usize) -> bool {
    let inside = |v: usize| v >= quiet_zone && v - quiet_zone < symbol.size;
    inside(col) && inside(row) && symbol.get(col - quiet_zone, row - quiet_zone)
}
