//! Version selection and version information (versions 7-40)

use tracing::debug;

use crate::encoder::config::EncodeOptions;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::tables::{VersionParams, version_params};
use crate::error::{EncodeError, Result};
use crate::models::{BitMatrix, ECLevel, Version};

/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// 18-bit version word: 6 version bits followed by 12 BCH bits
pub fn version_info_bits(version: Version) -> u32 {
    let data = version.number() as u32;
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * VERSION_GENERATOR);
    }
    (data << 12) | (rem & 0xFFF)
}

/// Draw both 6x3 version blocks (v7+) and mark them as function modules
pub fn draw_version_info(modules: &mut BitMatrix, function: &mut FunctionMask, version: Version) {
    if !version.has_version_info() {
        return;
    }
    let bits = version_info_bits(version);
    let size = version.size();
    for i in 0..18 {
        let bit = (bits >> i) & 1 != 0;
        let a = size - 11 + i % 3;
        let b = i / 3;
        // Top-right block, then its transpose at bottom-left
        modules.set(a, b, bit);
        function.mark(a, b);
        modules.set(b, a, bit);
        function.mark(b, a);
    }
}

/// Smallest version in the options' window whose byte-mode segment holds `length` bytes
pub fn select_version(length: usize, options: &EncodeOptions) -> Result<VersionParams> {
    for version in Version::range(options.min_version, options.max_version) {
        let params = version_params(version, options.ec_level);
        if params.fits(length) {
            debug!(
                "selected version {} ({}x{}) for {} byte payload, data capacity {} codewords",
                version,
                version.size(),
                version.size(),
                length,
                params.data_capacity
            );
            return Ok(params);
        }
    }

    Err(EncodeError::CapacityExceeded {
        length,
        capacity: max_payload_length(options.ec_level, options.max_version),
    })
}

/// Largest byte-mode payload any version up to `max_version` can hold
pub fn max_payload_length(ec_level: ECLevel, max_version: Version) -> usize {
    Version::range(Version::MIN, max_version)
        .map(|v| version_params(v, ec_level).max_payload_length())
        .max()
        .unwrap_or(0)
}
