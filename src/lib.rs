//! RustQR Gen - byte-mode QR code symbol encoder
//!
//! A pure Rust encoder that turns an opaque byte payload into a QR Code Model 2
//! module grid: smallest fitting version, Reed-Solomon error correction, standard
//! function patterns and penalty-based mask selection.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// `QR_DEBUG` switch and stderr logger
pub mod debug;
/// QR code encoding modules (codewords, error correction, layout, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Symbol, BitMatrix, Version, etc.)
pub mod models;
/// Utility functions (console and image rendering)
pub mod utils;

pub use encoder::config::EncodeOptions;
pub use encoder::penalty::score as penalty_score;
pub use encoder::tables::{VersionParams, version_params};
pub use encoder::version::max_payload_length;
pub use error::{EncodeError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, Symbol, Version};

use encoder::qr_encoder::QrEncoder;
use rayon::prelude::*;

/// Largest payload accepted with the default options (version 40, level L)
pub const MAX_PAYLOAD_LENGTH: usize = 2953;

/// Encode a payload with the default options (level L, versions 1-40, best mask)
///
/// # Arguments
/// * `payload` - Opaque bytes, 1 to `MAX_PAYLOAD_LENGTH` of them
///
/// # Returns
/// The finished symbol, or the first error hit along the pipeline
///
/// # Example
/// ```
/// let symbol = rust_qr_gen::encode(b"HELLO").unwrap();
/// assert_eq!(symbol.version, 1);
/// assert_eq!(symbol.size, 21);
/// ```
pub fn encode(payload: &[u8]) -> Result<Symbol> {
    QrEncoder::encode(payload, &EncodeOptions::default())
}

/// Encode a payload with explicit options
pub fn encode_with_options(payload: &[u8], options: &EncodeOptions) -> Result<Symbol> {
    QrEncoder::encode(payload, options)
}

/// Encode independent payloads in parallel
///
/// Each payload is encoded on its own; results come back in input order.
pub fn encode_batch(payloads: &[&[u8]]) -> Vec<Result<Symbol>> {
    let options = EncodeOptions::default();
    payloads
        .par_iter()
        .map(|payload| QrEncoder::encode(payload, &options))
        .collect()
}
