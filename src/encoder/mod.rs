//! QR code encoding modules
//!
//! This module contains the symbol construction pipeline:
//! - Version selection and byte-mode codeword building
//! - Reed-Solomon error correction and block interleaving
//! - Function pattern layout and zigzag data placement
//! - Mask evaluation with the four penalty rules

/// Bit buffer and data codeword construction
pub mod bitstream;
/// Encode options and `QR_*` environment knobs
pub mod config;
/// Format information encoding (mask pattern, EC level)
pub mod format;
/// Function module mask builder (finder/timing/format/alignment/version)
pub mod function_mask;
/// GF(256) arithmetic tables
pub mod gf256;
/// Block splitting and codeword interleaving
pub mod interleave;
/// QR code masking
pub mod mask;
/// Function pattern drawing
pub mod patterns;
/// Mask penalty scoring
pub mod penalty;
/// Zigzag data placement
pub mod placement;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon parity generation
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;
