//! Core data structures

/// Packed module grid
pub mod matrix;
/// Version, EC level, mask and the finished symbol
pub mod symbol;

pub use matrix::BitMatrix;
pub use symbol::{ECLevel, MaskPattern, Symbol, Version};
