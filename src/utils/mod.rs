//! Utility functions for displaying symbols
//!
//! This module provides helpers that sit outside the encoding pipeline:
//! - Console rendering (two characters per module)
//! - Grayscale image rendering via the `image` crate

/// Text and image rendering
pub mod render;
