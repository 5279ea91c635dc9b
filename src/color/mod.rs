//! Color types and utilities
//!
//! This module provides the packed [`ColorBgra`] pixel type with its
//! byte-exact clamped arithmetic, plus the static named-color table.

mod bgra;
mod named;

pub use bgra::{clamp_to_byte, clamp_to_byte_f32, clamp_to_byte_f64, ColorBgra, ParseColorError};
pub use named::{from_name, NAMED_COLORS};
