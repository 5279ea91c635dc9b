//! palettize: adaptive palette quantization with error-diffusion dithering
//!
//! This library reduces a full-color raster image to an indexed palette
//! image with a bounded color count, producing output suitable for compact
//! PNG encoding.
//!
//! # Quick Start
//!
//! The [`PngReducer`] builder is the primary entry point:
//!
//! ```
//! use palettize::{ColorBgra, PngReducer};
//!
//! let pixels = vec![ColorBgra::from_rgb(200, 40, 40); 16];
//! let reducer = PngReducer::new().max_colors(16);
//!
//! let image = reducer.quantize(&pixels, 4, 4).unwrap();
//! assert_eq!(image.palette().len(), 1);
//!
//! let png_bytes = reducer.reduce_to_png(&pixels, 4, 4).unwrap();
//! assert_eq!(&png_bytes[1..4], b"PNG");
//! ```
//!
//! For direct control, [`quantize`] runs the two-pass engine with explicit
//! [`QuantizeOptions`], and [`quantize_with`] accepts any
//! [`ColorReducer`] implementation.
//!
//! # Pipeline
//!
//! Quantization is a strict two-pass process:
//!
//! ```text
//! source pixels (ColorBgra, row-major)
//!     |
//!     v
//! ╔═══════════════════════════════════════════╗
//! ║  Pass 1: observe                          ║
//! ║  every pixel feeds the palette builder    ║
//! ║  (octree: route down bit-sliced RGB,      ║
//! ║   fold deepest nodes past the target)     ║
//! ╚═══════════════════════════════════════════╝
//!     |
//!     v
//! palette extraction (bounded PaletteTable, stable indices)
//!     |
//!     v
//! ╔═══════════════════════════════════════════╗
//! ║  Pass 2: remap (serpentine scan)          ║
//! ║                                           ║
//! ║  target = src - accumulated error * w/8   ║
//! ║      |                                    ║
//! ║  index = classify(target)                 ║
//! ║      |                                    ║
//! ║  residual = palette[index] - target       ║
//! ║      |                                    ║
//! ║  diffuse 7/16, 5/16, 3/16, remainder to   ║
//! ║  unvisited neighbors                      ║
//! ╚═══════════════════════════════════════════╝
//!     |
//!     v
//! IndexedImage (index buffer + palette)  --->  encode::to_png
//! ```
//!
//! # Why the arithmetic is integer and byte-exact
//!
//! Error diffusion is feedback: each pixel's classification depends on the
//! exact residuals written by previously visited pixels. The engine
//! therefore works in exact `i32` arithmetic with saturation to `[0, 255]`
//! at every channel boundary, and splits each residual so the diffused
//! shares sum to it exactly -- no energy is lost to rounding, and the same
//! input always produces byte-identical output.
//!
//! The serpentine scan (even rows left to right, odd rows right to left)
//! halves the average distance a residual travels before being consumed
//! and avoids the directional drift that a one-way scan imprints on
//! gradients.
//!
//! # Palette strategies
//!
//! Palette building is pluggable via the [`ColorReducer`] trait:
//!
//! - [`OctreeReducer`] (default): adapts the palette to the image's own
//!   color population with greedy deepest-first reduction.
//! - [`FixedReducer`]: remaps against a caller-supplied palette.
//!
//! The engine is deliberately single-threaded: the second pass is a
//! sequential recurrence, and splitting it would change the output.

pub mod api;
pub mod color;
pub mod encode;
pub mod output;
pub mod palette;
pub mod quant;

#[cfg(test)]
mod domain_tests;

pub use api::{PngReducer, ReduceError};
pub use color::{clamp_to_byte, clamp_to_byte_f32, clamp_to_byte_f64, ColorBgra, ParseColorError};
pub use encode::EncodeError;
pub use output::IndexedImage;
pub use palette::PaletteTable;
pub use quant::{
    quantize, quantize_with, ColorReducer, FixedReducer, OctreeReducer, QuantizeError,
    QuantizeOptions, ReducerMethod,
};
