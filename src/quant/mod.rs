//! Two-pass palette quantization.
//!
//! Quantization separates "observe all pixels, build a palette" from
//! "remap every pixel to the palette":
//!
//! 1. **First pass** -- every source pixel is fed to the
//!    [`ColorReducer`]'s accumulator, unconditionally.
//! 2. **Palette extraction** -- the reducer produces a bounded
//!    [`PaletteTable`] and a classifier over it.
//! 3. **Second pass** -- every pixel is remapped in serpentine order with
//!    Floyd-Steinberg error diffusion (see [`diffusion`](self)).
//!
//! The engine is single-threaded by design: each pixel's dithering result
//! depends on the exact diffused error written by previously visited
//! pixels, so reordering would change the output.

mod diffusion;
mod octree;

pub use octree::OctreeReducer;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::color::ColorBgra;
use crate::output::IndexedImage;
use crate::palette::PaletteTable;

/// Error type for quantization configuration validation.
///
/// All variants are rejected synchronously, before any per-pixel work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Width or height is zero.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// The pixel buffer does not hold `width * height` pixels.
    #[error("pixel buffer holds {len} pixels, expected {expected} for {width}x{height}")]
    PixelCountMismatch {
        /// Actual buffer length
        len: usize,
        /// Expected buffer length
        expected: usize,
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// Palette size is outside `1..=256` (indices must fit a single byte).
    #[error("palette size {0} outside the supported range 1..=256")]
    PaletteSizeOutOfRange(usize),
}

/// A palette-building strategy pluggable into the two-pass driver.
///
/// One reducer instance belongs to exactly one quantization call: the
/// driver feeds it the full pixel population, extracts the palette, then
/// classifies dithered colors against it. `classify` is only meaningful
/// after `extract_palette` has run.
pub trait ColorReducer {
    /// Accumulate one source pixel (first pass).
    fn observe(&mut self, color: ColorBgra);

    /// Produce the bounded palette and fix entry indices.
    fn extract_palette(&mut self) -> PaletteTable;

    /// Map a color to the index of its palette entry (second pass).
    fn classify(&self, color: ColorBgra) -> u8;
}

/// Matches colors against a caller-supplied palette; builds nothing.
///
/// The first pass is a no-op and classification is the linear
/// nearest-match scan of [`PaletteTable::find_closest`].
#[derive(Debug, Clone)]
pub struct FixedReducer {
    palette: PaletteTable,
}

impl FixedReducer {
    /// Create a reducer over a fixed palette.
    pub fn new(palette: PaletteTable) -> Self {
        Self { palette }
    }
}

impl ColorReducer for FixedReducer {
    fn observe(&mut self, _color: ColorBgra) {}

    fn extract_palette(&mut self) -> PaletteTable {
        self.palette.clone()
    }

    fn classify(&self, color: ColorBgra) -> u8 {
        self.palette.find_closest(color) as u8
    }
}

/// Palette-building strategy selection.
///
/// A closed set of in-tree strategies; anything else (platform or
/// native-library quantizers) stays outside the crate behind the
/// [`ColorReducer`] trait and [`quantize_with`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReducerMethod {
    /// Adaptive octree reduction over the image's own color population.
    #[default]
    Octree,
    /// Nearest-match against the given palette; no palette is built.
    Fixed(PaletteTable),
}

impl ReducerMethod {
    /// Instantiate the reducer for one quantization call.
    pub fn reducer(&self, max_colors: usize) -> Box<dyn ColorReducer> {
        match self {
            ReducerMethod::Octree => Box::new(OctreeReducer::new(max_colors)),
            ReducerMethod::Fixed(palette) => Box::new(FixedReducer::new(palette.clone())),
        }
    }
}

/// Quantization configuration.
///
/// The defaults match the crate's PNG color reduction profile: up to 255
/// palette entries with dithering at strength 4.
#[derive(Debug, Clone, Deserialize)]
pub struct QuantizeOptions {
    /// Target palette size, `1..=256`.
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// Dither strength: the accumulated error applied to each pixel is
    /// scaled by `dither_level / 8`. 0 disables dithering.
    #[serde(default = "default_dither_level")]
    pub dither_level: u8,

    /// Palette-building strategy.
    #[serde(default)]
    pub method: ReducerMethod,
}

fn default_max_colors() -> usize {
    255
}

fn default_dither_level() -> u8 {
    4
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            max_colors: default_max_colors(),
            dither_level: default_dither_level(),
            method: ReducerMethod::Octree,
        }
    }
}

/// Quantize an image to an indexed palette image.
///
/// Runs both passes with the strategy selected by `options.method` and
/// returns the filled index buffer together with the extracted palette.
/// The source buffer is only read; quantization is a pure, deterministic
/// function of its inputs.
///
/// # Errors
///
/// Rejects zero dimensions, a pixel buffer that does not match
/// `width * height`, and palette sizes outside `1..=256` -- all before any
/// per-pixel work.
///
/// # Example
///
/// ```
/// use palettize::{quantize, ColorBgra, QuantizeOptions};
///
/// let pixels = vec![
///     ColorBgra::from_rgb(255, 0, 0),
///     ColorBgra::from_rgb(0, 0, 255),
/// ];
/// let options = QuantizeOptions { max_colors: 2, ..QuantizeOptions::default() };
/// let image = quantize(&pixels, 2, 1, &options).unwrap();
///
/// assert_eq!(image.palette().len(), 2);
/// assert!(image.indices().iter().all(|&i| (i as usize) < 2));
/// ```
pub fn quantize(
    pixels: &[ColorBgra],
    width: usize,
    height: usize,
    options: &QuantizeOptions,
) -> Result<IndexedImage, QuantizeError> {
    let mut reducer = options.method.reducer(options.max_colors);
    quantize_with(pixels, width, height, options, reducer.as_mut())
}

/// Quantize with a caller-constructed palette-building strategy.
///
/// Like [`quantize`], but `options.method` is ignored in favor of the
/// given reducer, which must be fresh (not shared with another call).
pub fn quantize_with(
    pixels: &[ColorBgra],
    width: usize,
    height: usize,
    options: &QuantizeOptions,
    reducer: &mut dyn ColorReducer,
) -> Result<IndexedImage, QuantizeError> {
    if width == 0 || height == 0 {
        return Err(QuantizeError::InvalidDimensions { width, height });
    }
    let expected = width * height;
    if pixels.len() != expected {
        return Err(QuantizeError::PixelCountMismatch {
            len: pixels.len(),
            expected,
            width,
            height,
        });
    }
    if options.max_colors == 0 || options.max_colors > 256 {
        return Err(QuantizeError::PaletteSizeOutOfRange(options.max_colors));
    }

    // First pass: the strategy sees every pixel, dithering plays no part.
    for &pixel in pixels {
        reducer.observe(pixel);
    }

    let palette = reducer.extract_palette();
    // A fixed palette bypasses the max_colors bound; indices still must
    // fit a byte.
    if palette.is_empty() || palette.len() > 256 {
        return Err(QuantizeError::PaletteSizeOutOfRange(palette.len()));
    }

    debug!(
        width,
        height,
        palette_len = palette.len(),
        dither_level = options.dither_level,
        "palette extracted, remapping"
    );

    let indices = diffusion::remap(pixels, width, height, &*reducer, &palette, options.dither_level);
    Ok(IndexedImage::new(indices, width, height, palette))
}
