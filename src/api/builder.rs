//! PngReducer builder -- the primary ergonomic entry point for the crate.

use crate::api::error::ReduceError;
use crate::color::ColorBgra;
use crate::encode;
use crate::output::IndexedImage;
use crate::quant::{quantize, QuantizeOptions, ReducerMethod};

/// High-level color reduction builder.
///
/// Wraps the two-pass quantizer and the PNG adapter behind a fluent
/// builder with the crate's color reduction defaults: up to 255 palette
/// entries, octree palette building, dithering at strength 4.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`quantize()`](Self::quantize) and
///   [`reduce_to_png()`](Self::reduce_to_png) take `&self`, so the
///   builder is **reusable** across images
///
/// # Example
///
/// ```
/// use palettize::{ColorBgra, PngReducer};
///
/// let pixels = vec![ColorBgra::from_rgb(200, 40, 40); 16];
/// let reducer = PngReducer::new().max_colors(16);
///
/// let image = reducer.quantize(&pixels, 4, 4).unwrap();
/// assert_eq!(image.palette().len(), 1);
/// assert!(image.indices().iter().all(|&i| i == 0));
/// ```
#[derive(Debug, Clone)]
pub struct PngReducer {
    options: QuantizeOptions,
}

impl PngReducer {
    /// Create a reducer with the default options.
    pub fn new() -> Self {
        Self {
            options: QuantizeOptions::default(),
        }
    }

    /// Create a reducer from pre-built options (e.g. deserialized from
    /// configuration).
    pub fn with_options(options: QuantizeOptions) -> Self {
        Self { options }
    }

    /// Set the target palette size (`1..=256`).
    ///
    /// Out-of-range values are rejected when quantization runs, not here.
    #[inline]
    pub fn max_colors(mut self, max_colors: usize) -> Self {
        self.options.max_colors = max_colors;
        self
    }

    /// Set the dither strength (0 disables dithering).
    #[inline]
    pub fn dither_level(mut self, level: u8) -> Self {
        self.options.dither_level = level;
        self
    }

    /// Select the palette-building strategy.
    #[inline]
    pub fn method(mut self, method: ReducerMethod) -> Self {
        self.options.method = method;
        self
    }

    /// The options quantization will run with.
    #[inline]
    pub fn options(&self) -> &QuantizeOptions {
        &self.options
    }

    /// Quantize raw BGRA pixels into an [`IndexedImage`].
    pub fn quantize(
        &self,
        pixels: &[ColorBgra],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, ReduceError> {
        Ok(quantize(pixels, width, height, &self.options)?)
    }

    /// Quantize raw BGRA pixels and encode the result as a palette PNG.
    pub fn reduce_to_png(
        &self,
        pixels: &[ColorBgra],
        width: usize,
        height: usize,
    ) -> Result<Vec<u8>, ReduceError> {
        let image = quantize(pixels, width, height, &self.options)?;
        Ok(encode::to_png(&image)?)
    }
}

impl Default for PngReducer {
    fn default() -> Self {
        Self::new()
    }
}
