//! Indexed image result type.

use crate::palette::PaletteTable;

/// The canonical output of quantization: one palette index per pixel plus
/// the palette those indices point into.
///
/// Indices are stored row-major, one `u8` per pixel, every value less
/// than the palette length. Together with [`palette`](Self::palette) this
/// is the full contract surface handed to an image encoder; the RGB and
/// BGRA expansions are conveniences computed on demand.
///
/// # Example
///
/// ```
/// use palettize::{ColorBgra, IndexedImage, PaletteTable};
///
/// let palette = PaletteTable::new(vec![
///     ColorBgra::from_rgb(0, 0, 0),
///     ColorBgra::from_rgb(255, 255, 255),
/// ]);
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
///
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
    /// The palette the indices refer to.
    palette: PaletteTable,
}

impl IndexedImage {
    /// Create an indexed image from its parts.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: PaletteTable) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// The palette indices, one per pixel in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &PaletteTable {
        &self.palette
    }

    /// Consume the image, yielding the index buffer and palette.
    pub fn into_parts(self) -> (Vec<u8>, PaletteTable) {
        (self.indices, self.palette)
    }

    /// Expand to flat `[R, G, B, ...]` bytes via palette lookup.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &index in &self.indices {
            let color = self.palette[index as usize];
            rgb.extend_from_slice(&[color.r, color.g, color.b]);
        }
        rgb
    }

    /// Expand to flat `[B, G, R, A, ...]` bytes via palette lookup.
    ///
    /// The returned buffer has length `width * height * 4` and matches the
    /// 32bpp BGRA surface layout of [`ColorBgra`](crate::ColorBgra).
    pub fn to_bgra(&self) -> Vec<u8> {
        let mut bgra = Vec::with_capacity(self.indices.len() * 4);
        for &index in &self.indices {
            let color = self.palette[index as usize];
            bgra.extend_from_slice(&color.channels());
        }
        bgra
    }
}
