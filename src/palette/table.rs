//! Palette table with nearest-color matching.

use std::ops::Index;

use serde::Deserialize;

use crate::color::ColorBgra;

/// An ordered list of palette colors with linear nearest-match lookup.
///
/// Entry indices are stable for the lifetime of one quantization run:
/// 0-based, assigned once when the palette is built, never reassigned.
/// Matching compares the three color channels only -- alpha never
/// participates in distance.
///
/// This is the general-purpose matcher. The octree reducer carries its own
/// O(8) classifier and uses this table only as a fallback for colors whose
/// path was never observed; callers quantizing against a fixed palette use
/// it directly.
///
/// # Example
///
/// ```
/// use palettize::{ColorBgra, PaletteTable};
///
/// let palette = PaletteTable::new(vec![
///     ColorBgra::from_rgb(0, 0, 0),
///     ColorBgra::from_rgb(255, 255, 255),
/// ]);
/// assert_eq!(palette.find_closest(ColorBgra::from_rgb(30, 30, 30)), 0);
/// assert_eq!(palette.find_closest(ColorBgra::from_rgb(200, 200, 200)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteTable {
    colors: Vec<ColorBgra>,
}

/// Squared Euclidean distance over the R, G, B channels.
#[inline]
fn distance_squared(a: ColorBgra, b: ColorBgra) -> i32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    dr * dr + dg * dg + db * db
}

impl PaletteTable {
    /// Create a palette table from an ordered list of colors.
    pub fn new(colors: Vec<ColorBgra>) -> Self {
        Self { colors }
    }

    /// Number of palette entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<ColorBgra> {
        self.colors.get(index).copied()
    }

    /// All palette entries in index order.
    #[inline]
    pub fn colors(&self) -> &[ColorBgra] {
        &self.colors
    }

    /// Index of the entry closest to `pixel` by squared RGB distance.
    ///
    /// Ties resolve to the lowest index: a later entry at the same distance
    /// never replaces the current best.
    ///
    /// # Panics
    ///
    /// Panics if the palette is empty (callers validate non-emptiness before
    /// any per-pixel work).
    pub fn find_closest(&self, pixel: ColorBgra) -> usize {
        assert!(!self.colors.is_empty(), "palette must not be empty");

        let mut best = 0;
        let mut best_distance = i32::MAX;
        for (index, &candidate) in self.colors.iter().enumerate() {
            let distance = distance_squared(candidate, pixel);
            if distance < best_distance {
                best_distance = distance;
                best = index;
            }
        }
        best
    }
}

impl Index<usize> for PaletteTable {
    type Output = ColorBgra;

    #[inline]
    fn index(&self, index: usize) -> &ColorBgra {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a PaletteTable {
    type Item = &'a ColorBgra;
    type IntoIter = std::slice::Iter<'a, ColorBgra>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
