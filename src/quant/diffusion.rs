//! Serpentine Floyd-Steinberg error diffusion.
//!
//! The second quantization pass walks rows in alternating direction (even
//! rows left to right, odd rows right to left), which halves the average
//! distance a residual travels and avoids a directional bias artifact.
//! For each pixel the accumulated error is subtracted from the source,
//! the adjusted color is classified against the palette, and the residual
//! between the chosen palette color and the adjusted color is split among
//! the not-yet-visited neighbors:
//!
//! ```text
//!            X    7/16
//!    3/16  5/16   rest
//! ```
//!
//! All arithmetic is exact `i32` with truncating division; the last share
//! is computed as the remainder so the four parts always sum to the
//! residual and no error energy is lost or gained.

use crate::color::{clamp_to_byte, ColorBgra};
use crate::palette::PaletteTable;

use super::ColorReducer;

/// Per-channel error accumulators for the current and following row.
///
/// Both rows are `width + 1` long so edge writes never need a bounds
/// branch. Rows are indexed by scan position, not by column: next-row
/// targets use the mirrored index `width - pos`, which lines the stored
/// error up with the opposite-direction scan of the following row. After
/// a row completes, the next row's buffer becomes the current one and a
/// zeroed buffer takes its place.
#[derive(Debug)]
struct ErrorRows {
    this_row: Vec<[i32; 3]>,
    next_row: Vec<[i32; 3]>,
}

impl ErrorRows {
    fn new(width: usize) -> Self {
        Self {
            this_row: vec![[0; 3]; width + 1],
            next_row: vec![[0; 3]; width + 1],
        }
    }

    fn advance_row(&mut self) {
        std::mem::swap(&mut self.this_row, &mut self.next_row);
        self.next_row.fill([0; 3]);
    }
}

/// Split a residual into the 7/16, 5/16 and 3/16 shares plus the
/// remainder.
///
/// The remainder form concentrates integer rounding loss in the last
/// share: the four parts sum to `err` exactly for every input.
#[inline]
fn split_error(err: i32) -> [i32; 4] {
    let a = err * 7 / 16;
    let b = err * 5 / 16;
    let c = err * 3 / 16;
    [a, b, c, err - a - b - c]
}

/// Remap every pixel to a palette index, diffusing quantization error.
///
/// `reducer` must already have its palette extracted; `palette` is that
/// extracted table. `dither_level` scales the error actually applied to
/// each pixel as `level / 8` (0 disables dithering entirely, the
/// reference strength is 4). Returns one index per pixel in row-major
/// order.
pub(crate) fn remap(
    pixels: &[ColorBgra],
    width: usize,
    height: usize,
    reducer: &dyn ColorReducer,
    palette: &PaletteTable,
    dither_level: u8,
) -> Vec<u8> {
    let weight = dither_level as i32;
    let mut output = vec![0u8; width * height];
    let mut errors = ErrorRows::new(width);

    for row in 0..height {
        let reverse = row % 2 == 1;

        for pos in 0..width {
            let x = if reverse { width - 1 - pos } else { pos };
            let index = row * width + x;
            let src = pixels[index];

            // Subtract the accumulated error, scaled by the dither
            // strength, saturating each channel.
            let e = errors.this_row[pos];
            let target = ColorBgra {
                b: clamp_to_byte(src.b as i32 - e[0] * weight / 8),
                g: clamp_to_byte(src.g as i32 - e[1] * weight / 8),
                r: clamp_to_byte(src.r as i32 - e[2] * weight / 8),
                a: src.a,
            };

            let chosen = reducer.classify(target);
            output[index] = chosen;

            // The residual is measured against the palette color actually
            // chosen, not the classification input.
            let actual = palette[chosen as usize];
            let residual = [
                actual.b as i32 - target.b as i32,
                actual.g as i32 - target.g as i32,
                actual.r as i32 - target.r as i32,
            ];

            for (channel, err) in residual.into_iter().enumerate() {
                let [a, b, c, d] = split_error(err);
                // Ahead in scan direction, same row.
                errors.this_row[pos + 1][channel] += a;
                // Next row: mirrored indices, directly below first.
                errors.next_row[width - pos][channel] += b;
                if pos != 0 {
                    // One behind the scan direction; skipped at the first
                    // column, where it would fall outside the row.
                    errors.next_row[width - pos + 1][channel] += c;
                }
                errors.next_row[width - pos - 1][channel] += d;
            }
        }

        errors.advance_row();
    }

    output
}
