//! Indexed PNG encoding adapter.
//!
//! Quantization's contract surface is an index buffer plus a palette; this
//! module hands both to the `png` encoder and recompresses the result with
//! `oxipng`. It is an adapter over external encoders, not a bitstream
//! implementation: bit depth is chosen from the palette length, indices
//! are packed into PNG row data, and the palette becomes the PLTE chunk.

use std::io::Cursor;

use thiserror::Error;
use tracing::debug;

use crate::output::IndexedImage;

/// Error type for PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The underlying PNG encoder failed.
    #[error("PNG encode error: {0}")]
    Png(String),

    /// Width or height does not fit the PNG header.
    #[error("image dimensions {width}x{height} exceed the PNG limit")]
    DimensionsTooLarge {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
}

/// Encode an indexed image as a palette PNG.
///
/// Bit depth follows the palette length (1, 2, 4 or 8 bits per pixel);
/// sub-byte depths pack indices MSB-first per row. The PNG is first
/// written with fast settings, then recompressed with oxipng (zopfli,
/// safe chunk stripping); if recompression fails the fast encoding is
/// returned as-is.
///
/// # Example
///
/// ```
/// use palettize::{encode::to_png, ColorBgra, IndexedImage, PaletteTable};
///
/// let palette = PaletteTable::new(vec![
///     ColorBgra::from_rgb(0, 0, 0),
///     ColorBgra::from_rgb(255, 255, 255),
/// ]);
/// let image = IndexedImage::new(vec![0, 1, 1, 0], 2, 2, palette);
/// let bytes = to_png(&image).unwrap();
/// assert_eq!(&bytes[1..4], b"PNG");
/// ```
pub fn to_png(image: &IndexedImage) -> Result<Vec<u8>, EncodeError> {
    let too_large = || EncodeError::DimensionsTooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let palette = image.palette();
    let (bit_depth, bits) = match palette.len() {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };

    let plte: Vec<u8> = palette
        .colors()
        .iter()
        .flat_map(|c| [c.r, c.g, c.b])
        .collect();
    let packed = if bits == 8 {
        image.indices().to_vec()
    } else {
        pack_nbits(image.indices(), width as usize, bits)
    };

    // Fast settings here; oxipng re-compresses optimally below.
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| EncodeError::Png(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| EncodeError::Png(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    debug!(
        width,
        height,
        palette_len = palette.len(),
        bytes = optimized.len(),
        "encoded indexed PNG"
    );
    Ok(optimized)
}

/// Pack palette indices into N-bit PNG row data (1, 2 or 4 bits per
/// pixel), MSB-first, each row padded to a whole byte.
fn pack_nbits(indices: &[u8], width: usize, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = width.div_ceil(pixels_per_byte);
    let height = indices.len() / width;
    let mask = (1u8 << bits) - 1;

    let mut packed = Vec::with_capacity(bytes_per_row * height);
    for row in indices.chunks(width) {
        let mut byte = 0u8;
        for (i, &index) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (index & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }
    packed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorBgra;
    use crate::palette::PaletteTable;

    fn palette_of(n: usize) -> PaletteTable {
        PaletteTable::new(
            (0..n)
                .map(|i| ColorBgra::from_rgb(i as u8, (i * 3) as u8, (i * 7) as u8))
                .collect(),
        )
    }

    #[test]
    fn test_pack_one_bit() {
        // A full byte of alternating bits plus a padded second row
        let indices = [1, 0, 1, 0, 1, 0, 1, 0];
        assert_eq!(pack_nbits(&indices, 8, 1), vec![0b1010_1010]);

        let indices = [1, 1, 1, 0, 0, 1];
        assert_eq!(pack_nbits(&indices, 3, 1), vec![0b1110_0000, 0b0010_0000]);
    }

    #[test]
    fn test_pack_two_and_four_bits() {
        let indices = [3, 0, 2, 1];
        assert_eq!(pack_nbits(&indices, 4, 2), vec![0b1100_1001]);

        let indices = [0xF, 0x1, 0xA];
        assert_eq!(pack_nbits(&indices, 3, 4), vec![0xF1, 0xA0]);
    }

    #[test]
    fn test_pack_row_padding_is_per_row() {
        // 2 pixels per row at 1 bit: each row occupies its own byte
        let indices = [1, 0, 0, 1];
        assert_eq!(pack_nbits(&indices, 2, 1), vec![0b1000_0000, 0b0100_0000]);
    }

    #[test]
    fn test_to_png_round_trips_through_decoder() {
        for palette_len in [2usize, 4, 16, 32] {
            let palette = palette_of(palette_len);
            let width = 5;
            let height = 3;
            let indices: Vec<u8> = (0..width * height)
                .map(|i| (i % palette_len) as u8)
                .collect();
            let image = IndexedImage::new(indices, width, height, palette);

            let bytes = to_png(&image).expect("encode should succeed");
            assert_eq!(&bytes[1..4], b"PNG");

            let decoder = png::Decoder::new(Cursor::new(bytes));
            let mut reader = decoder.read_info().expect("valid PNG");
            let info = reader.info();
            assert_eq!(info.width, width as u32);
            assert_eq!(info.height, height as u32);

            let mut frame = vec![0u8; reader.output_buffer_size()];
            reader.next_frame(&mut frame).expect("decodable image data");
        }
    }
}
