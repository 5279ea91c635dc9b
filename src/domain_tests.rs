//! Domain-critical regression tests for palettize.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;

    use crate::color::ColorBgra;
    use crate::palette::PaletteTable;
    use crate::quant::{quantize, QuantizeOptions, ReducerMethod};

    /// Deterministic pseudo-random pixel soup, no RNG dependency.
    fn noisy_pixels(count: usize) -> Vec<ColorBgra> {
        (0..count as u32)
            .map(|i| {
                let h = i.wrapping_mul(2_654_435_761);
                ColorBgra::from_rgb(h as u8, (h >> 8) as u8, (h >> 16) as u8)
            })
            .collect()
    }

    fn options(max_colors: usize, dither_level: u8) -> QuantizeOptions {
        QuantizeOptions {
            max_colors,
            dither_level,
            ..QuantizeOptions::default()
        }
    }

    // ========================================================================
    // Every output index addresses the palette
    // ========================================================================

    /// If this breaks, it means: classification produced an index at or past
    /// the palette length, which would panic or read garbage in any consumer
    /// doing palette lookup.
    #[test]
    fn test_indices_always_address_palette() {
        let pixels = noisy_pixels(32 * 32);
        for max_colors in [1usize, 2, 3, 16, 255, 256] {
            for dither_level in [0u8, 4, 8] {
                let image =
                    quantize(&pixels, 32, 32, &options(max_colors, dither_level)).unwrap();
                let len = image.palette().len();
                assert!(
                    (1..=max_colors).contains(&len),
                    "palette length {len} violates 1..={max_colors}"
                );
                assert!(
                    image.indices().iter().all(|&i| (i as usize) < len),
                    "out-of-range index for max_colors={max_colors}, dither={dither_level}"
                );
            }
        }
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, it means: quantization stopped being a pure function
    /// of its inputs -- some iteration order or tie-break became
    /// nondeterministic -- and identical requests produce different PNGs.
    #[test]
    fn test_same_input_same_output() {
        let pixels = noisy_pixels(24 * 17);
        let opts = options(32, 4);

        let first = quantize(&pixels, 24, 17, &opts).unwrap();
        let second = quantize(&pixels, 24, 17, &opts).unwrap();

        assert_eq!(first.indices(), second.indices());
        assert_eq!(first.palette(), second.palette());
    }

    // ========================================================================
    // Degenerate inputs must not crash or drift
    // ========================================================================

    /// If this breaks, it means: the solid-color fast path regressed. A
    /// uniform image must survive quantization exactly: one palette entry
    /// equal to the color, every index zero, at any dither strength.
    #[test]
    fn test_solid_color_image_is_exact() {
        let color = ColorBgra::from_rgb(137, 90, 42);
        for (width, height) in [(1usize, 1usize), (3, 5), (16, 16)] {
            for dither_level in [0u8, 4] {
                let pixels = vec![color; width * height];
                let image =
                    quantize(&pixels, width, height, &options(16, dither_level)).unwrap();

                assert_eq!(image.palette().len(), 1);
                assert_eq!(image.palette()[0], color);
                assert!(image.indices().iter().all(|&i| i == 0));
            }
        }
    }

    /// If this breaks, it means: dithering against a single-entry palette
    /// no longer degenerates to zero effective error and indices drift away
    /// from the only valid value.
    #[test]
    fn test_single_entry_palette_absorbs_everything() {
        let pixels = noisy_pixels(8 * 8);
        let image = quantize(&pixels, 8, 8, &options(1, 4)).unwrap();
        assert_eq!(image.palette().len(), 1);
        assert!(image.indices().iter().all(|&i| i == 0));
    }

    /// If this breaks, it means: a 1x1 image hits an edge case in the
    /// diffusion buffers (every write is an edge write).
    #[test]
    fn test_one_pixel_image() {
        let pixels = vec![ColorBgra::from_rgb(1, 2, 3)];
        let image = quantize(&pixels, 1, 1, &options(255, 4)).unwrap();
        assert_eq!(image.indices(), &[0]);
        assert_eq!(image.palette()[0], ColorBgra::from_rgb(1, 2, 3));
    }

    // ========================================================================
    // Small palettes keep well-separated colors exactly
    // ========================================================================

    /// If this breaks, it means: either palette extraction stopped
    /// averaging leaves exactly, or classification no longer routes
    /// observed colors back to their own leaf. A two-color image with a
    /// two-entry budget must reproduce both colors bit-exactly.
    #[test]
    fn test_two_pixel_image_recovers_both_colors() {
        let red = ColorBgra::from_rgb(255, 0, 0);
        let blue = ColorBgra::from_rgb(0, 0, 255);
        let image = quantize(&[red, blue], 2, 1, &options(2, 0)).unwrap();

        let palette = image.palette();
        assert_eq!(palette.len(), 2);
        let red_index = palette
            .colors()
            .iter()
            .position(|&c| c == red)
            .expect("red must survive exactly") as u8;
        let blue_index = palette
            .colors()
            .iter()
            .position(|&c| c == blue)
            .expect("blue must survive exactly") as u8;
        assert_eq!(image.indices(), &[red_index, blue_index]);
    }

    // ========================================================================
    // Reduction policy: deepest level merges first
    // ========================================================================

    /// If this breaks, it means: the octree started merging shallow nodes
    /// while deeper reducible nodes existed, destroying well-separated
    /// colors before fine-grained ones. Nine leaves against a budget of
    /// eight must fold the deep eight-leaf cluster into its parent and
    /// leave the isolated color untouched.
    #[test]
    fn test_reduction_folds_deep_cluster_not_outlier() {
        let white = ColorBgra::from_rgb(255, 255, 255);
        let mut pixels = vec![white];
        for r in [0u8, 2] {
            for g in [0u8, 2] {
                for b in [0u8, 2] {
                    pixels.push(ColorBgra::from_rgb(r, g, b));
                }
            }
        }

        let image = quantize(&pixels, 9, 1, &options(8, 0)).unwrap();
        let palette = image.palette();

        assert!(palette.colors().contains(&white), "outlier must survive");
        assert!(
            palette.colors().contains(&ColorBgra::from_rgb(1, 1, 1)),
            "cluster must collapse to its population average"
        );

        // Every cluster pixel maps to the merged entry, the outlier to its own.
        let merged_index = image.indices()[1];
        assert!(image.indices()[1..].iter().all(|&i| i == merged_index));
        assert_ne!(image.indices()[0], merged_index);
    }

    // ========================================================================
    // Serpentine scan
    // ========================================================================

    /// If this breaks, it means: the scan direction no longer alternates
    /// (or the error rows are mis-mirrored). Mid-gray between black and
    /// white at the reference strength produces an exact checkerboard, the
    /// second row mirroring the first; a one-way scan produces aligned
    /// columns instead.
    #[test]
    fn test_serpentine_checkerboard() {
        let opts = QuantizeOptions {
            method: ReducerMethod::Fixed(PaletteTable::new(vec![
                ColorBgra::from_rgb(0, 0, 0),
                ColorBgra::from_rgb(255, 255, 255),
            ])),
            dither_level: 4,
            ..QuantizeOptions::default()
        };
        let pixels = vec![ColorBgra::from_rgb(128, 128, 128); 8];
        let image = quantize(&pixels, 4, 2, &opts).unwrap();

        assert_eq!(image.indices(), &[1, 0, 1, 0, 0, 1, 0, 1]);
    }

    /// If this breaks, it means: dither strength stopped scaling the
    /// applied error. With strength 0 every mid-gray pixel must match the
    /// nearest entry independently -- no alternation at all.
    #[test]
    fn test_zero_strength_disables_diffusion() {
        let opts = QuantizeOptions {
            method: ReducerMethod::Fixed(PaletteTable::new(vec![
                ColorBgra::from_rgb(0, 0, 0),
                ColorBgra::from_rgb(255, 255, 255),
            ])),
            dither_level: 0,
            ..QuantizeOptions::default()
        };
        let pixels = vec![ColorBgra::from_rgb(128, 128, 128); 8];
        let image = quantize(&pixels, 4, 2, &opts).unwrap();
        assert_eq!(image.indices(), &[1; 8]);
    }

    // ========================================================================
    // Dithering preserves average brightness
    // ========================================================================

    /// If this breaks, it means: diffused error is being lost or doubled
    /// somewhere in the buffer handoff between rows. Over a large uniform
    /// field the on/off ratio must track the gray level.
    #[test]
    fn test_dither_ratio_tracks_gray_level() {
        let opts = QuantizeOptions {
            method: ReducerMethod::Fixed(PaletteTable::new(vec![
                ColorBgra::from_rgb(0, 0, 0),
                ColorBgra::from_rgb(255, 255, 255),
            ])),
            dither_level: 8,
            ..QuantizeOptions::default()
        };

        let size = 32;
        for (gray, expected_ratio) in [(64u8, 0.25f64), (128, 0.5), (192, 0.75)] {
            let pixels = vec![ColorBgra::from_rgb(gray, gray, gray); size * size];
            let image = quantize(&pixels, size, size, &opts).unwrap();
            let white = image.indices().iter().filter(|&&i| i == 1).count();
            let ratio = white as f64 / (size * size) as f64;
            assert!(
                (ratio - expected_ratio).abs() < 0.08,
                "gray {gray} produced white ratio {ratio:.3}, expected ~{expected_ratio}"
            );
        }
    }
}
