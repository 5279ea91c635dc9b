//! Named color lookup table.
//!
//! A fixed mapping from the standard color names to their [`ColorBgra`]
//! values -- pure data, built as a static constant table rather than
//! anything environment-dependent. Lookup is case-insensitive.

use super::bgra::ColorBgra;

/// The standard named colors, `Transparent` first, then alphabetical.
///
/// Each entry pairs the canonical name with its color value. All entries
/// are fully opaque except `Transparent` (white with alpha 0).
pub static NAMED_COLORS: &[(&str, ColorBgra)] = &[
    ("Transparent", ColorBgra::from_rgba(255, 255, 255, 0)),
    ("AliceBlue", ColorBgra::from_rgb(240, 248, 255)),
    ("AntiqueWhite", ColorBgra::from_rgb(250, 235, 215)),
    ("Aqua", ColorBgra::from_rgb(0, 255, 255)),
    ("Aquamarine", ColorBgra::from_rgb(127, 255, 212)),
    ("Azure", ColorBgra::from_rgb(240, 255, 255)),
    ("Beige", ColorBgra::from_rgb(245, 245, 220)),
    ("Bisque", ColorBgra::from_rgb(255, 228, 196)),
    ("Black", ColorBgra::from_rgb(0, 0, 0)),
    ("BlanchedAlmond", ColorBgra::from_rgb(255, 235, 205)),
    ("Blue", ColorBgra::from_rgb(0, 0, 255)),
    ("BlueViolet", ColorBgra::from_rgb(138, 43, 226)),
    ("Brown", ColorBgra::from_rgb(165, 42, 42)),
    ("BurlyWood", ColorBgra::from_rgb(222, 184, 135)),
    ("CadetBlue", ColorBgra::from_rgb(95, 158, 160)),
    ("Chartreuse", ColorBgra::from_rgb(127, 255, 0)),
    ("Chocolate", ColorBgra::from_rgb(210, 105, 30)),
    ("Coral", ColorBgra::from_rgb(255, 127, 80)),
    ("CornflowerBlue", ColorBgra::from_rgb(100, 149, 237)),
    ("Cornsilk", ColorBgra::from_rgb(255, 248, 220)),
    ("Crimson", ColorBgra::from_rgb(220, 20, 60)),
    ("Cyan", ColorBgra::from_rgb(0, 255, 255)),
    ("DarkBlue", ColorBgra::from_rgb(0, 0, 139)),
    ("DarkCyan", ColorBgra::from_rgb(0, 139, 139)),
    ("DarkGoldenrod", ColorBgra::from_rgb(184, 134, 11)),
    ("DarkGray", ColorBgra::from_rgb(169, 169, 169)),
    ("DarkGreen", ColorBgra::from_rgb(0, 100, 0)),
    ("DarkKhaki", ColorBgra::from_rgb(189, 183, 107)),
    ("DarkMagenta", ColorBgra::from_rgb(139, 0, 139)),
    ("DarkOliveGreen", ColorBgra::from_rgb(85, 107, 47)),
    ("DarkOrange", ColorBgra::from_rgb(255, 140, 0)),
    ("DarkOrchid", ColorBgra::from_rgb(153, 50, 204)),
    ("DarkRed", ColorBgra::from_rgb(139, 0, 0)),
    ("DarkSalmon", ColorBgra::from_rgb(233, 150, 122)),
    ("DarkSeaGreen", ColorBgra::from_rgb(143, 188, 139)),
    ("DarkSlateBlue", ColorBgra::from_rgb(72, 61, 139)),
    ("DarkSlateGray", ColorBgra::from_rgb(47, 79, 79)),
    ("DarkTurquoise", ColorBgra::from_rgb(0, 206, 209)),
    ("DarkViolet", ColorBgra::from_rgb(148, 0, 211)),
    ("DeepPink", ColorBgra::from_rgb(255, 20, 147)),
    ("DeepSkyBlue", ColorBgra::from_rgb(0, 191, 255)),
    ("DimGray", ColorBgra::from_rgb(105, 105, 105)),
    ("DodgerBlue", ColorBgra::from_rgb(30, 144, 255)),
    ("Firebrick", ColorBgra::from_rgb(178, 34, 34)),
    ("FloralWhite", ColorBgra::from_rgb(255, 250, 240)),
    ("ForestGreen", ColorBgra::from_rgb(34, 139, 34)),
    ("Fuchsia", ColorBgra::from_rgb(255, 0, 255)),
    ("Gainsboro", ColorBgra::from_rgb(220, 220, 220)),
    ("GhostWhite", ColorBgra::from_rgb(248, 248, 255)),
    ("Gold", ColorBgra::from_rgb(255, 215, 0)),
    ("Goldenrod", ColorBgra::from_rgb(218, 165, 32)),
    ("Gray", ColorBgra::from_rgb(128, 128, 128)),
    ("Green", ColorBgra::from_rgb(0, 128, 0)),
    ("GreenYellow", ColorBgra::from_rgb(173, 255, 47)),
    ("Honeydew", ColorBgra::from_rgb(240, 255, 240)),
    ("HotPink", ColorBgra::from_rgb(255, 105, 180)),
    ("IndianRed", ColorBgra::from_rgb(205, 92, 92)),
    ("Indigo", ColorBgra::from_rgb(75, 0, 130)),
    ("Ivory", ColorBgra::from_rgb(255, 255, 240)),
    ("Khaki", ColorBgra::from_rgb(240, 230, 140)),
    ("Lavender", ColorBgra::from_rgb(230, 230, 250)),
    ("LavenderBlush", ColorBgra::from_rgb(255, 240, 245)),
    ("LawnGreen", ColorBgra::from_rgb(124, 252, 0)),
    ("LemonChiffon", ColorBgra::from_rgb(255, 250, 205)),
    ("LightBlue", ColorBgra::from_rgb(173, 216, 230)),
    ("LightCoral", ColorBgra::from_rgb(240, 128, 128)),
    ("LightCyan", ColorBgra::from_rgb(224, 255, 255)),
    ("LightGoldenrodYellow", ColorBgra::from_rgb(250, 250, 210)),
    ("LightGreen", ColorBgra::from_rgb(144, 238, 144)),
    ("LightGray", ColorBgra::from_rgb(211, 211, 211)),
    ("LightPink", ColorBgra::from_rgb(255, 182, 193)),
    ("LightSalmon", ColorBgra::from_rgb(255, 160, 122)),
    ("LightSeaGreen", ColorBgra::from_rgb(32, 178, 170)),
    ("LightSkyBlue", ColorBgra::from_rgb(135, 206, 250)),
    ("LightSlateGray", ColorBgra::from_rgb(119, 136, 153)),
    ("LightSteelBlue", ColorBgra::from_rgb(176, 196, 222)),
    ("LightYellow", ColorBgra::from_rgb(255, 255, 224)),
    ("Lime", ColorBgra::from_rgb(0, 255, 0)),
    ("LimeGreen", ColorBgra::from_rgb(50, 205, 50)),
    ("Linen", ColorBgra::from_rgb(250, 240, 230)),
    ("Magenta", ColorBgra::from_rgb(255, 0, 255)),
    ("Maroon", ColorBgra::from_rgb(128, 0, 0)),
    ("MediumAquamarine", ColorBgra::from_rgb(102, 205, 170)),
    ("MediumBlue", ColorBgra::from_rgb(0, 0, 205)),
    ("MediumOrchid", ColorBgra::from_rgb(186, 85, 211)),
    ("MediumPurple", ColorBgra::from_rgb(147, 112, 219)),
    ("MediumSeaGreen", ColorBgra::from_rgb(60, 179, 113)),
    ("MediumSlateBlue", ColorBgra::from_rgb(123, 104, 238)),
    ("MediumSpringGreen", ColorBgra::from_rgb(0, 250, 154)),
    ("MediumTurquoise", ColorBgra::from_rgb(72, 209, 204)),
    ("MediumVioletRed", ColorBgra::from_rgb(199, 21, 133)),
    ("MidnightBlue", ColorBgra::from_rgb(25, 25, 112)),
    ("MintCream", ColorBgra::from_rgb(245, 255, 250)),
    ("MistyRose", ColorBgra::from_rgb(255, 228, 225)),
    ("Moccasin", ColorBgra::from_rgb(255, 228, 181)),
    ("NavajoWhite", ColorBgra::from_rgb(255, 222, 173)),
    ("Navy", ColorBgra::from_rgb(0, 0, 128)),
    ("OldLace", ColorBgra::from_rgb(253, 245, 230)),
    ("Olive", ColorBgra::from_rgb(128, 128, 0)),
    ("OliveDrab", ColorBgra::from_rgb(107, 142, 35)),
    ("Orange", ColorBgra::from_rgb(255, 165, 0)),
    ("OrangeRed", ColorBgra::from_rgb(255, 69, 0)),
    ("Orchid", ColorBgra::from_rgb(218, 112, 214)),
    ("PaleGoldenrod", ColorBgra::from_rgb(238, 232, 170)),
    ("PaleGreen", ColorBgra::from_rgb(152, 251, 152)),
    ("PaleTurquoise", ColorBgra::from_rgb(175, 238, 238)),
    ("PaleVioletRed", ColorBgra::from_rgb(219, 112, 147)),
    ("PapayaWhip", ColorBgra::from_rgb(255, 239, 213)),
    ("PeachPuff", ColorBgra::from_rgb(255, 218, 185)),
    ("Peru", ColorBgra::from_rgb(205, 133, 63)),
    ("Pink", ColorBgra::from_rgb(255, 192, 203)),
    ("Plum", ColorBgra::from_rgb(221, 160, 221)),
    ("PowderBlue", ColorBgra::from_rgb(176, 224, 230)),
    ("Purple", ColorBgra::from_rgb(128, 0, 128)),
    ("Red", ColorBgra::from_rgb(255, 0, 0)),
    ("RosyBrown", ColorBgra::from_rgb(188, 143, 143)),
    ("RoyalBlue", ColorBgra::from_rgb(65, 105, 225)),
    ("SaddleBrown", ColorBgra::from_rgb(139, 69, 19)),
    ("Salmon", ColorBgra::from_rgb(250, 128, 114)),
    ("SandyBrown", ColorBgra::from_rgb(244, 164, 96)),
    ("SeaGreen", ColorBgra::from_rgb(46, 139, 87)),
    ("SeaShell", ColorBgra::from_rgb(255, 245, 238)),
    ("Sienna", ColorBgra::from_rgb(160, 82, 45)),
    ("Silver", ColorBgra::from_rgb(192, 192, 192)),
    ("SkyBlue", ColorBgra::from_rgb(135, 206, 235)),
    ("SlateBlue", ColorBgra::from_rgb(106, 90, 205)),
    ("SlateGray", ColorBgra::from_rgb(112, 128, 144)),
    ("Snow", ColorBgra::from_rgb(255, 250, 250)),
    ("SpringGreen", ColorBgra::from_rgb(0, 255, 127)),
    ("SteelBlue", ColorBgra::from_rgb(70, 130, 180)),
    ("Tan", ColorBgra::from_rgb(210, 180, 140)),
    ("Teal", ColorBgra::from_rgb(0, 128, 128)),
    ("Thistle", ColorBgra::from_rgb(216, 191, 216)),
    ("Tomato", ColorBgra::from_rgb(255, 99, 71)),
    ("Turquoise", ColorBgra::from_rgb(64, 224, 208)),
    ("Violet", ColorBgra::from_rgb(238, 130, 238)),
    ("Wheat", ColorBgra::from_rgb(245, 222, 179)),
    ("White", ColorBgra::from_rgb(255, 255, 255)),
    ("WhiteSmoke", ColorBgra::from_rgb(245, 245, 245)),
    ("Yellow", ColorBgra::from_rgb(255, 255, 0)),
    ("YellowGreen", ColorBgra::from_rgb(154, 205, 50)),
];

/// Look up a named color, ignoring ASCII case.
///
/// # Example
///
/// ```
/// use palettize::{color::from_name, ColorBgra};
///
/// assert_eq!(from_name("cornflowerblue"), Some(ColorBgra::from_rgb(100, 149, 237)));
/// assert_eq!(from_name("not a color"), None);
/// ```
pub fn from_name(name: &str) -> Option<ColorBgra> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}
