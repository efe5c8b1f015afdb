use std::str::FromStr;

use image::Rgba;

use crate::core::error::PaletteError;

/**
 * A color in normalized RGB space: each channel on [0,1], produced by
 * dividing an 8-bit channel value by 255.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Relative luminance, the perceptual weighting of the three channels.
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Scale back onto the 8-bit grid as an opaque pixel. Exact inverse of
    /// the normalization performed by `hex_to_rgb`.
    pub fn to_rgba(&self) -> Rgba<u8> {
        Rgba([
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            u8::MAX,
        ])
    }
}

/**
 * Parses a hex color code ("RRGGBB", case-insensitive, with at most one
 * leading `#`) into normalized RGB.
 */
pub fn hex_to_rgb(input: &str) -> Result<Rgb, PaletteError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidColor(input.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| -> Result<f64, PaletteError> {
        let byte = u8::from_str_radix(&digits[range], 16)
            .map_err(|_| PaletteError::InvalidColor(input.to_owned()))?;
        Ok(f64::from(byte) / 255.0)
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Label foreground: black on light bars, white on dark ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn rgb(&self) -> Rgb {
        match self {
            TextColor::Black => Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.0,
            },
            TextColor::White => Rgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            },
        }
    }
}

/// Luminance cutoff between black and white label text. Backgrounds at
/// exactly the cutoff get white text.
const TEXT_COLOR_THRESHOLD: f64 = 0.5;

/**
 * A syntactically valid hex color operand. Keeps the raw string exactly as
 * the user typed it (the bar label preserves the optional `#`) alongside
 * the parsed channels, so code downstream of parsing can never observe an
 * unvalidated color.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct HexColor {
    raw: String,
    rgb: Rgb,
}

impl HexColor {
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Bar label: the original operand, uppercased.
    pub fn label(&self) -> String {
        self.raw.to_uppercase()
    }

    /// Picks the more legible label color for a bar of this background.
    pub fn best_text_color(&self) -> TextColor {
        if self.rgb.luminance() > TEXT_COLOR_THRESHOLD {
            TextColor::Black
        } else {
            TextColor::White
        }
    }
}

impl FromStr for HexColor {
    type Err = PaletteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rgb = hex_to_rgb(input)?;
        Ok(HexColor {
            raw: input.to_owned(),
            rgb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use more_asserts::{assert_ge, assert_le};

    #[test]
    fn test_hex_to_rgb_parses_with_and_without_hash() {
        let tol = 1e-12;
        let with_hash = hex_to_rgb("#FF8000").unwrap();
        assert_relative_eq!(with_hash.r, 1.0, epsilon = tol);
        assert_relative_eq!(with_hash.g, 128.0 / 255.0, epsilon = tol);
        assert_relative_eq!(with_hash.b, 0.0, epsilon = tol);

        let bare = hex_to_rgb("ff8000").unwrap();
        assert_eq!(with_hash, bare);
    }

    #[test]
    fn test_hex_to_rgb_round_trips_onto_byte_grid() {
        for byte in [0u8, 1, 17, 88, 127, 128, 200, 254, 255] {
            let (r, g, b) = (byte, byte.wrapping_add(3), byte.wrapping_mul(7));
            let input = format!("{:02x}{:02x}{:02x}", r, g, b);
            let rgb = hex_to_rgb(&input).unwrap();
            assert_eq!(rgb.to_rgba(), Rgba([r, g, b, 255]));
        }
    }

    #[test]
    fn test_hex_to_rgb_channels_lie_in_unit_interval() {
        for input in ["#000000", "#FFFFFF", "#123ABC", "c0ffee"] {
            let rgb = hex_to_rgb(input).unwrap();
            for channel in [rgb.r, rgb.g, rgb.b] {
                assert_ge!(channel, 0.0);
                assert_le!(channel, 1.0);
            }
        }
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed_inputs() {
        for input in [
            "",
            "#",
            "12345",
            "1234567",
            "GGGGGG",
            "FF#000",
            "##FF0000",
            "FF0000#",
            "#FF000０", // fullwidth digit
        ] {
            assert!(
                hex_to_rgb(input).is_err(),
                "expected rejection of {:?}",
                input
            );
        }
    }

    fn text_color_for(input: &str) -> TextColor {
        input.parse::<HexColor>().unwrap().best_text_color()
    }

    #[test]
    fn test_best_text_color_decisions() {
        assert_eq!(text_color_for("#000000"), TextColor::White);
        assert_eq!(text_color_for("#FFFFFF"), TextColor::Black);
        // Mid gray lands just above the cutoff: 128/255 = 0.502
        assert_eq!(text_color_for("#808080"), TextColor::Black);
        assert_eq!(text_color_for("#7F7F7F"), TextColor::White);
    }

    #[test]
    fn test_best_text_color_ignores_case_and_hash() {
        assert_eq!(text_color_for("ffffff"), text_color_for("#FFFFFF"));
        assert_eq!(text_color_for("0000fF"), text_color_for("#0000FF"));
    }

    #[test]
    fn test_label_uppercases_and_preserves_hash() {
        let color: HexColor = "#ff00aa".parse().unwrap();
        assert_eq!(color.label(), "#FF00AA");

        let bare: HexColor = "ff00aa".parse().unwrap();
        assert_eq!(bare.label(), "FF00AA");
    }

    #[test]
    fn test_luminance_weights_sum_to_one() {
        let white = hex_to_rgb("#FFFFFF").unwrap();
        assert_relative_eq!(white.luminance(), 1.0, epsilon = 1e-12);
    }
}
