// src/color.rs - RGB color type, hex conversion, and volume-weighted blending

use serde::{Deserialize, Serialize};

use crate::error::{LabError, LabResult};

/// An RGB color with 8-bit channels.
///
/// Colors cross the crate boundary as `#rrggbb` hex strings and are held
/// as integer triples for arithmetic. Output hex is always lowercase;
/// input hex is accepted in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse a `#rrggbb` string (leading `#` optional, case-insensitive).
    pub fn from_hex(hex: &str) -> LabResult<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LabError::InvalidColorFormat {
                input: hex.to_string(),
            });
        }
        let channel = |range: std::ops::Range<usize>| -> LabResult<u8> {
            u8::from_str_radix(&digits[range], 16).map_err(|_| LabError::InvalidColorFormat {
                input: hex.to_string(),
            })
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Blend toward `other`, with `ratio` the weight given to `other`.
    ///
    /// Each channel is `round(a*(1-ratio) + b*ratio)`. The result stays in
    /// range because the formula is a convex combination of in-range inputs.
    pub fn blend(self, other: Rgb, ratio: f64) -> Rgb {
        let ratio = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// Fold an ordered list of (color, volume) parts into one aggregate color.
///
/// Seeds from black and folds in sequence order with
/// `ratio_i = volume_i / total_volume` against the FINAL total. Each later
/// part overwrites the running blend at its own volume fraction, so this is
/// not a true volume-weighted mean; the order-dependent fold is the
/// contract and must not be "corrected". Empty input or a zero total
/// yields pure white.
pub fn mixture_color(parts: &[(Rgb, u32)]) -> Rgb {
    let total: u64 = parts.iter().map(|(_, volume)| u64::from(*volume)).sum();
    if total == 0 {
        return Rgb::WHITE;
    }
    let mut acc = Rgb::BLACK;
    for (color, volume_ml) in parts {
        let ratio = f64::from(*volume_ml) / total as f64;
        acc = acc.blend(*color, ratio);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Rgb::from_hex("#B5651D").unwrap();
        assert_eq!(color, Rgb::new(0xb5, 0x65, 0x1d));
        assert_eq!(color.to_hex(), "#b5651d");
        // lowercase input and bare digits both parse
        assert_eq!(Rgb::from_hex("b5651d").unwrap(), color);
    }

    #[test]
    fn hex_rejects_malformed_input() {
        for bad in ["#fff", "#gggggg", "", "#12345", "#1234567", "#ffff¢"] {
            assert!(
                matches!(
                    Rgb::from_hex(bad),
                    Err(LabError::InvalidColorFormat { .. })
                ),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn blend_boundaries() {
        let a = Rgb::from_hex("#f0f8ff").unwrap();
        let b = Rgb::from_hex("#f5f5dc").unwrap();
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
    }

    #[test]
    fn blend_is_deterministic() {
        let a = Rgb::new(12, 200, 77);
        let b = Rgb::new(240, 3, 160);
        assert_eq!(a.blend(b, 0.37), a.blend(b, 0.37));
    }

    #[test]
    fn blend_rounds_per_channel() {
        // 255 * 0.5 = 127.5 rounds up to 0x80
        let half_red = Rgb::BLACK.blend(Rgb::new(255, 0, 0), 0.5);
        assert_eq!(half_red.to_hex(), "#800000");
    }

    #[test]
    fn mixture_color_empty_is_white() {
        assert_eq!(mixture_color(&[]), Rgb::WHITE);
        assert_eq!(mixture_color(&[(Rgb::new(10, 20, 30), 0)]), Rgb::WHITE);
    }

    #[test]
    fn mixture_color_sequential_fold() {
        let red = Rgb::from_hex("#ff0000").unwrap();
        let blue = Rgb::from_hex("#0000ff").unwrap();
        let result = mixture_color(&[(red, 50), (blue, 50)]);
        // blend(blend(black, red, 0.5), blue, 0.5)
        assert_eq!(result, Rgb::BLACK.blend(red, 0.5).blend(blue, 0.5));
        assert_eq!(result.to_hex(), "#400080");
    }

    #[test]
    fn mixture_color_is_order_dependent() {
        // The fold weights each part against the final total, so swapping
        // the sequence changes the outcome. This is intentional.
        let red = Rgb::from_hex("#ff0000").unwrap();
        let blue = Rgb::from_hex("#0000ff").unwrap();
        let forward = mixture_color(&[(red, 30), (blue, 70)]);
        let reversed = mixture_color(&[(blue, 70), (red, 30)]);
        assert_ne!(forward, reversed);
    }
}
