//! =============================================================================
//! COLOR.RS - Type couleur et formatage
//! COLOR.RS - Color type and formatting
//! =============================================================================
//!
//! `Rgb` est le seul type couleur échangé entre l'eyedropper, le catalogue,
//! les snippets et l'export PNG.
//! `Rgb` is the only color type exchanged between the eyedropper, the
//! catalog, the snippets and the PNG export.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use bigcolor::BigColor;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::NEUTRAL_RGB;
use crate::error::ParseColorError;

/// "R, G, B" avec espaces optionnels / "R, G, B" with optional whitespace
static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*$").expect("valid rgb pattern")
});

// =============================================================================
// RGB
// =============================================================================

/// Couleur RGB 8 bits par canal (alpha ignoré)
/// 8-bit per channel RGB color (alpha ignored)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Gris neutre utilisé quand un échantillon échoue
    /// Neutral gray used when a sample fails
    pub const NEUTRAL: Rgb = Rgb::new(NEUTRAL_RGB.0, NEUTRAL_RGB.1, NEUTRAL_RGB.2);

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formate en "#RRGGBB" (majuscules)
    /// Formats as "#RRGGBB" (uppercase)
    #[inline]
    pub fn to_hex(self) -> String {
        format_hex(self.r, self.g, self.b)
    }

    /// "RRGGBB" sans le '#'
    #[inline]
    pub fn hex_digits(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// "RGB(r, g, b)"
    #[inline]
    pub fn rgb_label(self) -> String {
        format!("RGB({}, {}, {})", self.r, self.g, self.b)
    }

    /// Texte de l'aperçu : hex sur la première ligne, RGB décimal sur la seconde
    /// Preview text: hex on the first line, decimal RGB on the second
    pub fn preview_label(self) -> String {
        format!("{}\n{}", self.to_hex(), self.rgb_label())
    }

    /// Distance euclidienne au carré (pas de correction perceptuelle)
    /// Squared Euclidean distance (no perceptual correction)
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Détermine si le texte posé sur cette couleur doit être clair
    /// Tells whether text drawn over this color should be light
    pub fn is_dark(self) -> bool {
        BigColor::from_rgb(self.r, self.g, self.b, 1.0).is_dark()
    }

    /// Parse "#RGB", "#ARGB", "#RRGGBB" ou "#AARRGGBB" ; l'alpha est ignoré
    /// Parses "#RGB", "#ARGB", "#RRGGBB" or "#AARRGGBB"; alpha is discarded
    pub fn parse_hex(input: &str) -> Result<Self, ParseColorError> {
        let invalid = || ParseColorError::InvalidHex(input.to_string());
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map_err(|_| invalid());
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        match digits.len() {
            3 => Ok(Rgb::new(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            4 => Ok(Rgb::new(nibble(1)? * 17, nibble(2)? * 17, nibble(3)? * 17)),
            6 => Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Rgb::new(byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_input(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

// =============================================================================
// FONCTIONS DE FORMATAGE ET DE SAISIE
// FORMATTING AND INPUT FUNCTIONS
// =============================================================================

/// Formate une couleur RGB en chaîne hexadécimale
/// Formats an RGB color as a hex string
///
/// # Returns
/// Chaîne au format "#RRGGBB" / String in "#RRGGBB" format
#[inline]
pub fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Interprète la saisie utilisateur : hex si elle commence par '#',
/// sinon "R, G, B" en décimal (0-255 par canal)
/// Interprets user input: hex when it starts with '#', otherwise decimal
/// "R, G, B" (0-255 per channel)
pub fn parse_input(input: &str) -> Result<Rgb, ParseColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseColorError::Empty);
    }
    if trimmed.starts_with('#') {
        return Rgb::parse_hex(trimmed);
    }

    let invalid = || ParseColorError::InvalidRgb(input.to_string());
    let captures = RGB_PATTERN.captures(trimmed).ok_or_else(invalid)?;
    let channel = |i: usize| captures[i].parse::<u8>().map_err(|_| invalid());
    Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(255, 0, 128), "#FF0080");
        assert_eq!(format_hex(0, 0, 0), "#000000");
        assert_eq!(Rgb::new(10, 20, 30).to_string(), "#0A141E");
    }

    #[test]
    fn test_preview_label() {
        assert_eq!(Rgb::new(10, 20, 30).preview_label(), "#0A141E\nRGB(10, 20, 30)");
    }

    #[test]
    fn test_parse_short_and_alpha_forms() {
        assert_eq!(Rgb::parse_hex("#F0A"), Ok(Rgb::new(0xFF, 0x00, 0xAA)));
        assert_eq!(Rgb::parse_hex("#8F0A"), Ok(Rgb::new(0xFF, 0x00, 0xAA)));
        assert_eq!(Rgb::parse_hex("#80FF00AA"), Ok(Rgb::new(0xFF, 0x00, 0xAA)));
        assert_eq!(Rgb::parse_hex("#ff00aa"), Ok(Rgb::new(0xFF, 0x00, 0xAA)));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Rgb::parse_hex("#12345").is_err());
        assert!(Rgb::parse_hex("#GGHHII").is_err());
        assert!(Rgb::parse_hex("#+1+2+3").is_err());
        assert!(Rgb::parse_hex("123456").is_err());
    }

    #[test]
    fn test_parse_rgb_input() {
        assert_eq!(parse_input(" 12 ,34,  56 "), Ok(Rgb::new(12, 34, 56)));
        assert_eq!(parse_input("#0A141E"), Ok(Rgb::new(10, 20, 30)));
        assert!(matches!(parse_input("256, 0, 0"), Err(ParseColorError::InvalidRgb(_))));
        assert!(matches!(parse_input("1, 2"), Err(ParseColorError::InvalidRgb(_))));
        assert_eq!(parse_input("   "), Err(ParseColorError::Empty));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Rgb::new(0, 0, 0).distance_squared(Rgb::new(1, 2, 3)), 14);
        assert_eq!(Rgb::WHITE.distance_squared(Rgb::WHITE), 0);
    }

    #[test]
    fn test_dark_detection() {
        assert!(Rgb::new(0, 0, 0).is_dark());
        assert!(!Rgb::WHITE.is_dark());
    }

    proptest! {
        #[test]
        fn hex_round_trips(r: u8, g: u8, b: u8) {
            let hex = format_hex(r, g, b);
            prop_assert_eq!(Rgb::parse_hex(&hex), Ok(Rgb::new(r, g, b)));
            prop_assert_eq!(hex.parse::<Rgb>(), Ok(Rgb::new(r, g, b)));
        }

        #[test]
        fn rgb_text_round_trips(r: u8, g: u8, b: u8) {
            let text = format!("{}, {}, {}", r, g, b);
            prop_assert_eq!(parse_input(&text), Ok(Rgb::new(r, g, b)));
        }
    }
}
