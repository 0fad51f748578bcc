//! Shared color model for the color tool family.
//!
//! This module provides the color-space types (RGB, HSL, HSV, CMYK), the
//! conversions between them, hex and CSS string parsing, and the WCAG
//! luminance/contrast math used by several tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::named;

/// Errors produced while parsing a color string.
#[derive(Debug, Error)]
pub enum ParseColorError {
    /// The hex notation was malformed (wrong length or non-hex digits).
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// A functional notation (rgb()/hsl()) had a bad component.
    #[error("Invalid {kind}() color: {value}")]
    InvalidFunction { kind: &'static str, value: String },

    /// The input matched no supported notation.
    #[error(
        "Unrecognized color: {0} (expected hex, a CSS color name, rgb()/rgba(), or hsl()/hsla())"
    )]
    Unrecognized(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue (0-360), saturation (0-100), lightness (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue (0-360), saturation (0-100), value (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Cyan, magenta, yellow, key - all in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// A parsed color: the opaque RGB part plus its alpha channel (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedColor {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbbaa` notation; drops the alpha byte when fully opaque.
    pub fn to_hex_with_alpha(self, alpha: f64) -> String {
        if alpha >= 1.0 {
            self.to_hex()
        } else {
            let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        }
    }

    /// CSS `rgb()`/`rgba()` notation.
    pub fn to_css(self, alpha: f64) -> String {
        if alpha >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                format_alpha(alpha)
            )
        }
    }

    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl {
            h: hue_from_channels(r, g, b, max, delta),
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    pub fn to_hsv(self) -> Hsv {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            h: hue_from_channels(r, g, b, max, delta),
            s: s * 100.0,
            v: max * 100.0,
        }
    }

    pub fn to_cmyk(self) -> Cmyk {
        let (r, g, b) = self.unit_channels();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            // Pure black: avoid dividing by zero.
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }

        Cmyk {
            c: (1.0 - r - k) / (1.0 - k) * 100.0,
            m: (1.0 - g - k) / (1.0 - k) * 100.0,
            y: (1.0 - b - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }

    /// WCAG relative luminance (sRGB linearization).
    pub fn luminance(self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = channel as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    fn unit_channels(self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        rgb_from_sector(h, c, x, m)
    }

    /// CSS `hsl()`/`hsla()` notation with components rounded for display.
    pub fn to_css(self, alpha: f64) -> String {
        if alpha >= 1.0 {
            format!(
                "hsl({}, {}%, {}%)",
                round1(self.h),
                round1(self.s),
                round1(self.l)
            )
        } else {
            format!(
                "hsla({}, {}%, {}%, {})",
                round1(self.h),
                round1(self.s),
                round1(self.l),
                format_alpha(alpha)
            )
        }
    }

    /// Rotate the hue by `degrees`, wrapping into [0, 360).
    pub fn rotate(self, degrees: f64) -> Hsl {
        Hsl {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Replace lightness, clamped to [0, 100].
    pub fn with_lightness(self, l: f64) -> Hsl {
        Hsl {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }
}

impl Hsv {
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.v / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        rgb_from_sector(h, c, x, m)
    }
}

impl Cmyk {
    pub fn to_rgb(self) -> Rgb {
        let c = (self.c / 100.0).clamp(0.0, 1.0);
        let m = (self.m / 100.0).clamp(0.0, 1.0);
        let y = (self.y / 100.0).clamp(0.0, 1.0);
        let k = (self.k / 100.0).clamp(0.0, 1.0);

        Rgb {
            r: (255.0 * (1.0 - c) * (1.0 - k)).round() as u8,
            g: (255.0 * (1.0 - m) * (1.0 - k)).round() as u8,
            b: (255.0 * (1.0 - y) * (1.0 - k)).round() as u8,
        }
    }
}

/// Shared hue computation for the HSL/HSV conversions.
fn hue_from_channels(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        // Achromatic: hue is undefined, report 0 by convention.
        return 0.0;
    }

    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    if h < 0.0 { h + 360.0 } else { h }
}

/// Map a hue sector plus chroma values back to RGB channels.
fn rgb_from_sector(h: f64, c: f64, x: f64, m: f64) -> Rgb {
    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}

/// WCAG contrast ratio between two colors, in [1, 21].
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Channel-wise linear interpolation; `weight` is the fraction of `b` (0.0-1.0).
pub fn mix(a: Rgb, b: Rgb, weight: f64) -> Rgb {
    let w = weight.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| (x as f64 * (1.0 - w) + y as f64 * w).round() as u8;

    Rgb {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
    }
}

/// Parse any supported color notation.
///
/// Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `#` optional), CSS
/// color keywords, `rgb()`/`rgba()` and `hsl()`/`hsla()` functional notation.
pub fn parse(input: &str) -> Result<ParsedColor, ParseColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseColorError::Unrecognized(input.to_string()));
    }
    let lower = trimmed.to_ascii_lowercase();

    if let Some(rgb) = named::lookup(&lower) {
        return Ok(ParsedColor { rgb, alpha: 1.0 });
    }

    if let Some(body) = function_body(&lower, "rgba").or_else(|| function_body(&lower, "rgb")) {
        return parse_rgb_function(body, trimmed);
    }

    if let Some(body) = function_body(&lower, "hsla").or_else(|| function_body(&lower, "hsl")) {
        return parse_hsl_function(body, trimmed);
    }

    let bare = lower.strip_prefix('#').unwrap_or(&lower);
    if matches!(bare.len(), 3 | 4 | 6 | 8) && bare.chars().all(|c| c.is_ascii_hexdigit()) {
        return parse_hex(bare).ok_or_else(|| ParseColorError::InvalidHex(trimmed.to_string()));
    }

    Err(ParseColorError::Unrecognized(trimmed.to_string()))
}

/// Extract the argument list of `name(...)`, if the input has that shape.
fn function_body<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let rest = input.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.trim_end().strip_suffix(')')
}

fn split_components(body: &str) -> Vec<&str> {
    body.split([',', ' ', '/'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_rgb_function(body: &str, original: &str) -> Result<ParsedColor, ParseColorError> {
    let invalid = || ParseColorError::InvalidFunction {
        kind: "rgb",
        value: original.to_string(),
    };

    let parts = split_components(body);
    if parts.len() != 3 && parts.len() != 4 {
        return Err(invalid());
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value: f64 = part.parse().map_err(|_| invalid())?;
        if !(0.0..=255.0).contains(&value) {
            return Err(invalid());
        }
        *slot = value.round() as u8;
    }

    let alpha = match parts.get(3) {
        Some(part) => parse_alpha(part).ok_or_else(invalid)?,
        None => 1.0,
    };

    Ok(ParsedColor {
        rgb: Rgb::new(channels[0], channels[1], channels[2]),
        alpha,
    })
}

fn parse_hsl_function(body: &str, original: &str) -> Result<ParsedColor, ParseColorError> {
    let invalid = || ParseColorError::InvalidFunction {
        kind: "hsl",
        value: original.to_string(),
    };

    let parts = split_components(body);
    if parts.len() != 3 && parts.len() != 4 {
        return Err(invalid());
    }

    let h: f64 = parts[0]
        .strip_suffix("deg")
        .unwrap_or(parts[0])
        .parse()
        .map_err(|_| invalid())?;

    let mut percents = [0f64; 2];
    for (slot, part) in percents.iter_mut().zip(parts[1..3].iter().copied()) {
        let value: f64 = part
            .strip_suffix('%')
            .unwrap_or(part)
            .parse()
            .map_err(|_| invalid())?;
        if !(0.0..=100.0).contains(&value) {
            return Err(invalid());
        }
        *slot = value;
    }

    let alpha = match parts.get(3) {
        Some(part) => parse_alpha(part).ok_or_else(invalid)?,
        None => 1.0,
    };

    Ok(ParsedColor {
        rgb: Hsl {
            h,
            s: percents[0],
            l: percents[1],
        }
        .to_rgb(),
        alpha,
    })
}

/// Alpha as a number in [0, 1] or a percentage.
fn parse_alpha(part: &str) -> Option<f64> {
    let (text, scale) = match part.strip_suffix('%') {
        Some(p) => (p, 100.0),
        None => (part, 1.0),
    };
    let value: f64 = text.parse().ok()?;
    let alpha = value / scale;
    (0.0..=1.0).contains(&alpha).then_some(alpha)
}

/// Parse a bare hex string of validated length and character set.
fn parse_hex(hex: &str) -> Option<ParsedColor> {
    let expand = |c: char| c.to_digit(16).map(|d| (d * 16 + d) as u8);

    let bytes: Vec<char> = hex.chars().collect();
    let (rgb, alpha_byte) = match bytes.len() {
        3 | 4 => {
            let rgb = Rgb::new(expand(bytes[0])?, expand(bytes[1])?, expand(bytes[2])?);
            let a = if bytes.len() == 4 {
                Some(expand(bytes[3])?)
            } else {
                None
            };
            (rgb, a)
        }
        6 | 8 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            let rgb = Rgb::new(byte(0)?, byte(2)?, byte(4)?);
            let a = if hex.len() == 8 { Some(byte(6)?) } else { None };
            (rgb, a)
        }
        _ => return None,
    };

    Some(ParsedColor {
        rgb,
        alpha: alpha_byte.map_or(1.0, |a| a as f64 / 255.0),
    })
}

/// Format an alpha value for CSS output, trimmed to three decimals.
pub fn format_alpha(alpha: f64) -> f64 {
    (alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

/// Round to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#1e90ff", "#a52a2a", "#0f0f0f"] {
            let parsed = parse(hex).unwrap();
            assert_eq!(parsed.rgb.to_hex(), hex);
            assert_eq!(parsed.alpha, 1.0);
        }
    }

    #[test]
    fn test_short_hex_expansion() {
        let parsed = parse("#f80").unwrap();
        assert_eq!(parsed.rgb, Rgb::new(255, 136, 0));

        let with_alpha = parse("#f808").unwrap();
        assert_eq!(with_alpha.rgb, Rgb::new(255, 136, 0));
        assert!((with_alpha.alpha - 136.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_hex_without_hash() {
        assert_eq!(parse("ff0000").unwrap().rgb, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert!(parse("#12345").is_err());
        assert!(parse("#gg0000").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_named_color() {
        assert_eq!(parse("RebeccaPurple").unwrap().rgb, Rgb::new(102, 51, 153));
        assert_eq!(parse("tomato").unwrap().rgb, Rgb::new(255, 99, 71));
    }

    #[test]
    fn test_rgb_function() {
        let parsed = parse("rgb(30, 144, 255)").unwrap();
        assert_eq!(parsed.rgb, Rgb::new(30, 144, 255));

        let rgba = parse("rgba(30, 144, 255, 0.5)").unwrap();
        assert!((rgba.alpha - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_function_out_of_range() {
        assert!(parse("rgb(300, 0, 0)").is_err());
        assert!(parse("rgb(10, 20)").is_err());
    }

    #[test]
    fn test_hsl_function() {
        let parsed = parse("hsl(120, 100%, 50%)").unwrap();
        assert_eq!(parsed.rgb, Rgb::new(0, 255, 0));

        let hsla = parse("hsla(0, 100%, 50%, 25%)").unwrap();
        assert_eq!(hsla.rgb, Rgb::new(255, 0, 0));
        assert!((hsla.alpha - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_hsl_round_trip_within_one() {
        let samples = [
            Rgb::new(12, 200, 97),
            Rgb::new(255, 254, 1),
            Rgb::new(33, 33, 33),
            Rgb::new(0, 128, 255),
            Rgb::new(250, 5, 120),
        ];
        for rgb in samples {
            let back = rgb.to_hsl().to_rgb();
            assert!(rgb.r.abs_diff(back.r) <= 1, "{rgb:?} -> {back:?}");
            assert!(rgb.g.abs_diff(back.g) <= 1, "{rgb:?} -> {back:?}");
            assert!(rgb.b.abs_diff(back.b) <= 1, "{rgb:?} -> {back:?}");
        }
    }

    #[test]
    fn test_rgb_hsv_round_trip_within_one() {
        let samples = [Rgb::new(12, 200, 97), Rgb::new(1, 2, 3), Rgb::new(200, 100, 50)];
        for rgb in samples {
            let back = rgb.to_hsv().to_rgb();
            assert!(rgb.r.abs_diff(back.r) <= 1);
            assert!(rgb.g.abs_diff(back.g) <= 1);
            assert!(rgb.b.abs_diff(back.b) <= 1);
        }
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        let grey = Rgb::new(128, 128, 128).to_hsl();
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
    }

    #[test]
    fn test_cmyk_black_guard() {
        let black = Rgb::new(0, 0, 0).to_cmyk();
        assert_eq!(black.k, 100.0);
        assert_eq!(black.c, 0.0);

        let white = Rgb::new(255, 255, 255).to_cmyk();
        assert_eq!(white.k, 0.0);
    }

    #[test]
    fn test_cmyk_round_trip() {
        let rgb = Rgb::new(210, 45, 90);
        let back = rgb.to_cmyk().to_rgb();
        assert!(rgb.r.abs_diff(back.r) <= 1);
        assert!(rgb.g.abs_diff(back.g) <= 1);
        assert!(rgb.b.abs_diff(back.b) <= 1);
    }

    #[test]
    fn test_contrast_bounds() {
        let ratio = contrast_ratio(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
        assert!((ratio - 21.0).abs() < 0.01);

        let same = contrast_ratio(Rgb::new(90, 90, 90), Rgb::new(90, 90, 90));
        assert!((same - 1.0).abs() < 1e-9);

        // Symmetry
        let a = Rgb::new(30, 144, 255);
        let b = Rgb::new(255, 99, 71);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_mix_endpoints_and_midpoint() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 255, 255);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hue_rotation_wraps() {
        let hsl = Hsl {
            h: 350.0,
            s: 50.0,
            l: 50.0,
        };
        assert_eq!(hsl.rotate(20.0).h, 10.0);
        assert_eq!(hsl.rotate(-360.0).h, 350.0);
    }

    #[test]
    fn test_css_strings() {
        let rgb = Rgb::new(30, 144, 255);
        assert_eq!(rgb.to_css(1.0), "rgb(30, 144, 255)");
        assert_eq!(rgb.to_css(0.5), "rgba(30, 144, 255, 0.5)");
        assert_eq!(rgb.to_hex_with_alpha(1.0), "#1e90ff");
        assert_eq!(rgb.to_hex_with_alpha(0.0), "#1e90ff00");
    }
}
