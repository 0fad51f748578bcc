//! Helpers shared across the CSS tool family.

use super::super::color::model::{self, ParseColorError};

/// Normalize any supported color notation for CSS output: hex when opaque,
/// `rgba()` when translucent.
pub fn normalize_color(input: &str) -> Result<String, ParseColorError> {
    let parsed = model::parse(input)?;
    Ok(if parsed.alpha < 1.0 {
        parsed.rgb.to_css(parsed.alpha)
    } else {
        parsed.rgb.to_hex()
    })
}

/// Format a numeric CSS value without a trailing `.0`, at most two decimals.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// A pixel length.
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("red").unwrap(), "#ff0000");
        assert_eq!(
            normalize_color("rgba(0, 0, 0, 0.25)").unwrap(),
            "rgba(0, 0, 0, 0.25)"
        );
        assert!(normalize_color("bogus").is_err());
    }

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(45.0), "45");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.333333), "1.33");
        assert_eq!(px(10.0), "10px");
    }
}
