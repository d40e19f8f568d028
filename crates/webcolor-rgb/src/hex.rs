// SPDX-License-Identifier: MIT
//
// Web hex notation: parsing and formatting.
//
// Three input shapes are recognized, tried in this order against the whole
// string:
//
//   #RGB        each digit d becomes d * 17 (0xf → 0xff), alpha 255
//   #RRGGBB     one byte per channel, alpha 255
//   #RRGGBBAA   one byte per channel including alpha
//
// Output is always the long form with uppercase digits, and the alpha pair
// only appears when the color is not fully opaque.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::color::Color;

// ─── Patterns ────────────────────────────────────────────────────────────────

static SHORT_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9a-f])([0-9a-f])([0-9a-f])$").expect("valid regex")
});

static HEX_NO_ALPHA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").expect("valid regex")
});

static HEX_ALPHA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$")
        .expect("valid regex")
});

/// Digit multiplier for the shorthand form: `0xd * 17 == 0xdd`.
const SHORTHAND_SCALE: u8 = 17;

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
///
/// Returns `None` for anything that does not match one of the shapes in
/// full. [`Color::parse_hex`] turns that into the default color.
pub(crate) fn parse(s: &str) -> Option<Color> {
    if let Some(caps) = SHORT_HEX.captures(s) {
        let r = group(&caps, 1)? * SHORTHAND_SCALE;
        let g = group(&caps, 2)? * SHORTHAND_SCALE;
        let b = group(&caps, 3)? * SHORTHAND_SCALE;
        return Some(Color::from_rgba8(r, g, b, u8::MAX));
    }

    if let Some(caps) = HEX_NO_ALPHA.captures(s) {
        let r = group(&caps, 1)?;
        let g = group(&caps, 2)?;
        let b = group(&caps, 3)?;
        return Some(Color::from_rgba8(r, g, b, u8::MAX));
    }

    if let Some(caps) = HEX_ALPHA.captures(s) {
        let r = group(&caps, 1)?;
        let g = group(&caps, 2)?;
        let b = group(&caps, 3)?;
        let a = group(&caps, 4)?;
        return Some(Color::from_rgba8(r, g, b, a));
    }

    None
}

/// Decode capture group `i` (one or two hex digits) as a byte.
#[inline]
fn group(caps: &Captures<'_>, i: usize) -> Option<u8> {
    u8::from_str_radix(caps.get(i)?.as_str(), 16).ok()
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Format as `#RRGGBB`, or `#RRGGBBAA` when alpha is below 255.
pub(crate) fn format(color: Color) -> String {
    let (r, g, b, a) = color.to_rgba8();
    if color.is_opaque() {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Shorthand ────────────────────────────────────────────────────────

    #[test]
    fn short_white_and_black() {
        assert_eq!(Color::parse_hex("#fff"), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse_hex("#FFF"), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse_hex("#000"), Color::rgb(0, 0, 0));
    }

    #[test]
    fn short_digits_scale_by_seventeen() {
        assert_eq!(Color::parse_hex("#f80"), Color::rgb(255, 136, 0));
        assert_eq!(Color::parse_hex("#123"), Color::rgb(17, 34, 51));
        assert_eq!(Color::parse_hex("#aBc"), Color::rgb(170, 187, 204));
    }

    #[test]
    fn short_is_always_opaque() {
        assert!(Color::parse_hex("#0f0").is_opaque());
    }

    // ── Long Forms ───────────────────────────────────────────────────────

    #[test]
    fn six_digits() {
        assert_eq!(Color::parse_hex("#ffeedd"), Color::rgb(255, 238, 221));
        assert_eq!(Color::parse_hex("#FFC0CB"), Color::rgb(255, 192, 203));
        assert_eq!(Color::parse_hex("#0a00Ff"), Color::rgb(10, 0, 255));
    }

    #[test]
    fn eight_digits() {
        assert_eq!(Color::parse_hex("#FFFFFFFF"), Color::new(255, 255, 255, 255));
        assert_eq!(Color::parse_hex("#00000080"), Color::new(0, 0, 0, 128));
        assert_eq!(Color::parse_hex("#12345678"), Color::new(0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn eight_digits_zero_alpha() {
        let c = Color::parse_hex("#ff000000");
        assert_eq!(c.to_rgba8(), (255, 0, 0, 0));
    }

    // ── Fallback ─────────────────────────────────────────────────────────

    #[test]
    fn invalid_falls_back_to_default() {
        for input in [
            "",
            "#",
            "not a color",
            "Invalid color",
            "fff",
            "ffffff",
            "#ff",
            "#ffff",
            "#fffff",
            "#fffffff",
            "#fffffffff",
            "#ggg",
            "#12345z",
            "##fff",
            " #fff",
            "#fff ",
            "#fff\n",
            "#ff ff ff",
            "0x123456",
        ] {
            assert_eq!(Color::parse_hex(input), Color::default(), "input: {input:?}");
        }
    }

    #[test]
    fn no_partial_match_inside_longer_text() {
        assert_eq!(Color::parse_hex("color: #ffffff;"), Color::default());
        assert_eq!(Color::parse_hex("#ffffff#000"), Color::default());
    }

    #[test]
    fn non_ascii_is_rejected() {
        assert_eq!(Color::parse_hex("#ｆｆｆ"), Color::default());
    }

    #[test]
    fn parse_returns_none_on_mismatch() {
        assert!(parse("#12").is_none());
        assert!(parse("#123").is_some());
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn format_uppercase_and_padded() {
        assert_eq!(Color::rgb(10, 0, 255).to_hex(), "#0A00FF");
        assert_eq!(Color::rgb(15, 16, 1).to_hex(), "#0F1001");
    }

    #[test]
    fn format_omits_opaque_alpha() {
        let hex = Color::rgb(255, 255, 255).to_hex();
        assert_eq!(hex, "#FFFFFF");
        assert_eq!(hex.len(), 7);
    }

    #[test]
    fn format_includes_translucent_alpha() {
        let hex = Color::new(0, 0, 0, 128).to_hex();
        assert_eq!(hex, "#00000080");
        assert_eq!(hex.len(), 9);
        assert_eq!(Color::new(255, 255, 255, 254).to_hex(), "#FFFFFFFE");
        assert_eq!(Color::new(1, 2, 3, 0).to_hex(), "#01020300");
    }

    #[test]
    fn shorthand_never_produced() {
        assert_eq!(Color::parse_hex("#abc").to_hex(), "#AABBCC");
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn opaque_roundtrip_samples() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (10, 0, 255), (240, 248, 255), (1, 128, 254)] {
            let c = Color::rgb(r, g, b);
            assert_eq!(Color::parse_hex(&c.to_hex()), c);
        }
    }

    #[test]
    fn translucent_roundtrip_every_alpha() {
        let base = Color::rgb(0x33, 0x66, 0x99);
        for a in 0..=255 {
            let c = base.with_alpha(a);
            assert_eq!(Color::parse_hex(&c.to_hex()), c, "alpha {a}");
        }
    }

    #[test]
    fn every_channel_value_roundtrips() {
        for v in 0..=255 {
            let c = Color::new(v, 255 - v, v / 2, 255);
            assert_eq!(Color::parse_hex(&c.to_hex()), c, "value {v}");
        }
    }
}
