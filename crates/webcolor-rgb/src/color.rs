// SPDX-License-Identifier: MIT
//
// The Color value: four 8-bit channels, clamped once at construction.
//
// Construction never fails. Whatever integer a caller hands us, the stored
// channel is bounded into 0..=255 before the value exists, so every Color
// that can be observed is already valid. There is no error path here and
// there must never be one: out-of-range input clamps, malformed hex falls
// back to the default.

use std::fmt;

use crate::hex;

/// Smallest channel value.
const CHANNEL_MIN: i32 = 0;

/// Largest channel value (also "fully opaque" for alpha).
const CHANNEL_MAX: i32 = 255;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with alpha, stored as four 8-bit channels.
///
/// Channels are private and read through accessors; the only way to get a
/// `Color` is through a constructor that clamps, so a channel outside
/// `0..=255` is unrepresentable.
///
/// # Examples
///
/// ```
/// use webcolor_rgb::Color;
///
/// // Out-of-range input clamps instead of failing.
/// let c = Color::new(-40, 128, 1000, 255);
/// assert_eq!((c.red(), c.green(), c.blue()), (0, 128, 255));
///
/// // Hex in, hex out. Opaque colors drop the alpha pair.
/// let pink = Color::parse_hex("#ffc0cb");
/// assert_eq!(pink.to_hex(), "#FFC0CB");
/// assert_eq!(pink.rgb_index(), 16_761_035);
///
/// // Anything unrecognized is opaque black.
/// assert_eq!(Color::parse_hex("not a color"), Color::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Opaque black, the value every failed parse falls back to.
    pub const BLACK: Self = Self::from_rgba8(0, 0, 0, u8::MAX);

    /// Opaque white.
    pub const WHITE: Self = Self::from_rgba8(u8::MAX, u8::MAX, u8::MAX, u8::MAX);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);

    /// Create a color from four integer channels, clamping each into `0..=255`.
    ///
    /// Values below 0 become 0, values above 255 become 255. Each channel is
    /// clamped independently.
    #[inline]
    #[must_use]
    pub const fn new(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: clamp_channel(alpha),
        }
    }

    /// Create a fully opaque color from three integer channels (clamped).
    #[inline]
    #[must_use]
    pub const fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self::new(red, green, blue, CHANNEL_MAX)
    }

    /// Create a color from channels that are already bytes.
    ///
    /// Nothing to clamp, so this is usable in `const` tables.
    #[inline]
    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse web hex notation: `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// Digits are case-insensitive and the `#` is required. The whole string
    /// must match one of the three shapes; anything else (including empty
    /// input and surrounding whitespace) yields [`Color::default`], opaque
    /// black. This never fails.
    ///
    /// In the three-digit form each digit is doubled (`#f80` is `#ff8800`).
    #[must_use]
    pub fn parse_hex(s: &str) -> Self {
        hex::parse(s).unwrap_or_default()
    }

    /// Whether `s` is in one of the notations [`Color::parse_hex`] accepts.
    ///
    /// When this is `false`, `parse_hex(s)` is the default color.
    #[must_use]
    pub fn is_hex(s: &str) -> bool {
        hex::parse(s).is_some()
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Red channel, `0..=255`.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.red
    }

    /// Green channel, `0..=255`.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        self.green
    }

    /// Blue channel, `0..=255`.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Alpha channel: 255 is fully opaque, 0 fully transparent.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.alpha
    }

    /// All four channels as `(r, g, b, a)`.
    #[inline]
    #[must_use]
    pub const fn to_rgba8(self) -> (u8, u8, u8, u8) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Whether alpha is 255.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha == u8::MAX
    }

    /// Return a copy with a different alpha (clamped like any channel).
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: i32) -> Self {
        Self {
            alpha: clamp_channel(alpha),
            ..self
        }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// The 24-bit packed RGB value, red in the high byte: `0xRRGGBB`.
    ///
    /// Alpha is not part of the index. Range is `0..=16_777_215`.
    #[inline]
    #[must_use]
    pub fn rgb_index(self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }

    /// Uppercase hex string: `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    ///
    /// The shorthand `#RGB` form is accepted by [`Color::parse_hex`] but never
    /// produced here.
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::format(self)
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&str> for Color {
    /// Same as [`Color::parse_hex`].
    fn from(s: &str) -> Self {
        Self::parse_hex(s)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

impl From<Color> for (u8, u8, u8, u8) {
    fn from(color: Color) -> Self {
        color.to_rgba8()
    }
}

/// Bound an integer into a channel byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_channel(value: i32) -> u8 {
    // Safe: both branches guarantee 0 <= value <= 255 before truncation.
    if value < CHANNEL_MIN {
        0
    } else if value > CHANNEL_MAX {
        u8::MAX
    } else {
        value as u8
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
