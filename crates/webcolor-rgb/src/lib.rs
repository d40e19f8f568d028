// SPDX-License-Identifier: MIT
//
// webcolor-rgb: the RGBA color value behind webcolor.
//
// One type, `Color`: four 8-bit channels clamped at construction, parsed
// from and formatted to web hex notation, with the packed 24-bit RGB index.
// Nothing in here can fail. Bad numbers clamp, bad strings fall back to
// opaque black.

pub mod color;
mod hex;

pub use color::Color;
