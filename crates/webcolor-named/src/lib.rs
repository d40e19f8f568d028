//! # webcolor-named: named web colors for webcolor
//!
//! The CSS color keywords (`aliceblue` through `yellowgreen`) as a
//! [`WebColor`] enum, each convertible to a [`webcolor_rgb::Color`].
//!
//! - **[`web`]**: the keyword table, name lookup, reverse lookup by value
//! - **[`error`]**: [`UnknownColorName`] for `str::parse`

pub mod error;
pub mod web;

pub use error::UnknownColorName;
pub use web::WebColor;
