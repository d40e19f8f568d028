//! Errors for named color lookup.

use thiserror::Error;

/// A string that is not one of the named web colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color name: {0:?}")]
pub struct UnknownColorName(pub String);
