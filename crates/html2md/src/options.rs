//! Configuration options for HTML to Markdown conversion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling the substitution engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ConversionOptions {
    /// Discard elements whose tag name is not a known HTML element.
    ///
    /// When disabled (the default), unknown elements are re-emitted literally as
    /// `<name>content</name>`.
    pub strip_unknown_tags: bool,
}

impl ConversionOptions {
    /// Create options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unknown tags are stripped.
    #[must_use]
    pub const fn with_strip_unknown_tags(mut self, strip: bool) -> Self {
        self.strip_unknown_tags = strip;
        self
    }
}
