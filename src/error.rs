//! Error types for plot configuration

use thiserror::Error;

use crate::margin::MarginSide;

/// Invalid plot configuration
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A margin side was not specified
    #[error("margins.{side} is required")]
    MissingMargin { side: MarginSide },
}

impl ConfigurationError {
    /// Create a missing margin error
    pub fn missing_margin(side: MarginSide) -> Self {
        Self::MissingMargin { side }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_margin_display() {
        let err = ConfigurationError::missing_margin(MarginSide::Bottom);
        assert_eq!(err.to_string(), "margins.bottom is required");
    }
}
