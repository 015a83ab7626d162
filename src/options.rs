//! Plot options, loadable from TOML
//!
//! ```toml
//! [margins]
//! top = 10
//! right = 10
//! bottom = 30
//! left = 40
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::margin::{Margin, MarginSpec};

/// Errors that can occur when loading plot options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options passed to [`PlotArea::initialize`](crate::PlotArea::initialize)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlotOptions {
    /// Initial margins; the default margin is used when absent
    #[serde(default)]
    pub margins: Option<MarginSpec>,
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial margins
    pub fn with_margins(mut self, margins: impl Into<MarginSpec>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load options from a TOML string
    pub fn from_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// The margin spec to apply at initialization
    pub fn initial_margins(&self) -> MarginSpec {
        self.margins
            .unwrap_or_else(|| MarginSpec::from(Margin::default()))
    }
}
