//! Four-sided margins around the plot area

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// One side of a margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarginSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl MarginSide {
    /// Order in which a margin spec is validated
    pub const VALIDATION_ORDER: [MarginSide; 4] = [
        MarginSide::Top,
        MarginSide::Left,
        MarginSide::Bottom,
        MarginSide::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MarginSide::Top => "top",
            MarginSide::Right => "right",
            MarginSide::Bottom => "bottom",
            MarginSide::Left => "left",
        }
    }
}

impl fmt::Display for MarginSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully specified margin, in pixels
///
/// Values are not range checked: zero and negative offsets are valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Create a margin in CSS order (top, right, bottom, left)
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same offset on every side
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Combined left and right offsets
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top and bottom offsets
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn side(&self, side: MarginSide) -> f64 {
        match side {
            MarginSide::Top => self.top,
            MarginSide::Right => self.right,
            MarginSide::Bottom => self.bottom,
            MarginSide::Left => self.left,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(10.0, 10.0, 10.0, 20.0)
    }
}

/// A margin whose sides may be missing
///
/// This is what margin setters accept; converting it into a [`Margin`]
/// fails unless all four sides are present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarginSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl MarginSpec {
    /// An empty spec with no sides set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    pub fn right(mut self, value: f64) -> Self {
        self.right = Some(value);
        self
    }

    pub fn bottom(mut self, value: f64) -> Self {
        self.bottom = Some(value);
        self
    }

    pub fn left(mut self, value: f64) -> Self {
        self.left = Some(value);
        self
    }

    pub fn get(&self, side: MarginSide) -> Option<f64> {
        match side {
            MarginSide::Top => self.top,
            MarginSide::Right => self.right,
            MarginSide::Bottom => self.bottom,
            MarginSide::Left => self.left,
        }
    }

    /// Overlay the sides set in `other` onto this spec
    pub fn merge(self, other: MarginSpec) -> Self {
        Self {
            top: other.top.or(self.top),
            right: other.right.or(self.right),
            bottom: other.bottom.or(self.bottom),
            left: other.left.or(self.left),
        }
    }

    /// Check that every side is present, reporting the first one missing
    pub fn validate(&self) -> Result<Margin, ConfigurationError> {
        if let Some(side) = MarginSide::VALIDATION_ORDER
            .into_iter()
            .find(|&side| self.get(side).is_none())
        {
            return Err(ConfigurationError::missing_margin(side));
        }

        Ok(Margin::new(
            self.top.unwrap_or_default(),
            self.right.unwrap_or_default(),
            self.bottom.unwrap_or_default(),
            self.left.unwrap_or_default(),
        ))
    }
}

impl From<Margin> for MarginSpec {
    fn from(margin: Margin) -> Self {
        Self {
            top: Some(margin.top),
            right: Some(margin.right),
            bottom: Some(margin.bottom),
            left: Some(margin.left),
        }
    }
}

impl TryFrom<MarginSpec> for Margin {
    type Error = ConfigurationError;

    fn try_from(spec: MarginSpec) -> Result<Self, Self::Error> {
        spec.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margin() {
        let m = Margin::default();
        assert_eq!(m, Margin::new(10.0, 10.0, 10.0, 20.0));
        assert_eq!(m.horizontal(), 30.0);
        assert_eq!(m.vertical(), 20.0);
    }

    #[test]
    fn test_full_spec_validates() {
        let spec = MarginSpec::new().top(1.0).right(2.0).bottom(3.0).left(4.0);
        assert_eq!(spec.validate(), Ok(Margin::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_zero_and_negative_accepted() {
        let spec = MarginSpec::new().top(0.0).right(-5.0).bottom(0.0).left(-1.5);
        let m = Margin::try_from(spec).unwrap();
        assert_eq!(m.right, -5.0);
        assert_eq!(m.left, -1.5);
    }

    #[test]
    fn test_each_missing_side_reported() {
        let full = MarginSpec::from(Margin::uniform(5.0));
        for side in MarginSide::VALIDATION_ORDER {
            let mut spec = full;
            match side {
                MarginSide::Top => spec.top = None,
                MarginSide::Right => spec.right = None,
                MarginSide::Bottom => spec.bottom = None,
                MarginSide::Left => spec.left = None,
            }
            assert_eq!(
                spec.validate(),
                Err(ConfigurationError::MissingMargin { side })
            );
        }
    }

    #[test]
    fn test_first_missing_side_in_validation_order() {
        // Only right is set: top is checked first
        let spec = MarginSpec::new().right(1.0);
        assert_eq!(
            spec.validate().unwrap_err().to_string(),
            "margins.top is required"
        );

        // top set, left missing before bottom
        let spec = MarginSpec::new().top(1.0).right(1.0);
        assert_eq!(
            spec.validate(),
            Err(ConfigurationError::missing_margin(MarginSide::Left))
        );
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = MarginSpec::from(Margin::default());
        let merged = base.merge(MarginSpec::new().left(50.0));
        assert_eq!(merged.validate(), Ok(Margin::new(10.0, 10.0, 10.0, 50.0)));
    }
}
