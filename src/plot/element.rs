//! Kinds of elements that can be created inside a plot area

use std::fmt;

/// SVG element kind for new plot elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Group,
    ClipPath,
    Defs,
    Rect,
    Path,
    Line,
    Circle,
    Text,
    /// Any other element, by tag name
    Other(String),
}

impl ElementKind {
    /// Resolve a tag name, accepting an optional `svg:` namespace prefix
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.strip_prefix("svg:").unwrap_or(tag);
        match tag {
            "g" => ElementKind::Group,
            "clipPath" => ElementKind::ClipPath,
            "defs" => ElementKind::Defs,
            "rect" => ElementKind::Rect,
            "path" => ElementKind::Path,
            "line" => ElementKind::Line,
            "circle" => ElementKind::Circle,
            "text" => ElementKind::Text,
            other => ElementKind::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ElementKind::Group => "g",
            ElementKind::ClipPath => "clipPath",
            ElementKind::Defs => "defs",
            ElementKind::Rect => "rect",
            ElementKind::Path => "path",
            ElementKind::Line => "line",
            ElementKind::Circle => "circle",
            ElementKind::Text => "text",
            ElementKind::Other(tag) => tag,
        }
    }
}

impl From<&str> for ElementKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(ElementKind::from("g"), ElementKind::Group);
        assert_eq!(ElementKind::from("clipPath"), ElementKind::ClipPath);
        assert_eq!(ElementKind::ClipPath.tag(), "clipPath");
    }

    #[test]
    fn test_namespace_prefix_stripped() {
        assert_eq!(ElementKind::from("svg:g"), ElementKind::Group);
        assert_eq!(ElementKind::from("svg:clipPath").to_string(), "clipPath");
    }

    #[test]
    fn test_unknown_tag_kept() {
        let kind = ElementKind::from("svg:pattern");
        assert_eq!(kind, ElementKind::Other("pattern".to_string()));
        assert_eq!(kind.tag(), "pattern");
    }
}
