//! Compound simple selectors (`tag.class#id`)

use super::Element;

/// A single compound selector such as `g`, `.axis`, `g.axis.x` or `rect#bg`
///
/// Combinators (descendant, child, sibling) are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    id: Option<String>,
    empty: bool,
}

impl Selector {
    /// Parse a selector string
    ///
    /// Parsing never fails. Unknown characters are kept as part of the
    /// surrounding name, and a blank selector matches nothing.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.is_empty() {
            return Self {
                empty: true,
                ..Self::default()
            };
        }

        let mut selector = Self::default();
        let mut current = String::new();
        // What the characters in `current` belong to
        let mut kind = Part::Tag;

        for ch in source.chars() {
            match ch {
                '.' | '#' => {
                    selector.push_part(kind, std::mem::take(&mut current));
                    kind = if ch == '.' { Part::Class } else { Part::Id };
                }
                _ => current.push(ch),
            }
        }
        selector.push_part(kind, current);
        selector
    }

    fn push_part(&mut self, kind: Part, name: String) {
        if name.is_empty() {
            return;
        }
        match kind {
            Part::Tag if name == "*" => {}
            Part::Tag => self.tag = Some(name),
            Part::Class => self.classes.push(name),
            Part::Id => self.id = Some(name),
        }
    }

    /// Check whether an element satisfies every part of this selector
    pub fn matches(&self, element: &Element) -> bool {
        if self.empty {
            return false;
        }
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

impl From<&str> for Selector {
    fn from(source: &str) -> Self {
        Self::parse(source)
    }
}

#[derive(Debug, Clone, Copy)]
enum Part {
    Tag,
    Class,
    Id,
}
