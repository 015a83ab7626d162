//! Arena-backed element tree

use super::Selector;

/// Handle to an element inside a [`Document`]
///
/// Ids are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its document's arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single SVG element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.into(),
            attributes: vec![],
            classes: vec![],
            parent,
            children: vec![],
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order (classes excluded)
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A tree of SVG elements rooted at a single element
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    /// Create a document holding only its root element
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            nodes: vec![Element::new(root_tag, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of elements, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    /// Append a new element as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        self.insert(parent, tag, None)
    }

    /// Insert a new element under `parent`
    ///
    /// The element goes immediately before the first direct child matching
    /// `before`. Without a selector, or when nothing matches, it is appended.
    pub fn insert(
        &mut self,
        parent: NodeId,
        tag: impl Into<String>,
        before: Option<&Selector>,
    ) -> NodeId {
        let position = before.and_then(|selector| {
            self.nodes[parent.0]
                .children
                .iter()
                .position(|&child| selector.matches(&self.nodes[child.0]))
        });

        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag, Some(parent)));

        let children = &mut self.nodes[parent.0].children;
        match position {
            Some(index) => children.insert(index, id),
            None => children.push(id),
        }
        id
    }

    /// Set an attribute, replacing any previous value in place
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl ToString) {
        let value = value.to_string();
        let attributes = &mut self.nodes[id.0].attributes;
        match attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => attributes.push((name.to_string(), value)),
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0].attr(name)
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        let attributes = &mut self.nodes[id.0].attributes;
        let index = attributes.iter().position(|(n, _)| n == name)?;
        Some(attributes.remove(index).1)
    }

    /// Add or remove a class
    ///
    /// Each whitespace-separated name in `class` is handled on its own; a
    /// blank string is a no-op.
    pub fn classed(&mut self, id: NodeId, class: &str, enabled: bool) {
        let classes = &mut self.nodes[id.0].classes;
        for name in class.split_whitespace() {
            let present = classes.iter().any(|c| c == name);
            if enabled && !present {
                classes.push(name.to_string());
            } else if !enabled && present {
                classes.retain(|c| c != name);
            }
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].has_class(class)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// First direct child of `parent` matching `selector`
    pub fn select_child(&self, parent: NodeId, selector: &Selector) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| selector.matches(&self.nodes[child.0]))
    }

    /// Every descendant of the root matching `selector`, in document order
    pub fn select_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut found = vec![];
        let mut stack: Vec<NodeId> = self.children(self.root()).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if selector.matches(&self.nodes[id.0]) {
                found.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_root() {
        let doc = Document::new("svg");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.element(doc.root()).unwrap().tag(), "svg");
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut doc = Document::new("svg");
        let root = doc.root();
        let a = doc.append(root, "g");
        let b = doc.append(root, "rect");
        assert_eq!(doc.children(root), &[a, b]);
        assert_eq!(doc.parent(b), Some(root));
    }

    #[test]
    fn test_insert_before_matching_child() {
        let mut doc = Document::new("svg");
        let root = doc.root();
        let a = doc.append(root, "g");
        let b = doc.append(root, "g");
        doc.classed(b, "axis", true);

        let c = doc.insert(root, "rect", Some(&Selector::parse(".axis")));
        assert_eq!(doc.children(root), &[a, c, b]);
    }

    #[test]
    fn test_insert_without_match_appends() {
        let mut doc = Document::new("svg");
        let root = doc.root();
        let a = doc.append(root, "g");
        let b = doc.insert(root, "g", Some(&Selector::parse(".missing")));
        assert_eq!(doc.children(root), &[a, b]);
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut doc = Document::new("svg");
        let root = doc.root();
        doc.set_attr(root, "width", 100);
        doc.set_attr(root, "height", 50);
        doc.set_attr(root, "width", 120.5);

        let attrs = doc.element(root).unwrap().attributes();
        assert_eq!(attrs[0], ("width".to_string(), "120.5".to_string()));
        assert_eq!(attrs[1], ("height".to_string(), "50".to_string()));
    }

    #[test]
    fn test_remove_attr() {
        let mut doc = Document::new("svg");
        let root = doc.root();
        doc.set_attr(root, "width", 10);
        assert_eq!(doc.remove_attr(root, "width"), Some("10".to_string()));
        assert_eq!(doc.attr(root, "width"), None);
        assert_eq!(doc.remove_attr(root, "width"), None);
    }

    #[test]
    fn test_classed_toggles_and_ignores_blank() {
        let mut doc = Document::new("svg");
        let root = doc.root();
        doc.classed(root, "a b", true);
        doc.classed(root, "a", true);
        doc.classed(root, "", true);
        assert_eq!(doc.element(root).unwrap().classes(), &["a", "b"]);

        doc.classed(root, "a", false);
        assert!(!doc.has_class(root, "a"));
        assert!(doc.has_class(root, "b"));
    }

    #[test]
    fn test_select_all_in_document_order() {
        let mut doc = Document::new("svg");
        let root = doc.root();
        let outer = doc.append(root, "g");
        let inner = doc.append(outer, "g");
        let sibling = doc.append(root, "g");
        doc.append(inner, "rect");

        assert_eq!(doc.select_all(&Selector::parse("g")), vec![outer, inner, sibling]);
        assert_eq!(doc.select_child(root, &Selector::parse("g")), Some(outer));
    }
}
