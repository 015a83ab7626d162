//! SVG generation from element trees

use crate::dom::{Document, NodeId};

use super::SvgConfig;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Writes elements into an output buffer, tracking nesting depth
struct SvgWriter<'a> {
    config: &'a SvgConfig,
    out: String,
    depth: usize,
}

impl<'a> SvgWriter<'a> {
    fn new(config: &'a SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            " ".repeat(self.config.indent * self.depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn write_declaration(&mut self) {
        if self.config.standalone {
            self.out
                .push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            self.out.push_str(self.newline());
        }
    }

    fn write_element(&mut self, doc: &Document, id: NodeId) {
        let Some(element) = doc.element(id) else {
            return;
        };

        let mut open = format!("{}<{}", self.indent_str(), element.tag());
        if id == doc.root() && element.tag() == "svg" && element.attr("xmlns").is_none() {
            open.push_str(&format!(r#" xmlns="{}""#, SVG_NAMESPACE));
        }
        for (name, value) in element.attributes() {
            open.push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
        }
        if !element.classes().is_empty() {
            open.push_str(&format!(
                r#" class="{}""#,
                escape_xml(&element.classes().join(" "))
            ));
        }

        if element.children().is_empty() {
            self.out.push_str(&open);
            self.out.push_str("/>");
            return;
        }

        self.out.push_str(&open);
        self.out.push('>');
        self.depth += 1;
        for &child in element.children() {
            self.out.push_str(self.newline());
            self.write_element(doc, child);
        }
        self.depth -= 1;
        self.out.push_str(self.newline());
        self.out
            .push_str(&format!("{}</{}>", self.indent_str(), element.tag()));
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Render a document to an SVG string
pub fn render_svg(doc: &Document, config: &SvgConfig) -> String {
    let mut writer = SvgWriter::new(config);
    writer.write_declaration();
    writer.write_element(doc, doc.root());
    writer.finish()
}

/// Escape special XML characters in attribute values
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
