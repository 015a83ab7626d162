//! A minimal SVG chart

use tracing::trace;

use super::{HostChart, ResizeHandler, Size};
use crate::dom::{Document, NodeId};

/// Chart backed by a document whose root is an `<svg>` element
///
/// The root carries `width` and `height` attributes matching the chart's
/// outer size. Every size setter notifies resize handlers, in registration
/// order, once per call.
pub struct BaseChart {
    document: Document,
    size: Size,
    resize_handlers: Vec<ResizeHandler>,
}

impl BaseChart {
    pub fn new(width: f64, height: f64) -> Self {
        let mut chart = Self {
            document: Document::new("svg"),
            size: Size::new(width, height),
            resize_handlers: vec![],
        };
        chart.write_size();
        chart
    }

    /// Change both outer dimensions
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
        self.write_size();
        self.notify_resize();
    }

    pub fn set_width(&mut self, width: f64) {
        self.set_size(width, self.size.height);
    }

    pub fn set_height(&mut self, height: f64) {
        self.set_size(self.size.width, height);
    }

    fn write_size(&mut self) {
        let root = self.document.root();
        self.document.set_attr(root, "width", self.size.width);
        self.document.set_attr(root, "height", self.size.height);
    }

    fn notify_resize(&mut self) {
        trace!(
            width = self.size.width,
            height = self.size.height,
            handlers = self.resize_handlers.len(),
            "chart resized"
        );
        let size = self.size;
        for handler in &mut self.resize_handlers {
            handler(&mut self.document, size);
        }
    }
}

impl std::fmt::Debug for BaseChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseChart")
            .field("size", &self.size)
            .field("elements", &self.document.len())
            .field("resize_handlers", &self.resize_handlers.len())
            .finish()
    }
}

impl HostChart for BaseChart {
    fn base(&self) -> NodeId {
        self.document.root()
    }

    fn width(&self) -> f64 {
        self.size.width
    }

    fn height(&self) -> f64 {
        self.size.height
    }

    fn document(&self) -> &Document {
        &self.document
    }

    fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    fn on_resize(&mut self, handler: ResizeHandler) {
        self.resize_handlers.push(handler);
    }
}
