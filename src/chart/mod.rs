//! Host charts
//!
//! A host chart owns the drawing surface and the outer dimensions that a
//! [`PlotArea`](crate::PlotArea) lays itself out against.

pub mod base;

pub use base::BaseChart;

use crate::dom::{Document, NodeId};

/// Outer dimensions of a chart, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Callback run when a host chart's outer dimensions change
pub type ResizeHandler = Box<dyn FnMut(&mut Document, Size)>;

/// Capabilities a chart must offer to host a plot area
pub trait HostChart {
    /// Element new content is appended into
    fn base(&self) -> NodeId;

    /// Current outer width
    fn width(&self) -> f64;

    /// Current outer height
    fn height(&self) -> f64;

    fn document(&self) -> &Document;

    fn document_mut(&mut self) -> &mut Document;

    /// Register a handler for resize notifications
    fn on_resize(&mut self, handler: ResizeHandler);

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
