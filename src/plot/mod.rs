//! Margin-aware plot area
//!
//! A [`PlotArea`] owns a single `<g class="plot">` inside its host chart.
//! The group is translated by the left and top margins and carries `width`
//! and `height` attributes equal to the chart size minus the margins:
//!
//! ```text
//! plot width  = chart width  - left - right
//! plot height = chart height - top  - bottom
//! ```
//!
//! Sizes are not clamped, so margins larger than the chart give negative
//! dimensions. The group is re-fitted every time the margins change and
//! every time the host reports a resize.

pub mod element;

pub use element::ElementKind;

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::chart::{HostChart, Size};
use crate::dom::{Document, NodeId, Selector};
use crate::error::ConfigurationError;
use crate::margin::{Margin, MarginSpec};
use crate::options::PlotOptions;
use crate::renderer::{render_svg, SvgConfig};

/// Class carried by the plot area group
pub const PLOT_CLASS: &str = "plot";

/// Class carried by every element created through the plot area
pub const PLOT_ELEMENT_CLASS: &str = "plotGroup";

/// Inset drawing region of a host chart
pub struct PlotArea<H: HostChart> {
    host: H,
    group: NodeId,
    // Shared with the resize handler registered on the host
    margins: Rc<Cell<Margin>>,
}

impl<H: HostChart> PlotArea<H> {
    /// Create a plot area with the default margins
    pub fn new(host: H) -> Self {
        Self::with_margins(host, Margin::default())
    }

    /// Create a plot area with explicit margins
    pub fn with_margins(mut host: H, margins: Margin) -> Self {
        let base = host.base();
        let doc = host.document_mut();
        let group = doc.append(base, ElementKind::Group.tag());
        doc.classed(group, PLOT_CLASS, true);

        let shared = Rc::new(Cell::new(margins));
        let handler_margins = Rc::clone(&shared);
        host.on_resize(Box::new(move |doc: &mut Document, size: Size| {
            fit_group(doc, group, size, handler_margins.get());
        }));

        let mut plot = Self {
            host,
            group,
            margins: shared,
        };
        plot.apply_margins(margins);
        plot
    }

    /// Create a plot area from options, as part of chart construction
    ///
    /// Margins given in `options` must specify all four sides; when absent
    /// the default margins are used.
    pub fn initialize(host: H, options: &PlotOptions) -> Result<Self, ConfigurationError> {
        let margins = options.initial_margins().validate().inspect_err(|err| {
            warn!(%err, "rejected initial margins");
        })?;
        Ok(Self::with_margins(host, margins))
    }

    /// Current margins
    pub fn margins(&self) -> Margin {
        self.margins.get()
    }

    /// Replace the margins, then reposition and resize the plot area
    ///
    /// All four sides must be present. On error nothing changes.
    pub fn set_margins(
        &mut self,
        margins: impl Into<MarginSpec>,
    ) -> Result<&mut Self, ConfigurationError> {
        let margins = margins.into().validate().inspect_err(|err| {
            warn!(%err, "rejected margins");
        })?;
        self.apply_margins(margins);
        Ok(self)
    }

    fn apply_margins(&mut self, margins: Margin) {
        debug!(
            top = margins.top,
            right = margins.right,
            bottom = margins.bottom,
            left = margins.left,
            "applying plot margins"
        );
        self.margins.set(margins);
        let group = self.group;
        self.host
            .document_mut()
            .set_attr(group, "transform", translate(&margins));
        self.resize();
    }

    /// Chart width minus the left and right margins
    pub fn plot_width(&self) -> f64 {
        plot_size(self.host.size(), self.margins()).width
    }

    /// Chart height minus the top and bottom margins
    pub fn plot_height(&self) -> f64 {
        plot_size(self.host.size(), self.margins()).height
    }

    /// Write the current plot width and height onto the plot area group
    pub fn resize(&mut self) {
        let size = self.host.size();
        let margins = self.margins();
        fit_group(self.host.document_mut(), self.group, size, margins);
    }

    /// Create a new element inside the plot area
    ///
    /// The element is inserted before the first child of the plot area that
    /// matches `before`, or appended when there is no selector or no match.
    /// It is tagged with the `plotGroup` class plus `css_class` if given.
    pub fn new_plot_element(
        &mut self,
        kind: impl Into<ElementKind>,
        css_class: Option<&str>,
        before: Option<&str>,
    ) -> NodeId {
        let kind = kind.into();
        let before = before.map(Selector::parse);
        let doc = self.host.document_mut();

        let id = doc.insert(self.group, kind.tag(), before.as_ref());
        doc.classed(id, PLOT_ELEMENT_CLASS, true);
        if let Some(class) = css_class {
            doc.classed(id, class, true);
        }

        trace!(element = %kind, class = css_class.unwrap_or(""), "created plot element");
        id
    }

    /// Create a new `<g>` inside the plot area
    pub fn new_plot_group(&mut self, css_class: Option<&str>, before: Option<&str>) -> NodeId {
        self.new_plot_element(ElementKind::Group, css_class, before)
    }

    /// The plot area group
    pub fn group(&self) -> NodeId {
        self.group
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn document(&self) -> &Document {
        self.host.document()
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Render the host's document to SVG
    pub fn render(&self, config: &SvgConfig) -> String {
        render_svg(self.document(), config)
    }
}

impl<H: HostChart + std::fmt::Debug> std::fmt::Debug for PlotArea<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotArea")
            .field("host", &self.host)
            .field("group", &self.group)
            .field("margins", &self.margins())
            .finish()
    }
}

/// Size of the region left inside `outer` once `margins` are removed
pub fn plot_size(outer: Size, margins: Margin) -> Size {
    Size::new(
        outer.width - margins.left - margins.right,
        outer.height - margins.top - margins.bottom,
    )
}

fn fit_group(doc: &mut Document, group: NodeId, outer: Size, margins: Margin) {
    let size = plot_size(outer, margins);
    debug!(width = size.width, height = size.height, "resizing plot area");
    doc.set_attr(group, "width", size.width);
    doc.set_attr(group, "height", size.height);
}

fn translate(margins: &Margin) -> String {
    format!("translate({},{})", margins.left, margins.top)
}
