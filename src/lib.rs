//! Chart Plot - margin-aware plot areas for SVG charts
//!
//! A [`PlotArea`] lives inside a host chart and keeps a `<g>` element inset
//! from the chart's outer bounds by a four-sided [`Margin`]. The group is
//! repositioned whenever the margins change and resized whenever the chart
//! is resized.
//!
//! # Example
//!
//! ```rust
//! use chart_plot::{BaseChart, PlotArea, SvgConfig};
//!
//! let mut plot = PlotArea::new(BaseChart::new(500.0, 300.0));
//! assert_eq!(plot.plot_width(), 470.0);
//! assert_eq!(plot.plot_height(), 280.0);
//!
//! plot.new_plot_group(Some("series"), None);
//! let svg = plot.render(&SvgConfig::default());
//! assert!(svg.contains(r#"transform="translate(20,10)""#));
//! ```

pub mod chart;
pub mod dom;
pub mod error;
pub mod margin;
pub mod options;
pub mod plot;
pub mod renderer;

pub use chart::{BaseChart, HostChart, ResizeHandler, Size};
pub use dom::{Document, Element, NodeId, Selector};
pub use error::ConfigurationError;
pub use margin::{Margin, MarginSide, MarginSpec};
pub use options::{OptionsError, PlotOptions};
pub use plot::{plot_size, ElementKind, PlotArea};
pub use renderer::{render_svg, SvgConfig};

/// Build a chart with a plot area from options
///
/// # Example
///
/// ```rust
/// use chart_plot::{plot_chart, Margin, PlotOptions};
///
/// let options = PlotOptions::new().with_margins(Margin::uniform(0.0));
/// let plot = plot_chart(200.0, 100.0, &options).unwrap();
/// assert_eq!(plot.plot_width(), 200.0);
/// ```
pub fn plot_chart(
    width: f64,
    height: f64,
    options: &PlotOptions,
) -> Result<PlotArea<BaseChart>, ConfigurationError> {
    PlotArea::initialize(BaseChart::new(width, height), options)
}
