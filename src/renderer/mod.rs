//! SVG renderer for element trees
//!
//! This module serializes a [`Document`](crate::dom::Document) into SVG text.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
