//! In-memory SVG element tree
//!
//! A small arena-backed document model: enough structure to append and
//! insert elements, edit attributes and classes, and look nodes up with
//! simple selectors.

pub mod document;
pub mod selector;

pub use document::{Document, Element, NodeId};
pub use selector::Selector;
