//! The substitution engine.
//!
//! - [`planner`] builds the ordered worklist of (node, rule) pairs.
//! - [`engine`] executes it in reverse and extracts content.
//! - [`whitespace`] reconstructs inline padding.
//! - [`rules`] holds one substitution function per Markdown construct.

pub mod engine;
mod main;
pub mod planner;
pub mod rules;
pub mod whitespace;

pub use main::{convert_html, convert_stream, convert_tree};
