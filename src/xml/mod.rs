//! Namespace-aware XML element tree.
//!
//! Tokenization and namespace resolution come from `quick-xml`'s `NsReader`;
//! this module only assembles the events into an owned tree the feed walkers
//! can navigate: local names, namespace URIs (`""` for none), children, text
//! content and attribute lookup.

mod reader;
mod tree;

pub use reader::parse_document;
pub use tree::{Attribute, Document, Element, Node};
