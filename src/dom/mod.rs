//! Read-only search primitives over a parsed HTML tree.
//!
//! Everything here is pure: no logging, no I/O, no allocation beyond the
//! returned values and the walk stack.

mod node;
mod search;
mod visitor;

pub use node::{document_root, Children, DomNode, HtmlNode, NodeKind};
pub use search::{
    find_first, get_element_with_class, get_text_node, has_tag_and_class, text_content,
};
pub use visitor::{traverse, Visit};
