//! In-memory DOM: slotmap-backed element tree with attributes, form-control
//! state and queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{Control, NodeData, NodeId, SelectOption};
pub use tree::{DocumentOrder, Dom};
