//! The element arena: who is whose parent, and document order.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{NodeData, NodeId};

/// An in-memory DOM, backed by a slotmap arena.
///
/// Elements are never removed: a descriptor's [`NodeId`] stays valid for the
/// lifetime of the `Dom`. Parent links drive the pk walk, child lists drive
/// the component scan.
#[derive(Debug, Default)]
pub struct Dom {
    pub(crate) nodes: SlotMap<NodeId, NodeData>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detached element, typically a document or component root.
    pub fn insert(&mut self, data: NodeData) -> NodeId {
        self.nodes.insert(data)
    }

    /// Append an element under `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` is not in this DOM.
    pub fn insert_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!(self.nodes.contains_key(parent), "unknown parent element");
        let id = self.nodes.insert(data);
        self.parent.insert(id, parent);
        match self.children.get_mut(parent) {
            Some(siblings) => siblings.push(id),
            None => {
                self.children.insert(parent, vec![id]);
            }
        }
        id
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Child elements in document order; empty for leaves.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// `start` and everything beneath it, in document order (pre-order).
    pub fn document_order(&self, start: NodeId) -> DocumentOrder<'_> {
        let stack = if self.contains(start) { vec![start] } else { Vec::new() };
        DocumentOrder { dom: self, stack }
    }
}

/// Iterator returned by [`Dom::document_order`].
pub struct DocumentOrder<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for DocumentOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack.extend(self.dom.children(current).iter().rev());
        Some(current)
    }
}
