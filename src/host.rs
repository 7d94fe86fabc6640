//! The DOM seam: everything element descriptors need from a live document.
//!
//! [`DomHost`] is implemented by the in-memory [`Dom`] and, with the `web`
//! feature, by [`WebDom`](crate::web::WebDom) over `web_sys::Element`.

use crate::dom::{Dom, NodeId};

// ---------------------------------------------------------------------------
// RawAttribute
// ---------------------------------------------------------------------------

/// Read-only view of one DOM attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    pub name: String,
    pub value: Option<String>,
}

impl RawAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// DomHost
// ---------------------------------------------------------------------------

/// Access to a document's elements through non-owning handles.
///
/// Mutating methods are infallible: hosts that can fail (a browser throwing
/// on an invalid attribute name) log and carry on.
pub trait DomHost {
    /// Non-owning element handle.
    type Node: Clone + std::fmt::Debug;

    /// All attributes of `node`, in document order.
    fn attributes(&self, node: &Self::Node) -> Vec<RawAttribute>;
    fn get_attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// The parent *element*, or `None` at the top of the tree.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The element's `id`, if it has a non-empty one.
    fn element_id(&self, node: &Self::Node) -> Option<String>;

    /// The control `type` (`text`, `checkbox`, `select-multiple`, ...).
    /// `None` for elements that are not form controls.
    fn control_type(&self, node: &Self::Node) -> Option<String>;
    /// The native `value`. `None` for elements without one.
    fn value(&self, node: &Self::Node) -> Option<String>;
    fn set_value(&mut self, node: &Self::Node, value: &str);
    fn checked(&self, node: &Self::Node) -> bool;
    fn set_checked(&mut self, node: &Self::Node, checked: bool);
    /// Values of the selected options, in document order.
    fn selected_values(&self, node: &Self::Node) -> Vec<String>;

    fn focus(&mut self, node: &Self::Node);
}

impl DomHost for Dom {
    type Node = NodeId;

    fn attributes(&self, node: &NodeId) -> Vec<RawAttribute> {
        self.get(*node)
            .map(|data| {
                data.attributes
                    .iter()
                    .map(|(name, value)| RawAttribute::new(name.as_str(), value.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.get(*node)?.attribute(name).map(str::to_owned)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(data) = self.get_mut(*node) {
            data.set_attribute(name, value);
        }
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        if let Some(data) = self.get_mut(*node) {
            data.remove_attribute(name);
        }
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        Dom::parent(self, *node)
    }

    fn element_id(&self, node: &NodeId) -> Option<String> {
        self.get(*node)?
            .id()
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
    }

    fn control_type(&self, node: &NodeId) -> Option<String> {
        let control = self.get(*node)?.control.as_ref()?;
        Some(control.control_type.clone())
    }

    fn value(&self, node: &NodeId) -> Option<String> {
        Some(self.get(*node)?.control.as_ref()?.value())
    }

    fn set_value(&mut self, node: &NodeId, value: &str) {
        if let Some(control) = self.get_mut(*node).and_then(|d| d.control.as_mut()) {
            control.set_value(value);
        }
    }

    fn checked(&self, node: &NodeId) -> bool {
        self.get(*node)
            .and_then(|d| d.control.as_ref())
            .is_some_and(|c| c.checked)
    }

    fn set_checked(&mut self, node: &NodeId, checked: bool) {
        if let Some(control) = self.get_mut(*node).and_then(|d| d.control.as_mut()) {
            control.checked = checked;
        }
    }

    fn selected_values(&self, node: &NodeId) -> Vec<String> {
        self.get(*node)
            .and_then(|d| d.control.as_ref())
            .map(|c| c.selected_values())
            .unwrap_or_default()
    }

    fn focus(&mut self, node: &NodeId) {
        if !self.contains(*node) {
            return;
        }
        for data in self.nodes.values_mut() {
            data.focused = false;
        }
        if let Some(data) = self.get_mut(*node) {
            data.focused = true;
        }
    }
}
