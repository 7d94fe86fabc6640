//! Component scan: descriptors for every bound element under a root.

use crate::config::BindingConfig;
use crate::dom::{Dom, NodeId};
use crate::error::ElementError;

use super::element::Element;

/// Wrap every element under `root` (inclusive) that carries a namespaced
/// attribute, in document order.
///
/// # Errors
///
/// The first [`ElementError`] raised while building a descriptor.
pub fn collect_elements(
    dom: &Dom,
    root: NodeId,
    config: &BindingConfig,
) -> Result<Vec<Element<NodeId>>, ElementError> {
    let mut elements = Vec::new();
    for id in dom.document_order(root) {
        let element = Element::build(dom, id, config)?;
        if element.is_unicorn() {
            elements.push(element);
        }
    }
    tracing::debug!(count = elements.len(), "collected bound elements");
    Ok(elements)
}
