//! Element lookup by `id`.

use super::node::NodeId;
use super::tree::Dom;

impl Dom {
    /// The first element, in arena order, whose `id` attribute is `id`.
    pub fn query_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find_map(|(node, data)| (data.id() == Some(id)).then_some(node))
    }
}
