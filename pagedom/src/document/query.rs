use super::{Document, NodeId};
use crate::selector::Selector;

impl Document {
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        selector.matches(self, id)
    }

    /// Nearest inclusive ancestor of `id` matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        self.node(id)?;
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|&candidate| selector.matches(self, candidate))
    }

    /// Every descendant of `scope` matching `selector`, in document order.
    /// Ancestor compounds may match above `scope`, as with `querySelectorAll`.
    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| selector.matches(self, id))
            .collect()
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| selector.matches(self, id))
    }
}
