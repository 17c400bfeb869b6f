//! Skip list node and arena position types.

use crate::common::NodeId;

/// A place in the list a descent can stop at: the head sentinel or a node.
///
/// The head owns no key, so it lives outside the arena and is addressed
/// through this enum instead of a `NodeId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Head,
    Node(NodeId),
}

/// One entry of the skip list.
///
/// ```text
/// Level 3:  HEAD ──────────────────────────────► 50 ──────────► NIL
/// Level 2:  HEAD ──────────► 20 ────────────────► 50 ──────────► NIL
/// Level 1:  HEAD ──► 10 ──► 20 ────► 35 ────────► 50 ──► 60 ──► NIL
/// Level 0:  HEAD ──► 10 ──► 20 ──► 25 ──► 35 ──► 50 ──► 60 ──► 70 ► NIL
/// ```
///
/// `forward.len()` is the node's height, drawn once at creation and never
/// changed. `backward` points at the level-0 predecessor and is `None` for
/// the first node.
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
    pub(crate) forward: Vec<Option<NodeId>>,
    pub(crate) backward: Option<NodeId>,
}

impl<V> Node<V> {
    /// Create a detached node with `height` empty forward links.
    pub(crate) fn new(key: i64, value: V, height: usize) -> Self {
        debug_assert!(height >= 1, "node height must be at least 1");
        Self {
            key,
            value,
            forward: vec![None; height],
            backward: None,
        }
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.forward.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new_is_detached() {
        let node = Node::new(7, "seven", 3);
        assert_eq!(node.key, 7);
        assert_eq!(node.height(), 3);
        assert!(node.forward.iter().all(Option::is_none));
        assert_eq!(node.backward, None);
    }
}
