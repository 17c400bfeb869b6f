//! Node identifier type.

use std::fmt;

/// Identifies a node slot in a skip list's arena.
///
/// Links between nodes are stored as `NodeId`s rather than references, so
/// the forward/backward graph never needs shared ownership:
/// 1. Nodes are stored in `Vec<Option<Node<V>>>`
/// 2. Direct indexing without casting: `slots[node_id.0]`
/// 3. A freed slot's id is recycled by the next insert
///
/// # Example
/// ```
/// use skipindex::NodeId;
///
/// let node_id = NodeId::new(5);
/// assert_eq!(node_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_equality() {
        assert_eq!(NodeId::new(5), NodeId::new(5));
        assert_ne!(NodeId::new(5), NodeId::new(6));
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(format!("{}", NodeId::new(42)), "Node(42)");
    }
}
