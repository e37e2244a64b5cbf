use crate::arena::{Arena, Handle};
use crate::error::GraphResult;

/// One link of an adjacency chain: a destination vertex and the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChainNode {
    pub value: usize,
    pub next: Option<Handle>,
}

pub(crate) type NodeArena = Arena<ChainNode>;

/// Out-neighbours of a single vertex, stored as a singly linked list in a
/// [NodeArena].
///
/// A chain only holds the handle of its head, so it is meaningless without the
/// arena it was built in; handing it a different arena is a `ForeignHandle`
/// error. It is neither `Clone` nor `Copy`: every node has exactly one owner,
/// and [Chain::release] consumes the chain.
///
/// Values are always added at the head, so iteration yields them in reverse
/// order of insertion.
#[derive(Debug, Default)]
pub(crate) struct Chain {
    head: Option<Handle>,
}

impl Chain {
    pub fn empty() -> Self {
        Self { head: None }
    }

    /// Create a chain holding only `value`.
    pub fn new_node(nodes: &mut NodeArena, value: usize) -> GraphResult<Self> {
        let mut chain = Self::empty();
        chain.prepend(nodes, value)?;
        Ok(chain)
    }

    /// Put `value` in front of the chain. The old head becomes the tail of
    /// the new node. On allocation failure the chain is left as it was.
    pub fn prepend(&mut self, nodes: &mut NodeArena, value: usize) -> GraphResult<()> {
        if let Some(head) = self.head {
            nodes.check_live(head)?;
        }
        let head = nodes.push(ChainNode {
            value,
            next: self.head,
        })?;
        self.head = Some(head);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk the chain from head to tail. Call again to restart.
    pub fn iter<'a>(&self, nodes: &'a NodeArena) -> Iter<'a> {
        Iter {
            nodes,
            cursor: self.head,
        }
    }

    /// Free every node head to tail and return how many were freed.
    ///
    /// The whole chain is checked first, so a chain with a dead or foreign
    /// link is rejected without freeing anything.
    pub fn release(self, nodes: &mut NodeArena) -> GraphResult<usize> {
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            nodes.check_live(handle)?;
            cursor = nodes.node(handle).and_then(|node| node.next);
        }

        let mut cursor = self.head;
        let mut count = 0;
        while let Some(handle) = cursor {
            cursor = nodes.remove(handle)?.next;
            count += 1;
        }
        Ok(count)
    }
}

/// Destinations of one vertex, head of its chain first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a NodeArena,
    cursor: Option<Handle>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.nodes.node(self.cursor?);
        debug_assert!(node.is_some(), "chain links to a freed or foreign node");
        let node = node?;
        self.cursor = node.next;
        Some(node.value)
    }
}
