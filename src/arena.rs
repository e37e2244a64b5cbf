use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::error::{GraphError, GraphResult};

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

/// Stable index of a chain node inside one graph's arena.
///
/// A handle remembers which arena issued it; any other arena rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) arena: u64,
    pub(crate) index: usize,
}

impl Handle {
    /// Slot index inside the issuing arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug)]
enum Entry<T> {
    Occupied(T),
    Free,
}

/// Wrapper over Vec<T> to store some T and hand out [Handles](Handle) to it.
///
/// Released slots go on a free list and are reused by later pushes, so a
/// handle stays valid until it is removed and never aliases a live value.
/// The arena keeps running totals of allocations and releases, which is how
/// callers check that a teardown freed everything exactly once.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    id: u64,
    nodes: Vec<Entry<T>>,
    free: Vec<usize>,
    allocated: usize,
    released: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::default(),
            free: Vec::default(),
            allocated: 0,
            released: 0,
        }
    }

    pub fn push(&mut self, data: T) -> GraphResult<Handle> {
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Entry::Occupied(data);
                id
            }
            None => {
                self.nodes
                    .try_reserve(1)
                    .map_err(|_| GraphError::AllocationFailure { what: "arena node" })?;
                self.nodes.push(Entry::Occupied(data));
                self.nodes.len() - 1
            }
        };

        self.allocated += 1;
        trace!(id, "arena node allocated");
        Ok(Handle {
            arena: self.id,
            index: id,
        })
    }

    fn check_owner(&self, handle: Handle) -> GraphResult<()> {
        if handle.arena == self.id {
            Ok(())
        } else {
            Err(GraphError::ForeignHandle { handle })
        }
    }

    /// Ok if `handle` was issued here and has not been removed.
    pub fn check_live(&self, handle: Handle) -> GraphResult<()> {
        self.check_owner(handle)?;
        match self.nodes.get(handle.index) {
            Some(Entry::Occupied(_)) => Ok(()),
            _ => Err(GraphError::DoubleRelease { handle }),
        }
    }

    /// The value behind `handle`, or `None` if it was freed or belongs to
    /// another arena.
    pub fn node(&self, handle: Handle) -> Option<&T> {
        if handle.arena != self.id {
            return None;
        }
        match self.nodes.get(handle.index) {
            Some(Entry::Occupied(data)) => Some(data),
            _ => None,
        }
    }

    /// Frees the slot behind `handle` and returns its value.
    pub fn remove(&mut self, handle: Handle) -> GraphResult<T> {
        self.check_owner(handle)?;
        match self
            .nodes
            .get_mut(handle.index)
            .map(|entry| mem::replace(entry, Entry::Free))
        {
            Some(Entry::Occupied(data)) => {
                self.free.push(handle.index);
                self.released += 1;
                trace!(id = handle.index, "arena node released");
                Ok(data)
            }
            _ => Err(GraphError::DoubleRelease { handle }),
        }
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.allocated - self.released
    }

    pub fn allocated(&self) -> usize {
        self.allocated
    }

    pub fn released(&self) -> usize {
        self.released
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
