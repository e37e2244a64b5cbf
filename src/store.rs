use tracing::{debug, warn};

use crate::chain::{self, Chain, NodeArena};
use crate::error::{GraphError, GraphResult};

/// Edges of the demonstration graph on vertices `A` to `G`.
pub const DEMO_EDGES: [(usize, usize); 7] = [
    (0, 1),
    (0, 2),
    (2, 3),
    (3, 4),
    (3, 6),
    (4, 5),
    (6, 5),
];

/// Directed graph over a fixed set of vertices `0..vertex_count`, one
/// adjacency chain per vertex.
///
/// The vertex count never changes after [GraphStore::create]. Edges can only
/// be added, and each new edge goes to the front of its source's chain.
///
/// # Examples
///
/// ```
/// use adjgraph::GraphStore;
///
/// let mut g = GraphStore::create(3).unwrap();
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(0, 2).unwrap();
/// assert!(g.add_edge(0, 3).is_err());
///
/// assert_eq!(g.neighbors(0).unwrap().collect::<Vec<_>>(), vec![2, 1]);
/// let teardown = g.destroy().unwrap();
/// assert_eq!(teardown.nodes_released, 2);
/// ```
#[derive(Debug)]
pub struct GraphStore {
    vertex_count: usize,
    slots: Vec<Chain>,
    nodes: NodeArena,
}

/// What [GraphStore::destroy] freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teardown {
    pub slots_released: usize,
    pub nodes_allocated: usize,
    pub nodes_released: usize,
    /// Nodes still live after every chain was released. Always zero unless a
    /// chain was corrupted.
    pub nodes_leaked: usize,
}

impl GraphStore {
    pub fn create(vertex_count: usize) -> GraphResult<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::AllocationFailure { what: "vertex slots" })?;
        slots.extend((0..vertex_count).map(|_| Chain::empty()));

        debug!(vertex_count, "graph store created");
        Ok(Self {
            vertex_count,
            slots,
            nodes: NodeArena::new(),
        })
    }

    /// Create a store and add `edges` in order.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut store = Self::create(vertex_count)?;
        for (source, dest) in edges {
            store.add_edge(source, dest)?;
        }
        Ok(store)
    }

    /// The 7-vertex demonstration graph built from [DEMO_EDGES].
    pub fn demo() -> GraphResult<Self> {
        Self::from_edges(crate::label::DEMO_VERTICES, DEMO_EDGES.iter().copied())
    }

    fn check_vertex(&self, index: usize) -> GraphResult<()> {
        if index < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index,
                bound: self.vertex_count,
            })
        }
    }

    /// Add the directed edge `source -> dest`. Both ends are checked before
    /// anything is touched.
    pub fn add_edge(&mut self, source: usize, dest: usize) -> GraphResult<()> {
        if let Err(e) = self
            .check_vertex(source)
            .and_then(|_| self.check_vertex(dest))
        {
            warn!(source, dest, bound = self.vertex_count, "rejected out-of-range edge");
            return Err(e);
        }

        let slot = &mut self.slots[source];
        if slot.is_empty() {
            *slot = Chain::new_node(&mut self.nodes, dest)?;
        } else {
            slot.prepend(&mut self.nodes, dest)?;
        }
        debug!(source, dest, "edge added");
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.len()
    }

    /// Destinations of `vertex`, most recently added first.
    pub fn neighbors(&self, vertex: usize) -> GraphResult<chain::Iter<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.slots[vertex].iter(&self.nodes))
    }

    /// Every edge as `(source, dest)`, by increasing source and then in chain order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let nodes = &self.nodes;
        self.slots
            .iter()
            .enumerate()
            .flat_map(move |(source, chain)| chain.iter(nodes).map(move |dest| (source, dest)))
    }

    /// Release every chain, then the slots and the store itself.
    pub fn destroy(self) -> GraphResult<Teardown> {
        let GraphStore {
            vertex_count,
            slots,
            mut nodes,
        } = self;

        let mut nodes_released = 0;
        for chain in slots {
            nodes_released += chain.release(&mut nodes)?;
        }

        let teardown = Teardown {
            slots_released: vertex_count,
            nodes_allocated: nodes.allocated(),
            nodes_released,
            nodes_leaked: nodes.len(),
        };
        debug!(?teardown, "graph store destroyed");
        Ok(teardown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn create_makes_empty_slots() {
        let g = GraphStore::create(4).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 0);
        for v in 0..4 {
            assert_eq!(g.neighbors(v).unwrap().count(), 0);
        }
    }

    #[test]
    fn create_zero_vertices() {
        let mut g = GraphStore::create(0).unwrap();
        assert_eq!(g.edges().count(), 0);
        assert!(g.add_edge(0, 0).is_err());
        assert_eq!(g.destroy().unwrap().slots_released, 0);
    }

    #[test]
    fn demo_chains() {
        let g = GraphStore::demo().unwrap();
        let chain = |v| g.neighbors(v).unwrap().collect::<Vec<_>>();

        assert_eq!(chain(0), vec![2, 1]);
        assert_eq!(chain(1), Vec::<usize>::new());
        assert_eq!(chain(2), vec![3]);
        assert_eq!(chain(3), vec![6, 4]);
        assert_eq!(chain(4), vec![5]);
        assert_eq!(chain(5), Vec::<usize>::new());
        assert_eq!(chain(6), vec![5]);
        assert_eq!(g.edge_count(), 7);
    }

    #[test]
    fn self_loops_and_parallel_edges_are_kept() {
        let g = GraphStore::from_edges(2, vec![(1, 1), (1, 0), (1, 1)]).unwrap();
        assert_eq!(g.neighbors(1).unwrap().collect::<Vec<_>>(), vec![1, 0, 1]);
    }

    #[test]
    fn edges_follow_source_then_chain_order() {
        let g = GraphStore::from_edges(3, vec![(2, 0), (0, 1), (0, 2)]).unwrap();
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 2), (0, 1), (2, 0)]);
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let mut g = GraphStore::create(3).unwrap();
        match g.add_edge(3, 0) {
            Err(GraphError::OutOfRange { index, bound }) => {
                assert_eq!(index, 3);
                assert_eq!(bound, 3);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_dest_is_rejected() {
        let mut g = GraphStore::create(3).unwrap();
        assert!(matches!(
            g.add_edge(0, 7),
            Err(GraphError::OutOfRange { index: 7, bound: 3 })
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn stores_keep_their_nodes_apart() {
        let first = GraphStore::from_edges(2, vec![(0, 1)]).unwrap();
        let mut second = GraphStore::from_edges(2, vec![(1, 0)]).unwrap();

        assert_eq!(first.destroy().unwrap().nodes_released, 1);
        second.add_edge(1, 1).unwrap();
        assert_eq!(second.neighbors(1).unwrap().collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(second.destroy().unwrap().nodes_leaked, 0);
    }

    #[test]
    fn neighbors_of_unknown_vertex_is_error() {
        let g = GraphStore::create(2).unwrap();
        assert!(g.neighbors(2).is_err());
    }

    #[test]
    fn destroy_accounts_for_every_node() {
        let g = GraphStore::demo().unwrap();
        let teardown = g.destroy().unwrap();
        assert_eq!(
            teardown,
            Teardown {
                slots_released: 7,
                nodes_allocated: 7,
                nodes_released: 7,
                nodes_leaked: 0,
            }
        );
    }

    #[test]
    fn random_out_of_range_edges_never_mutate() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut g = GraphStore::demo().unwrap();
        let before: Vec<_> = g.edges().collect();

        for _ in 0..500 {
            let n = g.vertex_count();
            let (source, dest) = if rng.gen::<bool>() {
                (rng.gen_range(n..usize::MAX), rng.gen_range(0..n))
            } else {
                (rng.gen_range(0..n), rng.gen_range(n..usize::MAX))
            };
            assert!(matches!(
                g.add_edge(source, dest),
                Err(GraphError::OutOfRange { .. })
            ));
        }

        assert_eq!(g.edges().collect::<Vec<_>>(), before);
        assert_eq!(g.destroy().unwrap().nodes_released, 7);
    }

    prop_compose! {
        fn graph_input()
            (n in 1usize..24)
            (edges in proptest::collection::vec((0..n, 0..n), 0..80), n in Just(n))
            -> (usize, Vec<(usize, usize)>)
        {
            (n, edges)
        }
    }

    proptest! {
        #[test]
        fn prop_chains_are_reverse_of_insertion((n, edges) in graph_input()) {
            let g = GraphStore::from_edges(n, edges.clone()).unwrap();

            for v in 0..n {
                let mut expected: Vec<usize> = edges
                    .iter()
                    .filter(|(s, _)| *s == v)
                    .map(|(_, d)| *d)
                    .collect();
                expected.reverse();
                prop_assert_eq!(g.neighbors(v).unwrap().collect::<Vec<_>>(), expected);
            }
            prop_assert_eq!(g.edge_count(), edges.len());
        }

        #[test]
        fn prop_out_of_range_is_reported(
            (n, edges) in graph_input(),
            offset in 0usize..1000,
            bad_source in any::<bool>(),
        ) {
            let mut g = GraphStore::from_edges(n, edges.clone()).unwrap();
            let before: Vec<_> = g.edges().collect();

            let (source, dest) = if bad_source { (n + offset, 0) } else { (0, n + offset) };
            let is_out_of_range = matches!(
                g.add_edge(source, dest),
                Err(GraphError::OutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
            prop_assert_eq!(g.edges().collect::<Vec<_>>(), before);
        }

        #[test]
        fn prop_destroy_frees_k_nodes_and_n_slots(
            n in 1usize..32,
            k in 0usize..200,
            source in 0usize..32,
        ) {
            let source = source % n;
            let mut g = GraphStore::create(n).unwrap();
            for i in 0..k {
                g.add_edge(source, i % n).unwrap();
            }

            let teardown = g.destroy().unwrap();
            prop_assert_eq!(teardown.slots_released, n);
            prop_assert_eq!(teardown.nodes_allocated, k);
            prop_assert_eq!(teardown.nodes_released, k);
            prop_assert_eq!(teardown.nodes_leaked, 0);
        }
    }
}
