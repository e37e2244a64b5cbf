//! Directed graphs stored as adjacency lists.
//!
//! A [GraphStore] owns a fixed number of vertices `0..n`. Edges are added one
//! at a time and kept in per-vertex chains, newest first. The store can be
//! rendered as an adjacency listing or as an edge listing, using a
//! [LabelLookup] to name vertices.
//!
//! ```
//! use adjgraph::{GraphStore, Labels};
//!
//! let g = GraphStore::demo().unwrap();
//! let text = g.adjacency_view(&Labels::demo()).unwrap();
//! assert!(text.contains("Adjacency list for vertex D: \n {  G-> E-> }\n"));
//! ```

mod arena;
mod chain;
pub mod error;
pub mod label;
mod render;
pub mod store;

pub use arena::Handle;
pub use chain::Iter as Neighbors;
pub use error::{GraphError, GraphResult};
pub use label::{LabelLookup, Labels};
pub use store::{GraphStore, Teardown};
