//! Text views of a [GraphStore].
//!
//! Both views are built in full before anything is written, so a vertex
//! without a label produces an error and no partial output.

use std::io::{self, Write};

use crate::error::GraphResult;
use crate::label::LabelLookup;
use crate::store::GraphStore;

const ADJACENCY_BANNER: &str = "\n******** ADJACENCY LIST REPRESENTATION ********:\n\n";
const EDGE_BANNER: &str = "\n******** GRAPH VERTICES & EDGES REPRESENTATION ********:\n\n";

impl GraphStore {
    /// Each vertex followed by its chain, e.g. `{  G-> E-> }` for `D`.
    pub fn adjacency_view<L: LabelLookup + ?Sized>(&self, labels: &L) -> GraphResult<String> {
        let mut out = String::from(ADJACENCY_BANNER);
        for vertex in 0..self.vertex_count() {
            out.push_str("Adjacency list for vertex ");
            out.push_str(labels.label(vertex)?);
            out.push_str(": \n { ");
            for dest in self.neighbors(vertex)? {
                out.push(' ');
                out.push_str(labels.label(dest)?);
                out.push_str("->");
            }
            out.push_str(" }\n");
        }
        Ok(out)
    }

    /// Each vertex followed by its outgoing edges as `(source, dest)` pairs.
    pub fn edge_view<L: LabelLookup + ?Sized>(&self, labels: &L) -> GraphResult<String> {
        let mut out = String::from(EDGE_BANNER);
        for vertex in 0..self.vertex_count() {
            let source = labels.label(vertex)?;
            out.push_str("Vertex ");
            out.push_str(source);
            out.push_str(" has these outgoing edges: \n");
            for dest in self.neighbors(vertex)? {
                out.push_str(" (");
                out.push_str(source);
                out.push_str(", ");
                out.push_str(labels.label(dest)?);
                out.push_str(") ;");
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Raw vertex indices of one chain, e.g. `2, 1, `.
    pub fn chain_text(&self, vertex: usize) -> GraphResult<String> {
        Ok(self
            .neighbors(vertex)?
            .map(|dest| format!("{}, ", dest))
            .collect())
    }

    pub fn write_adjacency_view<L, W>(&self, labels: &L, out: &mut W) -> GraphResult<()>
    where
        L: LabelLookup + ?Sized,
        W: Write + ?Sized,
    {
        let text = self.adjacency_view(labels)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn write_edge_view<L, W>(&self, labels: &L, out: &mut W) -> GraphResult<()>
    where
        L: LabelLookup + ?Sized,
        W: Write + ?Sized,
    {
        let text = self.edge_view(labels)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn print_adjacency_view<L: LabelLookup + ?Sized>(&self, labels: &L) -> GraphResult<()> {
        self.write_adjacency_view(labels, &mut io::stdout().lock())
    }

    pub fn print_edge_view<L: LabelLookup + ?Sized>(&self, labels: &L) -> GraphResult<()> {
        self.write_edge_view(labels, &mut io::stdout().lock())
    }
}
