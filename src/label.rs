use crate::error::{GraphError, GraphResult};

/// Maps a vertex index to the text used for it in rendered views.
pub trait LabelLookup {
    fn label(&self, vertex: usize) -> GraphResult<&str>;
}

static ALPHABET: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Number of vertices in the demonstration graph, labelled `A` to `G`.
pub const DEMO_VERTICES: usize = 7;

/// Fixed table of single capital letters.
///
/// ```
/// use adjgraph::{LabelLookup, Labels};
///
/// let labels = Labels::demo();
/// assert_eq!(labels.label(6).unwrap(), "G");
/// assert!(labels.label(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    symbols: &'static [&'static str],
}

impl Labels {
    /// Labels `A` to `G`.
    pub fn demo() -> Self {
        Self::alphabetic(DEMO_VERTICES)
    }

    /// The first `count` capital letters. Capped at 26.
    pub fn alphabetic(count: usize) -> Self {
        Self {
            symbols: &ALPHABET[..count.min(ALPHABET.len())],
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::demo()
    }
}

impl LabelLookup for Labels {
    fn label(&self, vertex: usize) -> GraphResult<&str> {
        self.symbols
            .get(vertex)
            .copied()
            .ok_or(GraphError::OutOfRange {
                index: vertex,
                bound: self.symbols.len(),
            })
    }
}
