use std::collections::BTreeSet;

/// Handle of a vertex: the graph that created it plus its slot in that graph's arena.
///
/// Within one graph, handles are handed out in creation order,
/// so ordering by handle is ordering by creation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    graph: usize,
    index: usize,
}

impl VertexId {
    pub(crate) fn new(graph: usize, index: usize) -> Self {
        Self { graph, index }
    }

    /// ID of the graph which created this vertex.
    pub fn graph_id(&self) -> usize {
        self.graph
    }

    /// Slot of this vertex in its graph.
    pub fn to_raw(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vertex {} of graph {}", self.index, self.graph)
    }
}

/// A vertex holding an opaque value and the handles of its neighbours.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub(crate) value: T,
    pub(crate) adjacent: BTreeSet<VertexId>,
}

impl<T> Vertex<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            adjacent: BTreeSet::new(),
        }
    }

    /// A vertex with an initial adjacency.
    ///
    /// The adjacency is one-sided: the named neighbours do not learn about this vertex.
    pub fn with_adjacent<I>(value: T, adjacent: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        Self {
            value,
            adjacent: adjacent.into_iter().collect(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Iterates over neighbours in ascending handle order.
    pub fn adjacent(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_adjacent_to(&self, other: &VertexId) -> bool {
        self.adjacent.contains(other)
    }
}
