use crate::algorithm::*;
use crate::graph::*;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(0);

/// An arena-backed undirected graph.
///
/// Every vertex ever created through the graph stays in the arena;
/// membership is tracked separately.
/// All point operations are $O(\log n)$ except [VertexShrinkableGraph::remove_vertex],
/// which scans every registered vertex.
/// Iterations over vertices and neighbours are always in creation order.
///
/// Each graph has its own ID, carried by every handle it creates,
/// so handles from other graphs are rejected.
/// A clone keeps the ID, hence handles of the original stay valid in the clone.
#[derive(Clone)]
pub struct Graph<T> {
    id: usize,
    arena: Vec<Vertex<T>>,
    vertices: BTreeSet<VertexId>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<T> Graph<T> {
    /// Creates an empty graph whose arena has room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            arena: Vec::with_capacity(capacity),
            vertices: BTreeSet::new(),
        }
    }

    /// ID shared by all handles this graph creates.
    pub fn id(&self) -> usize {
        self.id
    }

    fn push(&mut self, vertex: Vertex<T>) -> VertexId {
        let vid = VertexId::new(self.id, self.arena.len());
        self.arena.push(vertex);
        trace!("created {}", vid);
        vid
    }

    /// Creates a vertex without registering it.
    pub fn create_vertex(&mut self, value: T) -> VertexId {
        self.push(Vertex::new(value))
    }

    /// Creates a vertex, with its initial adjacency, without registering it.
    ///
    /// Fails if the initial adjacency names a handle unknown to this graph.
    pub fn create_from(&mut self, vertex: Vertex<T>) -> GraphResult<VertexId> {
        if let Some(v) = vertex.adjacent().find(|v| !self.knows_vertex(v)) {
            return Err(GraphError::VertexNotFound(v));
        }
        Ok(self.push(vertex))
    }

    /// The vertex behind a handle, registered or not.
    pub fn vertex(&self, v: &VertexId) -> Option<&Vertex<T>> {
        if v.graph_id() == self.id {
            self.arena.get(v.to_raw())
        } else {
            None
        }
    }

    fn vertex_mut(&mut self, v: &VertexId) -> GraphResult<&mut Vertex<T>> {
        if v.graph_id() != self.id {
            return Err(GraphError::VertexNotFound(*v));
        }
        self.arena.get_mut(v.to_raw()).ok_or(GraphError::VertexNotFound(*v))
    }

    fn ensure_known(&self, v: &VertexId) -> GraphResult<()> {
        if self.knows_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(*v))
        }
    }

    /// Values behind handles which are known to this graph.
    fn values<I>(&self, it: I) -> Vec<&T>
    where
        I: Iterator<Item = VertexId>,
    {
        it.map(|v| self.arena[v.to_raw()].value()).collect()
    }

    /// Values of vertices reachable from `start`, in iterative depth-first order.
    pub fn depth_first_search(&self, start: &VertexId) -> GraphResult<Vec<&T>> {
        let res = self.values(self.depth_first(start)?);
        debug!("depth-first from {} visited {} vertices", start, res.len());
        Ok(res)
    }

    /// Values of vertices reachable from `start`, in depth-first pre-order.
    pub fn depth_first_search_recursive(&self, start: &VertexId) -> GraphResult<Vec<&T>> {
        let res = self.values(self.depth_first_preorder(start)?);
        debug!("depth-first pre-order from {} visited {} vertices", start, res.len());
        Ok(res)
    }

    /// Values of vertices reachable from `start`, nearest first.
    pub fn breadth_first_search(&self, start: &VertexId) -> GraphResult<Vec<&T>> {
        let res = self.values(self.breadth_first(start)?);
        debug!("breadth-first from {} visited {} vertices", start, res.len());
        Ok(res)
    }

    /// Number of edges on a shortest path from `start` to `end`.
    pub fn distance_of_shortest_path(
        &self,
        start: &VertexId,
        end: &VertexId,
    ) -> GraphResult<usize> {
        let res = self.shortest_distance(start, end);
        debug!("distance from {} to {}: {:?}", start, end, res);
        res
    }
}

impl<T> GrowableGraph for Graph<T> {
    fn new() -> Self {
        Self::with_capacity(0)
    }

    fn add_vertex(&mut self, vertex: &VertexId) -> GraphResult<()> {
        self.ensure_known(vertex)?;
        if self.vertices.insert(*vertex) {
            trace!("registered {}", vertex);
        }
        Ok(())
    }

    fn add_edge(&mut self, v1: &VertexId, v2: &VertexId) -> GraphResult<()> {
        self.ensure_known(v1)?;
        self.ensure_known(v2)?;
        self.vertex_mut(v1)?.adjacent.insert(*v2);
        self.vertex_mut(v2)?.adjacent.insert(*v1);
        trace!("connected {} -- {}", v1, v2);
        Ok(())
    }
}

impl<T> EdgeShrinkableGraph for Graph<T> {
    fn remove_edge(&mut self, v1: &VertexId, v2: &VertexId) -> GraphResult<()> {
        self.ensure_known(v1)?;
        self.ensure_known(v2)?;
        self.vertex_mut(v1)?.adjacent.remove(v2);
        self.vertex_mut(v2)?.adjacent.remove(v1);
        trace!("disconnected {} -- {}", v1, v2);
        Ok(())
    }
}

impl<T> VertexShrinkableGraph for Graph<T> {
    fn remove_vertex(&mut self, vertex: &VertexId) -> GraphResult<()> {
        self.ensure_known(vertex)?;
        for member in self.vertices.iter() {
            if let Some(x) = self.arena.get_mut(member.to_raw()) {
                x.adjacent.remove(vertex);
            }
        }
        if self.vertices.remove(vertex) {
            trace!("unregistered {}", vertex);
        }
        Ok(())
    }
}

impl<T> QueryableGraph for Graph<T> {
    type Value = T;

    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn knows_vertex(&self, v: &VertexId) -> bool {
        v.graph_id() == self.id && v.to_raw() < self.arena.len()
    }

    fn value(&self, v: &VertexId) -> Option<&T> {
        self.vertex(v).map(|x| x.value())
    }

    fn adjacent(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.vertex(v) {
            Some(x) => Box::new(x.adjacent()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn is_adjacent(&self, v1: &VertexId, v2: &VertexId) -> bool {
        self.vertex(v1).map(|x| x.is_adjacent_to(v2)).unwrap_or(false)
    }
}
