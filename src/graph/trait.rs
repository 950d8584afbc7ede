use crate::graph::*;

pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self, vertex: &VertexId) -> GraphResult<()>;
    fn add_edge(&mut self, v1: &VertexId, v2: &VertexId) -> GraphResult<()>;

    fn add_vertices<I>(&mut self, vertices: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = VertexId>,
        Self: QueryableGraph,
    {
        let vertices: Vec<_> = vertices.into_iter().collect();
        if let Some(v) = vertices.iter().find(|v| !self.knows_vertex(v)) {
            return Err(GraphError::VertexNotFound(*v));
        }
        for v in vertices.iter() {
            self.add_vertex(v)?;
        }
        Ok(())
    }
}

pub trait EdgeShrinkableGraph {
    fn remove_edge(&mut self, v1: &VertexId, v2: &VertexId) -> GraphResult<()>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Unregisters a vertex and purges it from every registered vertex's adjacency.
    ///
    /// The removed vertex keeps its own adjacency.
    fn remove_vertex(&mut self, vertex: &VertexId) -> GraphResult<()>;
}

pub trait QueryableGraph {
    type Value;

    /// Number of registered vertices.
    fn vertex_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    /// Whether a vertex is registered.
    fn contains_vertex(&self, v: &VertexId) -> bool;
    /// Whether a handle was created by this graph, registered or not.
    fn knows_vertex(&self, v: &VertexId) -> bool;

    fn value(&self, v: &VertexId) -> Option<&Self::Value>;
    fn adjacent(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn is_adjacent(&self, v1: &VertexId, v2: &VertexId) -> bool {
        self.adjacent(v1).any(|v| v == *v2)
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
        Self::Value: std::fmt::Debug,
    {
        GraphDebug::new(self)
    }
}
