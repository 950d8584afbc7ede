use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Iterative depth-first traversal from `start`.
    ///
    /// A vertex is marked seen when it is pushed and yielded when it is popped,
    /// so among siblings the last neighbour is explored first.
    fn depth_first(&self, start: &VertexId) -> GraphResult<DepthFirst<'_, Self>> {
        DepthFirst::new(self, start)
    }

    /// Depth-first pre-order traversal from `start`.
    ///
    /// A vertex is marked seen when it is yielded, and the traversal descends into
    /// the first unseen neighbour before looking at the next one.
    fn depth_first_preorder(&self, start: &VertexId) -> GraphResult<PreorderDepthFirst<'_, Self>> {
        PreorderDepthFirst::new(self, start)
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}

pub struct DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    to_visit: Vec<VertexId>,
    seen: HashSet<VertexId, RandomState>,
}

impl<'a, G> DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, start: &VertexId) -> GraphResult<Self> {
        if !graph.knows_vertex(start) {
            return Err(GraphError::VertexNotFound(*start));
        }
        let mut seen = HashSet::with_hasher(RandomState::new());
        seen.insert(*start);
        Ok(Self {
            graph,
            to_visit: vec![*start],
            seen,
        })
    }
}

impl<'a, G> Iterator for DepthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.to_visit.pop()?;
        for v in self.graph.adjacent(&current) {
            if self.seen.insert(v) {
                self.to_visit.push(v);
            }
        }
        Some(current)
    }
}

pub struct PreorderDepthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    start: Option<VertexId>,
    frames: Vec<Box<dyn Iterator<Item = VertexId> + 'a>>,
    seen: HashSet<VertexId, RandomState>,
}

impl<'a, G> PreorderDepthFirst<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, start: &VertexId) -> GraphResult<Self> {
        if !graph.knows_vertex(start) {
            return Err(GraphError::VertexNotFound(*start));
        }
        Ok(Self {
            graph,
            start: Some(*start),
            frames: vec![],
            seen: HashSet::with_hasher(RandomState::new()),
        })
    }

    fn enter(&mut self, v: VertexId) -> VertexId {
        let graph = self.graph;
        self.seen.insert(v);
        self.frames.push(graph.adjacent(&v));
        v
    }
}

impl<'a, G> Iterator for PreorderDepthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(self.enter(start));
        }
        while let Some(frame) = self.frames.last_mut() {
            match frame.next() {
                Some(v) if !self.seen.contains(&v) => return Some(self.enter(v)),
                Some(_) => {}
                None => {
                    self.frames.pop();
                }
            }
        }
        None
    }
}
