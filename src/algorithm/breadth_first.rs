use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Level-order traversal from `start`, nearest vertices first.
    fn breadth_first(&self, start: &VertexId) -> GraphResult<BreadthFirst<'_, Self>> {
        BreadthFirst::new(self, start)
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}

pub struct BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    to_visit: VecDeque<VertexId>,
    seen: HashSet<VertexId, RandomState>,
}

impl<'a, G> BreadthFirst<'a, G>
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
            to_visit: VecDeque::from([*start]),
            seen,
        })
    }
}

impl<'a, G> Iterator for BreadthFirst<'a, G>
where
    G: QueryableGraph,
{
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.to_visit.pop_front()?;
        for v in self.graph.adjacent(&current) {
            if self.seen.insert(v) {
                self.to_visit.push_back(v);
            }
        }
        Some(current)
    }
}
