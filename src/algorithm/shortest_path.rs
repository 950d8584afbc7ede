use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

pub trait ShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// Number of edges on a shortest path from `start` to `end`.
    ///
    /// Returns [GraphError::NoPathExists] if `end` is unreachable from `start`.
    fn shortest_distance(&self, start: &VertexId, end: &VertexId) -> GraphResult<usize> {
        for v in [start, end] {
            if !self.knows_vertex(v) {
                return Err(GraphError::VertexNotFound(*v));
            }
        }
        let mut seen = HashSet::with_hasher(RandomState::new());
        let mut to_visit = VecDeque::new();
        seen.insert(*start);
        to_visit.push_back((*start, 0usize));
        while let Some((current, dist)) = to_visit.pop_front() {
            if current == *end {
                return Ok(dist);
            }
            for v in self.adjacent(&current) {
                if seen.insert(v) {
                    to_visit.push_back((v, dist + 1));
                }
            }
        }
        Err(GraphError::NoPathExists {
            start: *start,
            end: *end,
        })
    }
}

impl<G: QueryableGraph> ShortestPath for G {}
