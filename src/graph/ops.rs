use crate::graph::*;
use quickcheck::Arbitrary;
use rs_quickcheck_util::*;
use std::collections::BTreeSet;

/// Vertices are named by creation order: slot `n` is the `n`-th `AddVertex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    AddVertex(usize),
    RemoveVertex(usize),
    AddEdge((usize, usize)),
    RemoveEdge((usize, usize)),
}

/// A random sequence of graph mutations.
///
/// The value of a vertex is its slot.
/// Only registered vertices are touched by later operations.
#[derive(Clone)]
pub struct Ops {
    pub ops: Vec<Op>,
}

impl std::fmt::Debug for Ops {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.ops)
    }
}

impl Ops {
    pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
        self.ops.iter()
    }

    /// Replays all ops onto a fresh graph and returns it with handles indexed by slot.
    pub fn apply(&self) -> (Graph<usize>, Vec<VertexId>) {
        let mut g = Graph::new();
        let mut handles = vec![];
        for op in self.iter() {
            match *op {
                Op::AddVertex(slot) => {
                    assert_eq!(slot, handles.len());
                    let vid = g.create_vertex(slot);
                    g.add_vertex(&vid).unwrap();
                    handles.push(vid);
                }
                Op::RemoveVertex(slot) => {
                    g.remove_vertex(&handles[slot]).unwrap();
                }
                Op::AddEdge((v1, v2)) => {
                    g.add_edge(&handles[v1], &handles[v2]).unwrap();
                }
                Op::RemoveEdge((v1, v2)) => {
                    g.remove_edge(&handles[v1], &handles[v2]).unwrap();
                }
            }
        }
        (g, handles)
    }

    pub fn removed_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().filter_map(|op| match op {
            Op::RemoveVertex(slot) => Some(*slot),
            _ => None,
        })
    }

    /// Pairs removed by `RemoveEdge` and not connected again afterwards.
    pub fn removed_edges(&self) -> BTreeSet<(usize, usize)> {
        let mut res = BTreeSet::new();
        for op in self.iter() {
            match *op {
                Op::RemoveEdge((v1, v2)) => {
                    res.insert((v1.min(v2), v1.max(v2)));
                }
                Op::AddEdge((v1, v2)) => {
                    res.remove(&(v1.min(v2), v1.max(v2)));
                }
                _ => {}
            }
        }
        res
    }
}

fn pick<T: Copy>(g: &mut quickcheck::Gen, xs: &BTreeSet<T>) -> T {
    let idx = usize::arbitrary(g) % xs.len();
    *xs.iter().nth(idx).unwrap()
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut next_slot = 0;
        let mut known_vid = BTreeSet::new();
        let mut known_edges = BTreeSet::new();
        let ops = gen_bytes(g, b"abcd.", b'.', 0..)
            .iter()
            .filter_map(|_| match u8::arbitrary(g) % 4 {
                0 => {
                    let slot = next_slot;
                    next_slot += 1;
                    known_vid.insert(slot);
                    Some(Op::AddVertex(slot))
                }
                1 => {
                    if known_vid.is_empty() {
                        None
                    } else {
                        let vid = pick(g, &known_vid);
                        known_vid.remove(&vid);
                        known_edges.retain(|(v1, v2)| *v1 != vid && *v2 != vid);
                        Some(Op::RemoveVertex(vid))
                    }
                }
                2 => {
                    if known_vid.is_empty() {
                        None
                    } else {
                        let v1 = pick(g, &known_vid);
                        let v2 = pick(g, &known_vid);
                        known_edges.insert((v1.min(v2), v1.max(v2)));
                        Some(Op::AddEdge((v1, v2)))
                    }
                }
                3 => {
                    // either a present edge, reversed, or any pair which may be absent
                    let (v1, v2) = if !known_edges.is_empty() && bool::arbitrary(g) {
                        let (v1, v2) = pick(g, &known_edges);
                        (v2, v1)
                    } else if !known_vid.is_empty() {
                        (pick(g, &known_vid), pick(g, &known_vid))
                    } else {
                        return None;
                    };
                    known_edges.remove(&(v1.min(v2), v1.max(v2)));
                    Some(Op::RemoveEdge((v1, v2)))
                }
                _ => unreachable!(),
            })
            .collect();
        Self { ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let l = self.ops.len();
        let me = self.clone();
        let it = std::iter::successors(Some(l / 2), move |n| {
            let nxt = (n + l) / 2 + 1;
            if nxt >= l {
                None
            } else {
                Some(nxt)
            }
        })
        .map(move |n| {
            let mut res = me.clone();
            res.ops = me.ops[0..n].to_vec();
            res
        });
        Box::new(it)
    }
}
