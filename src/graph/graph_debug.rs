use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
    G::Value: std::fmt::Debug,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
    G::Value: std::fmt::Debug,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        write!(f, "{:width$}", "", width = indention)
    }

    fn display_vertex(&self, f: &mut std::fmt::Formatter<'_>, v: &VertexId) -> std::fmt::Result {
        match self.graph.value(v) {
            Some(value) => write!(f, "{:?}", value),
            None => write!(f, "{:?}", v),
        }
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
    G::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            self.display_vertex(f, &v)?;
            writeln!(f)?;
            for n in self.graph.adjacent(&v) {
                self.display_indent(f, 1)?;
                write!(f, "-- ")?;
                self.display_vertex(f, &n)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
