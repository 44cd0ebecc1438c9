//! Export of graphs into formats understood by rendering tools.

use std::{
    fmt::Display,
    io::{self, Write},
};

use crate::{core::marker::EdgeType, storage::AdjList};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// [Graphviz DOT](https://graphviz.org/doc/info/lang.html) exporter.
///
/// Vertices are labelled by their index, edges by the label returned from the
/// provided function. An empty label omits the attribute.
pub struct Dot<E> {
    name: String,
    get_edge_label: Box<dyn Fn(&E) -> String>,
}

impl<E> Dot<E> {
    pub fn new<F>(name: Option<String>, get_edge_label: F) -> Self
    where
        F: Fn(&E) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_edge_label: Box::new(get_edge_label),
        }
    }

    pub fn to_string<Ty: EdgeType>(&self, graph: &AdjList<E, Ty>) -> String {
        let mut out = Vec::new();
        self.export(graph, &mut out)
            .expect("writing to vec does not fail");

        String::from_utf8(out).expect("dot format is text format")
    }
}

impl Dot<()> {
    pub fn unweighted(name: Option<String>) -> Self {
        Self::new(name, |_| String::new())
    }
}

impl<E: Display> Dot<E> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |e| format!("{e}"))
    }
}

impl<E, Ty: EdgeType> Export<AdjList<E, Ty>> for Dot<E> {
    fn export<W: Write>(&self, graph: &AdjList<E, Ty>, out: &mut W) -> io::Result<()> {
        if graph.is_directed() {
            out.write_all(b"digraph ")?;
        } else {
            out.write_all(b"graph ")?;
        }

        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for vertex in graph.vertices() {
            writeln!(out, "    v{vertex} [label=\"{vertex}\"];")?;
        }

        let line = if graph.is_directed() { "->" } else { "--" };
        for (from, to, edge) in graph.edges() {
            let label = (self.get_edge_label)(edge);
            if label.is_empty() {
                writeln!(out, "    v{from} {line} v{to};")?;
            } else {
                writeln!(out, "    v{from} {line} v{to} [label={label:?}];")?;
            }
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::marker::{Directed, Undirected};

    #[test]
    fn unweighted_undirected() {
        let graph = AdjList::<(), Undirected>::from_edges(3, [(0, 1), (2, 1)]);
        let dot = Dot::unweighted(None).to_string(&graph);

        assert_eq!(
            dot,
            "graph G {\n    v0 [label=\"0\"];\n    v1 [label=\"1\"];\n    v2 [label=\"2\"];\n    v0 -- v1;\n    v1 -- v2;\n}\n"
        );
    }

    #[test]
    fn weighted_directed() {
        let graph = AdjList::<i32, Directed>::from_edges(2, [(1, 0, 7)]);
        let dot = Dot::with_display(Some(String::from("flow"))).to_string(&graph);

        assert!(dot.starts_with("digraph flow {\n"));
        assert!(dot.contains("    v1 -> v0 [label=\"7\"];\n"));
    }
}
