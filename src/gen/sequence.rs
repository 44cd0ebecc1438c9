//! Reconstruction of graphs from [degree sequences].
//!
//! [degree sequences]: https://en.wikipedia.org/wiki/Degree_(graph_theory)#Degree_sequence

use crate::{core::facts::has_even_degree_sum, graph::Graph};

/// Returns `true` if some simple graph has exactly the given degrees.
///
/// The empty sequence is graphic.
pub fn is_graphic(sequence: &[usize]) -> bool {
    havel_hakimi(sequence, |_, _| {})
}

/// Builds a simple graph with the given degrees using the [Havel-Hakimi]
/// construction, or returns `None` if the sequence is not graphic.
///
/// Vertex `i` of the result has degree `sequence[i]`.
///
/// [Havel-Hakimi]: https://en.wikipedia.org/wiki/Havel%E2%80%93Hakimi_algorithm
///
/// # Examples
///
/// ```
/// use grafo::gen::from_graphic_sequence;
///
/// let graph = from_graphic_sequence(&[2, 2, 2]).unwrap();
/// assert_eq!(graph.edge_count(), 3);
///
/// assert!(from_graphic_sequence(&[3, 1, 1]).is_none());
/// ```
pub fn from_graphic_sequence(sequence: &[usize]) -> Option<Graph> {
    let mut graph = Graph::with_vertices(sequence.len());
    let graphic = havel_hakimi(sequence, |u, v| graph.add_edge(u, v, ()));
    graphic.then_some(graph)
}

/// The [Erdős–Gallai] characterization of graphic sequences.
///
/// [Erdős–Gallai]: https://en.wikipedia.org/wiki/Erd%C5%91s%E2%80%93Gallai_theorem
pub fn erdos_gallai(sequence: &[usize]) -> bool {
    let mut degrees = sequence.to_vec();
    degrees.sort_unstable_by(|a, b| b.cmp(a));

    if !has_even_degree_sum(&degrees) {
        return false;
    }

    let mut prefix = 0;
    for k in 1..=degrees.len() {
        prefix += degrees[k - 1];
        let rest = degrees[k..].iter().map(|&d| d.min(k)).sum::<usize>();

        if prefix > k * (k - 1) + rest {
            return false;
        }
    }

    true
}

/// Repeatedly connects the vertex with the largest remaining degree `d` to
/// the `d` vertices with the next largest remaining degrees.
fn havel_hakimi(sequence: &[usize], mut add_edge: impl FnMut(usize, usize)) -> bool {
    let n = sequence.len();

    if !has_even_degree_sum(sequence) || sequence.iter().any(|&d| d >= n) {
        return false;
    }

    let mut remaining = sequence.to_vec();
    let mut order = (0..n).collect::<Vec<_>>();

    loop {
        // Stable, so equal degrees keep their relative order between rounds.
        order.sort_by(|&u, &v| remaining[v].cmp(&remaining[u]));

        let Some(&hub) = order.first() else {
            return true;
        };

        let degree = remaining[hub];
        if degree == 0 {
            return true;
        }

        if degree >= n {
            return false;
        }

        for &v in &order[1..=degree] {
            if remaining[v] == 0 {
                return false;
            }

            remaining[v] -= 1;
            add_edge(hub, v);
        }

        remaining[hub] = 0;
    }
}
