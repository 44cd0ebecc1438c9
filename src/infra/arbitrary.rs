use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{core::marker::EdgeType, storage::AdjList};

const MAX_VERTICES: usize = 256;

impl<'a, E, Ty> Arbitrary<'a> for AdjList<E, Ty>
where
    E: Arbitrary<'a> + Clone,
    Ty: EdgeType,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertex_count = u.int_in_range(0..=MAX_VERTICES)?;
        let mut graph = AdjList::with_vertices(vertex_count);

        if vertex_count == 0 {
            return Ok(graph);
        }

        for edge in u.arbitrary_iter::<(usize, usize, E)>()? {
            let (from, to, edge) = edge?;
            graph.add_edge(from % vertex_count, to % vertex_count, edge);
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::{Arbitrary, Unstructured};

    use crate::{core::marker::Undirected, infra::testing::check_consistency, storage::AdjList};

    #[test]
    fn arbitrary_graph_is_consistent() {
        let data = (0..=255u8).cycle().take(4096).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);

        let graph = AdjList::<u8, Undirected>::arbitrary(&mut u).unwrap();
        check_consistency(&graph).unwrap();
    }
}
