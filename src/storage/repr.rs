use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::core::marker::EdgeType;

use super::{AdjList, AdjMatrix, ConvertError, IncMatrix};

/// Names of the supported representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    AdjList,
    AdjMatrix,
    IncMatrix,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown representation `{0}`")]
pub struct UnknownRepresentation(pub String);

impl FromStr for Representation {
    type Err = UnknownRepresentation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjlist" => Ok(Representation::AdjList),
            "adjmatrix" => Ok(Representation::AdjMatrix),
            "incmatrix" => Ok(Representation::IncMatrix),
            _ => Err(UnknownRepresentation(s.to_owned())),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Representation::AdjList => "adjlist",
            Representation::AdjMatrix => "adjmatrix",
            Representation::IncMatrix => "incmatrix",
        };
        f.write_str(name)
    }
}

/// An unweighted graph in one of the supported representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repr<Ty> {
    AdjList(AdjList<(), Ty>),
    AdjMatrix(AdjMatrix<Ty>),
    IncMatrix(IncMatrix<Ty>),
}

impl<Ty: EdgeType> Repr<Ty> {
    pub fn representation(&self) -> Representation {
        match self {
            Repr::AdjList(_) => Representation::AdjList,
            Repr::AdjMatrix(_) => Representation::AdjMatrix,
            Repr::IncMatrix(_) => Representation::IncMatrix,
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Repr::AdjList(graph) => graph.vertex_count(),
            Repr::AdjMatrix(matrix) => matrix.vertex_count(),
            Repr::IncMatrix(matrix) => matrix.vertex_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            Repr::AdjList(graph) => graph.edge_count(),
            Repr::AdjMatrix(matrix) => matrix.edge_count(),
            Repr::IncMatrix(matrix) => matrix.edge_count(),
        }
    }

    /// Converts to the adjacency list, which every representation can be
    /// expressed in.
    pub fn to_adj_list(&self) -> AdjList<(), Ty> {
        match self {
            Repr::AdjList(graph) => graph.clone(),
            Repr::AdjMatrix(matrix) => AdjList::from(matrix),
            Repr::IncMatrix(matrix) => AdjList::from(matrix),
        }
    }

    /// Converts the graph into the target representation.
    ///
    /// Fails only if the graph cannot be expressed in the target, that is
    /// parallel edges for the adjacency matrix and undirected self-loops for
    /// the incidence matrix.
    pub fn convert(&self, target: Representation) -> Result<Repr<Ty>, ConvertError> {
        if self.representation() == target {
            return Ok(self.clone());
        }

        let graph = self.to_adj_list();
        match target {
            Representation::AdjList => Ok(Repr::AdjList(graph)),
            Representation::AdjMatrix => AdjMatrix::try_from(&graph).map(Repr::AdjMatrix),
            Representation::IncMatrix => IncMatrix::try_from(&graph).map(Repr::IncMatrix),
        }
    }
}

impl<Ty: EdgeType> From<AdjList<(), Ty>> for Repr<Ty> {
    fn from(graph: AdjList<(), Ty>) -> Self {
        Repr::AdjList(graph)
    }
}

impl<Ty: EdgeType> From<AdjMatrix<Ty>> for Repr<Ty> {
    fn from(matrix: AdjMatrix<Ty>) -> Self {
        Repr::AdjMatrix(matrix)
    }
}

impl<Ty: EdgeType> From<IncMatrix<Ty>> for Repr<Ty> {
    fn from(matrix: IncMatrix<Ty>) -> Self {
        Repr::IncMatrix(matrix)
    }
}
