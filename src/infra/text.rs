//! Plain-text dumps of every representation.
//!
//! * Adjacency list: one line per vertex with whitespace-separated neighbor
//!   indices.
//! * Adjacency and incidence matrix: one line per row with space-separated
//!   values.
//! * Weighted adjacency list: one line per vertex with comma-separated
//!   `vertex:weight` pairs.
//!
//! An empty line is a vertex without neighbors (or a row of an incidence
//! matrix without edges). Line numbers in errors are 1-based.

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::{
    core::{error::VertexOutOfBounds, marker::EdgeType},
    storage::{AdjList, AdjMatrix, ConvertError, IncMatrix, Repr, Representation},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("invalid token `{0}`")]
    InvalidToken(String),
    #[error("expected `vertex:weight`, got `{0}`")]
    InvalidPair(String),
    #[error(transparent)]
    Invalid(ConvertError),
}

impl FormatError {
    fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }

    fn invalid_token(index: usize, token: &str) -> Self {
        Self::new(index + 1, FormatErrorKind::InvalidToken(token.to_owned()))
    }
}

impl From<ConvertError> for FormatError {
    fn from(error: ConvertError) -> Self {
        // Errors that span whole columns are attributed to the first line.
        let line = match &error {
            ConvertError::Asymmetric(u, _) | ConvertError::WeightMismatch(u, _) => u + 1,
            ConvertError::NotSquare { row, .. }
            | ConvertError::Ragged { row, .. }
            | ConvertError::InvalidEntry { row, .. } => row + 1,
            ConvertError::SelfLoop(v) | ConvertError::MultiEdge(v, _) => v + 1,
            ConvertError::OutOfBounds(_) | ConvertError::MalformedColumn(_) => 1,
        };

        Self::new(line, FormatErrorKind::Invalid(error))
    }
}

fn parse_rows<T: FromStr>(s: &str) -> Result<Vec<Vec<T>>, FormatError> {
    s.lines()
        .enumerate()
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|token| token.parse().map_err(|_| FormatError::invalid_token(i, token)))
                .collect()
        })
        .collect()
}

fn check_neighbor(line: usize, vertex: usize, vertex_count: usize) -> Result<(), FormatError> {
    VertexOutOfBounds::check(vertex, vertex_count)
        .map_err(|error| FormatError::new(line + 1, FormatErrorKind::Invalid(error.into())))
}

pub fn parse_adj_list<Ty: EdgeType>(s: &str) -> Result<AdjList<(), Ty>, FormatError> {
    let rows = parse_rows::<usize>(s)?;
    let vertex_count = rows.len();

    let mut adjacency = Vec::with_capacity(vertex_count);
    for (i, row) in rows.into_iter().enumerate() {
        for &v in row.iter() {
            check_neighbor(i, v, vertex_count)?;
        }
        adjacency.push(row.into_iter().map(|v| (v, ())).collect());
    }

    Ok(AdjList::from_adjacency(adjacency)?)
}

pub fn parse_adj_matrix<Ty: EdgeType>(s: &str) -> Result<AdjMatrix<Ty>, FormatError> {
    Ok(AdjMatrix::from_rows(&parse_rows(s)?)?)
}

pub fn parse_inc_matrix<Ty: EdgeType>(s: &str) -> Result<IncMatrix<Ty>, FormatError> {
    Ok(IncMatrix::from_rows(&parse_rows(s)?)?)
}

/// Parses the text in the given representation.
pub fn parse<Ty: EdgeType>(s: &str, representation: Representation) -> Result<Repr<Ty>, FormatError> {
    match representation {
        Representation::AdjList => parse_adj_list(s).map(Repr::AdjList),
        Representation::AdjMatrix => parse_adj_matrix(s).map(Repr::AdjMatrix),
        Representation::IncMatrix => parse_inc_matrix(s).map(Repr::IncMatrix),
    }
}

pub fn parse_weighted<W: FromStr + PartialEq, Ty: EdgeType>(s: &str) -> Result<AdjList<W, Ty>, FormatError> {
    let lines = s.lines().collect::<Vec<_>>();
    let vertex_count = lines.len();

    let mut adjacency = Vec::with_capacity(vertex_count);
    for (i, line) in lines.into_iter().enumerate() {
        let mut neighbors = Vec::new();

        if !line.trim().is_empty() {
            for pair in line.split(',').map(str::trim) {
                let (vertex, weight) = pair.split_once(':').ok_or_else(|| {
                    FormatError::new(i + 1, FormatErrorKind::InvalidPair(pair.to_owned()))
                })?;

                let vertex = vertex
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| FormatError::invalid_token(i, vertex))?;
                let weight = weight
                    .trim()
                    .parse::<W>()
                    .map_err(|_| FormatError::invalid_token(i, weight))?;

                check_neighbor(i, vertex, vertex_count)?;
                neighbors.push((vertex, weight));
            }
        }

        adjacency.push(neighbors);
    }

    Ok(AdjList::from_adjacency(adjacency)?)
}

fn dump_rows<T: Display>(rows: impl IntoIterator<Item = impl IntoIterator<Item = T>>) -> String {
    let mut out = String::new();
    for row in rows {
        let line = row
            .into_iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn dump_adj_list<E, Ty: EdgeType>(graph: &AdjList<E, Ty>) -> String {
    dump_rows(graph.vertices().map(|v| graph.neighbors(v)))
}

pub fn dump_adj_matrix<Ty: EdgeType>(matrix: &AdjMatrix<Ty>) -> String {
    dump_rows(matrix.rows())
}

pub fn dump_inc_matrix<Ty: EdgeType>(matrix: &IncMatrix<Ty>) -> String {
    dump_rows(matrix.rows())
}

pub fn dump<Ty: EdgeType>(graph: &Repr<Ty>) -> String {
    match graph {
        Repr::AdjList(graph) => dump_adj_list(graph),
        Repr::AdjMatrix(matrix) => dump_adj_matrix(matrix),
        Repr::IncMatrix(matrix) => dump_inc_matrix(matrix),
    }
}

pub fn dump_weighted<W: Display, Ty: EdgeType>(graph: &AdjList<W, Ty>) -> String {
    let mut out = String::new();
    for v in graph.vertices() {
        let line = graph
            .adjacent(v)
            .iter()
            .map(|(u, w)| format!("{u}:{w}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
