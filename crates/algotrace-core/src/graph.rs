//! Demonstration graph model shared by the graph generators.
//!
//! A [`DemoGraph`] is a small weighted edge list with a fixed vertex count
//! and a directedness flag. Generators read it either as an edge list in
//! input order (Bellman-Ford, Kruskal) or as an adjacency matrix scanned in
//! column order (DFS, BFS, Dijkstra, Prim). A weight of `0` in matrix form
//! means "no edge", so edge lists reject zero weights. Weights are bounded by
//! [`MAX_WEIGHT`] in magnitude so path sums stay far from `i64` overflow.
//!
//! [`DemoGraph::to_petgraph`] bridges to petgraph for the reference
//! implementations used when verifying traces.

use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largest accepted absolute edge weight.
pub const MAX_WEIGHT: i64 = 1_000_000_000;

fn check_weight(from: usize, to: usize, weight: i64) -> Result<(), CoreError> {
    if weight == 0 {
        return Err(CoreError::InvalidGraph {
            reason: format!("edge {} -> {} has weight 0, which reads as no edge", from, to),
        });
    }
    if weight.abs() > MAX_WEIGHT {
        return Err(CoreError::InvalidGraph {
            reason: format!(
                "edge {} -> {} has weight {}, limit is +/-{}",
                from, to, weight, MAX_WEIGHT
            ),
        });
    }
    Ok(())
}

/// A weighted edge `from -> to`. Undirected graphs treat it as symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

impl WeightedEdge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        WeightedEdge { from, to, weight }
    }
}

/// A small graph with a fixed vertex count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoGraph {
    vertex_count: usize,
    directed: bool,
    edges: Vec<WeightedEdge>,
}

impl DemoGraph {
    /// Builds a graph from `(from, to, weight)` triples, rejecting endpoints
    /// outside `0..vertex_count` and zero or out-of-range weights.
    pub fn from_edges(
        vertex_count: usize,
        directed: bool,
        edges: impl IntoIterator<Item = (usize, usize, i64)>,
    ) -> Result<Self, CoreError> {
        let edges: Vec<WeightedEdge> = edges
            .into_iter()
            .map(|(from, to, weight)| WeightedEdge::new(from, to, weight))
            .collect();
        for edge in &edges {
            for vertex in [edge.from, edge.to] {
                if vertex >= vertex_count {
                    return Err(CoreError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            check_weight(edge.from, edge.to, edge.weight)?;
        }
        Ok(DemoGraph {
            vertex_count,
            directed,
            edges,
        })
    }

    /// Builds a graph from an adjacency matrix where `0` means "no edge".
    ///
    /// For undirected graphs only the upper triangle is read, and the matrix
    /// must be symmetric.
    pub fn from_matrix(matrix: &[Vec<i64>], directed: bool) -> Result<Self, CoreError> {
        let n = matrix.len();
        if let Some(row) = matrix.iter().position(|row| row.len() != n) {
            return Err(CoreError::InvalidGraph {
                reason: format!(
                    "adjacency matrix row {} has {} columns, expected {}",
                    row,
                    matrix[row].len(),
                    n
                ),
            });
        }
        let mut edges = Vec::new();
        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                if !directed {
                    if matrix[j][i] != weight {
                        return Err(CoreError::InvalidGraph {
                            reason: format!(
                                "undirected matrix is not symmetric at ({}, {})",
                                i, j
                            ),
                        });
                    }
                    if j < i {
                        continue;
                    }
                }
                check_weight(i, j, weight)?;
                edges.push(WeightedEdge::new(i, j, weight));
            }
        }
        Ok(DemoGraph {
            vertex_count: n,
            directed,
            edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Edges in input order.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Edges as directed arcs. An undirected edge yields `from -> to`
    /// immediately followed by `to -> from`.
    pub fn arcs(&self) -> Vec<WeightedEdge> {
        if self.directed {
            return self.edges.clone();
        }
        self.edges
            .iter()
            .flat_map(|e| [*e, WeightedEdge::new(e.to, e.from, e.weight)])
            .collect()
    }

    /// Returns `Err` unless `vertex` belongs to the graph.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), CoreError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(CoreError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Dense matrix view. `0` means "no edge"; parallel edges keep the
    /// lightest weight.
    pub fn adjacency_matrix(&self) -> Vec<Vec<i64>> {
        let mut matrix = vec![vec![0; self.vertex_count]; self.vertex_count];
        for arc in self.arcs() {
            let cell = &mut matrix[arc.from][arc.to];
            if *cell == 0 || arc.weight < *cell {
                *cell = arc.weight;
            }
        }
        matrix
    }

    /// Out-neighbors of `vertex` in ascending index order.
    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        let matrix = self.adjacency_matrix();
        matrix
            .get(vertex)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &w)| w != 0)
                    .map(|(v, _)| v)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Converts to a petgraph digraph whose node weights are the vertex
    /// indices. Undirected edges become a pair of opposite arcs.
    pub fn to_petgraph(&self) -> DiGraph<usize, i64> {
        let mut graph = DiGraph::with_capacity(self.vertex_count, self.edges.len() * 2);
        let nodes: Vec<NodeIndex> = (0..self.vertex_count).map(|v| graph.add_node(v)).collect();
        for edge in &self.edges {
            graph.add_edge(nodes[edge.from], nodes[edge.to], edge.weight);
            if !self.directed {
                graph.add_edge(nodes[edge.to], nodes[edge.from], edge.weight);
            }
        }
        graph
    }

    /// Converts to an undirected petgraph graph, ignoring edge direction.
    pub fn to_undirected_petgraph(&self) -> UnGraph<usize, i64> {
        let mut graph = UnGraph::with_capacity(self.vertex_count, self.edges.len());
        let nodes: Vec<NodeIndex> = (0..self.vertex_count).map(|v| graph.add_node(v)).collect();
        for edge in &self.edges {
            graph.add_edge(nodes[edge.from], nodes[edge.to], edge.weight);
        }
        graph
    }
}
