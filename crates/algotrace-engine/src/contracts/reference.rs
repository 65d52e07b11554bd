//! Untraced reference implementations.
//!
//! Graph references go through petgraph's `algo` module on
//! [`DemoGraph::to_petgraph`]; DP references are compact rolling-array
//! formulations independent of the traced generators.

use petgraph::algo::{bellman_ford, dijkstra, min_spanning_tree, toposort};
use petgraph::data::Element;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Bfs, EdgeRef};

use algotrace_core::DemoGraph;

/// Shortest distances from `source`, `None` for unreachable vertices.
/// Returns `None` overall when a negative cycle is reachable.
///
/// Uses Dijkstra when every weight is non-negative, Bellman-Ford otherwise.
pub fn single_source(graph: &DemoGraph, source: usize) -> Option<Vec<Option<i64>>> {
    let g = graph.to_petgraph();
    let n = graph.vertex_count();
    if graph.edges().iter().all(|e| e.weight >= 0) {
        let found = dijkstra(&g, NodeIndex::new(source), None, |e| *e.weight());
        return Some((0..n).map(|v| found.get(&NodeIndex::new(v)).copied()).collect());
    }
    let float = g.map(|_, &v| v, |_, &w| w as f64);
    let paths = bellman_ford(&float, NodeIndex::new(source)).ok()?;
    Some(
        paths
            .distances
            .iter()
            .map(|&d| d.is_finite().then_some(d as i64))
            .collect(),
    )
}

/// All-pairs distances, one single-source run per vertex.
pub fn all_pairs(graph: &DemoGraph) -> Option<Vec<Vec<Option<i64>>>> {
    (0..graph.vertex_count())
        .map(|source| single_source(graph, source))
        .collect()
}

/// Vertices reachable from `start`, itself included.
pub fn reachable_count(graph: &DemoGraph, start: usize) -> usize {
    let g = graph.to_petgraph();
    let mut bfs = Bfs::new(&g, NodeIndex::new(start));
    let mut count = 0;
    while bfs.next(&g).is_some() {
        count += 1;
    }
    count
}

/// Total weight of a minimum spanning forest.
pub fn spanning_weight(graph: &DemoGraph) -> i64 {
    let g = graph.to_undirected_petgraph();
    min_spanning_tree(&g)
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

/// Some topological order, or `None` when the graph has a cycle.
pub fn topological_order(graph: &DemoGraph) -> Option<Vec<usize>> {
    let g = graph.to_petgraph();
    toposort(&g, None)
        .ok()
        .map(|order| order.into_iter().map(|n| n.index()).collect())
}

/// True when every edge's source appears before its target in `order`.
pub fn respects_edges(graph: &DemoGraph, order: &[usize]) -> bool {
    let mut position = vec![None; graph.vertex_count()];
    for (i, &v) in order.iter().enumerate() {
        if let Some(slot) = position.get_mut(v) {
            *slot = Some(i);
        }
    }
    graph.edges().iter().all(|e| match (position[e.from], position[e.to]) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    })
}

pub fn fibonacci(n: usize) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

pub fn knapsack(weights: &[usize], values: &[i64], capacity: usize) -> i64 {
    let mut best = vec![0i64; capacity + 1];
    for (&wt, &val) in weights.iter().zip(values) {
        for w in (wt..=capacity).rev() {
            best[w] = best[w].max(best[w - wt] + val);
        }
    }
    best[capacity]
}

pub fn lcs_length(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row = vec![0usize; b.len() + 1];
    for ca in a.chars() {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb { diagonal + 1 } else { up.max(row[j]) };
            diagonal = up;
        }
    }
    row[b.len()]
}

/// Patience-sorting length of the longest strictly increasing subsequence.
pub fn lis_length(values: &[i64]) -> usize {
    let mut tails: Vec<i64> = Vec::new();
    for &v in values {
        let at = tails.partition_point(|&t| t < v);
        if at == tails.len() {
            tails.push(v);
        } else {
            tails[at] = v;
        }
    }
    tails.len()
}

pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(up).min(row[j])
            };
            diagonal = up;
        }
    }
    row[b.len()]
}

/// Fewest coins, `-1` when the amount cannot be made.
pub fn coin_change(coins: &[usize], amount: usize) -> i64 {
    let mut best: Vec<Option<usize>> = vec![None; amount + 1];
    best[0] = Some(0);
    for a in 1..=amount {
        best[a] = coins
            .iter()
            .filter(|&&c| c > 0 && c <= a)
            .filter_map(|&c| best[a - c].map(|k| k + 1))
            .min();
    }
    best[amount].map_or(-1, |k| k as i64)
}

pub fn matrix_chain(dimensions: &[(u64, u64)]) -> u64 {
    let n = dimensions.len();
    let mut cost = vec![vec![0u64; n]; n];
    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            cost[i][j] = (i..j)
                .map(|k| cost[i][k] + cost[k + 1][j] + dimensions[i].0 * dimensions[k].1 * dimensions[j].1)
                .min()
                .unwrap_or(0);
        }
    }
    if n == 0 {
        0
    } else {
        cost[0][n - 1]
    }
}

/// Fewest cuts via the prefix formulation: `cuts[j]` for `s[..=j]`.
pub fn palindrome_cuts(text: &str) -> usize {
    let s: Vec<char> = text.chars().collect();
    let n = s.len();
    let is_palindrome = |i: usize, j: usize| (0..=(j - i) / 2).all(|d| s[i + d] == s[j - d]);
    let mut cuts = vec![0usize; n];
    for j in 0..n {
        cuts[j] = if is_palindrome(0, j) {
            0
        } else {
            (1..=j)
                .filter(|&i| is_palindrome(i, j))
                .map(|i| cuts[i - 1] + 1)
                .min()
                .unwrap_or(j)
        };
    }
    cuts.last().copied().unwrap_or(0)
}
