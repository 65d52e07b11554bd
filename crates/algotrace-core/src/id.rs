//! Stable identifiers for steps and algorithms.
//!
//! [`StepId`] is a newtype over `u32` so a step position cannot be confused
//! with an array or vertex index. [`AlgorithmId`] is the closed set of
//! algorithms the engine knows how to trace; it round-trips through the
//! kebab-case names used by the CLI and the player.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::info::Category;

/// Position of a step within its trace. Starts at 0 and increases by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StepId(pub u32);

impl StepId {
    /// Returns the step position as a `usize` index into the trace.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every algorithm that can produce a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    LinearSearch,
    BinarySearch,
    DepthFirstSearch,
    BreadthFirstSearch,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Kruskal,
    Prim,
    TopologicalSort,
    Fibonacci,
    Knapsack,
    LongestCommonSubsequence,
    LongestIncreasingSubsequence,
    EditDistance,
    CoinChange,
    MatrixChainMultiplication,
    PalindromePartitioning,
}

impl AlgorithmId {
    /// All algorithm ids in catalogue order.
    pub const ALL: [AlgorithmId; 24] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::HeapSort,
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
        AlgorithmId::DepthFirstSearch,
        AlgorithmId::BreadthFirstSearch,
        AlgorithmId::Dijkstra,
        AlgorithmId::BellmanFord,
        AlgorithmId::FloydWarshall,
        AlgorithmId::Kruskal,
        AlgorithmId::Prim,
        AlgorithmId::TopologicalSort,
        AlgorithmId::Fibonacci,
        AlgorithmId::Knapsack,
        AlgorithmId::LongestCommonSubsequence,
        AlgorithmId::LongestIncreasingSubsequence,
        AlgorithmId::EditDistance,
        AlgorithmId::CoinChange,
        AlgorithmId::MatrixChainMultiplication,
        AlgorithmId::PalindromePartitioning,
    ];

    /// The kebab-case name used on the command line and in serialized traces.
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::HeapSort => "heap-sort",
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::DepthFirstSearch => "depth-first-search",
            AlgorithmId::BreadthFirstSearch => "breadth-first-search",
            AlgorithmId::Dijkstra => "dijkstra",
            AlgorithmId::BellmanFord => "bellman-ford",
            AlgorithmId::FloydWarshall => "floyd-warshall",
            AlgorithmId::Kruskal => "kruskal",
            AlgorithmId::Prim => "prim",
            AlgorithmId::TopologicalSort => "topological-sort",
            AlgorithmId::Fibonacci => "fibonacci",
            AlgorithmId::Knapsack => "knapsack",
            AlgorithmId::LongestCommonSubsequence => "longest-common-subsequence",
            AlgorithmId::LongestIncreasingSubsequence => "longest-increasing-subsequence",
            AlgorithmId::EditDistance => "edit-distance",
            AlgorithmId::CoinChange => "coin-change",
            AlgorithmId::MatrixChainMultiplication => "matrix-chain-multiplication",
            AlgorithmId::PalindromePartitioning => "palindrome-partitioning",
        }
    }

    /// The family this algorithm belongs to.
    pub fn category(self) -> Category {
        match self {
            AlgorithmId::BubbleSort
            | AlgorithmId::SelectionSort
            | AlgorithmId::InsertionSort
            | AlgorithmId::MergeSort
            | AlgorithmId::QuickSort
            | AlgorithmId::HeapSort => Category::Sorting,
            AlgorithmId::LinearSearch | AlgorithmId::BinarySearch => Category::Searching,
            AlgorithmId::DepthFirstSearch
            | AlgorithmId::BreadthFirstSearch
            | AlgorithmId::Dijkstra
            | AlgorithmId::BellmanFord
            | AlgorithmId::FloydWarshall
            | AlgorithmId::Kruskal
            | AlgorithmId::Prim
            | AlgorithmId::TopologicalSort => Category::Graph,
            _ => Category::DynamicProgramming,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = CoreError;

    /// Accepts the kebab-case name plus a few short aliases (`dfs`, `bfs`,
    /// `lcs`, `lis`, `mcm`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let alias = match normalized.as_str() {
            "dfs" => Some(AlgorithmId::DepthFirstSearch),
            "bfs" => Some(AlgorithmId::BreadthFirstSearch),
            "lcs" => Some(AlgorithmId::LongestCommonSubsequence),
            "lis" => Some(AlgorithmId::LongestIncreasingSubsequence),
            "mcm" => Some(AlgorithmId::MatrixChainMultiplication),
            "topo-sort" => Some(AlgorithmId::TopologicalSort),
            _ => None,
        };
        alias
            .or_else(|| {
                AlgorithmId::ALL
                    .into_iter()
                    .find(|id| id.as_str() == normalized)
            })
            .ok_or(CoreError::UnknownAlgorithm { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_id_display() {
        assert_eq!(format!("{}", StepId(7)), "7");
        assert_eq!(StepId(3).index(), 3);
    }

    #[test]
    fn every_id_round_trips_through_its_name() {
        for id in AlgorithmId::ALL {
            let parsed: AlgorithmId = id.as_str().parse().unwrap();
            assert_eq!(parsed, id);
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn aliases_and_underscores_are_accepted() {
        assert_eq!("dfs".parse::<AlgorithmId>().unwrap(), AlgorithmId::DepthFirstSearch);
        assert_eq!("LCS".parse::<AlgorithmId>().unwrap(), AlgorithmId::LongestCommonSubsequence);
        assert_eq!("coin_change".parse::<AlgorithmId>().unwrap(), AlgorithmId::CoinChange);
    }

    #[test]
    fn unknown_name_fails_fast() {
        let err = "bogo-sort".parse::<AlgorithmId>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownAlgorithm { ref name } if name == "bogo-sort"));
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&AlgorithmId::FloydWarshall).unwrap();
        assert_eq!(json, "\"floyd-warshall\"");
        let back: AlgorithmId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AlgorithmId::FloydWarshall);
    }

    #[test]
    fn categories_partition_the_catalogue() {
        let sorting = AlgorithmId::ALL
            .iter()
            .filter(|id| id.category() == Category::Sorting)
            .count();
        let dp = AlgorithmId::ALL
            .iter()
            .filter(|id| id.category() == Category::DynamicProgramming)
            .count();
        assert_eq!(sorting, 6);
        assert_eq!(dp, 8);
    }
}
