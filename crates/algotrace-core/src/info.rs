//! Static algorithm metadata.
//!
//! An [`AlgorithmInfo`] is the descriptor the player shows next to a trace:
//! name, family, complexity, difficulty and a short reference listing. Every
//! generator holds one as a `const`, so it never depends on trace state.

use serde::{Deserialize, Serialize};

use crate::id::AlgorithmId;

/// Algorithm family, used by the player to pick a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    DynamicProgramming,
}

/// Teaching difficulty shown in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Immutable metadata descriptor for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub difficulty: Difficulty,
    /// Pseudocode listing of the traced algorithm.
    pub reference_code: &'static str,
}
