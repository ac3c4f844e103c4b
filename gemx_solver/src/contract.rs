//! The capability set every optimization backend must provide.
//!
//! A backend exposes exactly one [`SolverFactory`]; the factory creates
//! [`Solver`] instances. How a solver formulates and solves the matching
//! problem is entirely up to the backend.

use std::collections::HashSet;
use std::time::Duration;

use gemx_common::SolverConfig;
use gemx_graph::{Graph, VertexId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mapping from query-graph vertices to target-graph vertices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Correspondence {
    pairs: IndexMap<VertexId, VertexId>,
}

impl Correspondence {
    /// Creates an empty correspondence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `query` to `target`, returning the previous image of `query`.
    pub fn insert(&mut self, query: VertexId, target: VertexId) -> Option<VertexId> {
        self.pairs.insert(query, target)
    }

    /// Image of a query vertex.
    #[must_use]
    pub fn get(&self, query: VertexId) -> Option<VertexId> {
        self.pairs.get(&query).copied()
    }

    /// Number of mapped query vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.pairs.iter().map(|(q, t)| (*q, *t))
    }

    /// Whether no two query vertices share an image.
    #[must_use]
    pub fn is_injective(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.pairs.len());
        self.pairs.values().all(|t| seen.insert(*t))
    }
}

impl FromIterator<(VertexId, VertexId)> for Correspondence {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// A successful match: a correspondence and its cost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Query-to-target vertex mapping.
    pub correspondence: Correspondence,
    /// Objective value of the match; zero for a perfect exact match.
    pub cost: f64,
}

/// The non-success outcomes of a solve call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The backend proved that no valid match exists under the requested semantics.
    #[error("No valid match exists under the requested semantics")]
    Infeasible,
    /// The time budget ran out before a certified result was found.
    #[error("Time limit{} exhausted without a certified result", limit_suffix(.limit))]
    Timeout {
        /// The budget that was exhausted, if the backend reports it.
        limit: Option<Duration>,
    },
    /// The backend itself failed (crash, licensing, internal error).
    #[error("Solver failure: {0}")]
    Failure(String),
}

fn limit_suffix(limit: &Option<Duration>) -> String {
    limit.map_or_else(String::new, |l| format!(" of {l:?}"))
}

impl SolveError {
    /// Whether the backend proved infeasibility.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible)
    }

    /// Whether the time budget was exhausted.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// A matching engine instance.
///
/// Solvers are not reentrant: `solve` takes `&mut self`, and an instance must
/// not be shared across threads unless its backend documents otherwise.
pub trait Solver {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Matches `query` against `target`.
    ///
    /// Both graphs are read-only. For identical graphs, configuration and
    /// backend build the call is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Infeasible`], [`SolveError::Timeout`] or
    /// [`SolveError::Failure`] when no certified match is produced.
    fn solve(
        &mut self,
        query: &Graph,
        target: &Graph,
        config: &SolverConfig,
    ) -> Result<MatchResult, SolveError>;
}

/// Creates [`Solver`] instances for one backend.
pub trait SolverFactory {
    /// Creates a fresh solver.
    fn create(&self) -> Box<dyn Solver>;
}
