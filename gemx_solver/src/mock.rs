//! In-process stand-in backend with predictable outcomes.

use std::time::Duration;

use gemx_common::{MatchSemantics, SolverConfig};
use gemx_graph::Graph;
use tracing::debug;

use crate::{Correspondence, MatchResult, SolveError, Solver, SolverFactory};

/// What a [`MockSolver`] does when asked to solve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MockBehavior {
    /// Maps query vertex `i` to target vertex `i`.
    ///
    /// Infeasible when the query has more vertices than the target, or, under
    /// exact semantics, when a query edge has no image. Under edit-distance
    /// semantics each missing edge costs one. A zero time limit times out.
    #[default]
    Identity,
    /// Always proves infeasibility.
    Infeasible,
    /// Always exhausts the time budget.
    Timeout,
    /// Always fails with the given message.
    Failure(String),
}

/// Solver following a fixed [`MockBehavior`].
#[derive(Clone, Debug, Default)]
pub struct MockSolver {
    behavior: MockBehavior,
    calls: usize,
}

impl MockSolver {
    /// Solver with the given behavior.
    #[must_use]
    pub const fn new(behavior: MockBehavior) -> Self {
        Self { behavior, calls: 0 }
    }

    /// Number of completed `solve` calls.
    #[must_use]
    pub const fn calls(&self) -> usize {
        self.calls
    }

    fn identity(query: &Graph, target: &Graph, config: &SolverConfig) -> Result<MatchResult, SolveError> {
        if config.time_limit == Some(Duration::ZERO) {
            return Err(SolveError::Timeout {
                limit: config.time_limit,
            });
        }
        if query.vertex_count() > target.vertex_count() {
            return Err(SolveError::Infeasible);
        }

        let missing = query
            .edges()
            .filter(|(_, e)| !target.has_edge(e.origin(), e.target()))
            .count();
        if missing > 0 && config.semantics == MatchSemantics::Exact {
            return Err(SolveError::Infeasible);
        }

        let correspondence: Correspondence = query.vertex_ids().map(|v| (v, v)).collect();
        #[allow(clippy::cast_precision_loss)]
        let cost = missing as f64;
        Ok(MatchResult { correspondence, cost })
    }
}

impl Solver for MockSolver {
    fn name(&self) -> &str {
        "Mock"
    }

    fn solve(
        &mut self,
        query: &Graph,
        target: &Graph,
        config: &SolverConfig,
    ) -> Result<MatchResult, SolveError> {
        self.calls += 1;
        debug!("Mock solve #{} ({:?}) on {} against {}", self.calls, self.behavior, query, target);

        match &self.behavior {
            MockBehavior::Identity => Self::identity(query, target, config),
            MockBehavior::Infeasible => Err(SolveError::Infeasible),
            MockBehavior::Timeout => Err(SolveError::Timeout {
                limit: config.time_limit,
            }),
            MockBehavior::Failure(message) => Err(SolveError::Failure(message.clone())),
        }
    }
}

/// Factory producing [`MockSolver`]s.
#[derive(Clone, Debug, Default)]
pub struct MockFactory {
    behavior: MockBehavior,
}

impl MockFactory {
    /// Factory whose solvers follow `behavior`.
    #[must_use]
    pub const fn new(behavior: MockBehavior) -> Self {
        Self { behavior }
    }
}

impl SolverFactory for MockFactory {
    fn create(&self) -> Box<dyn Solver> {
        Box::new(MockSolver::new(self.behavior.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemx_graph::{Orientation, VertexId};

    fn path(id: &str, n: usize) -> Graph {
        let mut g = Graph::with_capacity(id, Orientation::Directed, n);
        let ids: Vec<_> = (0..n).map(|i| g.add_vertex(i.to_string())).collect();
        for pair in ids.windows(2) {
            g.add_edge(pair[0], pair[1]).unwrap();
        }
        g
    }

    #[test]
    fn test_identity_on_subgraph() {
        let mut solver = MockSolver::default();
        let result = solver
            .solve(&path("q", 2), &path("t", 3), &SolverConfig::default())
            .unwrap();

        assert_eq!(result.cost, 0.0);
        assert_eq!(result.correspondence.len(), 2);
        assert_eq!(result.correspondence.get(VertexId::new(1)), Some(VertexId::new(1)));
        assert!(result.correspondence.is_injective());
        assert_eq!(solver.calls(), 1);
    }

    #[test]
    fn test_identity_larger_query_is_infeasible() {
        let mut solver = MockSolver::default();
        let err = solver
            .solve(&path("q", 3), &path("t", 2), &SolverConfig::default())
            .unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_identity_missing_edge_costs_under_edit_distance() {
        let query = path("q", 3);
        let mut target = Graph::new("t", Orientation::Directed);
        for i in 0..3 {
            target.add_vertex(i.to_string());
        }

        let mut solver = MockSolver::default();
        assert!(solver
            .solve(&query, &target, &SolverConfig::default())
            .unwrap_err()
            .is_infeasible());

        let config = SolverConfig::builder()
            .semantics(MatchSemantics::EditDistance)
            .build();
        let result = solver.solve(&query, &target, &config).unwrap();
        assert_eq!(result.cost, 2.0);
    }

    #[test]
    fn test_identity_zero_time_limit_times_out() {
        let config = SolverConfig::builder().time_limit(Duration::ZERO).build();
        let err = MockSolver::default()
            .solve(&path("q", 1), &path("t", 1), &config)
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::Timeout {
                limit: Some(Duration::ZERO)
            }
        );
    }

    #[test]
    fn test_scripted_failure() {
        let factory = MockFactory::new(MockBehavior::Failure("no license".to_string()));
        let mut solver = factory.create();
        let err = solver
            .solve(&path("q", 1), &path("t", 1), &SolverConfig::default())
            .unwrap_err();
        assert_eq!(err, SolveError::Failure("no license".to_string()));
    }
}
