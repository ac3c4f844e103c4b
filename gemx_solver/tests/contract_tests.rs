#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::time::Duration;

use gemx_common::{MatchSemantics, SolverConfig};
use gemx_parser::parse_data;
use gemx_solver::mock::{MockBehavior, MockFactory};
use gemx_solver::{Backend, BackendLoader, MatchResult, SolveError, SolverFactory, StaticRegistry};
use rstest::rstest;

mod common;

use common::init_test_logger;

const SCENARIO: &str = "2\n0 1\n0 0\n2\n1 0\n0 1\n";

fn identity() -> Box<dyn SolverFactory> {
    Box::new(MockFactory::default())
}

fn infeasible() -> Box<dyn SolverFactory> {
    Box::new(MockFactory::new(MockBehavior::Infeasible))
}

fn unlicensed() -> Box<dyn SolverFactory> {
    Box::new(MockFactory::new(MockBehavior::Failure("license expired".to_string())))
}

fn registry() -> StaticRegistry {
    StaticRegistry::new()
        .with(Backend::Glpk, identity)
        .with(Backend::Cplex, infeasible)
        .with(Backend::Gurobi, unlicensed)
}

#[test]
fn test_parse_resolve_solve() {
    init_test_logger();
    let pair = parse_data("2\n0 1\n0 0\n3\n0 1 0\n0 0 1\n0 0 0\n").unwrap();

    let mut solver = registry().load(Backend::Glpk).unwrap();
    let MatchResult { correspondence, cost } = solver
        .solve(&pair.query, &pair.target, &SolverConfig::default())
        .unwrap();

    assert_eq!(cost, 0.0);
    assert_eq!(correspondence.len(), pair.query.vertex_count());
    assert!(correspondence.is_injective());
    for (q, t) in correspondence.iter() {
        assert!(pair.target.vertex(t).is_some(), "{q} -> {t}");
    }
}

#[rstest]
#[case::infeasible(Backend::Cplex, SolveError::Infeasible)]
#[case::failure(Backend::Gurobi, SolveError::Failure("license expired".to_string()))]
fn test_outcomes_are_distinguishable(#[case] backend: Backend, #[case] expected: SolveError) {
    let pair = parse_data(SCENARIO).unwrap();
    let mut solver = registry().load(backend).unwrap();
    let err = solver
        .solve(&pair.query, &pair.target, &SolverConfig::default())
        .unwrap_err();
    assert_eq!(err, expected);
}

#[test]
fn test_exact_vs_edit_distance() {
    let pair = parse_data(SCENARIO).unwrap();
    let mut solver = MockFactory::default().create();

    let exact = solver.solve(&pair.query, &pair.target, &SolverConfig::default());
    assert_eq!(exact, Err(SolveError::Infeasible));

    let config = SolverConfig::builder()
        .semantics(MatchSemantics::EditDistance)
        .build();
    let tolerant = solver.solve(&pair.query, &pair.target, &config).unwrap();
    assert_eq!(tolerant.cost, 1.0);
}

#[test]
fn test_timeout_carries_limit() {
    let pair = parse_data(SCENARIO).unwrap();
    let config = SolverConfig::builder().time_limit(Duration::from_secs(3)).build();
    let mut solver = MockFactory::new(MockBehavior::Timeout).create();

    let err = solver.solve(&pair.query, &pair.target, &config).unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(
        err,
        SolveError::Timeout {
            limit: Some(Duration::from_secs(3))
        }
    );
}

#[test]
fn test_solver_is_reusable_and_inputs_untouched() {
    let pair = parse_data(SCENARIO).unwrap();
    let before = pair.clone();
    let mut solver = MockFactory::default().create();
    let config = SolverConfig::builder()
        .semantics(MatchSemantics::EditDistance)
        .build();

    let first = solver.solve(&pair.query, &pair.target, &config).unwrap();
    let second = solver.solve(&pair.query, &pair.target, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(pair, before);
}

#[test]
fn test_result_serializes_as_mapping() {
    let pair = parse_data("1\n0\n1\n0\n").unwrap();
    let mut solver = MockFactory::default().create();
    let result = solver
        .solve(&pair.query, &pair.target, &SolverConfig::default())
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "correspondence": { "0": 0 }, "cost": 0.0 }));
}
