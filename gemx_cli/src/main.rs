//! GEMX command-line matcher
//!
//! Reads a query graph and a target graph from one file, loads the requested
//! optimization backend and prints the vertex correspondence it finds.
//!
//! Exit status: 0 on a match, 1 when the input, configuration or backend is
//! unusable, 2 when no match exists, 3 on timeout, 4 when the backend fails.

mod args;

use std::process::ExitCode;

use clap::Parser;
use gemx_common::ConfigError;
use gemx_parser::ParseError;
use gemx_solver::{BackendLoader, DynamicLoader, MatchResult, ResolveError, SolveError};
use thiserror::Error;
use tracing::{error, info};

use args::Args;

/// Everything that can stop a run short of a match.
#[derive(Debug, Error)]
enum CliError {
    /// Unreadable or invalid config file.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Unreadable or malformed input file.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Backend module missing or unusable.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// Solve finished without a match.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// Result could not be serialized.
    #[error("Could not render result: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Parse(_) | Self::Resolve(_) | Self::Output(_) => 1,
            Self::Solve(SolveError::Infeasible) => 2,
            Self::Solve(SolveError::Timeout { .. }) => 3,
            Self::Solve(SolveError::Failure(_)) => 4,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("gemx: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.to_config()?;
    let pair = gemx_parser::parse_file_with_format(args.format.into(), &args.input)?;
    info!("Query: {}", pair.query);
    info!("Target: {}", pair.target);

    let loader = DynamicLoader::new(args.resolver());
    let mut solver = loader.load(args.backend)?;
    info!("Solving with {} ({})", solver.name(), config.semantics);

    let result = solver.solve(&pair.query, &pair.target, &config)?;
    println!("{}", render(&result, args.json)?);
    Ok(())
}

fn render(result: &MatchResult, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(result);
    }

    let mut out = format!("cost: {}\n", result.cost);
    for (query, target) in result.correspondence.iter() {
        out.push_str(&format!("{query} -> {target}\n"));
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemx_graph::VertexId;
    use gemx_solver::{Backend, Correspondence};
    use rstest::rstest;
    use std::time::Duration;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    #[rstest]
    #[case::infeasible(SolveError::Infeasible, 2)]
    #[case::timeout(SolveError::Timeout { limit: Some(Duration::from_secs(1)) }, 3)]
    #[case::failure(SolveError::Failure("crash".to_string()), 4)]
    fn test_solve_exit_codes(#[case] err: SolveError, #[case] code: u8) {
        assert_eq!(CliError::from(err).exit_code(), code);
    }

    #[test]
    fn test_resolve_exit_code() {
        let err = ResolveError::BackendLoadFailed {
            backend: Backend::Glpk,
            path: None,
            reason: "missing".to_string(),
        };
        assert_eq!(CliError::from(err).exit_code(), 1);
    }

    #[test]
    fn test_render_text() {
        let correspondence: Correspondence = [(v(0), v(1)), (v(1), v(0))].into_iter().collect();
        let result = MatchResult {
            correspondence,
            cost: 0.0,
        };
        assert_eq!(render(&result, false).unwrap(), "cost: 0\nv0 -> v1\nv1 -> v0");
    }
}
