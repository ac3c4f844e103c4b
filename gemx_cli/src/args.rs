use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gemx_common::{ConfigError, MatchSemantics, SolverConfig};
use gemx_parser::InputFormat;
use gemx_solver::{Backend, BackendResolver};

/// GEMX graph matcher - match a query graph against a target graph
#[derive(Parser, Debug)]
#[command(name = "gemx")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding the query graph followed by the target graph
    pub input: PathBuf,

    /// Layout of the input file
    #[arg(long, value_enum, default_value = "adjacency-matrix")]
    pub format: FormatArg,

    /// Optimization backend to load: GLPK, Cplex or Gurobi (any case)
    #[arg(short = 'b', long, default_value = "GLPK")]
    pub backend: Backend,

    /// Matching problem to solve, exact or edit-distance (overrides the config file)
    #[arg(short = 's', long)]
    pub semantics: Option<MatchSemantics>,

    /// Time limit in seconds (overrides the config file)
    #[arg(short = 't', long, value_parser = parse_seconds)]
    pub time_limit: Option<Duration>,

    /// JSON file with solver settings
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Directory to search for backend modules instead of the executable's
    #[arg(long)]
    pub plugin_dir: Option<PathBuf>,

    /// Ask the backend for verbose output
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    /// Solver settings from the config file, with command-line overrides applied
    pub fn to_config(&self) -> Result<SolverConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)?,
            None => SolverConfig::default(),
        };

        let mut builder = SolverConfig::builder()
            .semantics(self.semantics.unwrap_or(base.semantics))
            .maybe_time_limit(self.time_limit.or(base.time_limit))
            .verbose(self.verbose || base.verbose);
        if let Some(threads) = base.threads {
            builder = builder.threads(threads);
        }
        Ok(builder.build())
    }

    /// Module search rooted at `--plugin-dir`, or next to the executable
    pub fn resolver(&self) -> BackendResolver {
        match &self.plugin_dir {
            Some(dir) => BackendResolver::with_base_dir(dir),
            None => BackendResolver::from_current_exe(),
        }
    }
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("'{value}': {e}"))
}

/// Command-line argument wrapper for InputFormat
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    /// Two square 0/1 adjacency matrices, each preceded by its size
    #[value(name = "adjacency-matrix")]
    AdjacencyMatrix,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::AdjacencyMatrix => InputFormat::AdjacencyMatrix,
        }
    }
}
