use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A backend name that is not part of [`Backend::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown backend '{0}' (expected one of: GLPK, Cplex, Gurobi)")]
pub struct UnknownBackend(pub String);

/// Supported optimization engine families.
///
/// The set is closed at build time; the module implementing each one is
/// located and loaded at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Backend {
    /// GNU Linear Programming Kit.
    Glpk,
    /// IBM ILOG CPLEX.
    Cplex,
    /// Gurobi Optimizer.
    Gurobi,
}

impl Backend {
    /// Every supported backend.
    pub const ALL: [Self; 3] = [Self::Glpk, Self::Cplex, Self::Gurobi];

    /// Logical name, used to build the module file name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Glpk => "GLPK",
            Self::Cplex => "Cplex",
            Self::Gurobi => "Gurobi",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownBackend(s.to_string()))
    }
}
