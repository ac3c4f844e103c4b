//! Configuration handed to a solver backend.
//!
//! The core never interprets these options; it only builds the structure and
//! passes it through the backend contract. Enforcement of the time limit is the
//! backend's job.
//!
//! Quick examples
//!
//! Exact matching, no time limit (default):
//! ```
//! use gemx_common::SolverConfig;
//! let cfg = SolverConfig::default();
//! assert!(cfg.time_limit.is_none());
//! ```
//!
//! Edit distance with a ten second budget:
//! ```
//! use std::time::Duration;
//! use gemx_common::{MatchSemantics, SolverConfig};
//! let cfg = SolverConfig::builder()
//!     .semantics(MatchSemantics::EditDistance)
//!     .time_limit(Duration::from_secs(10))
//!     .build();
//! assert_eq!(cfg.semantics, MatchSemantics::EditDistance);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or interpreting a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        /// File that was being read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`SolverConfig`].
    #[error("Invalid configuration '{path}': {source}")]
    Json {
        /// File that was being decoded.
        path: String,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// A matching semantics name was not recognized.
    #[error("Unknown matching semantics '{0}' (expected 'exact' or 'edit-distance')")]
    UnknownSemantics(String),
}

/// Which matching problem the backend is asked to solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchSemantics {
    /// Exact (sub)graph isomorphism: every query vertex and edge must be preserved.
    #[default]
    Exact,
    /// Error-tolerant matching minimizing the graph edit distance.
    EditDistance,
}

impl MatchSemantics {
    /// Returns the stable, user-facing name of these semantics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::EditDistance => "edit-distance",
        }
    }
}

impl fmt::Display for MatchSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchSemantics {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "isomorphism" => Ok(Self::Exact),
            "edit-distance" | "edit_distance" | "ged" => Ok(Self::EditDistance),
            _ => Err(ConfigError::UnknownSemantics(s.to_string())),
        }
    }
}

/// Options passed through to a solver backend.
///
/// - semantics: exact matching or error-tolerant edit distance.
/// - time_limit: optional wall-clock budget. A backend that exhausts it must
///   report a timeout rather than block.
/// - verbose: ask the backend to emit its own solver log.
/// - threads: optional thread-count hint; backends are free to ignore it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Matching semantics selector.
    pub semantics: MatchSemantics,
    /// Optional time budget, serialized as fractional seconds.
    #[serde(with = "duration_secs")]
    pub time_limit: Option<Duration>,
    /// Verbosity flag forwarded to the backend.
    pub verbose: bool,
    /// Thread-count hint forwarded to the backend.
    pub threads: Option<usize>,
}

impl SolverConfig {
    /// Starts a builder with default options.
    #[must_use]
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::default()
    }

    /// Decodes a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text does not describe a configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Json {
            path: "<inline>".to_string(),
            source,
        })
    }

    /// Reads and decodes a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Json`] if its content is invalid.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Loaded solver configuration from {}", path.display());
        Ok(config)
    }
}

/// Builder for [`SolverConfig`].
#[derive(Clone, Debug, Default)]
pub struct SolverConfigBuilder {
    inner: SolverConfig,
}

impl SolverConfigBuilder {
    /// Sets the matching semantics.
    #[must_use]
    pub fn semantics(mut self, semantics: MatchSemantics) -> Self {
        self.inner.semantics = semantics;
        self
    }

    /// Sets a time budget.
    #[must_use]
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.inner.time_limit = Some(limit);
        self
    }

    /// Sets or clears the time budget.
    #[must_use]
    pub fn maybe_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.inner.time_limit = limit;
        self
    }

    /// Sets the verbosity flag.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.inner.verbose = verbose;
        self
    }

    /// Sets the thread-count hint.
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.inner.threads = Some(threads);
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> SolverConfig {
        self.inner
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&d.as_secs_f64()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<f64>::deserialize(d)?;
        secs.map(|s| {
            Duration::try_from_secs_f64(s).map_err(|e| {
                serde::de::Error::custom(format!(
                    "time_limit must be a non-negative number of seconds, got {s}: {e}"
                ))
            })
        })
        .transpose()
    }
}
