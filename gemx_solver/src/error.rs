use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Backend;

/// Errors raised while acquiring a solver for a backend.
///
/// Both variants occur strictly before any solve attempt.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The backend module could not be loaded.
    #[error("{backend} plugin cannot be loaded{}: {reason}", location(.path.as_deref()))]
    BackendLoadFailed {
        /// Backend being acquired.
        backend: Backend,
        /// Module file the load was attempted from, if any.
        path: Option<PathBuf>,
        /// Underlying platform error text.
        reason: String,
    },

    /// The module loaded but does not expose a usable solver factory.
    #[error("{backend} solver cannot be used{}: {reason}", location(.path.as_deref()))]
    BackendIncompatible {
        /// Backend being acquired.
        backend: Backend,
        /// Module file that was loaded, if any.
        path: Option<PathBuf>,
        /// What the capability check found.
        reason: String,
    },
}

fn location(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| format!(" from '{}'", p.display()))
}

impl ResolveError {
    /// Backend the error concerns.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        match self {
            Self::BackendLoadFailed { backend, .. } | Self::BackendIncompatible { backend, .. } => {
                *backend
            }
        }
    }

    /// Module path the error concerns, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::BackendLoadFailed { path, .. } | Self::BackendIncompatible { path, .. } => {
                path.as_deref()
            }
        }
    }
}
