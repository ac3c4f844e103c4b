//! Module naming and candidate-path search.
//!
//! A backend module is looked for next to the running executable, in this
//! priority order:
//!
//! 1. `<exe dir>/../lib/<module>`
//! 2. `<exe dir>/lib/<module>`
//! 3. `<exe dir>/<module>`
//!
//! The first candidate that exists wins. When none exists the first one is
//! used anyway, so that the load error names a concrete path.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::Backend;

/// Product prefix shared by every backend module file.
pub const MODULE_PREFIX: &str = "gemx";

/// Suffix appended to Windows module names of debug builds.
pub const DEBUG_SUFFIX: &str = "d";

/// Platform family, which decides the module file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `<prefix><name>[d].dll`
    Windows,
    /// `lib<prefix><name>.dylib`
    MacOs,
    /// `lib<prefix><name>.so`
    Unix,
}

impl Platform {
    /// Family of the platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Unix
        }
    }
}

/// Locates backend module files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendResolver {
    base_dir: PathBuf,
    platform: Platform,
    debug_suffix: bool,
}

impl BackendResolver {
    /// Resolver rooted at the directory of the running executable.
    ///
    /// Falls back to the working directory if the executable path is unknown.
    #[must_use]
    pub fn from_current_exe() -> Self {
        let base_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| {
                warn!("Could not determine executable directory, using working directory");
                PathBuf::from(".")
            });
        Self::with_base_dir(base_dir)
    }

    /// Resolver rooted at an explicit directory.
    pub fn with_base_dir<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
            platform: Platform::current(),
            debug_suffix: cfg!(debug_assertions),
        }
    }

    /// Overrides the platform family used for naming.
    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Overrides whether the debug suffix is applied where the platform uses one.
    #[must_use]
    pub fn debug_suffix(mut self, debug_suffix: bool) -> Self {
        self.debug_suffix = debug_suffix;
        self
    }

    /// Directory the search is relative to.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Expected module file name for a backend.
    #[must_use]
    pub fn module_name(&self, backend: Backend) -> String {
        let name = backend.name();
        match self.platform {
            Platform::Windows => {
                let suffix = if self.debug_suffix { DEBUG_SUFFIX } else { "" };
                format!("{MODULE_PREFIX}{name}{suffix}.dll")
            }
            Platform::MacOs => format!("lib{MODULE_PREFIX}{name}.dylib"),
            Platform::Unix => format!("lib{MODULE_PREFIX}{name}.so"),
        }
    }

    /// Candidate module paths in priority order.
    #[must_use]
    pub fn candidate_paths(&self, backend: Backend) -> Vec<PathBuf> {
        let module = self.module_name(backend);
        vec![
            self.base_dir.join("..").join("lib").join(&module),
            self.base_dir.join("lib").join(&module),
            self.base_dir.join(&module),
        ]
    }

    /// Picks the module path to load for a backend.
    ///
    /// Returns the first existing candidate, or the first candidate if none
    /// exists.
    #[must_use]
    pub fn select_path(&self, backend: Backend) -> PathBuf {
        let mut candidates = self.candidate_paths(backend);

        for candidate in &candidates {
            let exists = candidate.exists();
            debug!("Probing {} for {}: exists={}", candidate.display(), backend, exists);
            if exists {
                return candidate.clone();
            }
        }

        let first = candidates.swap_remove(0);
        warn!(
            "No {} module found next to {}, falling back to {}",
            backend,
            self.base_dir.display(),
            first.display()
        );
        first
    }
}
