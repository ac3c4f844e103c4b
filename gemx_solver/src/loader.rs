use std::fmt;
use std::path::{Path, PathBuf};

use gemx_common::SolverConfig;
use gemx_graph::Graph;
use libloading::Library;
use tracing::{debug, info};

use crate::plugin::{ABI_VERSION_SYMBOL, AbiVersionFn, FACTORY_SYMBOL, FactoryFn, check_abi_version};
use crate::{Backend, BackendResolver, MatchResult, ResolveError, SolveError, Solver, SolverFactory};

/// Produces a ready solver for a backend.
pub trait BackendLoader {
    /// Acquires a fresh solver instance.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the backend is unavailable or unusable.
    fn load(&self, backend: Backend) -> Result<Box<dyn Solver>, ResolveError>;
}

/// Loads backend modules from disk at runtime.
#[derive(Clone, Debug)]
pub struct DynamicLoader {
    resolver: BackendResolver,
}

impl DynamicLoader {
    /// Creates a loader that searches where `resolver` points.
    #[must_use]
    pub const fn new(resolver: BackendResolver) -> Self {
        Self { resolver }
    }

    /// The resolver used to locate modules.
    #[must_use]
    pub const fn resolver(&self) -> &BackendResolver {
        &self.resolver
    }

    /// Locates, loads and verifies the module for `backend`, then instantiates
    /// its solver.
    ///
    /// # Errors
    ///
    /// See [`DynamicLoader::open_path`].
    pub fn open(&self, backend: Backend) -> Result<LoadedSolver, ResolveError> {
        let path = self.resolver.select_path(backend);
        self.open_path(backend, &path)
    }

    /// Loads the module at `path` as the implementation of `backend`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::BackendLoadFailed`] if the file cannot be loaded as a
    /// module, [`ResolveError::BackendIncompatible`] if it lacks the entry
    /// points, reports another interface revision, or yields no factory.
    pub fn open_path(&self, backend: Backend, path: &Path) -> Result<LoadedSolver, ResolveError> {
        info!("Loading {} backend from {}", backend, path.display());

        let incompatible = |reason: String| ResolveError::BackendIncompatible {
            backend,
            path: Some(path.to_path_buf()),
            reason,
        };

        // SAFETY: module initializers run here; backend modules are trusted to
        // be built against this crate.
        let library = unsafe { Library::new(path) }.map_err(|e| ResolveError::BackendLoadFailed {
            backend,
            path: Some(path.to_path_buf()),
            reason: e.to_string(),
        })?;

        // SAFETY: the symbol types match what `declare_backend!` exports.
        let abi_version: AbiVersionFn = *unsafe { library.get::<AbiVersionFn>(ABI_VERSION_SYMBOL) }
            .map_err(|e| incompatible(e.to_string()))?;
        let found = unsafe { abi_version() };
        debug!("{} module reports interface revision {}", backend, found);
        check_abi_version(backend, path, found)?;

        let factory_fn: FactoryFn = *unsafe { library.get::<FactoryFn>(FACTORY_SYMBOL) }
            .map_err(|e| incompatible(e.to_string()))?;
        let raw = unsafe { factory_fn() };
        if raw.is_null() {
            return Err(incompatible("module returned no solver factory".to_string()));
        }

        // SAFETY: non-null pointers from the entry point come from `Box::into_raw`.
        let factory: Box<Box<dyn SolverFactory>> = unsafe { Box::from_raw(raw) };
        let solver = factory.create();
        drop(factory);

        info!("Instantiated {} solver '{}'", backend, solver.name());
        Ok(LoadedSolver {
            solver,
            backend,
            path: path.to_path_buf(),
            _library: library,
        })
    }
}

impl Default for DynamicLoader {
    fn default() -> Self {
        Self::new(BackendResolver::from_current_exe())
    }
}

impl BackendLoader for DynamicLoader {
    fn load(&self, backend: Backend) -> Result<Box<dyn Solver>, ResolveError> {
        Ok(Box::new(self.open(backend)?))
    }
}

/// A solver together with the module that provides its code.
///
/// Dropping it destroys the solver and then unloads the module.
pub struct LoadedSolver {
    // Declared before `_library`: fields drop in order.
    solver: Box<dyn Solver>,
    backend: Backend,
    path: PathBuf,
    _library: Library,
}

impl LoadedSolver {
    /// Backend this solver implements.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// File the module was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for LoadedSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedSolver")
            .field("solver", &self.solver.name())
            .field("backend", &self.backend)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Solver for LoadedSolver {
    fn name(&self) -> &str {
        self.solver.name()
    }

    fn solve(
        &mut self,
        query: &Graph,
        target: &Graph,
        config: &SolverConfig,
    ) -> Result<MatchResult, SolveError> {
        self.solver.solve(query, target, config)
    }
}
