use std::collections::HashMap;

use tracing::info;

use crate::{Backend, BackendLoader, ResolveError, Solver, SolverFactory};

/// Builds the factory of a backend linked into the running binary.
pub type FactoryConstructor = fn() -> Box<dyn SolverFactory>;

/// Startup-time table of in-process backends.
///
/// An alternative to [`DynamicLoader`](crate::DynamicLoader) for builds that
/// link their backends statically.
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    factories: HashMap<Backend, FactoryConstructor>,
}

impl StaticRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` for `backend`, returning the one it replaces.
    pub fn register(&mut self, backend: Backend, constructor: FactoryConstructor) -> Option<FactoryConstructor> {
        self.factories.insert(backend, constructor)
    }

    /// Builder-style [`StaticRegistry::register`].
    #[must_use]
    pub fn with(mut self, backend: Backend, constructor: FactoryConstructor) -> Self {
        self.register(backend, constructor);
        self
    }

    /// Whether `backend` has a constructor.
    #[must_use]
    pub fn contains(&self, backend: Backend) -> bool {
        self.factories.contains_key(&backend)
    }

    /// Registered backends in [`Backend::ALL`] order.
    #[must_use]
    pub fn backends(&self) -> Vec<Backend> {
        Backend::ALL.into_iter().filter(|b| self.contains(*b)).collect()
    }
}

impl BackendLoader for StaticRegistry {
    fn load(&self, backend: Backend) -> Result<Box<dyn Solver>, ResolveError> {
        let constructor = self
            .factories
            .get(&backend)
            .ok_or_else(|| ResolveError::BackendLoadFailed {
                backend,
                path: None,
                reason: "backend is not registered in this build".to_string(),
            })?;

        let solver = constructor().create();
        info!("Instantiated registered {} solver '{}'", backend, solver.name());
        Ok(solver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockFactory;

    fn mock() -> Box<dyn SolverFactory> {
        Box::new(MockFactory::default())
    }

    #[test]
    fn test_registered_backend_instantiates() {
        let registry = StaticRegistry::new().with(Backend::Gurobi, mock);
        assert!(registry.contains(Backend::Gurobi));
        assert_eq!(registry.backends(), vec![Backend::Gurobi]);

        let solver = registry.load(Backend::Gurobi).unwrap();
        assert_eq!(solver.name(), "Mock");
    }

    #[test]
    fn test_unregistered_backend_fails_to_load() {
        let registry = StaticRegistry::new().with(Backend::Glpk, mock);
        let err = registry.load(Backend::Cplex).err().unwrap();
        assert!(matches!(
            err,
            ResolveError::BackendLoadFailed {
                backend: Backend::Cplex,
                path: None,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Cplex plugin cannot be loaded: backend is not registered in this build"
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = StaticRegistry::new();
        assert!(registry.register(Backend::Glpk, mock).is_none());
        assert!(registry.register(Backend::Glpk, mock).is_some());
        assert_eq!(registry.backends(), vec![Backend::Glpk]);
    }
}
