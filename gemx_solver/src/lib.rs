//! Backend selection and the solver contract.
//!
//! A [`Backend`] names an optimization engine family. A [`BackendLoader`]
//! turns it into a ready [`Solver`]: [`DynamicLoader`] locates the backend's
//! module with a [`BackendResolver`] and loads it at runtime, while
//! [`StaticRegistry`] instantiates backends linked into the binary.
//!
//! ```no_run
//! use gemx_common::SolverConfig;
//! use gemx_solver::{Backend, BackendLoader, DynamicLoader};
//!
//! let pair = gemx_parser::parse_data("1\n0\n1\n0\n").unwrap();
//! let mut solver = DynamicLoader::default().load(Backend::Glpk).unwrap();
//! let result = solver.solve(&pair.query, &pair.target, &SolverConfig::default());
//! ```

mod backend;
mod contract;
mod error;
mod loader;
pub mod mock;
mod plugin;
mod registry;
mod resolver;

pub use crate::backend::{Backend, UnknownBackend};
pub use crate::contract::{Correspondence, MatchResult, SolveError, Solver, SolverFactory};
pub use crate::error::ResolveError;
pub use crate::loader::{BackendLoader, DynamicLoader, LoadedSolver};
pub use crate::plugin::{
    ABI_VERSION_SYMBOL, AbiVersionFn, FACTORY_SYMBOL, FactoryFn, PLUGIN_ABI_VERSION, check_abi_version,
};
pub use crate::registry::{FactoryConstructor, StaticRegistry};
pub use crate::resolver::{BackendResolver, DEBUG_SUFFIX, MODULE_PREFIX, Platform};
