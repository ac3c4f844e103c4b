//! Binary interface between the host and a backend module.
//!
//! A backend module is a `cdylib` exporting two unmangled functions:
//!
//! - `gemx_plugin_abi_version() -> u32`, which must return [`PLUGIN_ABI_VERSION`]
//! - `gemx_solver_factory() -> *mut Box<dyn SolverFactory>`, which hands the host
//!   ownership of a heap-allocated factory
//!
//! Use [`declare_backend!`](crate::declare_backend) to generate both. Since
//! trait objects cross the boundary, host and module must be built with the
//! same toolchain and this crate at the same version.

use std::path::Path;

use crate::{Backend, ResolveError, SolverFactory};

/// Interface revision the host expects from backend modules.
pub const PLUGIN_ABI_VERSION: u32 = 1;

/// Null-terminated name of the version query symbol.
pub const ABI_VERSION_SYMBOL: &[u8] = b"gemx_plugin_abi_version\0";

/// Null-terminated name of the factory entry point symbol.
pub const FACTORY_SYMBOL: &[u8] = b"gemx_solver_factory\0";

/// Signature of the version query symbol.
pub type AbiVersionFn = unsafe extern "C" fn() -> u32;

/// Signature of the factory entry point symbol.
#[allow(improper_ctypes_definitions)]
pub type FactoryFn = unsafe extern "C" fn() -> *mut Box<dyn SolverFactory>;

/// Exports the entry points of a backend module.
///
/// ```ignore
/// gemx_solver::declare_backend!(GlpkFactory::default());
/// ```
#[macro_export]
macro_rules! declare_backend {
    ($factory:expr) => {
        /// Interface revision this backend module was built against.
        #[unsafe(no_mangle)]
        pub extern "C" fn gemx_plugin_abi_version() -> u32 {
            $crate::PLUGIN_ABI_VERSION
        }

        /// Transfers ownership of this module's solver factory to the caller.
        #[unsafe(no_mangle)]
        #[allow(improper_ctypes_definitions)]
        pub extern "C" fn gemx_solver_factory() -> *mut ::std::boxed::Box<dyn $crate::SolverFactory> {
            let factory: ::std::boxed::Box<dyn $crate::SolverFactory> =
                ::std::boxed::Box::new($factory);
            ::std::boxed::Box::into_raw(::std::boxed::Box::new(factory))
        }
    };
}

/// Rejects a module whose reported interface revision differs from the host's.
///
/// # Errors
///
/// Returns [`ResolveError::BackendIncompatible`] on a mismatch.
pub fn check_abi_version(backend: Backend, path: &Path, found: u32) -> Result<(), ResolveError> {
    if found == PLUGIN_ABI_VERSION {
        return Ok(());
    }
    Err(ResolveError::BackendIncompatible {
        backend,
        path: Some(path.to_path_buf()),
        reason: format!("module reports interface revision {found}, host expects {PLUGIN_ABI_VERSION}"),
    })
}
