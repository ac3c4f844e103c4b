//! Loadable backend module wrapping the in-process mock solver.
//!
//! Built as a `cdylib`, it exposes the same entry points a real GLPK, Cplex or
//! Gurobi module would, which lets the loader be exercised end to end.

gemx_solver::declare_backend!(gemx_solver::mock::MockFactory::default());
