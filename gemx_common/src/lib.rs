//! Common types shared across the gemx workspace.
//!
//! This crate holds the solver configuration that flows from the command line
//! through the backend contract.

mod config;

pub use crate::config::*;
