//! Umbrella crate for polyrun.
//!
//! Everything lives in `polyrun-core`; this package re-exports it and hosts
//! the workspace-level integration tests that drive real processes.

pub use polyrun_core::*;
