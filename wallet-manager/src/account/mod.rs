//! Account management functionality
//!
//! This module provides the per-chain wallet registry and the session-scoped
//! wallet manager that orchestrates mnemonic handling and key derivation.

mod manager;
mod registry;

pub use manager::*;
pub use registry::*;
