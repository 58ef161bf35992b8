//! Key derivation and management
//!
//! This module provides functionality for deriving keys and addresses for
//! the supported blockchains.

pub mod ethereum;
pub mod solana;
mod derivation;

pub use derivation::*;
