//! Wallet Manager - HD multi-chain wallet core
//!
//! This library provides core functionality for turning a single BIP-39
//! mnemonic into independent per-chain keypairs (Solana and Ethereum),
//! including mnemonic generation, hierarchical key derivation, address
//! encoding, and in-memory wallet bookkeeping.

pub mod error;
pub mod crypto;
pub mod account;

// Re-export commonly used types for convenience
pub use account::{WalletManager, WalletRecord, WalletRegistry};
pub use crypto::keys::Chain;
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
