//! Error types for the wallet-manager library

use thiserror::Error;

/// Custom error type for wallet-manager operations
///
/// `Validation`, `NoMnemonic` and `Generation` are recoverable by the caller;
/// `InvalidPath`, `Derivation` and `KeyMaterial` indicate an internal contract
/// violation and are surfaced distinctly so regressions are detectable.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid mnemonic: {0}")]
    Validation(String),

    #[error("No mnemonic is set")]
    NoMnemonic,

    #[error("Mnemonic generation error: {0}")]
    Generation(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Key derivation error: {0}")]
    Derivation(String),

    #[error("Key material error: {0}")]
    KeyMaterial(String),
}

/// Result type for wallet-manager operations
pub type Result<T> = std::result::Result<T, Error>;
