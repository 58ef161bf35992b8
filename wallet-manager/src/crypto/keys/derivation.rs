//! Common key derivation functionality

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{ethereum, solana};
use crate::error::{Error, Result};

/// Offset marking a path component as hardened
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Supported chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    /// Solana (Ed25519)
    Solana,
    /// Ethereum and EVM compatible chains (secp256k1)
    Ethereum,
}

impl Chain {
    /// BIP-44 coin type constant for this chain
    pub fn coin_type(&self) -> u32 {
        match self {
            Self::Solana => 501,
            Self::Ethereum => 60,
        }
    }
}

/// Build the derivation path for a wallet index on a chain
///
/// Solana paths are fully hardened; the Ethereum account segment is left
/// non-hardened, matching what common Ethereum wallets derive.
pub fn derivation_path(chain: Chain, index: u32) -> String {
    match chain {
        Chain::Solana => format!("m/44'/{}'/{}'/0'", chain.coin_type(), index),
        Chain::Ethereum => format!("m/44'/{}'/{}", chain.coin_type(), index),
    }
}

/// Parse a BIP-32 derivation path into its numeric components
pub fn parse_derivation_path(path: &str) -> Result<Vec<u32>> {
    if !path.starts_with("m/") {
        return Err(Error::InvalidPath(format!("missing m/ prefix: {}", path)));
    }

    let components = path.trim_start_matches("m/").split('/');
    let mut result = Vec::new();

    for component in components {
        if component.is_empty() {
            continue;
        }

        let hardened = component.ends_with('\'');
        let index = component.trim_end_matches('\'').parse::<u32>()
            .map_err(|_| Error::InvalidPath(format!("bad path component: {}", component)))?;

        if index >= HARDENED_OFFSET {
            return Err(Error::InvalidPath(format!("component out of range: {}", component)));
        }

        result.push(if hardened { HARDENED_OFFSET + index } else { index });
    }

    Ok(result)
}

/// Raw output of a hierarchical derivation walk: a 32-byte child key plus
/// its chain code. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: Vec<u8>,
    chain_code: Vec<u8>,
}

impl KeyMaterial {
    pub(crate) fn new(key: Vec<u8>, chain_code: Vec<u8>) -> Self {
        Self { key, chain_code }
    }

    /// Get the derived key bytes
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Get the chain code bytes
    pub fn chain_code(&self) -> &[u8] {
        &self.chain_code
    }
}

/// A derived wallet's public address and exportable private-key encoding
#[derive(Debug, Clone)]
pub struct MaterializedKey {
    /// Chain-specific public identifier
    pub address: String,
    /// Chain-specific textual private key encoding
    pub private_key: String,
}

/// Derive key material from a seed for a specific blockchain
pub fn derive_key_material(seed: &[u8], chain: Chain, path: &str) -> Result<KeyMaterial> {
    match chain {
        Chain::Solana => solana::derive_key_material(seed, path),
        Chain::Ethereum => ethereum::derive_key_material(seed, path),
    }
}

/// Turn derived key material into an address and private-key encoding
pub fn materialize(chain: Chain, material: &KeyMaterial) -> Result<MaterializedKey> {
    match chain {
        Chain::Solana => solana::materialize(material),
        Chain::Ethereum => ethereum::materialize(material),
    }
}
