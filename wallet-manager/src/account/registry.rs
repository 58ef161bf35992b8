//! Per-chain wallet bookkeeping

use std::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::keys::Chain;
use crate::error::{Error, Result};

/// A single derived wallet
///
/// Immutable once created. The private key encoding is skipped during
/// serialization, redacted from debug output, and zeroized when the record
/// is dropped.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct WalletRecord {
    #[zeroize(skip)]
    chain: Chain,
    #[zeroize(skip)]
    index: u32,
    #[zeroize(skip)]
    derivation_path: String,
    #[zeroize(skip)]
    address: String,
    #[serde(skip_serializing)]
    private_key: String,
}

impl WalletRecord {
    pub(crate) fn new(
        chain: Chain,
        index: u32,
        derivation_path: String,
        address: String,
        private_key: String,
    ) -> Self {
        Self {
            chain,
            index,
            derivation_path,
            address,
            private_key,
        }
    }

    /// Get the chain this wallet belongs to
    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// Get the derivation index of this wallet
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Get the derivation path of this wallet
    pub fn derivation_path(&self) -> &str {
        &self.derivation_path
    }

    /// Get the public address of this wallet
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the exportable private key encoding. Sensitive; intended for
    /// display/export only.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRecord")
            .field("chain", &self.chain)
            .field("index", &self.index)
            .field("derivation_path", &self.derivation_path)
            .field("address", &self.address)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Default)]
struct ChainRegistry {
    records: Vec<WalletRecord>,
    next_index: u32,
}

/// Ordered collections of derived wallets, one per chain
///
/// Each chain keeps its own monotonic index counter; removing a record never
/// decrements the counter or renumbers surviving records.
#[derive(Debug, Default)]
pub struct WalletRegistry {
    solana: ChainRegistry,
    ethereum: ChainRegistry,
}

impl WalletRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn chain_registry(&self, chain: Chain) -> &ChainRegistry {
        match chain {
            Chain::Solana => &self.solana,
            Chain::Ethereum => &self.ethereum,
        }
    }

    fn chain_registry_mut(&mut self, chain: Chain) -> &mut ChainRegistry {
        match chain {
            Chain::Solana => &mut self.solana,
            Chain::Ethereum => &mut self.ethereum,
        }
    }

    /// Number of wallets ever derived for a chain in the current session
    pub fn next_index(&self, chain: Chain) -> u32 {
        self.chain_registry(chain).next_index
    }

    /// Append a freshly derived record
    ///
    /// Precondition: the record's index must equal `next_index` for its chain
    /// at call time. A mismatch means the caller derived against a stale
    /// counter and is reported as a derivation error.
    pub fn append(&mut self, record: WalletRecord) -> Result<()> {
        let registry = self.chain_registry_mut(record.chain());

        if record.index() != registry.next_index {
            return Err(Error::Derivation(format!(
                "record index {} does not match next index {}",
                record.index(),
                registry.next_index
            )));
        }

        registry.records.push(record);
        registry.next_index += 1;
        Ok(())
    }

    /// Remove at most one record by address. Returns false if no record
    /// matched; removing an unknown address is not an error.
    pub fn remove(&mut self, chain: Chain, address: &str) -> bool {
        let registry = self.chain_registry_mut(chain);

        match registry.records.iter().position(|r| r.address() == address) {
            Some(position) => {
                registry.records.remove(position);
                true
            }
            None => false,
        }
    }

    /// Read-only view of a chain's wallets in insertion order
    pub fn list(&self, chain: Chain) -> &[WalletRecord] {
        &self.chain_registry(chain).records
    }

    /// Drop all records and restart both index counters
    pub fn reset(&mut self) {
        self.solana = ChainRegistry::default();
        self.ethereum = ChainRegistry::default();
    }
}
