//! Wallet manager orchestration

use tracing::debug;
use zeroize::Zeroize;

use super::registry::{WalletRecord, WalletRegistry};
use crate::crypto::keys::{derivation_path, derive_key_material, materialize, Chain};
use crate::crypto::mnemonic::{
    generate_mnemonic, mnemonic_to_seed, validate_mnemonic, MnemonicStrength,
};
use crate::error::{Error, Result};

/// Session-scoped wallet manager
///
/// Owns the active mnemonic, a cached seed, and both per-chain registries.
/// Switching the mnemonic discards all previously derived wallets, since they
/// belong to the old seed. Each session should own its own instance.
#[derive(Default)]
pub struct WalletManager {
    mnemonic: Option<String>,
    seed: Option<[u8; 64]>,
    registry: WalletRegistry,
}

impl WalletManager {
    /// Create a manager with no active mnemonic
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh mnemonic and make it the active one, returning the
    /// phrase for backup display
    pub fn generate_mnemonic(&mut self, strength: MnemonicStrength) -> Result<String> {
        let phrase = generate_mnemonic(strength)?;
        self.set_mnemonic(phrase.clone());
        Ok(phrase)
    }

    /// Import an existing mnemonic phrase
    ///
    /// An invalid candidate leaves the current mnemonic and all derived
    /// wallets untouched.
    pub fn import_mnemonic(&mut self, candidate: &str) -> Result<()> {
        if !validate_mnemonic(candidate) {
            return Err(Error::Validation(
                "phrase failed wordlist or checksum validation".to_string(),
            ));
        }

        self.set_mnemonic(candidate.to_string());
        Ok(())
    }

    /// Get the active mnemonic phrase, if any
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    /// Derive the next wallet for a chain and record it
    ///
    /// The wallet index is the chain's monotonic counter; a failed derivation
    /// records nothing.
    pub fn derive_next(&mut self, chain: Chain) -> Result<WalletRecord> {
        let seed = self.seed()?;
        let index = self.registry.next_index(chain);
        let path = derivation_path(chain, index);

        let material = derive_key_material(&seed, chain, &path)?;
        let keys = materialize(chain, &material)?;

        let record = WalletRecord::new(chain, index, path, keys.address, keys.private_key);
        self.registry.append(record.clone())?;

        debug!(?chain, index, address = record.address(), "derived wallet");
        Ok(record)
    }

    /// Remove a wallet by address. Returns false if no wallet matched.
    pub fn remove_wallet(&mut self, chain: Chain, address: &str) -> bool {
        let removed = self.registry.remove(chain, address);
        if removed {
            debug!(?chain, address, "removed wallet");
        }
        removed
    }

    /// Read-only view of a chain's wallets in insertion order
    pub fn wallets(&self, chain: Chain) -> &[WalletRecord] {
        self.registry.list(chain)
    }

    /// Number of wallets currently held for a chain
    pub fn wallet_count(&self, chain: Chain) -> usize {
        self.registry.list(chain).len()
    }

    /// Index the next derived wallet for a chain will receive
    pub fn next_index(&self, chain: Chain) -> u32 {
        self.registry.next_index(chain)
    }

    /// Discard the mnemonic, cached seed and all derived wallets, overwriting
    /// secret material before release
    pub fn clear(&mut self) {
        self.discard_secrets();
        debug!("wallet manager cleared");
    }

    fn set_mnemonic(&mut self, phrase: String) {
        self.discard_secrets();
        self.mnemonic = Some(phrase);
        debug!("mnemonic set, registries reset");
    }

    /// Seed bytes for the active mnemonic, computed once per mnemonic
    fn seed(&mut self) -> Result<[u8; 64]> {
        if let Some(seed) = self.seed {
            return Ok(seed);
        }

        let phrase = self.mnemonic.as_deref().ok_or(Error::NoMnemonic)?;
        let seed = mnemonic_to_seed(phrase, None)?;
        self.seed = Some(seed);
        Ok(seed)
    }

    fn discard_secrets(&mut self) {
        if let Some(mut phrase) = self.mnemonic.take() {
            phrase.zeroize();
        }
        if let Some(mut seed) = self.seed.take() {
            seed.zeroize();
        }
        self.registry.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_sets_active_mnemonic() {
        let mut manager = WalletManager::new();
        let phrase = manager.generate_mnemonic(MnemonicStrength::Words12).unwrap();

        assert_eq!(manager.mnemonic(), Some(phrase.as_str()));
        assert!(validate_mnemonic(&phrase));
    }

    #[test]
    fn test_import_invalid_mnemonic_keeps_state() {
        let mut manager = WalletManager::new();
        manager.import_mnemonic(TEST_MNEMONIC).unwrap();
        manager.derive_next(Chain::Solana).unwrap();

        let result = manager.import_mnemonic("definitely not a mnemonic");
        assert!(matches!(result, Err(Error::Validation(_))));

        assert_eq!(manager.mnemonic(), Some(TEST_MNEMONIC));
        assert_eq!(manager.wallet_count(Chain::Solana), 1);
    }

    #[test]
    fn test_switching_mnemonic_resets_registries() {
        let mut manager = WalletManager::new();
        manager.import_mnemonic(TEST_MNEMONIC).unwrap();
        manager.derive_next(Chain::Solana).unwrap();
        manager.derive_next(Chain::Ethereum).unwrap();

        manager.generate_mnemonic(MnemonicStrength::Words12).unwrap();

        assert_eq!(manager.wallet_count(Chain::Solana), 0);
        assert_eq!(manager.wallet_count(Chain::Ethereum), 0);
        assert_eq!(manager.next_index(Chain::Solana), 0);
    }

    #[test]
    fn test_derive_without_mnemonic() {
        let mut manager = WalletManager::new();
        assert!(matches!(
            manager.derive_next(Chain::Ethereum),
            Err(Error::NoMnemonic)
        ));
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut manager = WalletManager::new();
        manager.import_mnemonic(TEST_MNEMONIC).unwrap();
        manager.derive_next(Chain::Solana).unwrap();

        manager.clear();

        assert_eq!(manager.mnemonic(), None);
        assert_eq!(manager.wallet_count(Chain::Solana), 0);
        assert!(matches!(
            manager.derive_next(Chain::Solana),
            Err(Error::NoMnemonic)
        ));
    }
}
