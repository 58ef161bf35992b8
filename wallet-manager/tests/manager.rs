//! Behavioral tests for the wallet manager

use wallet_manager::crypto::mnemonic::MnemonicStrength;
use wallet_manager::{Chain, Error, WalletManager};

const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn manager_with_mnemonic() -> WalletManager {
    let mut manager = WalletManager::new();
    manager.import_mnemonic(TEST_MNEMONIC).unwrap();
    manager
}

#[test]
fn test_sequential_indices_and_paths() {
    for chain in [Chain::Solana, Chain::Ethereum] {
        let mut manager = manager_with_mnemonic();

        let first = manager.derive_next(chain).unwrap();
        let second = manager.derive_next(chain).unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_ne!(first.address(), second.address());

        // Paths differ only in the account segment
        let (expected_first, expected_second) = match chain {
            Chain::Solana => ("m/44'/501'/0'/0'", "m/44'/501'/1'/0'"),
            Chain::Ethereum => ("m/44'/60'/0", "m/44'/60'/1"),
        };
        assert_eq!(first.derivation_path(), expected_first);
        assert_eq!(second.derivation_path(), expected_second);
    }
}

#[test]
fn test_derivation_survives_clear_and_reimport() {
    let mut manager = manager_with_mnemonic();
    let before = manager.derive_next(Chain::Solana).unwrap();

    manager.clear();
    manager.import_mnemonic(TEST_MNEMONIC).unwrap();
    let after = manager.derive_next(Chain::Solana).unwrap();

    assert_eq!(before.address(), after.address());
    assert_eq!(before.private_key(), after.private_key());
    assert_eq!(before.derivation_path(), after.derivation_path());
}

#[test]
fn test_cross_chain_independence() {
    let mut manager = manager_with_mnemonic();

    let solana = manager.derive_next(Chain::Solana).unwrap();
    let ethereum = manager.derive_next(Chain::Ethereum).unwrap();

    assert_eq!(solana.index(), 0);
    assert_eq!(ethereum.index(), 0);
    assert_ne!(solana.address(), ethereum.address());
    assert_ne!(solana.private_key(), ethereum.private_key());

    assert!(ethereum.address().starts_with("0x"));
    assert_eq!(ethereum.address().len(), 42);
    assert!(!solana.address().starts_with("0x"));
}

#[test]
fn test_removal_does_not_renumber() {
    let mut manager = manager_with_mnemonic();

    let records: Vec<_> = (0..3)
        .map(|_| manager.derive_next(Chain::Solana).unwrap())
        .collect();

    assert!(manager.remove_wallet(Chain::Solana, records[1].address()));
    assert_eq!(manager.wallet_count(Chain::Solana), 2);

    let next = manager.derive_next(Chain::Solana).unwrap();
    assert_eq!(next.index(), 3);
    assert_eq!(next.derivation_path(), "m/44'/501'/3'/0'");
}

#[test]
fn test_remove_unknown_address_is_noop() {
    let mut manager = manager_with_mnemonic();
    manager.derive_next(Chain::Ethereum).unwrap();

    assert!(!manager.remove_wallet(Chain::Ethereum, "0x0000000000000000000000000000000000000000"));
    assert_eq!(manager.wallet_count(Chain::Ethereum), 1);
}

#[test]
fn test_derive_requires_mnemonic() {
    let mut manager = WalletManager::new();
    assert!(matches!(
        manager.derive_next(Chain::Solana),
        Err(Error::NoMnemonic)
    ));
}

#[test]
fn test_generated_mnemonic_derives_wallets() {
    let mut manager = WalletManager::new();
    manager.generate_mnemonic(MnemonicStrength::Words24).unwrap();

    let record = manager.derive_next(Chain::Ethereum).unwrap();
    assert_eq!(record.index(), 0);
    assert_eq!(record.derivation_path(), "m/44'/60'/0");
}

#[test]
fn test_ethereum_account_segment_not_hardened() {
    let mut manager = manager_with_mnemonic();

    let solana = manager.derive_next(Chain::Solana).unwrap();
    let ethereum = manager.derive_next(Chain::Ethereum).unwrap();

    assert_eq!(solana.derivation_path(), "m/44'/501'/0'/0'");
    assert_eq!(ethereum.derivation_path(), "m/44'/60'/0");
}

#[test]
fn test_serialized_record_hides_private_key() {
    let mut manager = manager_with_mnemonic();
    let record = manager.derive_next(Chain::Ethereum).unwrap();

    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("address"));
    assert!(object.contains_key("derivation_path"));
    assert!(!object.contains_key("private_key"));
}
