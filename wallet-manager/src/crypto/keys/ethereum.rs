//! Ethereum key derivation (secp256k1, BIP-32)

use hmac::{Hmac, Mac};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::Sha512;

use super::derivation::{parse_derivation_path, KeyMaterial, MaterializedKey, HARDENED_OFFSET};
use crate::error::{Error, Result};

/// Derive secp256k1 key material from a seed and derivation path
pub fn derive_key_material(seed: &[u8], path: &str) -> Result<KeyMaterial> {
    let path_components = parse_derivation_path(path)?;

    let (mut secret_key, mut chain_code) = derive_master_key(seed)?;

    for component in path_components {
        (secret_key, chain_code) = derive_child_key(secret_key, chain_code, component)?;
    }

    Ok(KeyMaterial::new(secret_key.to_vec(), chain_code.to_vec()))
}

/// Derive the master key from a seed
fn derive_master_key(seed: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    let mut hmac = Hmac::<Sha512>::new_from_slice(b"Bitcoin seed")
        .map_err(|_| Error::Derivation("HMAC error".to_string()))?;

    hmac.update(seed);
    let result = hmac.finalize().into_bytes();

    let mut secret_key = [0u8; 32];
    let mut chain_code = [0u8; 32];

    secret_key.copy_from_slice(&result[0..32]);
    chain_code.copy_from_slice(&result[32..64]);

    Ok((secret_key, chain_code))
}

/// Derive a child key from a parent key
fn derive_child_key(
    parent_key: [u8; 32],
    parent_chain_code: [u8; 32],
    index: u32,
) -> Result<([u8; 32], [u8; 32])> {
    let secp = Secp256k1::new();
    let parent_secret_key = SecretKey::from_slice(&parent_key)
        .map_err(|e| Error::Derivation(format!("invalid parent key: {}", e)))?;

    let mut data = Vec::with_capacity(37);

    if index >= HARDENED_OFFSET {
        // Hardened derivation
        data.push(0);
        data.extend_from_slice(&parent_key);
    } else {
        // Normal derivation folds in the compressed parent public key
        let parent_public_key = PublicKey::from_secret_key(&secp, &parent_secret_key);
        data.extend_from_slice(&parent_public_key.serialize());
    }

    // Append the index
    data.extend_from_slice(&index.to_be_bytes());

    let mut hmac = Hmac::<Sha512>::new_from_slice(&parent_chain_code)
        .map_err(|_| Error::Derivation("HMAC error".to_string()))?;

    hmac.update(&data);
    let result = hmac.finalize().into_bytes();

    let mut child_key = [0u8; 32];
    let mut child_chain_code = [0u8; 32];

    child_key.copy_from_slice(&result[0..32]);
    child_chain_code.copy_from_slice(&result[32..64]);

    // Add the parent key to the child key (mod n)
    let child_secret_key = SecretKey::from_slice(&child_key)
        .map_err(|e| Error::Derivation(format!("invalid child key: {}", e)))?;

    let child_secret_key = child_secret_key
        .add_tweak(&parent_secret_key.into())
        .map_err(|e| Error::Derivation(format!("key addition error: {}", e)))?;

    Ok((child_secret_key.secret_bytes(), child_chain_code))
}

/// Turn 32-byte key material into an Ethereum address and exportable private key
///
/// The address is `0x` plus the last 20 bytes of the Keccak-256 hash of the
/// uncompressed public key (format byte dropped); the private key encoding is
/// `0x` plus the 32-byte scalar in hex.
pub fn materialize(material: &KeyMaterial) -> Result<MaterializedKey> {
    if material.key().len() != 32 {
        return Err(Error::KeyMaterial(format!(
            "expected a 32-byte secp256k1 scalar, got {} bytes",
            material.key().len()
        )));
    }

    let secp = Secp256k1::new();
    let secret_key = SecretKey::from_slice(material.key())
        .map_err(|e| Error::KeyMaterial(format!("invalid secret key: {}", e)))?;
    let public_key = PublicKey::from_secret_key(&secp, &secret_key);

    // Skip the first byte (0x04) and hash the rest
    let key_hash = keccak256(&public_key.serialize_uncompressed()[1..]);

    // Take the last 20 bytes of the hash
    Ok(MaterializedKey {
        address: format!("0x{}", hex::encode(&key_hash[12..])),
        private_key: format!("0x{}", hex::encode(secret_key.secret_bytes())),
    })
}

/// Calculate the Keccak-256 hash of data
fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
