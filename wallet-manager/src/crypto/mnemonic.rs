//! Mnemonic phrase generation and handling

use bip39::{Language, Mnemonic};

use crate::error::{Error, Result};

/// Supported mnemonic strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    /// 12 words (128 bits)
    Words12,
    /// 24 words (256 bits)
    Words24,
}

impl MnemonicStrength {
    fn word_count(&self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words24 => 24,
        }
    }
}

/// Generate a new random mnemonic phrase with the specified strength
pub fn generate_mnemonic(strength: MnemonicStrength) -> Result<String> {
    let mnemonic = Mnemonic::generate_in(Language::English, strength.word_count())
        .map_err(|e| Error::Generation(e.to_string()))?;
    Ok(mnemonic.to_string())
}

/// Validate a mnemonic phrase
///
/// Pure check with no side effects: wrong word count, out-of-wordlist words
/// and checksum mismatches all return `false` rather than an error.
pub fn validate_mnemonic(phrase: &str) -> bool {
    Mnemonic::parse_in_normalized(Language::English, phrase).is_ok()
}

/// Derive the 64-byte seed from a mnemonic phrase and optional passphrase
pub fn mnemonic_to_seed(phrase: &str, passphrase: Option<&str>) -> Result<[u8; 64]> {
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
        .map_err(|e| Error::Validation(e.to_string()))?;

    Ok(mnemonic.to_seed(passphrase.unwrap_or("")))
}
