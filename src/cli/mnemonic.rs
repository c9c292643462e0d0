//! The BIP39 mnemonic application (number 39').
//!
//! Path layout: 83696968'/39'/language'/words'/index'.

use bip39::{Language, Mnemonic};
use bitcoin::bip32::Xpriv;

use crate::entropy::{derive_entropy, hardened_path, BIP85_PURPOSE};
use crate::error::{Codex85Error, Result};

/// Supported wordlists with their BIP85 path codes.
pub const LANGUAGES: [(&str, u32, Language); 9] = [
    ("english", 0, Language::English),
    ("japanese", 1, Language::Japanese),
    ("korean", 2, Language::Korean),
    ("spanish", 3, Language::Spanish),
    ("chinese_simplified", 4, Language::SimplifiedChinese),
    ("chinese_traditional", 5, Language::TraditionalChinese),
    ("french", 6, Language::French),
    ("italian", 7, Language::Italian),
    ("czech", 8, Language::Czech),
];

fn lookup_language(name: &str) -> Result<(u32, Language)> {
    LANGUAGES
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, code, lang)| (code, lang))
        .ok_or_else(|| Codex85Error::InvalidParameter(format!("unknown language {:?}", name)))
}

/// Derive a fresh mnemonic of `num_words` words below `master`.
pub fn derive_mnemonic(master: &Xpriv, language: &str, num_words: u32, index: u32) -> Result<String> {
    if ![12, 15, 18, 21, 24].contains(&num_words) {
        return Err(Codex85Error::InvalidParameter(format!(
            "word count must be 12, 15, 18, 21 or 24, got {}",
            num_words
        )));
    }
    let (code, lang) = lookup_language(language)?;
    let path = hardened_path(&[BIP85_PURPOSE, 39, code, num_words, index])?;
    let entropy = derive_entropy(master, &path)?;
    let width = ((num_words - 1) * 11 / 8 + 1) as usize;
    let mnemonic = Mnemonic::from_entropy_in(lang, &entropy[..width])?;
    Ok(mnemonic.to_string())
}
