//! The codex32 backup application (number 93').
//!
//! Path layout: 83696968'/93'/hrp'/threshold'/n'/byte_length'/id0'/id1'/
//! id2'/id3'/index'. Identifier characters outside the bech32 alphabet
//! enter the path as the sentinel 32 and are later relabeled with the
//! seed fingerprint.

use bitcoin::bip32::Xpriv;

use crate::codec::charset_index;
use crate::entropy::{derive_entropy, hardened_path, BIP85_PURPOSE};
use crate::error::{Codex85Error, Result};
use crate::generate::{generate_share_set, GeneratedShares, IDENTIFIER_SENTINEL};

/// Path codes of the supported human readable prefixes.
pub const HRP_CODES: [(&str, u32); 2] = [("ms", 0), ("cl", 1)];

#[derive(Debug, Clone)]
pub struct BackupOptions {
    pub hrp: String,
    pub threshold: u8,
    pub share_count: u8,
    pub byte_length: usize,
    /// Four characters; anything outside the alphabet means "default".
    pub identifier: String,
    pub index: u32,
}

impl Default for BackupOptions {
    fn default() -> Self {
        BackupOptions {
            hrp: "ms".into(),
            threshold: 2,
            share_count: 3,
            byte_length: 16,
            identifier: "????".into(),
            index: 0,
        }
    }
}

/// Map identifier characters to path symbols, sentinel for anything
/// outside the alphabet.
fn identifier_symbols(identifier: &str) -> Result<[u8; 4]> {
    let symbols: Vec<u8> = identifier
        .chars()
        .map(|c| {
            c.to_lowercase()
                .next()
                .and_then(charset_index)
                .unwrap_or(IDENTIFIER_SENTINEL)
        })
        .collect();
    symbols.try_into().map_err(|_| {
        Codex85Error::InvalidParameter(format!(
            "identifier must be 4 characters, got {:?}",
            identifier
        ))
    })
}

/// Identifiers should stay unique per seed, so high indices require
/// enough default identifier characters to absorb them.
fn check_index(index: u32, default_characters: usize) -> Result<()> {
    if index > 0 && default_characters < 2 {
        Err(Codex85Error::InvalidParameter(
            "an index above 0 requires at least two default identifier characters".into(),
        ))
    } else if index > 5 && default_characters < 3 {
        Err(Codex85Error::InvalidParameter(
            "an index above 5 requires at least three default identifier characters".into(),
        ))
    } else if index > 26 && default_characters < 4 {
        Err(Codex85Error::InvalidParameter(
            "an index above 26 requires all four identifier characters to be default".into(),
        ))
    } else if index > 146 {
        Err(Codex85Error::InvalidParameter(
            "index must be between 0 and 146".into(),
        ))
    } else {
        Ok(())
    }
}

/// Derive a codex32 share set below `master`.
pub fn derive_backup(master: &Xpriv, options: &BackupOptions) -> Result<GeneratedShares> {
    let hrp_code = HRP_CODES
        .iter()
        .find(|(hrp, _)| *hrp == options.hrp)
        .map(|&(_, code)| code)
        .ok_or_else(|| {
            Codex85Error::InvalidParameter(format!("unsupported hrp {:?}", options.hrp))
        })?;
    let id = identifier_symbols(&options.identifier)?;
    let default_characters = id.iter().filter(|&&v| v == IDENTIFIER_SENTINEL).count();
    check_index(options.index, default_characters)?;

    let path = hardened_path(&[
        BIP85_PURPOSE,
        93,
        hrp_code,
        options.threshold as u32,
        options.share_count as u32,
        options.byte_length as u32,
        id[0] as u32,
        id[1] as u32,
        id[2] as u32,
        id[3] as u32,
        options.index,
    ])?;
    let entropy = derive_entropy(master, &path)?;
    generate_share_set(
        &entropy,
        &options.hrp,
        options.threshold,
        options.share_count,
        options.byte_length,
        id,
    )
}
