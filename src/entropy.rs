//! BIP85 entropy derivation from a BIP32 master key.
//!
//! Application entropy is HMAC-SHA512 keyed with "bip-entropy-from-k"
//! over the private key derived at a hardened application path below
//! the purpose 83696968'.

use bitcoin::bip32::{ChildNumber, Xpriv};
use bitcoin::secp256k1::Secp256k1;
use bitcoin::Network;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::str::FromStr;

use crate::convert::{convert_bits, Pad};
use crate::error::{Codex85Error, Result};

/// HMAC key fixed by BIP85.
const BIP85_KEY: &[u8] = b"bip-entropy-from-k";

/// Purpose level of every BIP85 derivation path.
pub const BIP85_PURPOSE: u32 = 83696968;

/// Build a fully hardened path from raw indices.
pub fn hardened_path(indices: &[u32]) -> Result<Vec<ChildNumber>> {
    indices
        .iter()
        .map(|&i| ChildNumber::from_hardened_idx(i).map_err(Codex85Error::from))
        .collect()
}

/// Derive 64 bytes of application entropy at `path` below `master`.
pub fn derive_entropy(master: &Xpriv, path: &[ChildNumber]) -> Result<[u8; 64]> {
    let secp = Secp256k1::new();
    let derived = master.derive_priv(&secp, &path)?;
    let mut mac = Hmac::<Sha512>::new_from_slice(BIP85_KEY)
        .expect("HMAC can take key of any size");
    mac.update(&derived.private_key.secret_bytes());
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Parse a base58 extended private key.
pub fn parse_xprv(s: &str) -> Result<Xpriv> {
    Ok(Xpriv::from_str(s)?)
}

/// Build the BIP32 master key from a 16-64 byte master seed.
pub fn master_from_seed(seed: &[u8]) -> Result<Xpriv> {
    if seed.len() < 16 || seed.len() > 64 {
        return Err(Codex85Error::SecretLength(seed.len()));
    }
    Ok(Xpriv::new_master(Network::Bitcoin, seed)?)
}

/// Build the BIP32 master key from a BIP39 mnemonic and passphrase.
pub fn master_from_mnemonic(phrase: &str, passphrase: &str) -> Result<Xpriv> {
    let mnemonic = bip39::Mnemonic::parse(phrase)?;
    master_from_seed(&mnemonic.to_seed(passphrase))
}

/// The BIP32 fingerprint of the master key for `seed`, as four GF(32)
/// symbols. Used to label codex32 string sets derived from that seed.
pub fn fingerprint(seed: &[u8]) -> Result<[u8; 4]> {
    let master = Xpriv::new_master(Network::Bitcoin, seed)?;
    let secp = Secp256k1::new();
    let bytes = master.fingerprint(&secp).to_bytes();
    let symbols = convert_bits(&bytes, 8, 5, Pad::Xor, false)?;
    let mut out = [0u8; 4];
    out.copy_from_slice(&symbols[..4]);
    Ok(out)
}
