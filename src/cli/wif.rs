//! The HD-Seed WIF application (number 2').
//!
//! Path layout: 83696968'/2'/index'. The first 32 entropy bytes become
//! a mainnet private key in wallet import format.

use bitcoin::bip32::Xpriv;
use bitcoin::secp256k1::SecretKey;
use bitcoin::{Network, PrivateKey};

use crate::entropy::{derive_entropy, hardened_path, BIP85_PURPOSE};
use crate::error::Result;

pub fn derive_wif(master: &Xpriv, index: u32) -> Result<String> {
    let path = hardened_path(&[BIP85_PURPOSE, 2, index])?;
    let entropy = derive_entropy(master, &path)?;
    let key = SecretKey::from_slice(&entropy[..32])?;
    Ok(PrivateKey::new(key, Network::Bitcoin).to_wif())
}
