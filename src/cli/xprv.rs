//! The XPRV application (number 32').
//!
//! Path layout: 83696968'/32'/index'. The 64 entropy bytes split into
//! chain code and private key of a brand-new extended key with depth,
//! parent fingerprint and child number all zero.

use bitcoin::bip32::{ChainCode, ChildNumber, Fingerprint, Xpriv};
use bitcoin::secp256k1::SecretKey;
use bitcoin::NetworkKind;

use crate::entropy::{derive_entropy, hardened_path, BIP85_PURPOSE};
use crate::error::Result;

pub fn derive_xprv(master: &Xpriv, index: u32) -> Result<String> {
    let path = hardened_path(&[BIP85_PURPOSE, 32, index])?;
    let entropy = derive_entropy(master, &path)?;
    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(&entropy[..32]);
    let derived = Xpriv {
        network: NetworkKind::Main,
        depth: 0,
        parent_fingerprint: Fingerprint::from([0u8; 4]),
        child_number: ChildNumber::Normal { index: 0 },
        private_key: SecretKey::from_slice(&entropy[32..])?,
        chain_code: ChainCode::from(chain_code),
    };
    Ok(derived.to_string())
}
