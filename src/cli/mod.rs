pub mod backup;
pub mod dice;
pub mod hex;
pub mod mnemonic;
pub mod wif;
pub mod xprv;

pub use backup::*;
pub use dice::*;
pub use hex::*;
pub use mnemonic::*;
pub use wif::*;
pub use xprv::*;

use bitcoin::bip32::Xpriv;

use crate::entropy::{master_from_mnemonic, master_from_seed, parse_xprv};
use crate::error::{Codex85Error, Result};

/// Where the BIP32 master key comes from. Exactly one of the sources
/// should be set; they are tried in field order.
#[derive(Debug, Clone, Default)]
pub struct SeedSource {
    /// Base58 extended private key.
    pub xprv: Option<String>,
    /// Hex master seed, 16-64 bytes.
    pub master_seed: Option<String>,
    /// BIP39 mnemonic phrase.
    pub mnemonic: Option<String>,
    /// Hex BIP39 entropy, expanded to an English mnemonic first.
    pub mnemonic_entropy: Option<String>,
    /// Passphrase applied when the key comes from a mnemonic.
    pub passphrase: String,
}

impl SeedSource {
    pub fn resolve(&self) -> Result<Xpriv> {
        if let Some(s) = &self.xprv {
            return parse_xprv(s);
        }
        if let Some(s) = &self.master_seed {
            return master_from_seed(&::hex::decode(s)?);
        }
        if let Some(s) = &self.mnemonic_entropy {
            let mnemonic = bip39::Mnemonic::from_entropy(&::hex::decode(s)?)?;
            return master_from_seed(&mnemonic.to_seed(&self.passphrase));
        }
        if let Some(s) = &self.mnemonic {
            return master_from_mnemonic(s, &self.passphrase);
        }
        Err(Codex85Error::InvalidParameter(
            "no master key source given".into(),
        ))
    }
}
