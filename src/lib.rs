//! Codex85 - BIP85 deterministic entropy with codex32 (BIP93) backups
//!
//! A BIP32 master key deterministically derives entropy for downstream
//! applications, so one backup covers every secret ever minted from it.
//! The flagship application is codex32: checksummed Shamir secret
//! sharing over GF(32), where each share is a short bech32-alphabet
//! string suitable for hand transcription.
//!
//! ## Derivation Pipeline
//!
//! ```text
//! Master key → hardened path 83696968'/app'/... → HMAC-SHA512 → entropy → application
//! ```
//!
//! - **mnemonic**: fresh BIP39 phrases in nine languages
//! - **backup**: codex32 share sets, any threshold from 0 to 9
//! - **wif**: HD-Seed wallet import format keys
//! - **xprv**: independent extended private keys
//! - **hex**: raw entropy bytes
//! - **dice**: uniform die rolls via rejection sampling
//!
//! ## Example
//!
//! ```
//! use codex85::secret::{decode_secret, encode_secret};
//!
//! let seed = [42u8; 16];
//! let encoded = encode_secret(&seed, "ms", '0', "test", 's')?;
//! assert_eq!(decode_secret("ms", &encoded)?, seed);
//! # Ok::<(), codex85::Codex85Error>(())
//! ```

pub mod checksum;
pub mod cli;
pub mod codec;
pub mod convert;
pub mod drng;
pub mod entropy;
pub mod error;
pub mod field;
pub mod generate;
pub mod interpolate;
pub mod secret;
pub mod shareset;

pub use error::{Codex85Error, Result};
pub use generate::GeneratedShares;
pub use shareset::{derive_share, recover_master_seed, validate_set};
