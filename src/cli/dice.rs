//! The dice roll application (number 89101').
//!
//! Path layout: 83696968'/89101'/sides'/rolls'/index'. Rolls come from
//! the DRNG by rejection sampling, so every face is equally likely.

use bitcoin::bip32::Xpriv;

use crate::drng::Drng;
use crate::entropy::{derive_entropy, hardened_path, BIP85_PURPOSE};
use crate::error::{Codex85Error, Result};

pub fn derive_dice(master: &Xpriv, sides: u32, rolls: u32, index: u32) -> Result<String> {
    if sides < 2 {
        return Err(Codex85Error::InvalidParameter(format!(
            "a die needs at least 2 sides, got {}",
            sides
        )));
    }
    if rolls == 0 || rolls > 100 {
        return Err(Codex85Error::InvalidParameter(format!(
            "roll count must be 1-100, got {}",
            rolls
        )));
    }
    let path = hardened_path(&[BIP85_PURPOSE, 89101, sides, rolls, index])?;
    let entropy = derive_entropy(master, &path)?;
    let mut drng = Drng::new(&entropy);

    let bits_per_roll = 32 - (sides - 1).leading_zeros();
    let bytes_per_roll = ((bits_per_roll + 7) / 8) as usize;
    let width = (sides - 1).to_string().len();
    let mut history = Vec::with_capacity(rolls as usize);
    while history.len() < rolls as usize {
        let mut buf = [0u8; 4];
        drng.read(&mut buf[..bytes_per_roll]);
        let mut trial = 0u64;
        for &b in &buf[..bytes_per_roll] {
            trial = (trial << 8) | b as u64;
        }
        trial >>= 8 * bytes_per_roll as u32 - bits_per_roll;
        if trial < sides as u64 {
            history.push(format!("{:0width$}", trial, width = width));
        }
    }
    Ok(history.join(","))
}
