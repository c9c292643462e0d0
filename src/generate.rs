//! Deterministic generation of fresh codex32 share sets.
//!
//! The share set is a pure function of the application entropy: payload
//! symbols and share indices are drawn from the BIP85 DRNG, so the same
//! entropy always reproduces the same set. Identifier positions holding
//! the sentinel value 32 are relabeled with the BIP32 fingerprint of the
//! generated secret.

use serde::Serialize;

use crate::codec::{charset_index, ms32_encode, SECRET_INDEX};
use crate::convert::{convert_bits, Pad};
use crate::drng::Drng;
use crate::entropy::fingerprint;
use crate::error::{Codex85Error, Result};
use crate::interpolate::{ms32_interpolate, ms32_recover};
use crate::shareset::validate_set;

/// Share indices of the initial rows, in generation order: the secret
/// index 's' followed by the first nine non-secret letters in
/// alphabetical order.
const INITIAL_INDICES: [u8; 10] = [16, 29, 24, 13, 25, 9, 8, 23, 18, 22];

/// Identifier symbol meaning "fill from the seed fingerprint".
pub const IDENTIFIER_SENTINEL: u8 = 32;

/// Upper bound on DRNG index draws before giving up. The space has 31
/// usable indices, so this is never hit for a non-degenerate stream.
const MAX_INDEX_DRAWS: usize = 32 * 256;

/// A generated share set and the identifier its strings carry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratedShares {
    pub identifier: String,
    #[serde(rename = "codex32")]
    pub shares: Vec<String>,
}

fn check_params(threshold: u8, share_count: u8, byte_length: usize, identifier: &[u8; 4]) -> Result<()> {
    if threshold == 1 || threshold > 9 {
        return Err(Codex85Error::InvalidParameter(format!(
            "threshold must be 0 or 2-9, got {}",
            threshold
        )));
    }
    if threshold == 0 && share_count != 1 {
        return Err(Codex85Error::InvalidParameter(format!(
            "share count {} is not allowed: threshold 0 requires exactly 1 string",
            share_count
        )));
    }
    if share_count == 0 || share_count > 31 {
        return Err(Codex85Error::InvalidParameter(format!(
            "share count must be 1-31, got {}",
            share_count
        )));
    }
    if byte_length < 16 || byte_length > 64 {
        return Err(Codex85Error::InvalidParameter(format!(
            "byte length must be 16-64, got {}",
            byte_length
        )));
    }
    if identifier.iter().any(|&v| v > IDENTIFIER_SENTINEL) {
        return Err(Codex85Error::InvalidParameter(
            "identifier symbols must be 0-32".into(),
        ));
    }
    Ok(())
}

/// Draw a share index that is not yet in use.
fn draw_index(drng: &mut Drng, used: &[u8], draws: &mut usize) -> Result<u8> {
    loop {
        if *draws >= MAX_INDEX_DRAWS {
            return Err(Codex85Error::IndexSpaceExhausted(*draws));
        }
        *draws += 1;
        let candidate = drng.next_symbol();
        if !used.contains(&candidate) {
            return Ok(candidate);
        }
    }
}

/// Generate a `threshold`-of-`share_count` codex32 set from 64 bytes of
/// application entropy.
///
/// Identifier symbols are GF(32) values, with 32 as the fingerprint
/// sentinel. With fewer strings requested than the threshold, the
/// initial rows themselves are returned; no secret can be recovered
/// from them alone.
pub fn generate_share_set(
    entropy: &[u8],
    hrp: &str,
    threshold: u8,
    share_count: u8,
    byte_length: usize,
    identifier: [u8; 4],
) -> Result<GeneratedShares> {
    check_params(threshold, share_count, byte_length, &identifier)?;
    let threshold_symbol = charset_index(char::from(b'0' + threshold))
        .ok_or(Codex85Error::InvalidThreshold(char::from(b'0' + threshold)))?;
    let payload_length = (byte_length * 8 + 4) / 5;
    let mut drng = Drng::new(entropy);

    // Initial rows: the secret itself for threshold 0, otherwise rows at
    // the first min(threshold, share_count) alphabetical indices.
    let first = usize::from(threshold != 0);
    let last = usize::min(threshold as usize, share_count as usize);
    let mut rows = Vec::with_capacity(last + 1 - first);
    for i in first..=last {
        let mut data = Vec::with_capacity(6 + payload_length);
        data.push(threshold_symbol);
        data.extend(identifier);
        data.push(INITIAL_INDICES[i]);
        while data.len() < 6 + payload_length {
            data.push(drng.next_symbol());
        }
        rows.push(data);
    }

    let secret_row = if rows.len() > 1 {
        ms32_recover(&rows)
    } else {
        rows[0].clone()
    };

    // Sentinel identifier symbols become the fingerprint of the secret.
    // Multiplication by 32 reads only the low five bits, so sentinels in
    // the rows do not disturb the recovered payload above.
    if identifier.contains(&IDENTIFIER_SENTINEL) {
        let seed = convert_bits(&secret_row[6..], 5, 8, Pad::Xor, false)?;
        let bip32_fp = fingerprint(&seed)?;
        for row in &mut rows {
            for i in 1..5 {
                if identifier[i - 1] >= IDENTIFIER_SENTINEL {
                    row[i] = bip32_fp[i - 1];
                }
            }
        }
    }

    let strings = if threshold != 0 && share_count >= threshold {
        let mut strings = Vec::with_capacity(share_count as usize);
        let mut used = vec![SECRET_INDEX];
        let mut draws = 0usize;
        for _ in 0..share_count {
            let fresh = draw_index(&mut drng, &used, &mut draws)?;
            used.push(fresh);
            // Named indices reuse their initial row; everything else is
            // interpolated.
            let named = INITIAL_INDICES[..rows.len() + 1]
                .iter()
                .position(|&idx| idx == fresh);
            let row = match named {
                Some(pos) => rows[pos - 1].clone(),
                None => ms32_interpolate(&rows, fresh),
            };
            strings.push(ms32_encode(hrp, &row));
        }
        strings
    } else {
        rows.iter().map(|row| ms32_encode(hrp, row)).collect()
    };

    if let Err(e) = validate_set(&strings, false) {
        return Err(Codex85Error::SelfCheck(format!(
            "generated strings do not form a valid set: {}",
            e
        )));
    }

    let identifier = strings[0][hrp.len() + 2..hrp.len() + 6].to_string();
    Ok(GeneratedShares {
        identifier,
        shares: strings,
    })
}
