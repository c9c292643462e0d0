//! Validation and recombination of codex32 share sets.
//!
//! A usable set is uniform in hrp, threshold and identifier, uniform in
//! string length, and carries pairwise distinct share indices. Recovery
//! additionally requires exactly `threshold` shares; deriving fresh
//! shares does too, since interpolation below threshold would silently
//! produce garbage.

use crate::codec::{charset_index, ms32_decode, ms32_encode};
use crate::convert::{convert_bits, Pad};
use crate::error::{Codex85Error, Result};
use crate::interpolate::{ms32_interpolate, ms32_recover};

/// Decode every string and check set uniformity. Returns the decoded
/// symbol rows (checksums stripped) in input order.
///
/// With `require_threshold_count` the set must hold exactly as many
/// shares as the threshold digit demands.
pub fn validate_set(strings: &[String], require_threshold_count: bool) -> Result<Vec<Vec<u8>>> {
    if strings.is_empty() {
        return Err(Codex85Error::EmptySet);
    }
    let decoded: Vec<_> = strings
        .iter()
        .map(|s| ms32_decode(s))
        .collect::<Result<Vec<_>>>()?;

    let first = &decoded[0];
    let mut seen_indices = Vec::with_capacity(decoded.len());
    for (d, s) in decoded.iter().zip(strings.iter()) {
        if d.hrp != first.hrp || d.threshold != first.threshold || d.identifier != first.identifier
        {
            return Err(Codex85Error::MixedHeaders);
        }
        if s.len() != strings[0].len() {
            return Err(Codex85Error::MixedLengths);
        }
        if seen_indices.contains(&d.share_index) {
            return Err(Codex85Error::DuplicateShareIndex(d.share_index));
        }
        seen_indices.push(d.share_index);
    }

    if require_threshold_count {
        let threshold = first.threshold as usize - '0' as usize;
        if threshold != strings.len() {
            return Err(Codex85Error::WrongShareCount {
                expected: threshold,
                actual: strings.len(),
            });
        }
    }

    Ok(decoded.into_iter().map(|d| d.data).collect())
}

/// Recover the master seed bytes from a complete share set.
pub fn recover_master_seed(shares: &[String]) -> Result<Vec<u8>> {
    let rows = validate_set(shares, true)?;
    let secret_row = ms32_recover(&rows);
    convert_bits(&secret_row[6..], 5, 8, Pad::None, false)
}

/// Derive one additional share at `fresh_share_index` from a complete
/// share set, returning it as an encoded string.
pub fn derive_share(shares: &[String], fresh_share_index: char) -> Result<String> {
    let index = fresh_share_index
        .to_lowercase()
        .next()
        .and_then(charset_index)
        .ok_or(Codex85Error::InvalidCharacter(fresh_share_index))?;
    let rows = validate_set(shares, true)?;
    let derived = ms32_interpolate(&rows, index);
    let hrp = ms32_decode(&shares[0])?.hrp;
    Ok(ms32_encode(&hrp, &derived))
}
