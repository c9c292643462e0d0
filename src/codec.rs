//! Encoding and decoding of ms32 (codex32) strings.
//!
//! A codex32 string is `hrp "1" data checksum` where every data character
//! is one GF(32) symbol from the bech32 alphabet. The first six data
//! symbols form the header: threshold digit, four identifier symbols, and
//! the share index. Index `'s'` (value 16) is reserved for the secret
//! itself and never labels an actual share.

use crate::checksum::{checksum_len_for, create_checksum, verify_checksum};
use crate::error::{Codex85Error, Result};

/// The bech32 character set, in symbol-value order.
pub const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// GF(32) value of the reserved secret index `'s'`.
pub const SECRET_INDEX: u8 = 16;

/// Maximum total string length, hrp included.
pub const MAX_STRING_LEN: usize = 127;

/// Minimum number of data characters after the separator.
pub const MIN_DATA_LEN: usize = 45;

/// Symbol value of an alphabet character, if it is one.
pub fn charset_index(c: char) -> Option<u8> {
    CHARSET.find(c).map(|i| i as u8)
}

/// Alphabet character for a symbol value.
pub fn charset_char(v: u8) -> char {
    CHARSET.as_bytes()[(v & 31) as usize] as char
}

/// A decoded codex32 string with its checksum verified and stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedString {
    pub hrp: String,
    /// Threshold digit character ('0'-'9').
    pub threshold: char,
    /// Four-character identifier shared by every string of a set.
    pub identifier: String,
    /// Share index character; 's' marks the secret itself.
    pub share_index: char,
    /// Header and payload symbols, checksum stripped.
    pub data: Vec<u8>,
}

/// Render header and payload symbols as a codex32 string, appending the
/// length-appropriate checksum.
pub fn ms32_encode(hrp: &str, data: &[u8]) -> String {
    let checksum = create_checksum(data);
    let mut s = String::with_capacity(hrp.len() + 1 + data.len() + checksum.len());
    s.push_str(hrp);
    s.push('1');
    for &d in data.iter().chain(checksum.iter()) {
        s.push(charset_char(d));
    }
    s
}

/// Parse and validate a codex32 string.
pub fn ms32_decode(s: &str) -> Result<DecodedString> {
    for c in s.chars() {
        if (c as u32) < 33 || (c as u32) > 126 {
            return Err(Codex85Error::InvalidCharacter(c));
        }
    }
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Codex85Error::MixedCase);
    }
    let s = s.to_lowercase();

    let pos = s.rfind('1').ok_or(Codex85Error::MissingSeparator)?;
    if pos == 0 {
        return Err(Codex85Error::MissingSeparator);
    }
    if pos + 1 + MIN_DATA_LEN > s.len() || s.len() > MAX_STRING_LEN {
        return Err(Codex85Error::InvalidLength(s.len()));
    }

    let hrp = s[..pos].to_string();
    let mut data = Vec::with_capacity(s.len() - pos - 1);
    for c in s[pos + 1..].chars() {
        data.push(charset_index(c).ok_or(Codex85Error::InvalidCharacter(c))?);
    }

    // All characters are ASCII at this point; byte indexing is safe.
    let threshold = s.as_bytes()[pos + 1] as char;
    if !threshold.is_ascii_digit() {
        return Err(Codex85Error::InvalidThreshold(threshold));
    }
    let identifier = s[pos + 2..pos + 6].to_string();
    let share_index = s.as_bytes()[pos + 6] as char;
    if threshold == '0' && share_index != 's' {
        return Err(Codex85Error::InvalidShareIndex(share_index));
    }

    if !verify_checksum(&data) {
        return Err(Codex85Error::ChecksumMismatch);
    }
    let stripped = data.len() - checksum_len_for(data.len());
    data.truncate(stripped);

    Ok(DecodedString {
        hrp,
        threshold,
        identifier,
        share_index,
        data,
    })
}
