//! Direct encoding of a master seed as a codex32 secret string.

use crate::codec::{charset_char, charset_index, ms32_decode, ms32_encode};
use crate::convert::{convert_bits, Pad};
use crate::entropy;
use crate::error::{Codex85Error, Result};

/// Decode a codex32 string under the expected `hrp` and return its
/// payload bytes. Works on secrets and shares alike; no threshold or
/// index policy is applied beyond what decoding itself enforces.
pub fn decode_secret(hrp: &str, s: &str) -> Result<Vec<u8>> {
    let decoded = ms32_decode(s)?;
    if decoded.hrp != hrp {
        return Err(Codex85Error::HrpMismatch {
            expected: hrp.to_string(),
            actual: decoded.hrp,
        });
    }
    let bytes = convert_bits(&decoded.data[6..], 5, 8, Pad::None, false)?;
    if bytes.len() < 16 || bytes.len() > 64 {
        return Err(Codex85Error::SecretLength(bytes.len()));
    }
    Ok(bytes)
}

/// Encode `secret` as a codex32 string with the given header fields.
///
/// An empty `identifier` is replaced by the BIP32 fingerprint of the
/// seed. The result is decoded again before being returned; a mismatch
/// would indicate an internal fault and is reported as such.
pub fn encode_secret(
    secret: &[u8],
    hrp: &str,
    threshold: char,
    identifier: &str,
    share_index: char,
) -> Result<String> {
    let identifier = if identifier.is_empty() {
        entropy::fingerprint(secret)?
            .iter()
            .map(|&v| charset_char(v))
            .collect()
    } else {
        identifier.to_string()
    };
    if identifier.len() != 4 {
        return Err(Codex85Error::InvalidParameter(format!(
            "identifier must be 4 characters, got {:?}",
            identifier
        )));
    }

    let mut data = Vec::with_capacity(6 + secret.len() * 8 / 5 + 1);
    for c in std::iter::once(threshold)
        .chain(identifier.chars())
        .chain(std::iter::once(share_index))
    {
        data.push(charset_index(c).ok_or(Codex85Error::InvalidCharacter(c))?);
    }
    data.extend(convert_bits(secret, 8, 5, Pad::Xor, false)?);
    let encoded = ms32_encode(hrp, &data);

    // Gate on a full decode so no caller can ever receive a string that
    // does not round-trip to the input bytes.
    match decode_secret(hrp, &encoded) {
        Ok(bytes) if bytes == secret => Ok(encoded),
        Ok(_) => Err(Codex85Error::SelfCheck(
            "encoded secret decodes to different bytes".into(),
        )),
        Err(e) => Err(Codex85Error::SelfCheck(format!(
            "encoded secret fails to decode: {}",
            e
        ))),
    }
}
