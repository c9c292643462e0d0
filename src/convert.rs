//! Power-of-two base conversion with a self-verifying XOR padding scheme.
//!
//! Converting between byte payloads and 5-bit codex32 symbols rarely lands
//! on a group boundary. Instead of a plain zero pad, the final partial
//! group can be filled with an XOR fold of the symbols already emitted, so
//! corruption of the pad is detectable on the way back.

use crate::error::{Codex85Error, Result};

/// Padding policy for the final partial group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    /// Fill the gap with an XOR fold of the emitted symbols (the default
    /// self-verifying pad).
    Xor,
    /// Fill the gap with a fixed value.
    Val(u8),
    /// Emit no padding group. Leftover bits must be fewer than one input
    /// symbol or the conversion fails.
    None,
}

/// XOR the low five bits of every symbol together, masked to `nbits`.
pub fn xor_fold(data: &[u8], nbits: u32) -> u8 {
    let mask = ((1u32 << nbits) - 1) as u8;
    let mut acc = 0u8;
    for &v in data {
        acc ^= v & 31;
    }
    acc & mask
}

/// Convert `data` from `frombits`-wide to `tobits`-wide groups.
///
/// With `verify` set (and no padding), the conversion additionally fails
/// unless the leftover bits match the XOR fold of the original input,
/// catching transcription damage a zero pad would let through. Failure is
/// always an error, never a partial result.
pub fn convert_bits(data: &[u8], frombits: u32, tobits: u32, pad: Pad, verify: bool) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity(data.len() * frombits as usize / tobits as usize + 1);
    let maxv: u32 = (1 << tobits) - 1;
    let max_acc: u32 = (1 << (frombits + tobits - 1)) - 1;

    for &value in data {
        if (value as u32) >> frombits != 0 {
            return Err(Codex85Error::InvalidSymbol(value, frombits));
        }
        acc = ((acc << frombits) | value as u32) & max_acc;
        bits += frombits;
        while bits >= tobits {
            bits -= tobits;
            ret.push(((acc >> bits) & maxv) as u8);
        }
    }

    match pad {
        Pad::Xor | Pad::Val(_) if bits > 0 => {
            let gap = tobits - bits;
            let fill = match pad {
                Pad::Xor => xor_fold(&ret, gap),
                Pad::Val(v) => v,
                Pad::None => unreachable!(),
            };
            ret.push((((acc << gap) + fill as u32) & maxv) as u8);
        }
        _ => {
            if bits >= frombits {
                return Err(Codex85Error::InvalidPadding);
            }
            if verify && xor_fold(data, bits) != 0 {
                return Err(Codex85Error::PaddingMismatch);
            }
        }
    }

    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bytes_to_symbols_and_back() {
        let bytes: Vec<u8> = (0u16..16).map(|i| (i * 17) as u8).collect();
        let symbols = convert_bits(&bytes, 8, 5, Pad::Xor, false).unwrap();
        // 128 bits -> 25 full symbols plus one padded group
        assert_eq!(symbols.len(), 26);
        let back = convert_bits(&symbols, 5, 8, Pad::None, false).unwrap();
        assert_eq!(back, bytes);
    }

    #[test]
    fn test_xor_pad_verifies() {
        let bytes = [0xA5u8; 16];
        let symbols = convert_bits(&bytes, 8, 5, Pad::Xor, false).unwrap();
        assert!(convert_bits(&symbols, 5, 8, Pad::None, true).is_ok());
    }

    #[test]
    fn test_zero_pad_fails_verification() {
        // All-ones input: 25 symbols of 31 XOR to 31, so the 2-bit pad is 3
        let bytes = [0xFFu8; 16];
        let xor = convert_bits(&bytes, 8, 5, Pad::Xor, false).unwrap();
        let zero = convert_bits(&bytes, 8, 5, Pad::Val(0), false).unwrap();
        // The payloads differ only in the pad bits of the final symbol
        assert_ne!(xor, zero);
        assert_eq!(&xor[..25], &zero[..25]);
        assert!(matches!(
            convert_bits(&zero, 5, 8, Pad::None, true),
            Err(Codex85Error::PaddingMismatch)
        ));
    }

    #[test]
    fn test_corrupted_pad_detected_with_verify() {
        let bytes = [7u8; 16];
        let mut symbols = convert_bits(&bytes, 8, 5, Pad::Xor, false).unwrap();
        // Damage only the pad bits: the plain decode still succeeds,
        // verification does not.
        *symbols.last_mut().unwrap() ^= 1;
        assert!(convert_bits(&symbols, 5, 8, Pad::None, false).is_ok());
        assert!(convert_bits(&symbols, 5, 8, Pad::None, true).is_err());
    }

    #[test]
    fn test_symbol_out_of_range() {
        assert!(matches!(
            convert_bits(&[31, 32], 5, 8, Pad::None, false),
            Err(Codex85Error::InvalidSymbol(32, 5))
        ));
    }

    #[test]
    fn test_excess_leftover_bits_fail_without_pad() {
        // Two bytes into 5-bit groups leaves 16 - 15 = 1 bit; converting a
        // single byte leaves 8 - 5 = 3 bits; both are fine. Converting
        // three symbols into bytes leaves 15 - 8 = 7 >= 5 bits: invalid.
        assert!(convert_bits(&[1, 2, 3], 5, 8, Pad::None, false).is_err());
    }

    #[test]
    fn test_aligned_input_needs_no_pad() {
        let bytes = [1u8, 2, 3, 4, 5];
        // 40 bits divides evenly both ways
        let symbols = convert_bits(&bytes, 8, 5, Pad::Xor, false).unwrap();
        assert_eq!(symbols.len(), 8);
        let back = convert_bits(&symbols, 5, 8, Pad::None, true).unwrap();
        assert_eq!(back, bytes);
    }

    proptest! {
        #[test]
        fn prop_xor_pad_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 16..=64)) {
            let symbols = convert_bits(&bytes, 8, 5, Pad::Xor, false).unwrap();
            let back = convert_bits(&symbols, 5, 8, Pad::None, false).unwrap();
            prop_assert_eq!(&back, &bytes);
            // And the pad itself verifies
            prop_assert!(convert_bits(&symbols, 5, 8, Pad::None, true).is_ok());
        }
    }
}
