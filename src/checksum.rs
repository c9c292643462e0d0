//! The two BCH-style checksum codes of BIP93.
//!
//! Short strings (up to 93 data symbols) carry a 13-symbol checksum,
//! long strings (96 symbols and up) a 15-symbol one. Lengths 94 and 95
//! fit neither code and are always invalid. Checksum creation switches
//! to the long code above 80 data symbols, leaving headroom for the
//! checksum itself; the 81-93 creation/verification asymmetry is a
//! property of the published format and is preserved exactly.

/// Number of checksum symbols appended by the short code.
pub const SHORT_CHECKSUM_LEN: usize = 13;
/// Number of checksum symbols appended by the long code.
pub const LONG_CHECKSUM_LEN: usize = 15;

/// Longest data length (pre-checksum) still using the short code at creation.
const SHORT_CREATE_MAX: usize = 80;
/// Longest data length (including checksum) the short code verifies.
const SHORT_VERIFY_MAX: usize = 93;
/// Shortest data length (including checksum) the long code verifies.
const LONG_VERIFY_MIN: usize = 96;

/// Residue a valid short-code string must reduce to.
const MS32_CONST: u128 = 0x10CE0795C2FD1E62A;
/// Residue a valid long-code string must reduce to.
const MS32_LONG_CONST: u128 = 0x43381E570BF4798AB26;

const RESIDUE_INIT: u128 = 0x23181B3;

const SHORT_GEN: [u128; 5] = [
    0x19DC500CE73FDE210,
    0x1BFAE00DEF77FE529,
    0x1FBD920FFFE7BEE52,
    0x1739640BDEEE3FDAD,
    0x07729A039CFC75F5A,
];

const LONG_GEN: [u128; 5] = [
    0x3D59D273535EA62D897,
    0x7A9BECB6361C6C51507,
    0x543F9B7E6C38D8A2A0E,
    0x0C577EAECCF1990D13C,
    0x1887F74F8DC71B10651,
];

/// Fold symbols into the short code's 60-bit residue register.
fn polymod(values: &[u8]) -> u128 {
    let mut residue = RESIDUE_INIT;
    for &v in values {
        let b = residue >> 60;
        residue = ((residue & 0x0FFF_FFFF_FFFF_FFFF) << 5) ^ v as u128;
        for (i, gen) in SHORT_GEN.iter().enumerate() {
            if (b >> i) & 1 == 1 {
                residue ^= gen;
            }
        }
    }
    residue
}

/// Fold symbols into the long code's 70-bit residue register.
fn long_polymod(values: &[u8]) -> u128 {
    let mut residue = RESIDUE_INIT;
    for &v in values {
        let b = residue >> 70;
        residue = ((residue & 0x3F_FFFF_FFFF_FFFF_FFFF) << 5) ^ v as u128;
        for (i, gen) in LONG_GEN.iter().enumerate() {
            if (b >> i) & 1 == 1 {
                residue ^= gen;
            }
        }
    }
    residue
}

/// Verify the checksum over data-plus-checksum symbols, selecting the code
/// by length. Lengths 94 and 95 fit neither code and always fail.
pub fn verify_checksum(data: &[u8]) -> bool {
    if data.len() >= LONG_VERIFY_MIN {
        return long_polymod(data) == MS32_LONG_CONST;
    }
    if data.len() <= SHORT_VERIFY_MAX {
        return polymod(data) == MS32_CONST;
    }
    false
}

/// Compute the checksum symbols for `data` (header plus payload, no
/// checksum), selecting the code by the creation-side length boundary.
pub fn create_checksum(data: &[u8]) -> Vec<u8> {
    if data.len() > SHORT_CREATE_MAX {
        return create_long_checksum(data);
    }
    let mut values = data.to_vec();
    values.resize(data.len() + SHORT_CHECKSUM_LEN, 0);
    let residue = polymod(&values) ^ MS32_CONST;
    (0..SHORT_CHECKSUM_LEN)
        .map(|i| ((residue >> (5 * (SHORT_CHECKSUM_LEN - 1 - i))) & 31) as u8)
        .collect()
}

fn create_long_checksum(data: &[u8]) -> Vec<u8> {
    let mut values = data.to_vec();
    values.resize(data.len() + LONG_CHECKSUM_LEN, 0);
    let residue = long_polymod(&values) ^ MS32_LONG_CONST;
    (0..LONG_CHECKSUM_LEN)
        .map(|i| ((residue >> (5 * (LONG_CHECKSUM_LEN - 1 - i))) & 31) as u8)
        .collect()
}

/// Checksum length carried by a data-plus-checksum sequence of `total_len`
/// symbols.
pub fn checksum_len_for(total_len: usize) -> usize {
    if total_len < 95 {
        SHORT_CHECKSUM_LEN
    } else {
        LONG_CHECKSUM_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data(len: usize) -> Vec<u8> {
        (0..len).map(|i| ((i * 7 + 3) % 32) as u8).collect()
    }

    #[test]
    fn test_short_create_verify_roundtrip() {
        for len in [32usize, 45, 58, 80] {
            let mut data = sample_data(len);
            data.extend(create_checksum(&sample_data(len)));
            assert_eq!(data.len(), len + SHORT_CHECKSUM_LEN);
            assert!(verify_checksum(&data), "short roundtrip failed at {}", len);
        }
    }

    #[test]
    fn test_long_create_verify_roundtrip() {
        for len in [81usize, 93, 109] {
            let mut data = sample_data(len);
            data.extend(create_checksum(&sample_data(len)));
            assert_eq!(data.len(), len + LONG_CHECKSUM_LEN);
            assert!(verify_checksum(&data), "long roundtrip failed at {}", len);
        }
    }

    #[test]
    fn test_creation_boundary_selects_code() {
        assert_eq!(create_checksum(&sample_data(80)).len(), SHORT_CHECKSUM_LEN);
        assert_eq!(create_checksum(&sample_data(81)).len(), LONG_CHECKSUM_LEN);
    }

    #[test]
    fn test_creation_never_lands_in_length_gap() {
        // Short creation tops out at 80 + 13 = 93; long creation starts
        // at 81 + 15 = 96. No creatable string has total length 94 or 95.
        for len in 1..=120usize {
            let total = len + create_checksum(&sample_data(len)).len();
            assert!(total != 94 && total != 95, "creation produced gap length from {}", len);
        }
    }

    #[test]
    fn test_length_gap_always_invalid() {
        for len in [94usize, 95] {
            assert!(!verify_checksum(&sample_data(len)));
            assert!(!verify_checksum(&vec![0u8; len]));
        }
    }

    #[test]
    fn test_single_symbol_flip_detected_short() {
        let mut data = sample_data(32);
        data.extend(create_checksum(&sample_data(32)));
        for pos in 0..data.len() {
            for delta in 1..32u8 {
                let mut corrupted = data.clone();
                corrupted[pos] ^= delta;
                assert!(
                    !verify_checksum(&corrupted),
                    "flip at {} by {} went undetected",
                    pos,
                    delta
                );
            }
        }
    }

    #[test]
    fn test_single_symbol_flip_detected_long() {
        let mut data = sample_data(100);
        data.extend(create_checksum(&sample_data(100)));
        for pos in 0..data.len() {
            let mut corrupted = data.clone();
            corrupted[pos] ^= 1;
            assert!(!verify_checksum(&corrupted), "flip at {} went undetected", pos);
        }
    }

    #[test]
    fn test_checksum_len_for() {
        assert_eq!(checksum_len_for(45), SHORT_CHECKSUM_LEN);
        assert_eq!(checksum_len_for(93), SHORT_CHECKSUM_LEN);
        assert_eq!(checksum_len_for(94), SHORT_CHECKSUM_LEN);
        assert_eq!(checksum_len_for(95), LONG_CHECKSUM_LEN);
        assert_eq!(checksum_len_for(124), LONG_CHECKSUM_LEN);
    }
}
