//! Arithmetic in GF(32), the 32-element field underlying codex32.
//!
//! Every symbol of a codex32 string is one field element (a 5-bit value).
//! Addition is XOR; multiplication reduces by the fixed polynomial
//! x^5 + x^3 + 1 (0b101001 = 41).

/// Multiplicative inverses of the field elements.
/// Index 0 has no inverse and maps to 0; it is never looked up for a
/// non-zero denominator in valid use.
const GF32_INV: [u8; 32] = [
    0, 1, 20, 24, 10, 8, 12, 29, 5, 11, 4, 9, 6, 28, 26, 31,
    22, 18, 17, 23, 2, 25, 16, 19, 3, 21, 14, 30, 13, 7, 27, 15,
];

/// Multiply two field elements: double-and-reduce, one step per bit of `b`.
pub fn gf32_mul(a: u8, b: u8) -> u8 {
    let mut a = a as u32;
    let mut res = 0u32;
    for i in 0..5 {
        if (b >> i) & 1 == 1 {
            res ^= a;
        }
        a <<= 1;
        if a >= 32 {
            a ^= 41;
        }
    }
    res as u8
}

/// Multiplicative inverse of a field element.
pub fn gf32_inv(a: u8) -> u8 {
    GF32_INV[(a & 31) as usize]
}
