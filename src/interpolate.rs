//! Lagrange interpolation over GF(32).
//!
//! Each codex32 row is one evaluation point of the sharing polynomial,
//! identified by its share index at position 5. Recombining `k` rows of a
//! degree-(k-1) polynomial reproduces the polynomial exactly; evaluating
//! it at the reserved secret index yields the secret row. Fewer than `k`
//! rows interpolate without error to a wrong result -- an inherent
//! property of the scheme that cannot be detected here.

use crate::codec::SECRET_INDEX;
use crate::field::{gf32_inv, gf32_mul};

/// Lagrange basis weights for the points `xs` evaluated at `x`.
/// `xs` must be pairwise distinct; share-index uniqueness upstream
/// guarantees this.
pub fn lagrange_weights(xs: &[u8], x: u8) -> Vec<u8> {
    let mut numerator = 1u8;
    let mut denominators = Vec::with_capacity(xs.len());
    for &i in xs {
        numerator = gf32_mul(numerator, i ^ x);
        let mut m = 1u8;
        for &j in xs {
            m = gf32_mul(m, if i == j { x ^ j } else { i ^ j });
        }
        denominators.push(m);
    }
    denominators
        .iter()
        .map(|&d| gf32_mul(numerator, gf32_inv(d)))
        .collect()
}

/// Interpolate a new row at share index `x` from the given rows, applying
/// the weights independently to every symbol column.
pub fn ms32_interpolate(rows: &[Vec<u8>], x: u8) -> Vec<u8> {
    let indices: Vec<u8> = rows.iter().map(|row| row[5]).collect();
    let weights = lagrange_weights(&indices, x);
    let mut out = Vec::with_capacity(rows[0].len());
    for col in 0..rows[0].len() {
        let mut acc = 0u8;
        for (row, &w) in rows.iter().zip(weights.iter()) {
            acc ^= gf32_mul(w, row[col]);
        }
        out.push(acc);
    }
    out
}

/// Recover the secret row: interpolation at the reserved index 16 ('s').
pub fn ms32_recover(rows: &[Vec<u8>]) -> Vec<u8> {
    ms32_interpolate(rows, SECRET_INDEX)
}
