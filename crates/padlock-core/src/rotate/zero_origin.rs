//! Rotation on ranges that start at zero, `[0, top]`.
//!
//! The dial has `top + 1` positions.  Reducing the rotation amount modulo
//! that width first means arbitrarily large amounts (in either direction)
//! cost the same as a single step, and at most one wrap correction is ever
//! needed afterwards.
//!
//! Direct callers have validated `0 <= value <= top`; see [`crate::rotate()`].
//! The offset-origin rotator also calls in with a negative `top` (never
//! `-1`), which is why the reduction uses a floored modulo.

/// Remainder taking the sign of `modulus` (floored division).
///
/// Rust's `%` keeps the sign of the dividend: `-5 % 40 == -5`.  For a
/// positive modulus this is `rem_euclid`; for a negative one the result
/// lies in `(modulus, 0]`.
pub(crate) fn floor_mod(dividend: i128, modulus: i128) -> i128 {
    let rem = dividend % modulus;
    if rem != 0 && (rem < 0) != (modulus < 0) {
        rem + modulus
    } else {
        rem
    }
}

/// Rotates `value` forward (clockwise) by `rotate_by` positions.
pub(crate) fn forward(value: i128, rotate_by: i128, top: i128) -> i128 {
    let width = top + 1;
    let reduced = floor_mod(rotate_by, width);
    let moved = value + reduced;
    if moved > top {
        moved - width
    } else {
        moved
    }
}

/// Rotates `value` backward (counter-clockwise) by `|rotate_by|` positions.
///
/// A backward turn is the same as a forward turn by the amount's
/// non-negative representative.  One full extra revolution is added so the
/// forward amount is strictly positive even when the representative is 0.
pub(crate) fn backward(value: i128, rotate_by: i128, top: i128) -> i128 {
    let width = top + 1;
    let reduced = floor_mod(rotate_by, width);
    forward(value, reduced + width, top)
}
