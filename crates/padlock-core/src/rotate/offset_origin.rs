//! Rotation on ranges whose lowest position is not zero.
//!
//! The value is first rotated as though the dial started at zero, on
//! `[0, top]`.  That result has drifted by `bottom` for every revolution the
//! turn completed, so `bottom` times the revolution count is added back
//! (forward) or taken away (backward), followed by a single wrap by
//! `top + 1`.
//!
//! A revolution is counted as `top - bottom` positions, and a forward turn
//! that passes `top` before completing one still counts as one revolution.
//! A backward turn that reaches or passes zero counts one extra.
//!
//! For some inputs (ranges lying entirely below zero, or far from it) the
//! drift correction lands off the dial.  Such results are folded back onto
//! `[bottom, top]` modulo the dial's width, so a rotation always returns a
//! legal position.  A dial whose top is `-1` has no zero-origin image at
//! all (`top + 1 == 0`); it is rotated by plain translation instead.

use tracing::trace;

use super::zero_origin;

/// Rotates `value` forward by `rotate_by` positions on `[bottom, top]`.
pub(crate) fn forward(value: i128, rotate_by: i128, top: i128, bottom: i128) -> i128 {
    if top == -1 {
        return translate(value, rotate_by, top, bottom);
    }

    let unset = zero_origin::forward(value, rotate_by, top);
    let mut revolutions = rotate_by.div_euclid(top - bottom);
    if rotate_by + value > top && revolutions == 0 {
        revolutions += 1;
    }

    let mut answer = unset + bottom * revolutions;
    if answer > top {
        answer -= top + 1;
    }
    fold(answer, top, bottom)
}

/// Rotates `value` backward by `|rotate_by|` positions on `[bottom, top]`.
pub(crate) fn backward(value: i128, rotate_by: i128, top: i128, bottom: i128) -> i128 {
    if top == -1 {
        return translate(value, rotate_by, top, bottom);
    }

    let unset = zero_origin::backward(value, rotate_by, top);
    let mut revolutions = rotate_by.abs().div_euclid(top - bottom);
    if value + rotate_by <= 0 {
        revolutions += 1;
    }

    let mut answer = unset - bottom * revolutions;
    if answer < bottom {
        answer += top + 1;
    }
    fold(answer, top, bottom)
}

/// Rotation by translating onto `[0, top - bottom]` and back.
fn translate(value: i128, rotate_by: i128, top: i128, bottom: i128) -> i128 {
    bottom + (value - bottom + rotate_by).rem_euclid(top - bottom + 1)
}

/// Brings an off-dial drift correction back onto `[bottom, top]`.
fn fold(answer: i128, top: i128, bottom: i128) -> i128 {
    if (bottom..=top).contains(&answer) {
        return answer;
    }
    let folded = bottom + (answer - bottom).rem_euclid(top - bottom + 1);
    trace!("drift correction {answer} left [{bottom}, {top}]; folded to {folded}");
    folded
}
