//! Rotation entry point.
//!
//! [`rotate`] validates its inputs and then dispatches on two things: the
//! sign of the rotation amount (forward or backward) and whether the range
//! starts at zero.
//!
//! ```text
//! rotate()
//!  └─ DialRange::validate()
//!  ├─ zero_origin::{forward, backward}      bottom == 0
//!  └─ offset_origin::{forward, backward}    bottom != 0
//! ```
//!
//! All arithmetic is carried in `i128`: `top + 1` and `value + rotate_by`
//! can exceed `i64::MAX`, but the final result always lies in
//! `[bottom, top]` and therefore fits back into an `i64`.

pub(crate) mod offset_origin;
pub(crate) mod zero_origin;

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::domain::range::DialRange;
use crate::error::RotateError;

/// Rotates `value` by `rotate_by` positions along the dial `[bottom, top]`.
///
/// Positive amounts turn the dial forward, negative amounts turn it
/// backward.  Passing the top or bottom wraps around to the other end, like
/// the dial of a combination padlock.  The amount may be any number of full
/// revolutions.
///
/// # Errors
///
/// Returns [`RotateError::InvalidRange`] if `bottom > top`, and
/// [`RotateError::ValueOutOfRange`] if `value` is not within
/// `[bottom, top]`.  No rotation is attempted in either case.
///
/// # Examples
///
/// ```rust
/// use padlock_core::rotate;
///
/// // A 40-tick padlock: 39 + 5 wraps around to 4.
/// assert_eq!(rotate(39, 5, 39, 0), Ok(4));
///
/// // Ranges may start below zero.
/// assert_eq!(rotate(0, 40, 39, -1), Ok(-1));
///
/// // Backward turns wrap the other way.
/// assert_eq!(rotate(0, -5, 39, 0), Ok(35));
/// ```
pub fn rotate(value: i64, rotate_by: i64, top: i64, bottom: i64) -> Result<i64, RotateError> {
    let range = DialRange::new(bottom, top);
    if let Err(e) = range.validate(value) {
        debug!("rejected rotation of {value} by {rotate_by} on {range}: {e}");
        return Err(e);
    }

    if range.is_degenerate() {
        trace!("single-position dial {range}: {value} is a fixed point");
        return Ok(value);
    }

    let v = i128::from(value);
    let by = i128::from(rotate_by);
    let t = i128::from(top);
    let b = i128::from(bottom);

    let rotated = match (rotate_by.cmp(&0), range.is_zero_origin()) {
        (Ordering::Equal, _) => v,
        (Ordering::Greater, true) => zero_origin::forward(v, by, t),
        (Ordering::Greater, false) => offset_origin::forward(v, by, t, b),
        (Ordering::Less, true) => zero_origin::backward(v, by, t),
        (Ordering::Less, false) => offset_origin::backward(v, by, t, b),
    };

    let result = narrow(rotated);
    trace!("rotated {value} by {rotate_by} on {range} to {result}");
    Ok(result)
}

/// Rotates `value` on the zero-origin dial `[0, top]`.
///
/// Shorthand for `rotate(value, rotate_by, top, 0)`.
///
/// # Errors
///
/// Same as [`rotate`].
///
/// # Examples
///
/// ```rust
/// use padlock_core::rotate_zero_origin;
///
/// assert_eq!(rotate_zero_origin(0, 125, 39), Ok(5));
/// ```
pub fn rotate_zero_origin(value: i64, rotate_by: i64, top: i64) -> Result<i64, RotateError> {
    rotate(value, rotate_by, top, 0)
}

/// Converts a rotation result back to `i64`.
///
/// The rotators only ever return positions within the validated range,
/// whose bounds are themselves `i64`, so the cast is lossless.
fn narrow(wide: i128) -> i64 {
    debug_assert!(
        i64::try_from(wide).is_ok(),
        "rotation result {wide} escaped the i64 range"
    );
    wide as i64
}
