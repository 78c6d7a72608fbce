//! Rotation operations with some parameters bound in advance.
//!
//! [`make_rotator`] fixes the dial and leaves the value and amount open:
//! conceptually it hands you a padlock to play with.  [`make_key_function`]
//! also fixes the amount, which is what a Caesar-style shift needs when the
//! same key is applied to every item of a message.
//!
//! Neither factory validates its range.  A bad range or value is reported
//! by the returned operation when it is called, with the same
//! [`RotateError`] that [`crate::rotate()`] would return.

use crate::domain::range::DialRange;
use crate::error::RotateError;
use crate::rotate::rotate;

/// A rotation with a fixed dial.
///
/// # Examples
///
/// ```rust
/// use padlock_core::make_rotator;
///
/// let dial = make_rotator(39, 5);
/// assert_eq!(dial.rotate(10, -5), Ok(5));
/// assert_eq!(dial.rotate(10, -10), Ok(35));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotator {
    range: DialRange,
}

impl Rotator {
    /// Binds a rotator to `range`.
    pub const fn new(range: DialRange) -> Self {
        Self { range }
    }

    /// Returns the dial this rotator turns.
    pub const fn range(&self) -> DialRange {
        self.range
    }

    /// Rotates `value` by `rotate_by` positions on the bound dial.
    ///
    /// # Errors
    ///
    /// Same as [`crate::rotate()`].
    pub fn rotate(&self, value: i64, rotate_by: i64) -> Result<i64, RotateError> {
        rotate(value, rotate_by, self.range.top(), self.range.bottom())
    }

    /// Narrows this rotator further by also fixing the amount.
    pub const fn key_function(&self, rotate_by: i64) -> KeyFunction {
        KeyFunction::new(rotate_by, self.range)
    }

    /// Converts the rotator into a plain two-argument closure.
    pub fn into_fn(self) -> impl Fn(i64, i64) -> Result<i64, RotateError> + Send + Sync + Copy {
        move |value, rotate_by| self.rotate(value, rotate_by)
    }
}

/// A rotation with a fixed dial and a fixed amount.
///
/// # Examples
///
/// ```rust
/// use padlock_core::make_key_function;
///
/// let shift = make_key_function(3, 25, 0);
/// assert_eq!(shift.apply_all([0, 1, 24, 25]), Ok(vec![3, 4, 1, 2]));
/// assert_eq!(shift.inverse().apply(2), Ok(25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyFunction {
    rotate_by: i64,
    range: DialRange,
}

impl KeyFunction {
    /// Binds `rotate_by` and `range`.
    pub const fn new(rotate_by: i64, range: DialRange) -> Self {
        Self { rotate_by, range }
    }

    /// Returns the bound rotation amount.
    pub const fn rotate_by(&self) -> i64 {
        self.rotate_by
    }

    /// Returns the bound dial.
    pub const fn range(&self) -> DialRange {
        self.range
    }

    /// Rotates `value` by the bound amount on the bound dial.
    ///
    /// # Errors
    ///
    /// Same as [`crate::rotate()`].
    pub fn apply(&self, value: i64) -> Result<i64, RotateError> {
        rotate(value, self.rotate_by, self.range.top(), self.range.bottom())
    }

    /// Applies the key to every item, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first item that [`KeyFunction::apply`]
    /// rejects.
    pub fn apply_all<I>(&self, values: I) -> Result<Vec<i64>, RotateError>
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().map(|v| self.apply(v)).collect()
    }

    /// Returns the key function with the opposite amount.
    ///
    /// On a zero-origin dial this undoes the key exactly.  On other dials
    /// the per-revolution offset correction is not symmetric, so applying
    /// the inverse does not always restore the original value.
    ///
    /// `i64::MIN` has no negation; its inverse is the amount's negation
    /// reduced modulo the dial width.
    pub fn inverse(&self) -> Self {
        let undo = match self.rotate_by.checked_neg() {
            Some(n) => n,
            None => inverse_of_min(self.range),
        };
        Self::new(undo, self.range)
    }

    /// Converts the key function into a plain one-argument closure.
    pub fn into_fn(self) -> impl Fn(i64) -> Result<i64, RotateError> + Send + Sync + Copy {
        move |value| self.apply(value)
    }
}

/// Negation of `i64::MIN` reduced modulo the dial width.
///
/// Only the full `i64` span leaves 2^63 unreduced; on that dial 2^63 and
/// `i64::MIN` are a whole revolution apart, so `i64::MIN` is its own inverse.
fn inverse_of_min(range: DialRange) -> i64 {
    let width = i128::try_from(range.width()).unwrap_or(i128::MAX).max(1);
    let undo = (-i128::from(i64::MIN)).rem_euclid(width);
    i64::try_from(undo).unwrap_or(i64::MIN)
}

/// Returns a rotator bound to the dial `[bottom, top]`.
///
/// Pass `bottom = 0` for the common zero-origin dial.
///
/// # Examples
///
/// ```rust
/// use padlock_core::make_rotator;
///
/// let padlock = make_rotator(39, 0);
/// assert_eq!(padlock.rotate(0, 5), Ok(5));
/// assert_eq!(padlock.rotate(0, 10), Ok(10));
/// ```
pub const fn make_rotator(top: i64, bottom: i64) -> Rotator {
    Rotator::new(DialRange::new(bottom, top))
}

/// Returns a key function that rotates by `rotate_by` on `[bottom, top]`.
///
/// # Examples
///
/// ```rust
/// use padlock_core::make_key_function;
///
/// let rot5 = make_key_function(5, 39, 0);
/// assert_eq!(rot5.apply(0), Ok(5));
/// ```
pub const fn make_key_function(rotate_by: i64, top: i64, bottom: i64) -> KeyFunction {
    KeyFunction::new(rotate_by, DialRange::new(bottom, top))
}
