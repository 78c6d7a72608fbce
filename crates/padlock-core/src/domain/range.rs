//! Closed integer range of dial positions.
//!
//! A [`DialRange`] is plain data: constructing one never fails.  Whether the
//! range is well-formed, and whether a starting value lies on it, is checked
//! lazily by [`DialRange::validate`] at the moment a rotation is requested.
//! This lets bound rotators be created up-front and report bad input only
//! when they are actually used.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RotateError;

/// The inclusive interval `[bottom, top]` of legal dial positions.
///
/// # Examples
///
/// ```rust
/// use padlock_core::DialRange;
///
/// let dial = DialRange::zero_origin(39);
/// assert_eq!(dial.width(), 40);
/// assert_eq!(dial.rotate(38, 5), Ok(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialRange {
    /// Lowest position on the dial (may be negative).
    bottom: i64,
    /// Highest position on the dial.
    top: i64,
}

impl DialRange {
    /// Creates a range without checking it.
    ///
    /// An inverted range (`bottom > top`) is representable; it is rejected
    /// with [`RotateError::InvalidRange`] the first time it is used.
    pub const fn new(bottom: i64, top: i64) -> Self {
        Self { bottom, top }
    }

    /// Creates the range `[0, top]`.
    pub const fn zero_origin(top: i64) -> Self {
        Self::new(0, top)
    }

    /// Returns the lowest position.
    pub const fn bottom(&self) -> i64 {
        self.bottom
    }

    /// Returns the highest position.
    pub const fn top(&self) -> i64 {
        self.top
    }

    /// Returns `true` when the range starts at 0.
    pub const fn is_zero_origin(&self) -> bool {
        self.bottom == 0
    }

    /// Returns `true` when the range holds exactly one value.
    pub const fn is_degenerate(&self) -> bool {
        self.bottom == self.top
    }

    /// Number of distinct positions, `top - bottom + 1`.
    ///
    /// Returns 0 for an inverted range.  The full `i64` span does not fit
    /// in `u64`, hence the wider return type.
    pub fn width(&self) -> u128 {
        let span = i128::from(self.top) - i128::from(self.bottom) + 1;
        u128::try_from(span).unwrap_or(0)
    }

    /// Returns `true` if `value` lies within `[bottom, top]`.
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.bottom && value <= self.top
    }

    /// Checks that the range itself is well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`RotateError::InvalidRange`] when `bottom > top`.
    pub const fn check(&self) -> Result<(), RotateError> {
        if self.bottom > self.top {
            return Err(RotateError::InvalidRange {
                bottom: self.bottom,
                top: self.top,
            });
        }
        Ok(())
    }

    /// Checks that the range is well-formed and that `value` lies on it.
    ///
    /// The range is checked first, so an inverted range always reports
    /// [`RotateError::InvalidRange`] regardless of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`RotateError::InvalidRange`] or
    /// [`RotateError::ValueOutOfRange`].
    pub const fn validate(&self, value: i64) -> Result<(), RotateError> {
        if let Err(e) = self.check() {
            return Err(e);
        }
        if !self.contains(value) {
            return Err(RotateError::ValueOutOfRange {
                value,
                bottom: self.bottom,
                top: self.top,
            });
        }
        Ok(())
    }

    /// Rotates `value` by `rotate_by` positions on this dial.
    ///
    /// Equivalent to [`crate::rotate`] with this range's bounds.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`DialRange::validate`].
    pub fn rotate(&self, value: i64, rotate_by: i64) -> Result<i64, RotateError> {
        crate::rotate::rotate(value, rotate_by, self.top, self.bottom)
    }
}

impl Default for DialRange {
    /// A 40-tick padlock dial, `[0, 39]`.
    fn default() -> Self {
        Self::zero_origin(39)
    }
}

impl fmt::Display for DialRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.bottom, self.top)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
