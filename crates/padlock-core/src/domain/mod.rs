//! Domain types for dial rotation.
//!
//! This module contains pure value types with no I/O of any kind.
//!
//! # What is a "dial"? (for beginners)
//!
//! Picture an ordinary combination padlock with ticks numbered 0 to 39.
//! Turning the dial five ticks clockwise from 38 lands on 3: the numbers
//! wrap around once they pass the highest tick.  A [`range::DialRange`]
//! describes the ticks of such a dial as the closed interval
//! `[bottom, top]`; the lowest tick does not have to be 0 and may even be
//! negative.

/// Closed integer ranges and the checks run before every rotation.
///
/// See [`range::DialRange`] for the main type.
pub mod range;
