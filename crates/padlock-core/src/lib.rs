//! # padlock-core
//!
//! Rotates an integer by an arbitrary signed amount within an inclusive
//! range `[bottom, top]`, wrapping around at the ends like the dial of a
//! combination padlock.
//!
//! It is a building block for modular counters, rolling indices and simple
//! substitution ciphers, anywhere a value has to stay on a fixed ring of
//! integers no matter how large or negative the rotation amount is.
//!
//! # Architecture overview (for beginners)
//!
//! Getting wrap-around arithmetic right by hand is a steady source of
//! off-by-one errors near the ends of the range and with negative numbers.
//! This crate solves it once:
//!
//! - **`domain`** – The [`DialRange`] value type and the checks that run
//!   before any arithmetic: the range must not be inverted and the starting
//!   value must lie on it.
//!
//! - **`rotate`** – The [`rotate()`] entry point.  It validates, then turns
//!   the dial forward or backward.  Ranges that start at zero are handled
//!   directly; other ranges are rotated as if they started at zero and then
//!   corrected for the offset drift of each revolution.
//!
//! - **`factory`** – [`make_rotator`] and [`make_key_function`] return small
//!   `Copy` values with part of the arguments already bound, for repeated
//!   use (for example, the same key applied to every letter of a message).
//!
//! - **`config`** – [`DialConfig`], a TOML description of a dial.
//!
//! Every operation is a pure function of its arguments: there is no shared
//! state, and every bound operation is `Send + Sync`.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`trace` for each rotation, `debug`
//! for rejected input) and never installs a subscriber itself.

// Rust will look for each module in a file or subdirectory of the same name.
pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod rotate;

// Re-export the public surface at the crate root so callers can write
// `padlock_core::rotate` instead of `padlock_core::rotate::rotate`.
pub use config::{ConfigError, DialConfig, DialSection};
pub use domain::range::DialRange;
pub use error::RotateError;
pub use factory::{make_key_function, make_rotator, KeyFunction, Rotator};
pub use rotate::{rotate, rotate_zero_origin};
