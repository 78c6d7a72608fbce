//! Integration tests for known rotation results.
//!
//! Each case was worked out by hand on a physical 40-tick padlock (and its
//! shifted variants), and is exercised here through the public API only.

use padlock_core::{
    make_key_function, make_rotator, rotate, rotate_zero_origin, DialRange, RotateError,
};

/// `(value, rotate_by, top, bottom, expected)`
type Case = (i64, i64, i64, i64, i64);

fn check_all(cases: &[Case]) {
    for &(value, rotate_by, top, bottom, expected) in cases {
        assert_eq!(
            rotate(value, rotate_by, top, bottom),
            Ok(expected),
            "rotate({value}, {rotate_by}, top={top}, bottom={bottom})"
        );
    }
}

#[test]
fn test_forward_rotation_on_zero_base() {
    check_all(&[
        (0, 5, 39, 0, 5),
        (0, 45, 39, 0, 5),
        (0, 125, 39, 0, 5),
        (1, 125, 39, 0, 6),
        (39, 5, 39, 0, 4),
        (39, 125, 39, 0, 4),
    ]);
}

#[test]
fn test_backward_rotation_on_zero_base() {
    check_all(&[
        (0, -5, 39, 0, 35),
        (35, -5, 39, 0, 30),
        (0, -45, 39, 0, 35),
        (35, -45, 39, 0, 30),
        (0, -125, 39, 0, 35),
        (35, -125, 39, 0, 30),
        (5, -5, 39, 0, 0),
    ]);
}

#[test]
fn test_forward_rotation_on_negative_base() {
    check_all(&[
        (0, 5, 39, -1, 5),
        (0, 46, 39, -1, 5),
        (0, 87, 39, -1, 5),
        (0, 128, 39, -1, 5),
        (5, 5, 39, -1, 10),
        (5, 128, 39, -1, 10),
        (0, 39, 39, -1, 39),
        (0, 40, 39, -1, -1),
        (0, 81, 39, -1, -1),
        (0, 82, 39, -1, 0),
        (0, 41, 39, -1, 0),
    ]);
}

#[test]
fn test_forward_rotation_on_positive_base() {
    check_all(&[
        (5, 5, 39, 1, 10),
        (5, 45, 39, 1, 11),
        (5, 83, 39, 1, 10),
        (39, 2, 39, 1, 2),
        (39, 1, 39, 1, 1),
    ]);
}

#[test]
fn test_backward_rotation_on_nonzero_base() {
    check_all(&[
        (0, -5, 39, -1, 36),
        (1, -5, 39, 1, 35),
        (10, -5, 39, 5, 5),
        (1, -44, 39, 1, 35),
        (1, -83, 39, 1, 35),
        (0, -47, 39, -1, 35),
        (5, -52, 39, -1, 35),
        (10, -5, 39, -1000, 5),
        (10, -10, 39, 5, 35),
        (1, -2, 39, 1, 38),
        (1, -1, 39, 1, 39),
    ]);
}

#[test]
fn test_offset_revolution_is_top_minus_bottom_positions() {
    // On [1, 39] a revolution is 38 positions, not 39.
    check_all(&[
        (1, -38, 39, 1, 1),
        (1, 76, 39, 1, 39),
        (2, -39, 39, 1, 1),
    ]);
}

#[test]
fn test_offset_rotation_never_leaves_the_dial() {
    check_all(&[
        (-6, -40, -5, -6, -6),
        (-6, -39, -5, -6, -5),
        (-3, 1, -1, -3, -2),
        (-3, -1, -1, -3, -1),
    ]);
}

#[test]
fn test_zero_rotation_returns_value() {
    assert_eq!(rotate(5, 0, 39, 0), Ok(5));
}

#[test]
fn test_zero_origin_shorthand() {
    assert_eq!(rotate_zero_origin(0, 5, 39), Ok(5));
    assert_eq!(rotate_zero_origin(35, -45, 39), Ok(30));
}

#[test]
fn test_value_above_top_is_rejected() {
    assert_eq!(
        rotate(40, 5, 39, 0),
        Err(RotateError::ValueOutOfRange {
            value: 40,
            bottom: 0,
            top: 39
        })
    );
}

#[test]
fn test_value_below_bottom_is_rejected() {
    assert_eq!(
        rotate(-1, 5, 39, 0),
        Err(RotateError::ValueOutOfRange {
            value: -1,
            bottom: 0,
            top: 39
        })
    );
}

#[test]
fn test_inverted_range_is_rejected() {
    assert_eq!(
        rotate(0, 5, 5, 10),
        Err(RotateError::InvalidRange { bottom: 10, top: 5 })
    );
}

#[test]
fn test_make_key_function_closures() {
    assert_eq!(make_key_function(5, 39, 0).apply(0), Ok(5));
    assert_eq!(make_key_function(-5, 39, 5).apply(10), Ok(5));
    assert_eq!(make_key_function(-10, 39, 5).apply(10), Ok(35));
}

#[test]
fn test_make_rotator_closures() {
    let padlock = make_rotator(39, 0);
    assert_eq!(padlock.rotate(0, 5), Ok(5));
    assert_eq!(padlock.rotate(0, 10), Ok(10));

    assert_eq!(make_rotator(39, 5).rotate(10, -5), Ok(5));
}

#[test]
fn test_dial_range_rotate_matches_free_function() {
    let dial = DialRange::new(-1, 39);
    assert_eq!(dial.rotate(0, 40), rotate(0, 40, 39, -1));
}
