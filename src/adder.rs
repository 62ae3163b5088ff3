//! Integer addition.
//!
//! [`add`] wraps on overflow in every build profile, so `i64::MAX + 1`
//! yields `i64::MIN`. Use [`checked_add`] when overflow has to be detected.

/// Sum of `a` and `b`, wrapping in two's complement on overflow.
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Sum of `a` and `b`, or `None` if it does not fit in an `i64`.
pub fn checked_add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}
