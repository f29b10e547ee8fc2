//! Fraction equivalence and simplification
//!
//! Fractions cross the engine boundary as positional (numerator,
//! denominator) i64 pairs, not as a wrapper type. A zero denominator is
//! an input-error condition: equivalence checks reject it and
//! simplification returns the `[0, 0]` sentinel, so no path here can
//! divide by zero or panic.

use num_bigint::BigInt;
use num_integer::Integer;
use wasm_bindgen::prelude::*;

/// Check whether two fractions are equivalent:
/// `validate_fraction(1, 2, 2, 4)` → true.
///
/// Uses the cross-multiplication test `en·sd == sn·ed`, with the products
/// formed as BigInt so no i64 input pair can overflow.
#[wasm_bindgen]
pub fn validate_fraction(
    expected_num: i64,
    expected_den: i64,
    student_num: i64,
    student_den: i64,
) -> bool {
    if expected_den == 0 || student_den == 0 {
        return false;
    }

    BigInt::from(expected_num) * BigInt::from(student_den)
        == BigInt::from(student_num) * BigInt::from(expected_den)
}

/// Reduce a fraction to lowest terms. Returns `[numerator, denominator]`.
///
/// The result denominator is always non-negative; a negative input
/// denominator flips the sign of both components. A zero denominator
/// yields the `[0, 0]` sentinel, as does the one shape whose reduced
/// form falls outside i64 (an odd numerator over `i64::MIN`, which
/// normalizes to a denominator of 2^63).
#[wasm_bindgen]
pub fn simplify_fraction(numerator: i64, denominator: i64) -> Vec<i64> {
    if denominator == 0 {
        return vec![0, 0];
    }

    // Reduce in i128: the gcd can be 2^63, and sign normalization can
    // negate i64::MIN. Both are outside i64.
    let sign: i128 = if denominator < 0 { -1 } else { 1 };
    let g = i128::from(numerator)
        .unsigned_abs()
        .gcd(&i128::from(denominator).unsigned_abs()) as i128;

    let num = sign * i128::from(numerator) / g;
    let den = sign * i128::from(denominator) / g;

    match (i64::try_from(num), i64::try_from(den)) {
        (Ok(num), Ok(den)) => vec![num, den],
        _ => vec![0, 0],
    }
}
