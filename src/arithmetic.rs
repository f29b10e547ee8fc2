//! Arithmetic and equation validation
//!
//! Pure evaluation of single-operator expressions ("2 + 3") and
//! single-operator equations ("x + 1 = 3"). Deliberately narrow: no
//! precedence, no parentheses, no multi-term sides. Exercises are
//! generated content, so a malformed expression is graded as a wrong
//! answer rather than raised as an error.

use wasm_bindgen::prelude::*;

/// Absolute tolerance for floating-point answer comparison.
pub const EPSILON: f64 = 1e-9;

/// Validate an arithmetic answer: `validate_arithmetic("2 + 3", 5.0)` → true.
///
/// The expression must be exactly `<number> <op> <number>` with
/// `op ∈ {+, -, *, /}`. Anything else rejects. Division by zero rejects
/// unconditionally so NaN/Infinity can never count as a match.
#[wasm_bindgen]
pub fn validate_arithmetic(expression: &str, student_answer: f64) -> bool {
    match evaluate_expression(expression) {
        Some(correct) => (correct - student_answer).abs() < EPSILON,
        None => false,
    }
}

/// Evaluate a two-operand expression, or None if it is malformed or
/// divides by zero.
fn evaluate_expression(expr: &str) -> Option<f64> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let [left, op, right] = tokens.as_slice() else {
        return None;
    };

    let left: f64 = left.parse().ok()?;
    let right: f64 = right.parse().ok()?;

    match *op {
        "+" => Some(left + right),
        "-" => Some(left - right),
        "*" => Some(left * right),
        "/" => {
            if right.abs() < 1e-15 {
                None
            } else {
                Some(left / right)
            }
        }
        _ => None,
    }
}

/// Check a solution to a single-operator equation of the shape
/// `x <op> b = c`: substitute the candidate value for `x`, evaluate the
/// left side, and compare against the right-hand constant.
///
/// `validate_equation("x + 1 = 3", 2.0)` → true.
#[wasm_bindgen]
pub fn validate_equation(equation: &str, variable_value: f64) -> bool {
    let Some((lhs, rhs)) = equation.split_once('=') else {
        return false;
    };

    let Ok(expected) = rhs.trim().parse::<f64>() else {
        return false;
    };

    let tokens: Vec<&str> = lhs.split_whitespace().collect();
    let ["x", op, operand] = tokens.as_slice() else {
        return false;
    };

    let substituted = format!("{} {} {}", variable_value, op, operand);
    match evaluate_expression(&substituted) {
        Some(value) => (value - expected).abs() < EPSILON,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition() {
        assert!(validate_arithmetic("2 + 3", 5.0));
        assert!(!validate_arithmetic("2 + 3", 6.0));
    }

    #[test]
    fn test_subtraction() {
        assert!(validate_arithmetic("10 - 4", 6.0));
        assert!(validate_arithmetic("0 - 5", -5.0));
    }

    #[test]
    fn test_multiplication() {
        assert!(validate_arithmetic("7 * 8", 56.0));
        assert!(validate_arithmetic("0 * 999", 0.0));
    }

    #[test]
    fn test_division() {
        assert!(validate_arithmetic("15 / 3", 5.0));
        assert!(validate_arithmetic("7 / 2", 3.5));
    }

    #[test]
    fn test_division_by_zero_rejects() {
        assert!(!validate_arithmetic("5 / 0", 0.0));
        assert!(!validate_arithmetic("5 / 0", f64::INFINITY));
        assert!(!validate_arithmetic("0 / 0", 0.0));
    }

    #[test]
    fn test_epsilon_absorbs_float_rounding() {
        // 0.1 + 0.2 != 0.3 exactly in binary floating point
        assert!(validate_arithmetic("0.1 + 0.2", 0.3));
        assert!(!validate_arithmetic("0.1 + 0.2", 0.3001));
    }

    #[test]
    fn test_malformed_expressions_reject() {
        assert!(!validate_arithmetic("", 0.0));
        assert!(!validate_arithmetic("5", 5.0));
        assert!(!validate_arithmetic("2 +", 2.0));
        assert!(!validate_arithmetic("2 + 3 + 4", 9.0));
        assert!(!validate_arithmetic("a + b", 0.0));
    }

    #[test]
    fn test_unknown_operator_rejects() {
        assert!(!validate_arithmetic("2 ^ 3", 8.0));
        assert!(!validate_arithmetic("2 % 3", 2.0));
    }

    #[test]
    fn test_negative_operands() {
        assert!(validate_arithmetic("-2 + 3", 1.0));
        assert!(validate_arithmetic("3 * -4", -12.0));
    }

    #[test]
    fn test_equation_solutions() {
        assert!(validate_equation("x + 1 = 3", 2.0));
        assert!(validate_equation("x - 5 = 10", 15.0));
        assert!(validate_equation("x * 3 = 12", 4.0));
        assert!(validate_equation("x / 2 = 4", 8.0));
    }

    #[test]
    fn test_equation_wrong_value_rejects() {
        assert!(!validate_equation("x + 1 = 3", 5.0));
        assert!(!validate_equation("x * 3 = 12", 2.0));
    }

    #[test]
    fn test_equation_malformed_rejects() {
        assert!(!validate_equation("x + 1", 2.0));
        assert!(!validate_equation("x + 1 = 3 = 4", 2.0));
        assert!(!validate_equation("2 + x = 3", 1.0));
        assert!(!validate_equation("x + = 3", 3.0));
        assert!(!validate_equation("x + 1 = y", 2.0));
    }

    #[test]
    fn test_equation_division_by_zero_rejects() {
        assert!(!validate_equation("x / 0 = 1", 0.0));
    }
}
