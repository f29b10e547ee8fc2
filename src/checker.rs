//! Answer dispatcher
//!
//! Routes a typed problem and a candidate answer to the matching
//! validator and packages the verdict as a JSON-encoded
//! [`ValidationResult`]. The JSON string is the wire contract with the
//! JavaScript side: exactly the fields `correct`, `hint`, `problem`,
//! `answer`, parsed verbatim by the consumer.

use crate::arithmetic::{validate_arithmetic, validate_equation};
use crate::fraction::validate_fraction;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Verdict for one validation attempt. Created fresh per call, owned by
/// the caller, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub correct: bool,
    pub hint: String,
    pub problem: String,
    pub answer: String,
}

impl ValidationResult {
    pub fn new(correct: bool, hint: impl Into<String>, problem: &str, answer: &str) -> Self {
        ValidationResult {
            correct,
            hint: hint.into(),
            problem: problem.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Check a student answer against a typed problem. Returns the verdict
/// as a JSON string.
///
/// Every failure state, including an unknown problem type, is expressed
/// inside the returned structure; this function never panics.
#[wasm_bindgen]
pub fn check_answer(problem_type: &str, problem: &str, student_answer: &str) -> String {
    let (is_correct, hint) = match problem_type {
        "arithmetic" => {
            let answer: f64 = student_answer.trim().parse().unwrap_or(f64::NAN);
            let correct = validate_arithmetic(problem, answer);
            let hint = if correct {
                "Correct!".to_string()
            } else {
                format!("Try evaluating {} step by step.", problem)
            };
            (correct, hint)
        }
        "fraction" => check_fraction_answer(problem, student_answer),
        "equation" => {
            let value: f64 = student_answer.trim().parse().unwrap_or(f64::NAN);
            let correct = validate_equation(problem, value);
            let hint = if correct {
                "Correct!".to_string()
            } else {
                format!("Try substituting your answer for x in {}.", problem)
            };
            (correct, hint)
        }
        _ => (false, format!("Unknown problem type: {}", problem_type)),
    };

    let result = ValidationResult::new(is_correct, hint, problem, student_answer);
    serde_json::to_string(&result).unwrap_or_default()
}

fn check_fraction_answer(problem: &str, student_answer: &str) -> (bool, String) {
    let Some((sn, sd)) = parse_fraction(student_answer) else {
        return (
            false,
            "Enter your answer as a fraction: numerator/denominator".to_string(),
        );
    };
    let Some((en, ed)) = parse_fraction(problem) else {
        return (false, "Invalid problem format.".to_string());
    };

    let correct = validate_fraction(en, ed, sn, sd);
    let hint = if correct {
        "Correct!".to_string()
    } else {
        "Try simplifying the fraction to its lowest terms.".to_string()
    };
    (correct, hint)
}

fn parse_fraction(text: &str) -> Option<(i64, i64)> {
    let (num, den) = text.split_once('/')?;
    let num = num.trim().parse().ok()?;
    let den = den.trim().parse().ok()?;
    Some((num, den))
}

/// Batch-check `;`-delimited parallel lists of arithmetic problems and
/// answers. Returns the count of correct pairs, or 0 outright when the
/// list lengths differ.
///
/// A cheap aggregate signal for self-tests and regression batteries; it
/// reuses the arithmetic validator rather than introducing new logic.
#[wasm_bindgen]
pub fn batch_validate(problems: &str, answers: &str) -> u32 {
    let probs: Vec<&str> = problems.split(';').collect();
    let ans: Vec<&str> = answers.split(';').collect();

    if probs.len() != ans.len() {
        return 0;
    }

    probs
        .iter()
        .zip(ans.iter())
        .filter(|(p, a)| match a.trim().parse::<f64>() {
            Ok(answer) => validate_arithmetic(p.trim(), answer),
            Err(_) => false,
        })
        .count() as u32
}
