//! Validation facade and fallback
//!
//! `validate_answer` is the one entry point the application calls per
//! submit: with an engine handle it routes through the engine's
//! `check_answer` and decodes the JSON verdict; without one it falls
//! back to exact string matching. The facade itself performs no numeric
//! logic and holds no state.

use crate::checker::ValidationResult;
use crate::engine::{EngineError, MathEngine};
use serde::{Deserialize, Serialize};

/// Closed set of exercise types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Arithmetic,
    Fraction,
    Equation,
}

impl ProblemKind {
    /// Wire name used across the engine boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemKind::Arithmetic => "arithmetic",
            ProblemKind::Fraction => "fraction",
            ProblemKind::Equation => "equation",
        }
    }
}

/// One practice problem, produced by the content layer and immutable
/// once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "type")]
    pub kind: ProblemKind,
    pub problem: String,
    #[serde(rename = "expectedAnswer")]
    pub expected_answer: String,
}

impl Exercise {
    pub fn new(kind: ProblemKind, problem: impl Into<String>, expected: impl Into<String>) -> Self {
        Exercise {
            kind,
            problem: problem.into(),
            expected_answer: expected.into(),
        }
    }
}

/// Validate a submitted answer, preferring the engine when one is
/// loaded.
///
/// With `Some(engine)` this is pure routing: the verdict comes from the
/// engine's `check_answer` and a broken engine surfaces as `Err` for the
/// caller to handle. With `None` the degraded-mode fallback answers, and
/// the call cannot fail.
pub fn validate_answer(
    engine: Option<&dyn MathEngine>,
    exercise: &Exercise,
    answer: &str,
) -> Result<ValidationResult, EngineError> {
    match engine {
        Some(engine) => {
            let json = engine.check_answer(exercise.kind.as_str(), &exercise.problem, answer)?;
            serde_json::from_str(&json).map_err(|e| EngineError::Protocol(e.to_string()))
        }
        None => Ok(validate_fallback(exercise, answer)),
    }
}

/// Degraded-mode validator used when no engine is loaded: trimmed exact
/// string comparison against the canonical answer. No numeric parsing,
/// no fraction normalization, no partial credit — deliberately weaker
/// than the engine, never claiming otherwise.
pub fn validate_fallback(exercise: &Exercise, answer: &str) -> ValidationResult {
    let correct = answer.trim() == exercise.expected_answer.trim();
    let hint = if correct {
        "Correct!".to_string()
    } else {
        format!("Try again. Hint: evaluate {} carefully.", exercise.problem)
    };
    ValidationResult::new(correct, hint, &exercise.problem, answer)
}
