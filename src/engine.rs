//! Engine handle abstraction
//!
//! The validation facade and the health-check harness talk to the math
//! engine through [`MathEngine`] rather than calling the free functions
//! directly. This keeps the call surface identical to the compiled-module
//! boundary the JavaScript side sees, and lets tests substitute a broken
//! engine to exercise failure isolation.

use crate::arithmetic::validate_arithmetic;
use crate::checker::{batch_validate, check_answer};
use crate::fraction::{simplify_fraction, validate_fraction};
use crate::health::{run_health_check, HealthCheckResult};
use thiserror::Error;

/// Failure at the engine boundary. Pure numeric functions never produce
/// these; they come from a broken or misloaded engine module.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An engine invocation failed outright.
    #[error("engine call failed: {0}")]
    Call(String),
    /// The engine answered, but its response could not be decoded.
    #[error("malformed engine response: {0}")]
    Protocol(String),
}

/// Synchronous, side-effect-free call surface of the math engine.
///
/// An `Err` is the native rendering of "the engine threw": the built-in
/// engine never returns one, but a handle to a genuinely broken module
/// may, and the harness records such failures per case.
pub trait MathEngine {
    fn check_answer(
        &self,
        problem_type: &str,
        problem: &str,
        answer: &str,
    ) -> Result<String, EngineError>;

    fn validate_arithmetic(&self, expression: &str, answer: f64) -> Result<bool, EngineError>;

    fn validate_fraction(
        &self,
        expected_num: i64,
        expected_den: i64,
        student_num: i64,
        student_den: i64,
    ) -> Result<bool, EngineError>;

    fn simplify_fraction(&self, numerator: i64, denominator: i64)
        -> Result<(i64, i64), EngineError>;

    fn batch_validate(&self, problems: &str, answers: &str) -> Result<u32, EngineError>;
}

/// Engine handle backed by the in-crate validators. Stateless and
/// infallible; exists so the facade and harness have a concrete handle to
/// route through.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinEngine;

impl MathEngine for BuiltinEngine {
    fn check_answer(
        &self,
        problem_type: &str,
        problem: &str,
        answer: &str,
    ) -> Result<String, EngineError> {
        Ok(check_answer(problem_type, problem, answer))
    }

    fn validate_arithmetic(&self, expression: &str, answer: f64) -> Result<bool, EngineError> {
        Ok(validate_arithmetic(expression, answer))
    }

    fn validate_fraction(
        &self,
        expected_num: i64,
        expected_den: i64,
        student_num: i64,
        student_den: i64,
    ) -> Result<bool, EngineError> {
        Ok(validate_fraction(
            expected_num,
            expected_den,
            student_num,
            student_den,
        ))
    }

    fn simplify_fraction(
        &self,
        numerator: i64,
        denominator: i64,
    ) -> Result<(i64, i64), EngineError> {
        let pair = simplify_fraction(numerator, denominator);
        Ok((pair[0], pair[1]))
    }

    fn batch_validate(&self, problems: &str, answers: &str) -> Result<u32, EngineError> {
        Ok(batch_validate(problems, answers))
    }
}

/// Startup routine: construct the engine handle and run the health
/// battery once. The caller owns both and decides what to do with a
/// failing report (typically: show a warning, keep serving exercises).
pub fn bootstrap() -> (BuiltinEngine, HealthCheckResult) {
    let engine = BuiltinEngine;
    let report = run_health_check(&engine);
    (engine, report)
}
