//! Math Validator - Rust/WASM answer-validation engine
//!
//! This crate provides the numeric core behind the exercise UI:
//! - Arithmetic and single-operator equation validation
//! - Fraction equivalence (cross-multiplication) and simplification
//! - A JSON-speaking answer dispatcher and batch validator
//! - A validation facade with an exact-match fallback for when no
//!   engine is loaded
//! - A deterministic ten-case health check run at startup
//!
//! Every validator is a pure function: same input, same output, across
//! processes. Malformed problems grade as wrong answers rather than
//! raising errors, so the validation flow can never crash on content.

use wasm_bindgen::prelude::*;

pub mod arithmetic;
pub mod checker;
pub mod engine;
pub mod fraction;
pub mod health;
pub mod validate;

// Re-export main types for convenience
pub use arithmetic::{validate_arithmetic, validate_equation};
pub use checker::{batch_validate, check_answer, ValidationResult};
pub use engine::{bootstrap, BuiltinEngine, EngineError, MathEngine};
pub use fraction::{simplify_fraction, validate_fraction};
pub use health::{format_health_check_report, run_health_check, HealthCheck, HealthCheckResult};
pub use validate::{validate_answer, validate_fallback, Exercise, ProblemKind};

/// Initialize the WASM module
/// Call this once when loading the module to set up panic hooks
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();
}

/// Get the version of the math-validator library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
