//! Startup health check
//!
//! A fixed, ordered battery of ten cases run against a loaded engine to
//! detect drift or breakage before a learner hits it mid-session. Each
//! case is isolated: a failing engine call is recorded on that case and
//! the remaining cases still run. Repeated runs against the same engine
//! produce identical checks (only `duration` varies).

use crate::checker::ValidationResult;
use crate::engine::{BuiltinEngine, EngineError, MathEngine};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use wasm_bindgen::prelude::*;

/// Outcome of a single battery case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated battery outcome. `passed` is the AND over all checks;
/// `duration` is wall-clock milliseconds for the whole battery and is
/// informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub passed: bool,
    pub checks: Vec<HealthCheck>,
    pub duration: f64,
}

fn case(name: &str, expected: &str, outcome: Result<(bool, String), EngineError>) -> HealthCheck {
    match outcome {
        Ok((passed, actual)) => HealthCheck {
            name: name.to_string(),
            passed,
            expected: expected.to_string(),
            actual,
            error: None,
        },
        Err(err) => HealthCheck {
            name: name.to_string(),
            passed: false,
            expected: expected.to_string(),
            actual: "<no result>".to_string(),
            error: Some(err.to_string()),
        },
    }
}

fn accepts(outcome: Result<bool, EngineError>) -> Result<(bool, String), EngineError> {
    outcome.map(|ok| (ok, ok.to_string()))
}

fn rejects(outcome: Result<bool, EngineError>) -> Result<(bool, String), EngineError> {
    outcome.map(|ok| (!ok, ok.to_string()))
}

fn decode_verdict(json: String) -> Result<ValidationResult, EngineError> {
    serde_json::from_str(&json).map_err(|e| EngineError::Protocol(e.to_string()))
}

/// Run the ten-case battery against the supplied engine.
pub fn run_health_check(engine: &dyn MathEngine) -> HealthCheckResult {
    let start = now_ms();

    let checks = vec![
        case(
            "arithmetic accepts 1 + 1 = 2",
            "true",
            accepts(engine.validate_arithmetic("1 + 1", 2.0)),
        ),
        case(
            "arithmetic accepts 2 * 3 = 6",
            "true",
            accepts(engine.validate_arithmetic("2 * 3", 6.0)),
        ),
        case(
            "arithmetic accepts 4 / 2 = 2",
            "true",
            accepts(engine.validate_arithmetic("4 / 2", 2.0)),
        ),
        case(
            "arithmetic rejects 2 + 2 = 5",
            "false",
            rejects(engine.validate_arithmetic("2 + 2", 5.0)),
        ),
        case(
            "arithmetic rejects division by zero",
            "false",
            rejects(engine.validate_arithmetic("5 / 0", 0.0)),
        ),
        case(
            "fraction accepts 1/2 == 2/4",
            "true",
            accepts(engine.validate_fraction(1, 2, 2, 4)),
        ),
        case(
            "fraction rejects 1/3 == 1/4",
            "false",
            rejects(engine.validate_fraction(1, 3, 1, 4)),
        ),
        case(
            "dispatcher accepts 2 + 3 = 5",
            "true",
            engine
                .check_answer("arithmetic", "2 + 3", "5")
                .and_then(decode_verdict)
                .map(|v| (v.correct, v.correct.to_string())),
        ),
        case(
            "dispatcher rejects 2 + 3 = 6",
            "false",
            engine
                .check_answer("arithmetic", "2 + 3", "6")
                .and_then(decode_verdict)
                .map(|v| (!v.correct, v.correct.to_string())),
        ),
        case(
            "batch validates 3 of 3",
            "3",
            engine
                .batch_validate("2 + 3;4 * 5;10 / 2", "5;20;5")
                .map(|n| (n == 3, n.to_string())),
        ),
    ];

    HealthCheckResult {
        passed: checks.iter().all(|c| c.passed),
        checks,
        duration: now_ms() - start,
    }
}

/// Render a battery result as a human-readable multi-line report.
pub fn format_health_check_report(result: &HealthCheckResult) -> String {
    let passed = result.checks.iter().filter(|c| c.passed).count();
    let mut report = format!(
        "Engine health check: {}/{} passed ({:.2} ms)\n",
        passed,
        result.checks.len(),
        result.duration
    );

    for check in &result.checks {
        let icon = if check.passed { "✓" } else { "✗" };
        let _ = writeln!(report, "  {} {}", icon, check.name);
        if !check.passed {
            let _ = writeln!(report, "      expected: {}", check.expected);
            let _ = writeln!(report, "      actual:   {}", check.actual);
            if let Some(err) = &check.error {
                let _ = writeln!(report, "      error:    {}", err);
            }
        }
    }

    report
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Run the battery against the built-in engine and hand the structured
/// result to JavaScript. The formatted report also goes to the browser
/// console so a failing boot is visible without extra wiring.
#[wasm_bindgen(js_name = runHealthCheck)]
pub fn run_health_check_js() -> Result<JsValue, JsValue> {
    let report = run_health_check(&BuiltinEngine);
    #[cfg(target_arch = "wasm32")]
    web_sys::console::info_1(&format_health_check_report(&report).into());
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JS-facing formatter for a previously captured battery result.
#[wasm_bindgen(js_name = formatHealthCheckReport)]
pub fn format_health_check_report_js(result: JsValue) -> Result<String, JsValue> {
    let report: HealthCheckResult =
        serde_wasm_bindgen::from_value(result).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(format_health_check_report(&report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_engine_passes_battery() {
        let report = run_health_check(&BuiltinEngine);
        assert!(report.passed);
        assert_eq!(report.checks.len(), 10);
        assert!(report.checks.iter().all(|c| c.passed));
        assert!(report.checks.iter().all(|c| c.error.is_none()));
        assert!(report.duration >= 0.0);
    }

    #[test]
    fn test_battery_order_is_fixed() {
        let report = run_health_check(&BuiltinEngine);
        let names: Vec<&str> = report.checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "arithmetic accepts 1 + 1 = 2",
                "arithmetic accepts 2 * 3 = 6",
                "arithmetic accepts 4 / 2 = 2",
                "arithmetic rejects 2 + 2 = 5",
                "arithmetic rejects division by zero",
                "fraction accepts 1/2 == 2/4",
                "fraction rejects 1/3 == 1/4",
                "dispatcher accepts 2 + 3 = 5",
                "dispatcher rejects 2 + 3 = 6",
                "batch validates 3 of 3",
            ]
        );
    }

    #[test]
    fn test_report_summary_line() {
        let report = run_health_check(&BuiltinEngine);
        let text = format_health_check_report(&report);
        assert!(text.starts_with("Engine health check: 10/10 passed"));
        assert_eq!(text.matches('✓').count(), 10);
        assert_eq!(text.matches('✗').count(), 0);
    }

    #[test]
    fn test_report_shows_failure_details() {
        let mut report = run_health_check(&BuiltinEngine);
        report.checks[0].passed = false;
        report.checks[0].actual = "false".to_string();
        report.checks[0].error = Some("engine call failed: boom".to_string());
        report.passed = false;

        let text = format_health_check_report(&report);
        assert!(text.starts_with("Engine health check: 9/10 passed"));
        assert!(text.contains("✗ arithmetic accepts 1 + 1 = 2"));
        assert!(text.contains("expected: true"));
        assert!(text.contains("actual:   false"));
        assert!(text.contains("error:    engine call failed: boom"));
    }
}
