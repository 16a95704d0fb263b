//! The seam to the external arithmetic evaluator.
//!
//! The core prepares a fully-resolved arithmetic string and consumes a
//! numeric result; parsing and operator semantics live behind this trait
//! (see the `reckon-eval` crate for the shipped implementation).

use std::fmt;

/// Failure reported by an evaluator backend. The pipeline downgrades any
/// failure to "no result" for the line; it is never surfaced as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalFailure {
    message: String,
}

impl EvalFailure {
    pub fn new(message: impl Into<String>) -> EvalFailure {
        EvalFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EvalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evaluation failed: {}", self.message)
    }
}

impl std::error::Error for EvalFailure {}

/// Evaluates a fully-resolved arithmetic string to a number.
pub trait ExpressionEvaluator {
    fn evaluate(&self, expr: &str) -> Result<f64, EvalFailure>;
}
