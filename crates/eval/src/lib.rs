//! reckon-eval: arithmetic expression evaluator for the notepad core.
//!
//! Consumes a fully-resolved arithmetic string (references and currency
//! conversions already substituted by `reckon-core`) and produces an
//! `f64`. Vocabulary: `+ - * / % ^`, unary minus, parentheses, function
//! calls, and the bare word `x` as a multiplication operator.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{eval, BinaryOp, Expr, Function};
pub use error::EvalError;

use reckon_core::{EvalFailure, ExpressionEvaluator};

/// Evaluate an expression string to a number.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = lexer::lex(expr)?;
    let tree = parser::parse(&tokens)?;
    Ok(ast::eval(&tree))
}

/// The shipped [`ExpressionEvaluator`] backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl ExpressionEvaluator for Calculator {
    fn evaluate(&self, expr: &str) -> Result<f64, EvalFailure> {
        evaluate(expr).map_err(|e| EvalFailure::new(e.to_string()))
    }
}
