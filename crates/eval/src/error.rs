use std::fmt;

/// Errors from lexing, parsing, or evaluating an expression string.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A character the lexer does not recognize.
    UnexpectedChar(char),
    /// A token in a position the grammar does not allow.
    UnexpectedToken(String),
    /// Input ended mid-expression.
    UnexpectedEnd,
    /// A word that is neither a function nor an operator.
    UnknownIdentifier(String),
    /// A function called with the wrong number of arguments.
    WrongArity {
        function: String,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            EvalError::UnexpectedToken(t) => write!(f, "unexpected token '{}'", t),
            EvalError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            EvalError::UnknownIdentifier(w) => write!(f, "unknown identifier '{}'", w),
            EvalError::WrongArity {
                function,
                expected,
                got,
            } => write!(
                f,
                "function '{}' takes {} argument(s), got {}",
                function, expected, got
            ),
        }
    }
}

impl std::error::Error for EvalError {}
