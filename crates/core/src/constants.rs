//! Built-in constants and the reserved-word list.

/// A fixed, built-in named numeric value available without user definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    pub name: &'static str,
    pub identifier: &'static str,
    pub value: f64,
}

pub const CONSTANTS: &[Constant] = &[
    Constant {
        name: "Pi",
        identifier: "pi",
        value: 3.1415926535,
    },
    Constant {
        name: "Eulers Number",
        identifier: "e",
        value: 2.7182818284,
    },
    Constant {
        name: "Eulers Constant",
        identifier: "g",
        value: 0.5772156649,
    },
    Constant {
        name: "Golden Ratio",
        identifier: "phi",
        value: 1.6180339887,
    },
];

/// Identifiers a variable name may never claim: constant identifiers,
/// evaluator function names, and the conversion prepositions.
pub const RESERVED: &[&str] = &[
    "pi", "e", "g", "phi", "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "cbrt", "exp",
    "ln", "log", "abs", "floor", "ceil", "round", "min", "max", "pow", "to", "in",
];

/// Look up a constant by identifier.
pub fn constant_value(word: &str) -> Option<f64> {
    CONSTANTS
        .iter()
        .find(|c| c.identifier == word)
        .map(|c| c.value)
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(&word)
}
