//! Expression AST and the built-in function vocabulary.

use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(Function, Vec<Expr>),
}

/// Built-in functions. Trig works in radians; `log` is base 10, `ln`
/// natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Cbrt,
    Exp,
    Ln,
    Log,
    Abs,
    Floor,
    Ceil,
    Round,
    Min,
    Max,
    Pow,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        let f = match name {
            "sin" => Function::Sin,
            "cos" => Function::Cos,
            "tan" => Function::Tan,
            "asin" => Function::Asin,
            "acos" => Function::Acos,
            "atan" => Function::Atan,
            "sqrt" => Function::Sqrt,
            "cbrt" => Function::Cbrt,
            "exp" => Function::Exp,
            "ln" => Function::Ln,
            "log" => Function::Log,
            "abs" => Function::Abs,
            "floor" => Function::Floor,
            "ceil" => Function::Ceil,
            "round" => Function::Round,
            "min" => Function::Min,
            "max" => Function::Max,
            "pow" => Function::Pow,
            _ => return None,
        };
        Some(f)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sqrt => "sqrt",
            Function::Cbrt => "cbrt",
            Function::Exp => "exp",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Abs => "abs",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Round => "round",
            Function::Min => "min",
            Function::Max => "max",
            Function::Pow => "pow",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Function::Min | Function::Max | Function::Pow => 2,
            _ => 1,
        }
    }

    pub fn check_arity(self, got: usize) -> Result<(), EvalError> {
        if got == self.arity() {
            Ok(())
        } else {
            Err(EvalError::WrongArity {
                function: self.name().to_string(),
                expected: self.arity(),
                got,
            })
        }
    }

    fn apply(self, args: &[f64]) -> f64 {
        match self {
            Function::Sin => args[0].sin(),
            Function::Cos => args[0].cos(),
            Function::Tan => args[0].tan(),
            Function::Asin => args[0].asin(),
            Function::Acos => args[0].acos(),
            Function::Atan => args[0].atan(),
            Function::Sqrt => args[0].sqrt(),
            Function::Cbrt => args[0].cbrt(),
            Function::Exp => args[0].exp(),
            Function::Ln => args[0].ln(),
            Function::Log => args[0].log10(),
            Function::Abs => args[0].abs(),
            Function::Floor => args[0].floor(),
            Function::Ceil => args[0].ceil(),
            Function::Round => args[0].round(),
            Function::Min => args[0].min(args[1]),
            Function::Max => args[0].max(args[1]),
            Function::Pow => args[0].powf(args[1]),
        }
    }
}

/// Evaluate an expression tree. Domain violations (division by zero,
/// sqrt of a negative) follow IEEE 754 and surface as non-finite values,
/// which the notepad core downgrades to "no result".
pub fn eval(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Neg(inner) => -eval(inner),
        Expr::Binary(op, left, right) => {
            let l = eval(left);
            let r = eval(right);
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
                BinaryOp::Rem => l % r,
                BinaryOp::Pow => l.powf(r),
            }
        }
        Expr::Call(function, args) => {
            let values: Vec<f64> = args.iter().map(eval).collect();
            function.apply(&values)
        }
    }
}
