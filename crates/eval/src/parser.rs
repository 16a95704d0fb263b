//! Recursive-descent parser with the usual precedence ladder:
//! `+ -` < `* / %` < unary minus < `^` (right-associative) < atoms.

use crate::ast::{BinaryOp, Expr, Function};
use crate::error::EvalError;
use crate::lexer::Token;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expect(&mut self, expected: &Token) -> Result<(), EvalError> {
        match self.advance() {
            Some(t) if t == expected => Ok(()),
            Some(t) => Err(EvalError::UnexpectedToken(format!("{:?}", t))),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn additive(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.multiplicative()?;
        while let Some(op) = match self.peek() {
            Some(Token::Plus) => Some(BinaryOp::Add),
            Some(Token::Minus) => Some(BinaryOp::Sub),
            _ => None,
        } {
            self.pos += 1;
            let right = self.multiplicative()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.unary()?;
        while let Some(op) = match self.peek() {
            Some(Token::Star) => Some(BinaryOp::Mul),
            Some(Token::Slash) => Some(BinaryOp::Div),
            Some(Token::Percent) => Some(BinaryOp::Rem),
            _ => None,
        } {
            self.pos += 1;
            let right = self.unary()?;
            left = Expr::Binary(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.pos += 1;
            return Ok(Expr::Neg(Box::new(self.unary()?)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.pos += 1;
            // Right-associative: recurse through unary so `2^-1` works.
            let exponent = self.unary()?;
            return Ok(Expr::Binary(
                BinaryOp::Pow,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, EvalError> {
        match self.advance().cloned() {
            Some(Token::Num(value)) => Ok(Expr::Number(value)),
            Some(Token::LParen) => {
                let inner = self.additive()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Some(Token::Word(word)) => {
                let function =
                    Function::from_name(&word).ok_or(EvalError::UnknownIdentifier(word))?;
                self.expect(&Token::LParen)?;
                let mut args = vec![self.additive()?];
                while matches!(self.peek(), Some(Token::Comma)) {
                    self.pos += 1;
                    args.push(self.additive()?);
                }
                self.expect(&Token::RParen)?;
                function.check_arity(args.len())?;
                Ok(Expr::Call(function, args))
            }
            Some(other) => Err(EvalError::UnexpectedToken(format!("{:?}", other))),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

pub fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.additive()?;
    match parser.peek() {
        None => Ok(expr),
        Some(t) => Err(EvalError::UnexpectedToken(format!("{:?}", t))),
    }
}
