use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Num(f64),
    /// Function name — the bare word `x` never reaches here, it lexes as `Star`
    Word(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
}

pub fn lex(src: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < chars.len() {
        let c = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        // Numeric literal
        if c.is_ascii_digit() || (c == '.' && chars.get(pos + 1).is_some_and(|n| n.is_ascii_digit()))
        {
            let start = pos;
            while pos < chars.len() && chars[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos < chars.len() && chars[pos] == '.' {
                pos += 1;
                while pos < chars.len() && chars[pos].is_ascii_digit() {
                    pos += 1;
                }
            }
            let literal: String = chars[start..pos].iter().collect();
            let value = literal
                .parse::<f64>()
                .map_err(|_| EvalError::UnexpectedToken(literal))?;
            tokens.push(Token::Num(value));
            continue;
        }

        // Word: function name, or `x` as multiplication
        if c.is_alphabetic() || c == '_' {
            let start = pos;
            while pos < chars.len() && (chars[pos].is_alphabetic() || chars[pos] == '_') {
                pos += 1;
            }
            let word: String = chars[start..pos].iter().collect();
            if word == "x" {
                tokens.push(Token::Star);
            } else {
                tokens.push(Token::Word(word));
            }
            continue;
        }

        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' | '×' => Token::Star,
            '/' | '÷' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            other => return Err(EvalError::UnexpectedChar(other)),
        };
        tokens.push(token);
        pos += 1;
    }

    Ok(tokens)
}
