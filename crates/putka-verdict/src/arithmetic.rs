//! Evaluator for the constant expressions found in testscripts.
//!
//! Testscripts are Python, and limits are written as plain Python arithmetic
//! such as `256 * 1024` or `2.5`. This evaluator accepts integer and float
//! literals, parentheses, unary `+`/`-` and the binary operators
//! `+ - * / // % ** ^ |` with Python precedence and semantics: `/` always
//! yields a float, `//` and `%` round toward negative infinity, `**` is right
//! associative and binds tighter than a unary minus on its left, and `^`/`|`
//! are bitwise operators defined on integers only.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),

    #[error("unexpected {0}")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,

    #[error("unsupported operand type for {0}: float")]
    IntegerOnly(&'static str),

    #[error("result is not a real number")]
    NotReal,
}

pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// A Python number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
        }
    }

    /// Python truthiness.
    pub fn is_zero(self) -> bool {
        match self {
            Value::Int(i) => i == 0,
            Value::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Evaluate `text`, ignoring anything after a `#`.
pub fn eval_arithmetic(text: &str) -> ArithmeticResult<Value> {
    let expr = text.split('#').next().unwrap_or_default().trim();
    if expr.is_empty() {
        return Err(ArithmeticError::Empty);
    }
    let tokens = tokenize(expr)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    match parser.peek() {
        None => Ok(value),
        Some(token) => Err(ArithmeticError::UnexpectedToken(token.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(Value),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    DoubleStar,
    Caret,
    Pipe,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(v) => write!(f, "number {v}"),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::DoubleSlash => write!(f, "'//'"),
            Token::Percent => write!(f, "'%'"),
            Token::DoubleStar => write!(f, "'**'"),
            Token::Caret => write!(f, "'^'"),
            Token::Pipe => write!(f, "'|'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

fn tokenize(expr: &str) -> ArithmeticResult<Vec<Token>> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let token = match c {
            ' ' | '\t' => {
                i += 1;
                continue;
            }
            '0'..='9' | '.' => {
                let start = i;
                let mut seen_dot = false;
                while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !seen_dot)) {
                    seen_dot |= chars[i] == '.';
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                tokens.push(Token::Num(parse_number(&literal)?));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' if next == Some('*') => Token::DoubleStar,
            '*' => Token::Star,
            '/' if next == Some('/') => Token::DoubleSlash,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '|' => Token::Pipe,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(ArithmeticError::UnexpectedChar(other)),
        };
        i += if matches!(token, Token::DoubleStar | Token::DoubleSlash) { 2 } else { 1 };
        tokens.push(token);
    }
    Ok(tokens)
}

fn parse_number(literal: &str) -> ArithmeticResult<Value> {
    let invalid = || ArithmeticError::InvalidNumber(literal.to_string());
    if literal.contains('.') {
        if literal == "." {
            return Err(invalid());
        }
        literal.parse::<f64>().map(Value::Float).map_err(|_| invalid())
    } else {
        literal.parse::<i64>().map(Value::Int).map_err(|_| ArithmeticError::Overflow)
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> ArithmeticResult<Token> {
        let token = self.peek().ok_or(ArithmeticError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn eat(&mut self, expected: Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // expr := xor ('|' xor)*
    fn expr(&mut self) -> ArithmeticResult<Value> {
        let mut lhs = self.xor()?;
        while self.eat(Token::Pipe) {
            let rhs = self.xor()?;
            lhs = bitwise(lhs, rhs, "|", |a, b| a | b)?;
        }
        Ok(lhs)
    }

    // xor := sum ('^' sum)*
    fn xor(&mut self) -> ArithmeticResult<Value> {
        let mut lhs = self.sum()?;
        while self.eat(Token::Caret) {
            let rhs = self.sum()?;
            lhs = bitwise(lhs, rhs, "^", |a, b| a ^ b)?;
        }
        Ok(lhs)
    }

    // sum := term (('+' | '-') term)*
    fn sum(&mut self) -> ArithmeticResult<Value> {
        let mut lhs = self.term()?;
        loop {
            if self.eat(Token::Plus) {
                let rhs = self.term()?;
                lhs = numeric(lhs, rhs, i64::checked_add, |a, b| a + b)?;
            } else if self.eat(Token::Minus) {
                let rhs = self.term()?;
                lhs = numeric(lhs, rhs, i64::checked_sub, |a, b| a - b)?;
            } else {
                return Ok(lhs);
            }
        }
    }

    // term := factor (('*' | '/' | '//' | '%') factor)*
    fn term(&mut self) -> ArithmeticResult<Value> {
        let mut lhs = self.factor()?;
        loop {
            lhs = match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    numeric(lhs, self.factor()?, i64::checked_mul, |a, b| a * b)?
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    true_div(lhs, self.factor()?)?
                }
                Some(Token::DoubleSlash) => {
                    self.pos += 1;
                    floor_div(lhs, self.factor()?)?
                }
                Some(Token::Percent) => {
                    self.pos += 1;
                    modulo(lhs, self.factor()?)?
                }
                _ => return Ok(lhs),
            };
        }
    }

    // factor := ('+' | '-') factor | power
    fn factor(&mut self) -> ArithmeticResult<Value> {
        if self.eat(Token::Plus) {
            return self.factor();
        }
        if self.eat(Token::Minus) {
            return match self.factor()? {
                Value::Int(i) => i.checked_neg().map(Value::Int).ok_or(ArithmeticError::Overflow),
                Value::Float(f) => Ok(Value::Float(-f)),
            };
        }
        self.power()
    }

    // power := atom ('**' factor)?
    fn power(&mut self) -> ArithmeticResult<Value> {
        let base = self.atom()?;
        if self.eat(Token::DoubleStar) {
            let exponent = self.factor()?;
            return pow(base, exponent);
        }
        Ok(base)
    }

    // atom := NUMBER | '(' expr ')'
    fn atom(&mut self) -> ArithmeticResult<Value> {
        match self.next()? {
            Token::Num(v) => Ok(v),
            Token::LParen => {
                let value = self.expr()?;
                match self.next()? {
                    Token::RParen => Ok(value),
                    other => Err(ArithmeticError::UnexpectedToken(other.to_string())),
                }
            }
            other => Err(ArithmeticError::UnexpectedToken(other.to_string())),
        }
    }
}

fn numeric(
    lhs: Value,
    rhs: Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> ArithmeticResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => int_op(a, b).map(Value::Int).ok_or(ArithmeticError::Overflow),
        _ => Ok(Value::Float(float_op(lhs.as_f64(), rhs.as_f64()))),
    }
}

fn bitwise(
    lhs: Value,
    rhs: Value,
    op: &'static str,
    int_op: fn(i64, i64) -> i64,
) -> ArithmeticResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(int_op(a, b))),
        _ => Err(ArithmeticError::IntegerOnly(op)),
    }
}

fn true_div(lhs: Value, rhs: Value) -> ArithmeticResult<Value> {
    if rhs.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(Value::Float(lhs.as_f64() / rhs.as_f64()))
}

fn floor_div(lhs: Value, rhs: Value) -> ArithmeticResult<Value> {
    if rhs.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            let q = a.checked_div(b).ok_or(ArithmeticError::Overflow)?;
            if a % b != 0 && ((a < 0) != (b < 0)) {
                Ok(Value::Int(q - 1))
            } else {
                Ok(Value::Int(q))
            }
        }
        _ => Ok(Value::Float((lhs.as_f64() / rhs.as_f64()).floor())),
    }
}

fn modulo(lhs: Value, rhs: Value) -> ArithmeticResult<Value> {
    if rhs.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => {
            let r = a.checked_rem(b).ok_or(ArithmeticError::Overflow)?;
            if r != 0 && ((r < 0) != (b < 0)) {
                Ok(Value::Int(r + b))
            } else {
                Ok(Value::Int(r))
            }
        }
        _ => {
            let (a, b) = (lhs.as_f64(), rhs.as_f64());
            let r = a % b;
            if r != 0.0 && ((r < 0.0) != (b < 0.0)) {
                Ok(Value::Float(r + b))
            } else {
                Ok(Value::Float(r))
            }
        }
    }
}

fn pow(base: Value, exponent: Value) -> ArithmeticResult<Value> {
    if base.is_zero() && exponent.as_f64() < 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    match (base, exponent) {
        (Value::Int(b), Value::Int(e)) if e >= 0 => {
            let e = u32::try_from(e).map_err(|_| ArithmeticError::Overflow)?;
            b.checked_pow(e).map(Value::Int).ok_or(ArithmeticError::Overflow)
        }
        _ => {
            let result = base.as_f64().powf(exponent.as_f64());
            if result.is_nan() {
                Err(ArithmeticError::NotReal)
            } else {
                Ok(Value::Float(result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str) -> Value {
        eval_arithmetic(text).unwrap()
    }

    #[test]
    fn test_literals() {
        assert_eq!(eval("4"), Value::Int(4));
        assert_eq!(eval("2.5"), Value::Float(2.5));
        assert_eq!(eval(".5"), Value::Float(0.5));
        assert_eq!(eval("3."), Value::Float(3.0));
    }

    #[test]
    fn test_comments_are_stripped() {
        assert_eq!(eval("4  # seconds"), Value::Int(4));
        assert_eq!(eval_arithmetic("# nothing"), Err(ArithmeticError::Empty));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4"), Value::Int(14));
        assert_eq!(eval("(2 + 3) * 4"), Value::Int(20));
        assert_eq!(eval("256 * 1024"), Value::Int(262144));
        assert_eq!(eval("1 | 2 ^ 3"), Value::Int(1));
        assert_eq!(eval("6 ^ 1 + 1"), Value::Int(4));
    }

    #[test]
    fn test_power() {
        assert_eq!(eval("2 ** 10"), Value::Int(1024));
        assert_eq!(eval("2 ** 3 ** 2"), Value::Int(512));
        assert_eq!(eval("-2 ** 2"), Value::Int(-4));
        assert_eq!(eval("2 ** -1"), Value::Float(0.5));
        assert_eq!(eval("4 ** 0.5"), Value::Float(2.0));
    }

    #[test]
    fn test_division_follows_python() {
        assert_eq!(eval("7 / 2"), Value::Float(3.5));
        assert_eq!(eval("4 / 2"), Value::Float(2.0));
        assert_eq!(eval("7 // 2"), Value::Int(3));
        assert_eq!(eval("-7 // 2"), Value::Int(-4));
        assert_eq!(eval("7 // -2"), Value::Int(-4));
        assert_eq!(eval("-7 % 3"), Value::Int(2));
        assert_eq!(eval("7 % -3"), Value::Int(-2));
        assert_eq!(eval("7.5 // 2"), Value::Float(3.0));
        assert_eq!(eval("-1.5 % 1"), Value::Float(0.5));
    }

    #[test]
    fn test_unary() {
        assert_eq!(eval("-3 + +5"), Value::Int(2));
        assert_eq!(eval("--1"), Value::Int(1));
    }

    #[test]
    fn test_errors() {
        assert_eq!(eval_arithmetic("1 / 0"), Err(ArithmeticError::DivisionByZero));
        assert_eq!(eval_arithmetic("1 % 0"), Err(ArithmeticError::DivisionByZero));
        assert_eq!(eval_arithmetic("0 ** -1"), Err(ArithmeticError::DivisionByZero));
        assert_eq!(eval_arithmetic("1.5 | 1"), Err(ArithmeticError::IntegerOnly("|")));
        assert_eq!(eval_arithmetic("2 * x"), Err(ArithmeticError::UnexpectedChar('x')));
        assert_eq!(eval_arithmetic("(1 + 2"), Err(ArithmeticError::UnexpectedEnd));
        assert!(eval_arithmetic("1 2").is_err());
        assert!(eval_arithmetic("1.2.3").is_err());
        assert!(eval_arithmetic(".").is_err());
        assert_eq!(eval_arithmetic("10 ** 100"), Err(ArithmeticError::Overflow));
        assert_eq!(eval_arithmetic("(-8) ** 0.5"), Err(ArithmeticError::NotReal));
    }
}
