//! Argument values substituted into command templates.

use std::fmt;

/// Most fractional digits a rendered float keeps.
pub const MAX_FRACTION_DIGITS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(Number),
    /// Members render independently and are joined by a single space.
    List(Vec<Value>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self))
    }
}

/// Format a number as a bare decimal shell token.
///
/// No digit grouping and no exponent. Floats keep at most
/// [`MAX_FRACTION_DIGITS`] fractional digits, with trailing zeros dropped.
pub fn format_number(n: &Number) -> String {
    match *n {
        Number::Int(i) => i.to_string(),
        Number::Float(x) if x.is_nan() => "NaN".to_string(),
        Number::Float(x) if x.is_infinite() => {
            if x > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
        }
        Number::Float(x) => {
            let s = x.to_string();
            match s.find('.') {
                Some(dot) if s.len() - dot - 1 > MAX_FRACTION_DIGITS => {
                    trim_fraction(format!("{:.*}", MAX_FRACTION_DIGITS, x))
                }
                _ => s,
            }
        }
    }
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        let keep = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(keep);
    }
    s
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self { Value::Text(s.clone()) }
}

impl From<char> for Value {
    fn from(c: char) -> Self { Value::Text(c.to_string()) }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self { Value::Number(n) }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self { Value::Number(Number::Int(i64::from(n))) }
        })*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Number(Number::Float(x)) }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self { Value::Number(Number::Float(f64::from(x))) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self { Value::List(v.iter().cloned().map(Into::into).collect()) }
}
