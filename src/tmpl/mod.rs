//! Command templates: literal segments interleaved with argument values.

use crate::error::SyntaxError;
use crate::render::Dialect;
use crate::value::Value;

/// A command skeleton and the values substituted into it.
///
/// Always holds exactly one more segment than arguments; the constructors
/// reject anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<String>,
    args: Vec<Value>,
}

impl Template {
    pub fn new<S, A>(segments: S, args: A) -> Result<Self, SyntaxError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        if segments.len() != args.len() + 1 {
            return Err(SyntaxError::Arity { segments: segments.len(), args: args.len() });
        }
        Ok(Template { segments, args })
    }

    /// A template with no arguments; the text is used verbatim.
    pub fn literal(text: impl Into<String>) -> Self {
        Template { segments: vec![text.into()], args: Vec::new() }
    }

    /// Split a skeleton on `{}` slots and pair it with `args`.
    ///
    /// `{{` and `}}` emit literal braces. Any other brace is kept as-is, so
    /// shell syntax like `${HOME}` or `{a,b}` passes through untouched.
    pub fn parse<A>(skeleton: &str, args: A) -> Result<Self, SyntaxError>
    where
        A: IntoIterator,
        A::Item: Into<Value>,
    {
        Self::new(split_slots(skeleton), args)
    }

    pub fn segments(&self) -> &[String] { &self.segments }

    pub fn args(&self) -> &[Value] { &self.args }

    /// Assemble the final command string for `dialect`.
    pub fn render(&self, dialect: Dialect) -> String {
        dialect.escaper().render(self)
    }
}

fn split_slots(skeleton: &str) -> Vec<String> {
    let mut segs = Vec::new();
    let mut lit = String::new();
    let mut chars = skeleton.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, chars.peek()) {
            ('{', Some('{')) => { lit.push('{'); chars.next(); }
            ('}', Some('}')) => { lit.push('}'); chars.next(); }
            ('{', Some('}')) => {
                chars.next();
                segs.push(std::mem::take(&mut lit));
            }
            _ => lit.push(ch),
        }
    }
    segs.push(lit);
    segs
}
