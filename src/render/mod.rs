//! Escaping strategies for the supported shell dialects.

use crate::tmpl::Template;
use crate::value::{format_number, Value};

/// Token a dialect emits for the empty string.
pub const EMPTY_TOKEN: &str = "''";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// ANSI-C quoting (`$'...'`), understood by bash and zsh.
    Bash,
    /// Double-quoted octal runs and `\ ` spaces, for dash and other POSIX shells.
    PosixDash,
}

impl Dialect {
    pub fn escaper(self) -> &'static dyn Escaper {
        match self {
            Dialect::Bash => &BashEscaper,
            Dialect::PosixDash => &DashEscaper,
        }
    }
}

pub trait Escaper {
    fn escape_str(&self, s: &str) -> String;

    fn escape_value(&self, v: &Value) -> String {
        match v {
            Value::Text(s) => self.escape_str(s),
            Value::Number(n) => format_number(n),
            Value::List(items) => items
                .iter()
                .map(|item| self.escape_value(item))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Interleave the template's literal segments with escaped arguments.
    fn render(&self, tpl: &Template) -> String {
        let mut out = String::new();
        let mut segs = tpl.segments().iter();
        for arg in tpl.args() {
            if let Some(seg) = segs.next() { out.push_str(seg); }
            out.push_str(&self.escape_value(arg));
        }
        for seg in segs { out.push_str(seg); }
        out
    }
}

pub fn escape_str(dialect: Dialect, s: &str) -> String {
    dialect.escaper().escape_str(s)
}

pub fn escape_value(dialect: Dialect, v: &Value) -> String {
    dialect.escaper().escape_value(v)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BashEscaper;

impl Escaper for BashEscaper {
    fn escape_str(&self, s: &str) -> String {
        if s.is_empty() { return EMPTY_TOKEN.to_string(); }
        if is_bash_word(s) { return s.to_string(); }

        let mut out = String::with_capacity(s.len() + 3);
        out.push_str("$'");
        for ch in s.chars() {
            match ch {
                '\x07' => out.push_str("\\a"),
                '\x08' => out.push_str("\\b"),
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\x0B' => out.push_str("\\v"),
                '\x0C' => out.push_str("\\f"),
                '\r' => out.push_str("\\r"),
                '\x1B' => out.push_str("\\e"),
                '\'' => out.push_str("\\'"),
                '\\' => out.push_str("\\\\"),
                ' '..='~' => out.push(ch),
                _ => {
                    let cp = ch as u32;
                    let esc = if cp <= 0xFF {
                        format!("\\x{:02x}", cp)
                    } else if cp <= 0xFFFF {
                        format!("\\u{:04x}", cp)
                    } else {
                        format!("\\U{:08x}", cp)
                    };
                    out.push_str(&esc);
                }
            }
        }
        out.push('\'');
        out
    }
}

fn is_bash_word(s: &str) -> bool {
    s.chars().all(|c| matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '.' | '/'))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DashEscaper;

impl Escaper for DashEscaper {
    fn escape_str(&self, s: &str) -> String {
        if s.is_empty() { return EMPTY_TOKEN.to_string(); }
        if s.chars().all(is_dash_word_char) { return s.to_string(); }

        let chars: Vec<char> = s.chars().collect();
        let mut out = String::with_capacity(s.len() * 2);
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            if ch == ' ' {
                out.push_str("\\ ");
                i += 1;
            } else if is_dash_word_char(ch) {
                out.push(ch);
                i += 1;
            } else {
                let end = chars[i..]
                    .iter()
                    .position(|&c| c == ' ' || is_dash_word_char(c))
                    .map_or(chars.len(), |n| i + n);
                // a digit after the run, in the value or in the skeleton
                // following it, would extend the last octal escape
                let digit_follows = matches!(chars.get(end), None | Some('0'..='7'));
                out.push('"');
                for (k, &c) in chars[i..end].iter().enumerate() {
                    push_dash_escape(&mut out, c, digit_follows && i + k + 1 == end);
                }
                out.push('"');
                i = end;
            }
        }
        out
    }
}

fn is_dash_word_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '+' | ':' | '@' | '%' | '/' | '-')
}

// `\0` is a fixed prefix, followed by at most three octal digits.
fn push_dash_escape(out: &mut String, ch: char, pad: bool) {
    match ch {
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\x0B' => out.push_str("\\v"),
        '\x0C' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        _ => {
            let mut buf = [0u8; 4];
            for b in ch.encode_utf8(&mut buf).bytes() {
                let esc = if pad { format!("\\0{:03o}", b) } else { format!("\\0{:o}", b) };
                out.push_str(&esc);
            }
        }
    }
}
