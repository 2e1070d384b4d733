// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::borrow::Cow;

use crate::{Codegen, CodegenState, ExprPrecedence, Expression, Precedence};

/// A literal value, stored as the source text Python's `repr` would produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    text: Cow<'static, str>,
    precedence: ExprPrecedence,
}

pub const TRUE: Literal = Literal::keyword("True");
pub const FALSE: Literal = Literal::keyword("False");
pub const NONE: Literal = Literal::keyword("None");
pub const ELLIPSIS: Literal = Literal::keyword("...");
/// The wildcard `_`, mostly useful as a `case` pattern.
pub const UNDERSCORE: Literal = Literal::keyword("_");

impl Literal {
    const fn keyword(text: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            precedence: ExprPrecedence::Atom,
        }
    }

    /// Negative numbers are really a unary minus applied to a number: `(-1) ** 2`.
    fn number(text: String) -> Self {
        let precedence = if text.starts_with('-') {
            ExprPrecedence::Unary
        } else {
            ExprPrecedence::Atom
        };
        Self {
            text: Cow::Owned(text),
            precedence,
        }
    }

    pub fn int(i: impl Into<i128>) -> Self {
        Self::number(i.into().to_string())
    }

    pub fn float(f: f64) -> Self {
        if f.is_nan() {
            Self::call_float("nan")
        } else if f.is_infinite() {
            Self::call_float(if f > 0.0 { "inf" } else { "-inf" })
        } else {
            // `{:?}` always keeps a fractional part or an exponent, like `repr`.
            Self::number(format!("{:?}", f))
        }
    }

    fn call_float(name: &str) -> Self {
        Self {
            text: Cow::Owned(format!("float('{}')", name)),
            precedence: ExprPrecedence::Call,
        }
    }

    pub fn str(s: &str) -> Self {
        Self {
            text: Cow::Owned(repr_str(s)),
            precedence: ExprPrecedence::Atom,
        }
    }

    pub fn bool(b: bool) -> Self {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Precedence for Literal {
    fn precedence(&self) -> ExprPrecedence {
        self.precedence
    }
}

impl<'a> Codegen<'a> for Literal {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token(&self.text);
    }
}

pub fn litint(i: impl Into<i128>) -> Expression {
    Literal::int(i).into()
}

pub fn litfloat(f: f64) -> Expression {
    Literal::float(f).into()
}

pub fn litstr(s: &str) -> Expression {
    Literal::str(s).into()
}

pub fn litbool(b: bool) -> Expression {
    Literal::bool(b).into()
}

/// Quotes `s` the way Python's `repr(str)` does.
fn repr_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() || (c != ' ' && c.is_whitespace()) => {
                let code = c as u32;
                out.push_str(&if code < 0x100 {
                    format!("\\x{:02x}", code)
                } else if code < 0x10000 {
                    format!("\\u{:04x}", code)
                } else {
                    format!("\\U{:08x}", code)
                });
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::IntoCode;

    #[test]
    fn test_numbers() {
        assert_eq!(litint(1).into_code(), "1");
        assert_eq!(litint(-42i64).into_code(), "-42");
        assert_eq!(litint(u64::MAX).into_code(), "18446744073709551615");
        assert_eq!(litfloat(0.24).into_code(), "0.24");
        assert_eq!(litfloat(1.0).into_code(), "1.0");
        assert_eq!(litfloat(1e100).into_code(), "1e100");
        assert_eq!(litfloat(f64::INFINITY).into_code(), "float('inf')");
        assert_eq!(litfloat(f64::NEG_INFINITY).into_code(), "float('-inf')");
        assert_eq!(litfloat(f64::NAN).into_code(), "float('nan')");
    }

    #[test]
    fn test_number_precedence() {
        assert_eq!(Literal::int(3).precedence(), ExprPrecedence::Atom);
        assert_eq!(Literal::int(-3).precedence(), ExprPrecedence::Unary);
        assert_eq!(Literal::float(-0.5).precedence(), ExprPrecedence::Unary);
        assert_eq!(Literal::float(f64::NAN).precedence(), ExprPrecedence::Call);
    }

    #[test]
    fn test_strings() {
        assert_eq!(litstr("abc").into_code(), "'abc'");
        assert_eq!(litstr("").into_code(), "''");
        assert_eq!(litstr("it's").into_code(), "\"it's\"");
        assert_eq!(litstr("'\"").into_code(), "'\\'\"'");
        assert_eq!(litstr("a\\b").into_code(), "'a\\\\b'");
        assert_eq!(litstr("line\nnext\t\r").into_code(), "'line\\nnext\\t\\r'");
        assert_eq!(litstr("\x00\x7f").into_code(), "'\\x00\\x7f'");
        assert_eq!(litstr("\u{a0}").into_code(), "'\\xa0'");
        assert_eq!(litstr("\u{2028}").into_code(), "'\\u2028'");
        assert_eq!(litstr("héllo wörld ✓").into_code(), "'héllo wörld ✓'");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(litbool(true).into_code(), "True");
        assert_eq!(litbool(false).into_code(), "False");
        assert_eq!(NONE.into_code(), "None");
        assert_eq!(ELLIPSIS.into_code(), "...");
        assert_eq!(UNDERSCORE.into_code(), "_");
        assert_eq!(Literal::bool(true), TRUE);
    }
}
