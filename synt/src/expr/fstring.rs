// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use synt_derive::{Codegen, Precedence};

use crate::{
    wrap_child, Codegen, CodegenState, ExprPrecedence, Expression, Precedence, SyntError, Slot,
};

/// The `!a`, `!r` or `!s` suffix of a replacement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatConversion {
    #[default]
    None,
    Ascii,
    Repr,
    Str,
}

impl FormatConversion {
    pub fn text(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascii => "!a",
            Self::Repr => "!r",
            Self::Str => "!s",
        }
    }
}

impl FromStr for FormatConversion {
    type Err = SyntError;

    /// Accepts the conversion letter with or without its `!`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('!').unwrap_or(s) {
            "" => Ok(Self::None),
            "a" => Ok(Self::Ascii),
            "r" => Ok(Self::Repr),
            "s" => Ok(Self::Str),
            _ => Err(SyntError::UnrecognizedOperator(s.to_string())),
        }
    }
}

/// A replacement field: `{value!r:spec}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatNode {
    value: Expression,
    conversion: FormatConversion,
    spec: Option<String>,
}

impl FormatNode {
    pub fn new(value: impl Into<Expression>) -> Self {
        Self {
            value: wrap_child(value.into(), Slot::FormatValue),
            conversion: FormatConversion::None,
            spec: None,
        }
    }

    /// The format spec after the `:`, inserted verbatim.
    pub fn spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = Some(spec.into()).filter(|s: &String| !s.is_empty());
        self
    }

    pub fn conversion(mut self, conversion: FormatConversion) -> Self {
        self.conversion = conversion;
        self
    }
}

impl<'a> Codegen<'a> for FormatNode {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        let mut value = CodegenState::new(state.default_indent, 0);
        self.value.codegen(&mut value);
        state.add_token("{");
        // `{{` would be read as an escaped brace
        if value.tokens.starts_with('{') {
            state.add_token(" ");
        }
        state.add_token(&value.tokens);
        state.add_token(self.conversion.text());
        if let Some(spec) = &self.spec {
            state.add_token(":");
            state.add_token(spec);
        }
        state.add_token("}");
    }
}

/// Literal text between replacement fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatText(String);

impl<'a> Codegen<'a> for FormatText {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        for c in self.0.chars() {
            match c {
                '{' => state.add_token("{{"),
                '}' => state.add_token("}}"),
                '"' => state.add_token("\\\""),
                '\\' => state.add_token("\\\\"),
                '\n' => state.add_token("\\n"),
                '\r' => state.add_token("\\r"),
                '\t' => state.add_token("\\t"),
                c => state.add_token(c.encode_utf8(&mut [0; 4])),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Codegen)]
pub enum FormatPart {
    Text(FormatText),
    Node(FormatNode),
}

impl From<&str> for FormatPart {
    fn from(s: &str) -> Self {
        Self::Text(FormatText(s.to_string()))
    }
}

impl From<String> for FormatPart {
    fn from(s: String) -> Self {
        Self::Text(FormatText(s))
    }
}

impl From<FormatNode> for FormatPart {
    fn from(n: FormatNode) -> Self {
        Self::Node(n)
    }
}

/// `f"..."`. Text parts are escaped so they come out exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Atom)]
pub struct FormatString {
    parts: Vec<FormatPart>,
}

impl FormatString {
    pub fn new<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FormatPart>,
    {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> Codegen<'a> for FormatString {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("f\"");
        for part in &self.parts {
            part.codegen(state);
        }
        state.add_token("\"");
    }
}

pub fn fstring<I>(parts: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<FormatPart>,
{
    FormatString::new(parts).into()
}

pub fn fnode(value: impl Into<Expression>) -> FormatNode {
    FormatNode::new(value)
}
