// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::statement_value;
use crate::{Codegen, CodegenState, Expression, Identifier, Result, SyntError};

/// An expression on a line of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStatement {
    value: Expression,
}

impl ExprStatement {
    pub fn new(value: impl Into<Expression>) -> Self {
        Self {
            value: statement_value(value),
        }
    }
}

impl<'a> Codegen<'a> for ExprStatement {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        self.value.codegen(state);
    }
}

/// `target[: annotation][ = value]`. A tuple target loses its parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    target: Expression,
    annotation: Option<Expression>,
    value: Option<Expression>,
}

impl Assignment {
    pub fn new(target: impl Into<Expression>) -> Self {
        Self {
            target: target.into(),
            annotation: None,
            value: None,
        }
    }

    pub fn ty(mut self, annotation: impl Into<Expression>) -> Self {
        self.annotation = Some(statement_value(annotation));
        self
    }

    pub fn assign(mut self, value: impl Into<Expression>) -> Self {
        self.value = Some(statement_value(value));
        self
    }
}

impl<'a> Codegen<'a> for Assignment {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        self.target.codegen_target(state);
        if let Some(annotation) = &self.annotation {
            state.add_token(": ");
            annotation.codegen(state);
        }
        if let Some(value) = &self.value {
            state.add_token(" = ");
            value.codegen(state);
        }
    }
}

/// `return[ value]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Return {
    value: Option<Expression>,
}

impl Return {
    pub fn new(value: Option<Expression>) -> Self {
        Self {
            value: value.map(statement_value),
        }
    }
}

impl<'a> Codegen<'a> for Return {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("return");
        if let Some(value) = &self.value {
            state.add_token(" ");
            value.codegen(state);
        }
    }
}

/// `raise[ exception[ from cause]]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raise {
    exception: Option<Expression>,
    cause: Option<Expression>,
}

impl Raise {
    pub fn new(exception: Option<Expression>) -> Self {
        Self {
            exception: exception.map(statement_value),
            cause: None,
        }
    }

    /// Fails on a bare `raise`, which cannot have a cause.
    pub fn from_(mut self, cause: impl Into<Expression>) -> Result<Self> {
        if self.exception.is_none() {
            tracing::debug!("tried to set a cause on a bare raise");
            return Err(SyntError::RaiseCauseWithoutException);
        }
        self.cause = Some(statement_value(cause));
        Ok(self)
    }
}

impl<'a> Codegen<'a> for Raise {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("raise");
        if let Some(exception) = &self.exception {
            state.add_token(" ");
            exception.codegen(state);
        }
        if let Some(cause) = &self.cause {
            state.add_token(" from ");
            cause.codegen(state);
        }
    }
}

/// `assert test[, msg]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assert {
    test: Expression,
    msg: Option<Expression>,
}

impl Assert {
    pub fn new(test: impl Into<Expression>, msg: Option<Expression>) -> Self {
        Self {
            test: statement_value(test),
            msg: msg.map(statement_value),
        }
    }
}

impl<'a> Codegen<'a> for Assert {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("assert ");
        self.test.codegen(state);
        if let Some(msg) = &self.msg {
            state.add_token(", ");
            msg.codegen(state);
        }
    }
}

/// `del target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delete {
    target: Expression,
}

impl Delete {
    pub fn new(target: impl Into<Expression>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl<'a> Codegen<'a> for Delete {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("del ");
        self.target.codegen_target(state);
    }
}

/// A statement made of a single keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordStatement {
    Pass,
    Break,
    Continue,
}

pub const PASS: KeywordStatement = KeywordStatement::Pass;
pub const BREAK: KeywordStatement = KeywordStatement::Break;
pub const CONTINUE: KeywordStatement = KeywordStatement::Continue;

impl<'a> Codegen<'a> for KeywordStatement {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token(match self {
            Self::Pass => "pass",
            Self::Break => "break",
            Self::Continue => "continue",
        });
    }
}

macro_rules! namespace_statement {
    ($(#[$attr:meta])* $name:ident, $keyword:literal, $what:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            names: Vec<Identifier>,
        }

        impl $name {
            /// Fails with [`SyntError::EmptyCollection`] when `names` is empty.
            pub fn new(names: impl IntoIterator<Item = Identifier>) -> Result<Self> {
                let names: Vec<_> = names.into_iter().collect();
                if names.is_empty() {
                    return Err(SyntError::EmptyCollection($what));
                }
                Ok(Self { names })
            }
        }

        impl<'a> Codegen<'a> for $name {
            fn codegen(&self, state: &mut CodegenState<'a>) {
                state.add_indent();
                state.add_token(concat!($keyword, " "));
                state.add_comma_separated(&self.names);
            }
        }
    };
}

namespace_statement!(
    /// `global a, b`
    Global, "global", "global variable name"
);
namespace_statement!(
    /// `nonlocal a, b`
    Nonlocal, "nonlocal", "nonlocal variable name"
);

pub fn return_(value: impl Into<Expression>) -> Return {
    Return::new(Some(value.into()))
}

/// A bare `return`.
pub fn ret() -> Return {
    Return::default()
}

pub fn raise_(exception: impl Into<Expression>) -> Raise {
    Raise::new(Some(exception.into()))
}

/// A bare `raise`, re-raising the active exception.
pub fn raise() -> Raise {
    Raise::default()
}

pub fn assert_(test: impl Into<Expression>, msg: impl Into<Option<Expression>>) -> Assert {
    Assert::new(test, msg.into())
}

pub fn del_(target: impl Into<Expression>) -> Delete {
    Delete::new(target)
}

pub fn global_(names: impl IntoIterator<Item = Identifier>) -> Result<Global> {
    Global::new(names)
}

pub fn nonlocal_(names: impl IntoIterator<Item = Identifier>) -> Result<Nonlocal> {
    Nonlocal::new(names)
}
