// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::statement_value;
use crate::{Block, Codegen, CodegenState, Expression, Identifier, Result, Statement, SyntError};

/// `except[*][ type][ as name]:` and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptHandler {
    ty: Option<Expression>,
    is_star: bool,
    asname: Option<Identifier>,
    body: Block,
}

impl<'a> Codegen<'a> for ExceptHandler {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token(if self.is_star { "except*" } else { "except" });
        if let Some(ty) = &self.ty {
            state.add_token(" ");
            ty.codegen(state);
        }
        if let Some(asname) = &self.asname {
            state.add_token(" as ");
            asname.codegen(state);
        }
        self.body.codegen_suite(state);
    }
}

/// `try:` with its handlers, `else` and `finally` bodies.
///
/// Handlers render in the order they were added. Mixing `except` and `except*` is not
/// rejected here. A `try` with neither handlers nor `finally` renders an empty `finally`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Try {
    body: Block,
    handlers: Vec<ExceptHandler>,
    orelse: Option<Block>,
    finalbody: Option<Block>,
}

impl Try {
    pub fn new(body: impl IntoIterator<Item = Statement>) -> Self {
        Self {
            body: Block::new(body),
            handlers: vec![],
            orelse: None,
            finalbody: None,
        }
    }

    pub fn except_(self, ty: impl Into<Expression>) -> ExceptHandlerBuilder {
        ExceptHandlerBuilder::new(self, Some(ty.into()), false)
    }

    /// `except:` catching everything.
    pub fn bare_except(self) -> ExceptHandlerBuilder {
        ExceptHandlerBuilder::new(self, None, false)
    }

    pub fn except_star(self, ty: impl Into<Expression>) -> ExceptHandlerBuilder {
        ExceptHandlerBuilder::new(self, Some(ty.into()), true)
    }

    /// Fails with [`SyntError::TryElseWithoutHandler`] until a handler has been added.
    pub fn else_(mut self, body: impl IntoIterator<Item = Statement>) -> Result<Self> {
        if self.handlers.is_empty() {
            tracing::debug!("tried to add an else body to a try without handlers");
            return Err(SyntError::TryElseWithoutHandler);
        }
        self.orelse = Some(Block::new(body));
        Ok(self)
    }

    pub fn finally_(mut self, body: impl IntoIterator<Item = Statement>) -> Self {
        self.finalbody = Some(Block::new(body));
        self
    }
}

impl<'a> Codegen<'a> for Try {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("try");
        self.body.codegen_suite(state);
        for handler in &self.handlers {
            state.add_newline();
            handler.codegen(state);
        }
        for (keyword, body) in [("else", &self.orelse), ("finally", &self.finalbody)] {
            if let Some(body) = body {
                state.add_newline();
                state.add_indent();
                state.add_token(keyword);
                body.codegen_suite(state);
            }
        }
        if self.handlers.is_empty() && self.finalbody.is_none() {
            state.add_newline();
            state.add_indent();
            state.add_token("finally");
            Block::default().codegen_suite(state);
        }
    }
}

/// A handler waiting for its body. [`block`](Self::block) hands the `try` back.
#[derive(Debug)]
#[must_use]
pub struct ExceptHandlerBuilder {
    parent: Try,
    ty: Option<Expression>,
    is_star: bool,
    asname: Option<Identifier>,
}

impl ExceptHandlerBuilder {
    fn new(parent: Try, ty: Option<Expression>, is_star: bool) -> Self {
        Self {
            parent,
            ty: ty.map(statement_value),
            is_star,
            asname: None,
        }
    }

    pub fn as_(mut self, asname: Identifier) -> Self {
        self.asname = Some(asname);
        self
    }

    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> Try {
        let mut parent = self.parent;
        parent.handlers.push(ExceptHandler {
            ty: self.ty,
            is_star: self.is_star,
            asname: self.asname,
            body: Block::new(body),
        });
        parent
    }
}

pub fn try_(body: impl IntoIterator<Item = Statement>) -> Try {
    Try::new(body)
}
