// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::missing_fields;
use crate::ty::codegen_type_params;
use crate::{
    wrap_child, Block, Codegen, CodegenState, Expression, Identifier, Result, Slot, Statement,
    TypeParam,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    Normal,
    /// `*args`
    Var,
    /// `**kwargs`
    Kw,
}

/// One parameter of a function definition: `[*|**]name[: annotation][ = default]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnArg {
    name: Identifier,
    annotation: Option<Expression>,
    default: Option<Expression>,
    kind: ArgKind,
}

impl FnArg {
    pub fn new(name: Identifier) -> Self {
        Self {
            name,
            annotation: None,
            default: None,
            kind: ArgKind::Normal,
        }
    }

    pub fn vararg(mut self) -> Self {
        self.kind = ArgKind::Var;
        self
    }

    pub fn kwarg(mut self) -> Self {
        self.kind = ArgKind::Kw;
        self
    }

    pub fn annotate(mut self, annotation: impl Into<Expression>) -> Self {
        self.annotation = Some(wrap_child(annotation.into(), Slot::KeywordValue));
        self
    }

    /// Alias of [`annotate`](Self::annotate).
    pub fn ty(self, annotation: impl Into<Expression>) -> Self {
        self.annotate(annotation)
    }

    pub fn default(mut self, default: impl Into<Expression>) -> Self {
        self.default = Some(wrap_child(default.into(), Slot::KeywordValue));
        self
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }
}

impl<'a> Codegen<'a> for FnArg {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        match self.kind {
            ArgKind::Normal => {}
            ArgKind::Var => state.add_token("*"),
            ArgKind::Kw => state.add_token("**"),
        }
        self.name.codegen(state);
        if let Some(annotation) = &self.annotation {
            state.add_token(": ");
            annotation.codegen(state);
        }
        if let Some(default) = &self.default {
            state.add_token(" = ");
            default.codegen(state);
        }
    }
}

impl From<Identifier> for FnArg {
    fn from(name: Identifier) -> Self {
        Self::new(name)
    }
}

/// `(name, default)`, the parameter form of a keyword argument.
impl<E: Into<Expression>> From<(Identifier, E)> for FnArg {
    fn from((name, default): (Identifier, E)) -> Self {
        Self::new(name).default(default)
    }
}

pub fn arg(name: Identifier) -> FnArg {
    FnArg::new(name)
}

pub fn vararg(name: Identifier) -> FnArg {
    FnArg::new(name).vararg()
}

pub fn kwarg(name: Identifier) -> FnArg {
    FnArg::new(name).kwarg()
}

/// `[async ]def name[T](args)[ -> returns]:` with its decorators and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    decorators: Vec<Expression>,
    is_async: bool,
    name: Identifier,
    type_params: Vec<TypeParam>,
    args: Vec<FnArg>,
    returns: Option<Expression>,
    body: Block,
}

impl FunctionDef {
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn body(&self) -> &Block {
        &self.body
    }
}

/// Emits one `@decorator` line per entry, each at the current indentation.
pub(crate) fn codegen_decorators<'a>(decorators: &[Expression], state: &mut CodegenState<'a>) {
    for decorator in decorators {
        state.add_indent();
        state.add_token("@");
        decorator.codegen(state);
        state.add_newline();
    }
}

impl<'a> Codegen<'a> for FunctionDef {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        codegen_decorators(&self.decorators, state);
        state.add_indent();
        if self.is_async {
            state.add_token("async ");
        }
        state.add_token("def ");
        self.name.codegen(state);
        codegen_type_params(&self.type_params, state);
        state.add_token("(");
        state.add_comma_separated(&self.args);
        state.add_token(")");
        if let Some(returns) = &self.returns {
            state.add_token(" -> ");
            returns.codegen(state);
        }
        self.body.codegen_suite(state);
    }
}

#[derive(Debug, Default)]
#[must_use]
pub struct FunctionDefBuilder {
    decorators: Vec<Expression>,
    is_async: bool,
    name: Option<Identifier>,
    type_params: Vec<TypeParam>,
    args: Vec<FnArg>,
    returns: Option<Expression>,
}

impl FunctionDefBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_decorators(decorators: Vec<Expression>) -> Self {
        Self {
            decorators,
            ..Default::default()
        }
    }

    pub fn decorator(mut self, decorator: impl Into<Expression>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    /// Alias of [`decorator`](Self::decorator).
    pub fn dec(self, decorator: impl Into<Expression>) -> Self {
        self.decorator(decorator)
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn def_(mut self, name: Identifier) -> Self {
        self.name = Some(name);
        self
    }

    pub fn async_def(self, name: Identifier) -> Self {
        self.async_().def_(name)
    }

    pub fn type_param(mut self, param: impl Into<TypeParam>) -> Self {
        self.type_params.push(param.into());
        self
    }

    pub fn ty<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TypeParam>,
    {
        self.type_params.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn arg(mut self, arg: impl Into<FnArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FnArg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn returns(mut self, returns: impl Into<Expression>) -> Self {
        self.returns = Some(wrap_child(returns.into(), Slot::KeywordValue));
        self
    }

    /// Fails with [`SyntError::MissingRequiredFields`](crate::SyntError) if no name was given.
    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> Result<FunctionDef> {
        let name = self.name.ok_or_else(|| missing_fields(vec!["name"]))?;
        Ok(FunctionDef {
            decorators: self.decorators,
            is_async: self.is_async,
            name,
            type_params: self.type_params,
            args: self.args,
            returns: self.returns,
            body: Block::new(body),
        })
    }
}

pub fn def_(name: Identifier) -> FunctionDefBuilder {
    FunctionDefBuilder::new().def_(name)
}

pub fn async_def(name: Identifier) -> FunctionDefBuilder {
    FunctionDefBuilder::new().async_def(name)
}
