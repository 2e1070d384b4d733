// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Type parameter lists of generic functions and classes: `def f[T: int, *Ts, **P]()`.

use synt_derive::Codegen;

use crate::{Codegen, CodegenState, Expression, Identifier};

/// `T` or `T: bound`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeVar {
    name: Identifier,
    bound: Option<Expression>,
}

impl TypeVar {
    pub fn new(name: Identifier) -> Self {
        Self { name, bound: None }
    }

    pub fn bound(mut self, bound: impl Into<Expression>) -> Self {
        self.bound = Some(bound.into());
        self
    }
}

impl<'a> Codegen<'a> for TypeVar {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.name.codegen(state);
        if let Some(bound) = &self.bound {
            state.add_token(": ");
            bound.codegen(state);
        }
    }
}

/// `*Ts`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeVarTuple {
    name: Identifier,
}

impl<'a> Codegen<'a> for TypeVarTuple {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("*");
        self.name.codegen(state);
    }
}

/// `**P`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    name: Identifier,
}

impl<'a> Codegen<'a> for ParamSpec {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("**");
        self.name.codegen(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Codegen)]
pub enum TypeParam {
    TypeVar(TypeVar),
    TypeVarTuple(TypeVarTuple),
    ParamSpec(ParamSpec),
}

impl From<TypeVar> for TypeParam {
    fn from(t: TypeVar) -> Self {
        Self::TypeVar(t)
    }
}

impl From<TypeVarTuple> for TypeParam {
    fn from(t: TypeVarTuple) -> Self {
        Self::TypeVarTuple(t)
    }
}

impl From<ParamSpec> for TypeParam {
    fn from(p: ParamSpec) -> Self {
        Self::ParamSpec(p)
    }
}

impl From<Identifier> for TypeParam {
    fn from(name: Identifier) -> Self {
        Self::TypeVar(TypeVar::new(name))
    }
}

pub fn tvar(name: Identifier) -> TypeVar {
    TypeVar::new(name)
}

pub fn ttup(name: Identifier) -> TypeVarTuple {
    TypeVarTuple { name }
}

pub fn tspec(name: Identifier) -> ParamSpec {
    ParamSpec { name }
}

/// Renders `[T, U]`, or nothing for an empty list.
pub(crate) fn codegen_type_params<'a>(params: &[TypeParam], state: &mut CodegenState<'a>) {
    if params.is_empty() {
        return;
    }
    state.add_token("[");
    state.add_comma_separated(params);
    state.add_token("]");
}
