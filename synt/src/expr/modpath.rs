// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::{Codegen, Precedence};

use crate::{Codegen, CodegenState, ExprPrecedence, Expression, Identifier, Precedence};

/// A dotted module path, optionally relative: `..pkg.mod`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModPath {
    names: Vec<Identifier>,
    depth: usize,
}

impl ModPath {
    pub fn new(names: impl IntoIterator<Item = Identifier>) -> Self {
        Self {
            names: names.into_iter().collect(),
            depth: 0,
        }
    }

    /// Sets the number of leading dots.
    pub fn dep(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn as_(self, asname: Identifier) -> Alias {
        Alias::new(self, asname)
    }
}

impl From<Identifier> for ModPath {
    fn from(name: Identifier) -> Self {
        Self::new([name])
    }
}

impl<'a> Codegen<'a> for ModPath {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        for _ in 0..self.depth {
            state.add_token(".");
        }
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                state.add_token(".");
            }
            name.codegen(state);
        }
    }
}

pub fn path(names: impl IntoIterator<Item = Identifier>) -> ModPath {
    ModPath::new(names)
}

/// `.names`
pub fn relpath(names: impl IntoIterator<Item = Identifier>) -> ModPath {
    ModPath::new(names).dep(1)
}

/// `..names`
pub fn parentpath(names: impl IntoIterator<Item = Identifier>) -> ModPath {
    ModPath::new(names).dep(2)
}

/// Whatever sits on the left of `as`.
#[derive(Debug, Clone, PartialEq, Eq, Codegen)]
pub enum AliasName {
    Path(ModPath),
    Expression(Box<Expression>),
}

/// `name as asname`, in imports and in `case` patterns.
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(NamedExpr)]
pub struct Alias {
    name: AliasName,
    asname: Identifier,
}

impl Alias {
    pub fn new(name: impl Into<AliasName>, asname: Identifier) -> Self {
        Self {
            name: name.into(),
            asname,
        }
    }
}

impl<'a> Codegen<'a> for Alias {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.name.codegen(state);
        state.add_token(" as ");
        self.asname.codegen(state);
    }
}

impl From<ModPath> for AliasName {
    fn from(p: ModPath) -> Self {
        Self::Path(p)
    }
}

impl From<Expression> for AliasName {
    fn from(e: Expression) -> Self {
        Self::Expression(Box::new(e))
    }
}
