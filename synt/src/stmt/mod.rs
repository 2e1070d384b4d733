// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The statement node model.
//!
//! Compound statements are assembled with move-only builders, finished by `block()` or
//! `else_()`. A statement renders at whatever depth the [`CodegenState`] is at; bodies go one
//! indentation unit deeper.

use synt_derive::Codegen;

use crate::{wrap_child, Codegen, CodegenState, Expression, Slot};

mod block;
pub use block::Block;
mod simple;
pub use simple::{
    assert_, del_, global_, nonlocal_, raise, raise_, ret, return_, Assert, Assignment, Delete,
    ExprStatement, Global, KeywordStatement, Nonlocal, Raise, Return, BREAK, CONTINUE, PASS,
};
mod import;
pub use import::{from_, import_, Import, ImportFrom, ImportFromBuilder, ImportName, ImportStar};
mod branch;
pub use branch::{if_, Branch, BranchBuilder, BranchChain};
mod loops;
pub use loops::{for_, while_, ForLoop, ForLoopBuilder, WhileLoop, WhileLoopBuilder};
mod try_except;
pub use try_except::{try_, ExceptHandler, ExceptHandlerBuilder, Try};
mod with;
pub use with::{with_, With, WithBuilder, WithItem};
mod match_case;
pub use match_case::{match_, Match, MatchCase, MatchCaseBuilder};
mod function;
pub use function::{arg, async_def, def_, kwarg, vararg, FnArg, FunctionDef, FunctionDefBuilder};
mod class;
pub use class::{class_, ClassDef, ClassDefBuilder};
mod decorator;
pub use decorator::{dec, DecoratorGroup};

#[derive(Debug, Clone, PartialEq, Eq, Codegen)]
pub enum Statement {
    Expr(ExprStatement),
    Assign(Assignment),
    Return(Return),
    Raise(Raise),
    Assert(Assert),
    Delete(Delete),
    Keyword(KeywordStatement),
    Global(Global),
    Nonlocal(Nonlocal),
    Import(Import),
    ImportFrom(ImportFrom),
    Branch(Branch),
    For(ForLoop),
    While(WhileLoop),
    Try(Try),
    With(With),
    Match(Match),
    FunctionDef(FunctionDef),
    ClassDef(ClassDef),
    Block(Block),
}

/// Parenthesizes a bare `:=` placed directly under a statement.
pub(crate) fn statement_value(value: impl Into<Expression>) -> Expression {
    wrap_child(value.into(), Slot::StatementValue)
}

impl Statement {
    /// Renders at `depth` levels of `unit` indentation.
    pub fn indented(&self, depth: usize, unit: &str) -> String {
        let mut state = CodegenState::new(unit, depth);
        self.codegen(&mut state);
        state.to_string()
    }
}

macro_rules! statement_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(x: $ty) -> Self {
                    Self::$variant(x)
                }
            }
        )*
    };
}

statement_from!(
    Expr(ExprStatement),
    Assign(Assignment),
    Return(Return),
    Raise(Raise),
    Assert(Assert),
    Delete(Delete),
    Keyword(KeywordStatement),
    Global(Global),
    Nonlocal(Nonlocal),
    Import(Import),
    ImportFrom(ImportFrom),
    Branch(Branch),
    For(ForLoop),
    While(WhileLoop),
    Try(Try),
    With(With),
    Match(Match),
    FunctionDef(FunctionDef),
    ClassDef(ClassDef),
    Block(Block),
);

impl From<Expression> for Statement {
    fn from(e: Expression) -> Self {
        Self::Expr(ExprStatement::new(e))
    }
}
