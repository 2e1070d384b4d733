// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The expression node model.
//!
//! Composite nodes parenthesize their children when they are constructed, see
//! [`wrap_child`](crate::wrap_child). Rendering a finished tree never adds parentheses.

use std::fmt;

use synt_derive::{Codegen, Precedence};

use crate::{Codegen, CodegenState, ExprPrecedence, Identifier, Literal, Precedence};
use crate::{Result, SyntError};

mod op;
pub use op::{
    await_, not_, unpack, unpack_kv, yield_, yield_from, BinaryOp, BinaryOpKind, UnaryOp,
    UnaryOpKind,
};
mod call;
pub(crate) use call::codegen_arguments;
pub use call::{slice_, Attribute, Call, Keyword, Slice, Subscript, SubscriptItem};
mod display;
pub use display::{dict_, kv, list_, pair, set_, tup, Dict, KVPair, List, Set, Tuple};
mod comprehension;
pub use comprehension::{
    dict_comp, gen, list_comp, set_comp, Comprehension, ComprehensionBuilder, ComprehensionNode,
    DictComp, Generator, IntoComprehension, ListComp, SetComp,
};
mod closure;
pub use closure::{closure, lambda_, Closure, ClosureBuilder};
mod condition;
pub use condition::{Condition, ConditionBuilder};
mod named;
pub use named::NamedExpr;
mod fstring;
pub use fstring::{
    fnode, fstring, FormatConversion, FormatNode, FormatPart, FormatString, FormatText,
};
mod wrapped;
pub use wrapped::{Empty, Wrapped};
mod modpath;
pub use modpath::{parentpath, path, relpath, Alias, AliasName, ModPath};

#[derive(Debug, Clone, PartialEq, Eq, Codegen, Precedence)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
    Call(Call),
    Attribute(Attribute),
    Subscript(Subscript),
    List(List),
    ListComp(ListComp),
    Set(Set),
    SetComp(SetComp),
    Dict(Dict),
    DictComp(DictComp),
    Tuple(Tuple),
    Generator(Generator),
    KeyValuePair(KVPair),
    Closure(Closure),
    Condition(Condition),
    NamedExpr(NamedExpr),
    FormatString(FormatString),
    Wrapped(Wrapped),
    Alias(Alias),
    Empty(Empty),
}

/// The coarse kind of an [`Expression`], as reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Identifier,
    Wrapped,
    KeyValuePair,
    UnaryOp,
    BinaryOp,
    List,
    Dict,
    Set,
    Tuple,
    Closure,
    Condition,
    NamedExpr,
    Comprehension,
    FormatString,
    Subscript,
    Attribute,
    Call,
    Literal,
    Alias,
    Empty,
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Expression {
    pub fn kind(&self) -> ExprKind {
        match self {
            Self::Identifier(_) => ExprKind::Identifier,
            Self::Literal(_) => ExprKind::Literal,
            Self::UnaryOp(_) => ExprKind::UnaryOp,
            Self::BinaryOp(_) => ExprKind::BinaryOp,
            Self::Call(_) => ExprKind::Call,
            Self::Attribute(_) => ExprKind::Attribute,
            Self::Subscript(_) => ExprKind::Subscript,
            Self::List(_) | Self::ListComp(_) => ExprKind::List,
            Self::Set(_) | Self::SetComp(_) => ExprKind::Set,
            Self::Dict(_) | Self::DictComp(_) => ExprKind::Dict,
            Self::Tuple(_) => ExprKind::Tuple,
            Self::Generator(_) => ExprKind::Comprehension,
            Self::KeyValuePair(_) => ExprKind::KeyValuePair,
            Self::Closure(_) => ExprKind::Closure,
            Self::Condition(_) => ExprKind::Condition,
            Self::NamedExpr(_) => ExprKind::NamedExpr,
            Self::FormatString(_) => ExprKind::FormatString,
            Self::Wrapped(_) => ExprKind::Wrapped,
            Self::Alias(_) => ExprKind::Alias,
            Self::Empty(_) => ExprKind::Empty,
        }
    }

    /// Unwraps an identifier, or fails with [`SyntError::NotAnIdentifier`].
    pub fn ensure_identifier(self) -> Result<Identifier> {
        match self {
            Self::Identifier(id) => Ok(id),
            other => Err(SyntError::NotAnIdentifier(other.kind())),
        }
    }

    /// Renders a tuple without its parentheses, any other expression as usual.
    pub(crate) fn codegen_target<'a>(&self, state: &mut CodegenState<'a>) {
        match self {
            Self::Tuple(t) => t.codegen_implicit(state),
            other => other.codegen(state),
        }
    }
}

macro_rules! expression_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(x: $ty) -> Self {
                    Self::$variant(x)
                }
            }
        )*
    };
}

expression_from!(
    Identifier(Identifier),
    Literal(Literal),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
    Call(Call),
    Attribute(Attribute),
    Subscript(Subscript),
    List(List),
    ListComp(ListComp),
    Set(Set),
    SetComp(SetComp),
    Dict(Dict),
    DictComp(DictComp),
    Tuple(Tuple),
    Generator(Generator),
    KeyValuePair(KVPair),
    Closure(Closure),
    Condition(Condition),
    NamedExpr(NamedExpr),
    FormatString(FormatString),
    Wrapped(Wrapped),
    Alias(Alias),
    Empty(Empty),
);
