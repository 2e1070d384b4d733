// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Build Python expressions and statements as a typed tree and render them as source code.
//!
//! Parentheses are decided once, when a composite node is built, from the precedence of the
//! parent slot and the child. Rendering is a total function over a finished tree.

#[macro_use]
mod macros;

mod error;
pub use error::{Result, SyntError};

mod codegen;
pub use codegen::{Codegen, CodegenConfig, CodegenState, IntoCode};

mod precedence;
pub use precedence::{wrap_child, Associativity, ExprPrecedence, Precedence, Slot, WrapMode};

pub mod tokens;
pub use tokens::{Identifier, Literal};

pub mod expr;
pub use expr::{ExprKind, Expression};

pub mod stmt;
pub use stmt::{Block, Statement};

pub mod ty;
pub use ty::TypeParam;

mod file;
pub use file::File;

pub mod fluent;
pub use fluent::ExpressionExt;

pub mod prelude;
