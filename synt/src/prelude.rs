// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Everything needed to build and render code, in one glob import.
//!
//! ```
//! use synt::prelude::*;
//!
//! # fn main() -> synt::Result<()> {
//! let greet = def_(id_("greet")?)
//!     .arg(arg(id_("name")?).ty(id_("str")?))
//!     .returns(id_("str")?)
//!     .block(stmts![return_(fstring([
//!         FormatPart::from("Hello, "),
//!         fnode(id_("name")?).into(),
//!     ]))])?;
//! assert_eq!(
//!     greet.into_code(),
//!     "def greet(name: str) -> str:\n    return f\"Hello, {name}\""
//! );
//! # Ok(())
//! # }
//! ```

pub use crate::stmts;
pub use crate::{
    Block, Codegen, CodegenConfig, CodegenState, ExprKind, ExprPrecedence, Expression,
    ExpressionExt, File, Identifier, IntoCode, Literal, Precedence, Result, Statement,
    SyntError, TypeParam,
};

pub use crate::tokens::{
    id_, litbool, litfloat, litint, litstr, ELLIPSIS, FALSE, NONE, TRUE, UNDERSCORE,
};

pub use crate::expr::{
    await_, closure, dict_, dict_comp, fnode, fstring, gen, kv, lambda_, list_, list_comp, not_,
    pair, parentpath, path, relpath, set_, set_comp, slice_, tup, unpack, unpack_kv, yield_,
    yield_from, Empty, FormatConversion, FormatPart, Keyword, SubscriptItem,
};

pub use crate::stmt::{
    arg, assert_, async_def, class_, dec, def_, del_, for_, from_, global_, if_, import_,
    kwarg, match_, nonlocal_, raise, raise_, ret, return_, try_, vararg, while_, with_,
    ImportName, ImportStar, WithItem, BREAK, CONTINUE, PASS,
};

pub use crate::ty::{tspec, ttup, tvar};
