// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

/// Builds a `Vec<Statement>` out of values of mixed statement types, converting each one with
/// `Statement::from`. Bare expressions become expression statements.
///
/// ```
/// use synt::prelude::*;
///
/// # fn main() -> synt::Result<()> {
/// let body = stmts![id_("x")?.assign(litint(1)), id_("print")?.call([id_("x")?.into()]), PASS];
/// assert_eq!(Block::new(body).into_code(), "x = 1\nprint(x)\npass");
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! stmts {
    () => {
        ::std::vec::Vec::<$crate::Statement>::new()
    };
    ( $( $stmt:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::Statement::from($stmt) ),+ ]
    };
}
