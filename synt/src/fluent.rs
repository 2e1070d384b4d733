// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Method-chaining sugar over the node constructors.
//!
//! Everything here only calls into [`crate::expr`] and [`crate::stmt`]; nothing there depends
//! on this module.

use paste::paste;

use crate::expr::{
    Alias, Attribute, BinaryOp, BinaryOpKind, Call, ComprehensionBuilder, ConditionBuilder,
    Keyword, NamedExpr, Subscript, SubscriptItem, UnaryOp, UnaryOpKind, Wrapped,
};
use crate::stmt::{Assignment, ExprStatement};
use crate::{Expression, Identifier, Result, Statement};

macro_rules! binary_methods {
    ($($(#[$attr:meta])* $method:ident => $kind:ident;)*) => {
        $(
            $(#[$attr])*
            fn $method(self, other: impl Into<Expression>) -> Expression {
                BinaryOp::new(BinaryOpKind::$kind, self, other).into()
            }
        )*
    };
}

macro_rules! unary_methods {
    ($($(#[$attr:meta])* $method:ident => $kind:ident;)*) => {
        $(
            $(#[$attr])*
            fn $method(self) -> Expression {
                UnaryOp::new(UnaryOpKind::$kind, self).into()
            }
        )*
    };
}

/// Chaining constructors for anything that converts into an [`Expression`].
///
/// ```
/// use synt::prelude::*;
///
/// # fn main() -> synt::Result<()> {
/// let e = litint(1).add(litint(2)).mul(id_("x")?);
/// assert_eq!(e.into_code(), "(1 + 2) * x");
/// # Ok(())
/// # }
/// ```
pub trait ExpressionExt: Into<Expression> + Sized {
    fn expr(self) -> Expression {
        self.into()
    }

    binary_methods! {
        add => Add;
        sub => Sub;
        mul => Mul;
        div => Div;
        floor_div => FloorDiv;
        /// `self % other`
        mod_ => Mod;
        pow => Pow;
        /// `self @ other`
        at => At;
        lshift => LShift;
        rshift => RShift;
        lt => Less;
        le => LessEqual;
        gt => Greater;
        ge => GreaterEqual;
        eq => Equal;
        ne => NotEqual;
        in_ => In;
        not_in => NotIn;
        is_ => Is;
        is_not => IsNot;
        bool_and => BoolAnd;
        bool_or => BoolOr;
        bit_and => BitAnd;
        bit_or => BitOr;
        bit_xor => BitXor;
    }

    unary_methods! {
        positive => Positive;
        neg => Neg;
        not_ => BoolNot;
        /// `~self`
        invert => BitNot;
        await_ => Await;
        /// `*self`
        unpack => Starred;
        /// `**self`
        unpack_kv => DoubleStarred;
        yield_ => Yield;
        yield_from => YieldFrom;
    }

    fn call(self, args: impl IntoIterator<Item = Expression>) -> Expression {
        Call::new(self, args, []).into()
    }

    fn call_kw<K>(
        self,
        args: impl IntoIterator<Item = Expression>,
        keywords: impl IntoIterator<Item = K>,
    ) -> Expression
    where
        K: Into<Keyword>,
    {
        Call::new(self, args, keywords.into_iter().map(Into::into)).into()
    }

    fn attr(self, name: Identifier) -> Expression {
        Attribute::new(self, name).into()
    }

    fn subscribe<I>(self, items: I) -> Expression
    where
        I: IntoIterator,
        I::Item: Into<SubscriptItem>,
    {
        Subscript::new(self, items).into()
    }

    /// Starts a comprehension with `self` as its element.
    fn for_(self, targets: impl IntoIterator<Item = Identifier>) -> ComprehensionBuilder {
        ComprehensionBuilder::new(self, targets, false)
    }

    fn async_for(self, targets: impl IntoIterator<Item = Identifier>) -> ComprehensionBuilder {
        ComprehensionBuilder::new(self, targets, true)
    }

    /// `self if test else ...`, finished by [`ConditionBuilder::else_`].
    fn if_(self, test: impl Into<Expression>) -> ConditionBuilder {
        ConditionBuilder::new(self, test)
    }

    /// Parenthesizes unconditionally.
    fn wrap(self) -> Expression {
        Wrapped::new(self).into()
    }

    /// `self := value`; `self` has to be an identifier.
    fn named(self, value: impl Into<Expression>) -> Result<Expression> {
        let target = self.expr().ensure_identifier()?;
        Ok(NamedExpr::new(target, value).into())
    }

    /// `target := self`
    fn named_as(self, target: Identifier) -> Expression {
        NamedExpr::new(target, self).into()
    }

    /// `self as asname`, for `case` patterns and imports.
    fn as_(self, asname: Identifier) -> Alias {
        let name: Expression = self.into();
        Alias::new(name, asname)
    }

    /// `self = value`
    fn assign(self, value: impl Into<Expression>) -> Assignment {
        Assignment::new(self).assign(value)
    }

    /// `target = self`
    fn assign_to(self, target: impl Into<Expression>) -> Assignment {
        Assignment::new(target).assign(self)
    }

    /// `self: annotation`
    fn ty(self, annotation: impl Into<Expression>) -> Assignment {
        Assignment::new(self).ty(annotation)
    }

    fn stmt(self) -> Statement {
        ExprStatement::new(self).into()
    }
}

impl<T: Into<Expression>> ExpressionExt for T {}

macro_rules! binary_ops {
    ($($trait:ident => $kind:ident),* $(,)?) => {
        paste! {
            $(
                impl<R: Into<Expression>> std::ops::$trait<R> for Expression {
                    type Output = Expression;

                    fn [<$trait:lower>](self, rhs: R) -> Expression {
                        BinaryOp::new(BinaryOpKind::$kind, self, rhs).into()
                    }
                }
            )*
        }
    };
}

binary_ops!(
    Add => Add,
    Sub => Sub,
    Mul => Mul,
    Div => Div,
    Rem => Mod,
    BitAnd => BitAnd,
    BitOr => BitOr,
    BitXor => BitXor,
    Shl => LShift,
    Shr => RShift,
);

impl std::ops::Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        UnaryOp::new(UnaryOpKind::Neg, self).into()
    }
}
