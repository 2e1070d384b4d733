// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use tracing::trace;

use crate::expr::{BinaryOpKind, Expression, UnaryOpKind, Wrapped};

/// Python's expression precedence, see
/// <https://docs.python.org/3/reference/expressions.html#operator-precedence>.
///
/// Smaller binds tighter: an `Atom` never needs parentheses, a `NamedExpr` almost always does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExprPrecedence {
    /// Names, literals, displays, comprehensions, parenthesized forms, `*x`, `**x`, `yield`.
    Atom = 0,
    /// Calls, attribute references, subscriptions and slicings.
    Call = 1,
    Await = 2,
    /// `**`
    Exponential = 3,
    /// `+x`, `-x`, `~x`.
    Unary = 4,
    Multiplicative = 5,
    Additive = 6,
    Shift = 7,
    BitAnd = 8,
    BitXor = 9,
    BitOr = 10,
    /// Comparisons, membership and identity tests.
    Comparative = 11,
    BoolNot = 12,
    BoolAnd = 13,
    BoolOr = 14,
    /// `a if b else c`
    Conditional = 15,
    Lambda = 16,
    /// `a := b`
    NamedExpr = 17,
}

pub trait Precedence {
    fn precedence(&self) -> ExprPrecedence;
}

impl<T> Precedence for Box<T>
where
    T: Precedence + ?Sized,
{
    fn precedence(&self) -> ExprPrecedence {
        (**self).precedence()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Wrap only children that bind strictly looser than the parent.
    Strict,
    /// Wrap children that bind looser than or as loosely as the parent.
    NonStrict,
}

impl WrapMode {
    pub fn needs_wrap(self, child: ExprPrecedence, parent: ExprPrecedence) -> bool {
        match self {
            Self::Strict => child > parent,
            Self::NonStrict => child >= parent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    /// Comparisons chain (`a < b < c`), so neither side may hold another comparison.
    Chained,
}

/// A child position inside a composite expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    BinaryLeft(BinaryOpKind),
    BinaryRight(BinaryOpKind),
    UnaryOperand(UnaryOpKind),
    CallTarget,
    /// The value of `name=value` in a call or class definition.
    KeywordValue,
    AttributeTarget,
    SubscriptTarget,
    /// Any bound of `lower:upper:step`.
    SlicePart,
    /// Any of the three parts of `a if b else c`.
    ConditionPart,
    LambdaBody,
    NamedValue,
    /// Key or value of `k: v`.
    PairPart,
    ComprehensionElement,
    ComprehensionIterator,
    ComprehensionFilter,
    /// The expression inside an f-string replacement field.
    FormatValue,
    /// A value directly under a statement keyword or `=`, where a bare `:=` is a syntax error.
    StatementValue,
}

impl Slot {
    /// The parent precedence a child of this slot is compared against, and how.
    pub fn rule(self) -> (ExprPrecedence, WrapMode) {
        use ExprPrecedence as P;
        use WrapMode::*;

        match self {
            Self::BinaryLeft(op) => match op.associativity() {
                Associativity::Left => (op.precedence(), Strict),
                Associativity::Right | Associativity::Chained => (op.precedence(), NonStrict),
            },
            Self::BinaryRight(op) => match op.associativity() {
                Associativity::Right => (op.precedence(), Strict),
                Associativity::Left | Associativity::Chained => (op.precedence(), NonStrict),
            },
            Self::UnaryOperand(op) => (op.precedence(), Strict),
            Self::CallTarget | Self::AttributeTarget | Self::SubscriptTarget => (P::Call, Strict),
            Self::KeywordValue => (P::Lambda, Strict),
            Self::SlicePart => (P::Conditional, Strict),
            Self::ConditionPart => (P::Conditional, NonStrict),
            Self::LambdaBody => (P::Lambda, Strict),
            Self::NamedValue => (P::NamedExpr, NonStrict),
            Self::PairPart | Self::ComprehensionElement => (P::Lambda, Strict),
            Self::ComprehensionIterator | Self::ComprehensionFilter => (P::BoolOr, Strict),
            Self::FormatValue => (P::Conditional, Strict),
            Self::StatementValue => (P::NamedExpr, NonStrict),
        }
    }
}

/// Wraps `child` in parentheses if the slot it is placed in requires it.
///
/// Atomic children are returned untouched, so an already wrapped child is never wrapped twice.
/// The exception is a standalone prefix form (`*x`, `yield x`), which is wrapped in any slot
/// but a statement value.
pub fn wrap_child(child: Expression, slot: Slot) -> Expression {
    let (parent, mode) = slot.rule();
    let precedence = child.precedence();
    let standalone = matches!(&child, Expression::UnaryOp(u) if u.op().is_standalone());
    if (standalone && slot != Slot::StatementValue)
        || (precedence != ExprPrecedence::Atom && mode.needs_wrap(precedence, parent))
    {
        trace!(?slot, ?precedence, "wrapping child expression");
        Wrapped::new(child).into()
    } else {
        child
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_total_order() {
        assert!(ExprPrecedence::Atom < ExprPrecedence::Call);
        assert!(ExprPrecedence::Exponential < ExprPrecedence::Unary);
        assert!(ExprPrecedence::BoolOr < ExprPrecedence::Conditional);
        assert!(ExprPrecedence::Lambda < ExprPrecedence::NamedExpr);
        assert_eq!(ExprPrecedence::NamedExpr as u8, 17);
    }

    #[test]
    fn test_wrap_modes() {
        let (a, b) = (ExprPrecedence::Additive, ExprPrecedence::Multiplicative);
        assert!(WrapMode::Strict.needs_wrap(a, b));
        assert!(!WrapMode::Strict.needs_wrap(a, a));
        assert!(WrapMode::NonStrict.needs_wrap(a, a));
        assert!(!WrapMode::NonStrict.needs_wrap(b, a));
    }

    #[test]
    fn test_wrap_child() {
        let sum = litint(1).add(litint(2));
        let wrapped = wrap_child(sum.clone(), Slot::BinaryLeft(BinaryOpKind::Mul));
        assert_eq!(wrapped.kind(), ExprKind::Wrapped);
        assert_eq!(wrapped.into_code(), "(1 + 2)");

        let kept = wrap_child(sum, Slot::BinaryLeft(BinaryOpKind::Add));
        assert_eq!(kept.kind(), ExprKind::BinaryOp);
    }

    #[test]
    fn test_no_double_wrap() {
        let once = litint(1).add(litint(2)).wrap();
        let again = wrap_child(once.clone(), Slot::NamedValue);
        assert_eq!(again, once);
        assert_eq!(again.into_code(), "(1 + 2)");
        assert_eq!(once.wrap().into_code(), "((1 + 2))");
    }

    #[test]
    fn test_slot_table() {
        assert_eq!(
            Slot::BinaryLeft(BinaryOpKind::Pow).rule(),
            (ExprPrecedence::Exponential, WrapMode::NonStrict)
        );
        assert_eq!(
            Slot::BinaryRight(BinaryOpKind::Pow).rule(),
            (ExprPrecedence::Exponential, WrapMode::Strict)
        );
        assert_eq!(
            Slot::BinaryRight(BinaryOpKind::Sub).rule(),
            (ExprPrecedence::Additive, WrapMode::NonStrict)
        );
        assert_eq!(
            Slot::ConditionPart.rule(),
            (ExprPrecedence::Conditional, WrapMode::NonStrict)
        );
        assert_eq!(
            Slot::AttributeTarget.rule(),
            Slot::CallTarget.rule(),
        );
        assert_eq!(
            Slot::StatementValue.rule(),
            (ExprPrecedence::NamedExpr, WrapMode::NonStrict)
        );
    }

    #[test]
    fn test_statement_value_only_wraps_named() -> Result<()> {
        let named = id_("y")?.named(litint(1))?;
        assert_eq!(
            wrap_child(named, Slot::StatementValue).into_code(),
            "(y := 1)"
        );
        let lambda = lambda_([id_("x")?], id_("x")?);
        assert_eq!(
            wrap_child(lambda, Slot::StatementValue).into_code(),
            "lambda x: x"
        );
        Ok(())
    }
}
