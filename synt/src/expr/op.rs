// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use crate::{
    wrap_child, Associativity, Codegen, CodegenState, ExprPrecedence, Expression, Precedence,
    SyntError, Slot,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOpKind {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,
    At,
    LShift,
    RShift,
    In,
    NotIn,
    Is,
    IsNot,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    BitAnd,
    BitXor,
    BitOr,
    BoolAnd,
    BoolOr,
}

impl BinaryOpKind {
    pub const ALL: [Self; 25] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::FloorDiv,
        Self::Mod,
        Self::Pow,
        Self::At,
        Self::LShift,
        Self::RShift,
        Self::In,
        Self::NotIn,
        Self::Is,
        Self::IsNot,
        Self::Less,
        Self::LessEqual,
        Self::Greater,
        Self::GreaterEqual,
        Self::Equal,
        Self::NotEqual,
        Self::BitAnd,
        Self::BitXor,
        Self::BitOr,
        Self::BoolAnd,
        Self::BoolOr,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::At => "@",
            Self::LShift => "<<",
            Self::RShift => ">>",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::BoolAnd => "and",
            Self::BoolOr => "or",
        }
    }

    pub fn precedence(self) -> ExprPrecedence {
        use ExprPrecedence as P;
        match self {
            Self::Add | Self::Sub => P::Additive,
            Self::Mul | Self::Div | Self::FloorDiv | Self::Mod | Self::At => P::Multiplicative,
            Self::Pow => P::Exponential,
            Self::LShift | Self::RShift => P::Shift,
            Self::In
            | Self::NotIn
            | Self::Is
            | Self::IsNot
            | Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual => P::Comparative,
            Self::BitAnd => P::BitAnd,
            Self::BitXor => P::BitXor,
            Self::BitOr => P::BitOr,
            Self::BoolAnd => P::BoolAnd,
            Self::BoolOr => P::BoolOr,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self.precedence() {
            ExprPrecedence::Exponential => Associativity::Right,
            ExprPrecedence::Comparative => Associativity::Chained,
            _ => Associativity::Left,
        }
    }
}

impl fmt::Display for BinaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for BinaryOpKind {
    type Err = SyntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.text() == s)
            .ok_or_else(|| SyntError::UnrecognizedOperator(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOpKind {
    /// `*x`
    Starred,
    /// `**x`
    DoubleStarred,
    Yield,
    YieldFrom,
    Await,
    Positive,
    Neg,
    BitNot,
    BoolNot,
}

impl UnaryOpKind {
    pub const ALL: [Self; 9] = [
        Self::Starred,
        Self::DoubleStarred,
        Self::Yield,
        Self::YieldFrom,
        Self::Await,
        Self::Positive,
        Self::Neg,
        Self::BitNot,
        Self::BoolNot,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Self::Starred => "*",
            Self::DoubleStarred => "**",
            Self::Yield => "yield",
            Self::YieldFrom => "yield from",
            Self::Await => "await",
            Self::Positive => "+",
            Self::Neg => "-",
            Self::BitNot => "~",
            Self::BoolNot => "not",
        }
    }

    pub fn precedence(self) -> ExprPrecedence {
        match self {
            Self::Starred | Self::DoubleStarred | Self::Yield | Self::YieldFrom => {
                ExprPrecedence::Atom
            }
            Self::Await => ExprPrecedence::Await,
            Self::Positive | Self::Neg | Self::BitNot => ExprPrecedence::Unary,
            Self::BoolNot => ExprPrecedence::BoolNot,
        }
    }

    /// `*x`, `**x`, `yield x` and `yield from x` only stand on their own, as a statement value,
    /// or as an element of a display or argument list. Anywhere else they need parentheses.
    pub fn is_standalone(self) -> bool {
        matches!(
            self,
            Self::Starred | Self::DoubleStarred | Self::Yield | Self::YieldFrom
        )
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for UnaryOpKind {
    type Err = SyntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.text() == s)
            .ok_or_else(|| SyntError::UnrecognizedOperator(s.to_string()))
    }
}

/// `left op right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp {
    op: BinaryOpKind,
    left: Box<Expression>,
    right: Box<Expression>,
}

impl BinaryOp {
    pub fn new(
        op: BinaryOpKind,
        left: impl Into<Expression>,
        right: impl Into<Expression>,
    ) -> Self {
        Self {
            op,
            left: Box::new(wrap_child(left.into(), Slot::BinaryLeft(op))),
            right: Box::new(wrap_child(right.into(), Slot::BinaryRight(op))),
        }
    }

    pub fn op(&self) -> BinaryOpKind {
        self.op
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

impl Precedence for BinaryOp {
    fn precedence(&self) -> ExprPrecedence {
        self.op.precedence()
    }
}

impl<'a> Codegen<'a> for BinaryOp {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.left.codegen(state);
        state.add_token(" ");
        state.add_token(self.op.text());
        state.add_token(" ");
        self.right.codegen(state);
    }
}

/// `op operand`. The operator is always followed by a single space, `- x` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOp {
    op: UnaryOpKind,
    operand: Box<Expression>,
}

impl UnaryOp {
    pub fn new(op: UnaryOpKind, operand: impl Into<Expression>) -> Self {
        Self {
            op,
            operand: Box::new(wrap_child(operand.into(), Slot::UnaryOperand(op))),
        }
    }

    pub fn op(&self) -> UnaryOpKind {
        self.op
    }

    pub fn operand(&self) -> &Expression {
        &self.operand
    }
}

impl Precedence for UnaryOp {
    fn precedence(&self) -> ExprPrecedence {
        self.op.precedence()
    }
}

impl<'a> Codegen<'a> for UnaryOp {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token(self.op.text());
        state.add_token(" ");
        self.operand.codegen(state);
    }
}

pub fn await_(value: impl Into<Expression>) -> Expression {
    UnaryOp::new(UnaryOpKind::Await, value).into()
}

/// `*value`
pub fn unpack(value: impl Into<Expression>) -> Expression {
    UnaryOp::new(UnaryOpKind::Starred, value).into()
}

/// `**value`
pub fn unpack_kv(value: impl Into<Expression>) -> Expression {
    UnaryOp::new(UnaryOpKind::DoubleStarred, value).into()
}

pub fn not_(value: impl Into<Expression>) -> Expression {
    UnaryOp::new(UnaryOpKind::BoolNot, value).into()
}

pub fn yield_(value: impl Into<Expression>) -> Expression {
    UnaryOp::new(UnaryOpKind::Yield, value).into()
}

pub fn yield_from(value: impl Into<Expression>) -> Expression {
    UnaryOp::new(UnaryOpKind::YieldFrom, value).into()
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_every_binary_op() -> Result<()> {
        for op in BinaryOpKind::ALL {
            assert!(!op.text().is_empty());
            assert!(op.precedence() > ExprPrecedence::Await);
            assert!(op.precedence() < ExprPrecedence::Conditional);
            assert_eq!(op.text().parse::<BinaryOpKind>(), Ok(op));

            let code = BinaryOp::new(op, id_("a")?, id_("b")?).into_code();
            assert_eq!(code, format!("a {} b", op));
        }
        Ok(())
    }

    #[test]
    fn test_every_unary_op() -> Result<()> {
        for op in UnaryOpKind::ALL {
            assert_eq!(op.text().parse::<UnaryOpKind>(), Ok(op));
            let code = UnaryOp::new(op, id_("a")?).into_code();
            assert_eq!(code, format!("{} a", op));
        }
        Ok(())
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(
            "<>".parse::<BinaryOpKind>(),
            Err(SyntError::UnrecognizedOperator("<>".into()))
        );
        assert_eq!(
            "!".parse::<UnaryOpKind>(),
            Err(SyntError::UnrecognizedOperator("!".into()))
        );
    }

    #[test]
    fn test_associativity() {
        assert_eq!(BinaryOpKind::Pow.associativity(), Associativity::Right);
        assert_eq!(BinaryOpKind::NotIn.associativity(), Associativity::Chained);
        assert_eq!(BinaryOpKind::BoolOr.associativity(), Associativity::Left);
        assert_eq!(BinaryOpKind::At.associativity(), Associativity::Left);
    }

    #[test]
    fn test_binary_precedence() {
        let code = litint(1).add(litint(2).mul(litint(3))).into_code();
        assert_eq!(code, "1 + 2 * 3");
        let code = litint(1).mul(litint(2).add(litint(3))).into_code();
        assert_eq!(code, "1 * (2 + 3)");
        let code = litint(1).add(litint(2)).mul(litint(3)).into_code();
        assert_eq!(code, "(1 + 2) * 3");
    }

    #[test]
    fn test_every_operator_pair() -> Result<()> {
        let inner = |op| -> Result<Expression> {
            Ok(BinaryOp::new(op, id_("a")?, id_("b")?).into())
        };
        for parent in BinaryOpKind::ALL {
            for child in BinaryOpKind::ALL {
                let left = BinaryOp::new(parent, inner(child)?, id_("c")?);
                let right = BinaryOp::new(parent, id_("c")?, inner(child)?);
                let (left_wrapped, right_wrapped) =
                    match child.precedence().cmp(&parent.precedence()) {
                        Ordering::Less => (false, false),
                        Ordering::Greater => (true, true),
                        Ordering::Equal => match parent.associativity() {
                            Associativity::Left => (false, true),
                            Associativity::Right => (true, false),
                            Associativity::Chained => (true, true),
                        },
                    };
                assert_eq!(
                    left.left().kind() == ExprKind::Wrapped,
                    left_wrapped,
                    "({child}) as left operand of {parent}"
                );
                assert_eq!(
                    right.right().kind() == ExprKind::Wrapped,
                    right_wrapped,
                    "({child}) as right operand of {parent}"
                );

                let operand = format!("a {} b", child);
                let paren = |wrapped: bool| {
                    if wrapped {
                        format!("({})", operand)
                    } else {
                        operand.clone()
                    }
                };
                assert_eq!(
                    left.into_code(),
                    format!("{} {} c", paren(left_wrapped), parent)
                );
                assert_eq!(
                    right.into_code(),
                    format!("c {} {}", parent, paren(right_wrapped))
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_operand_order() -> Result<()> {
        let (a, b, c) = (id_("a")?, id_("b")?, id_("c")?);

        assert_eq!(a.clone().sub(b.clone().sub(c.clone())).into_code(), "a - (b - c)");
        assert_eq!(a.clone().sub(b.clone()).sub(c.clone()).into_code(), "a - b - c");
        assert_eq!(a.clone().pow(b.clone()).pow(c.clone()).into_code(), "(a ** b) ** c");
        assert_eq!(a.clone().pow(b.clone().pow(c.clone())).into_code(), "a ** b ** c");
        assert_eq!(a.clone().lt(b.clone()).lt(c.clone()).into_code(), "(a < b) < c");
        assert_eq!(a.clone().lt(b.clone().lt(c.clone())).into_code(), "a < (b < c)");
        assert_eq!(
            a.clone().bool_or(b.clone()).bool_and(c).into_code(),
            "(a or b) and c"
        );
        assert_eq!(a.neg().pow(b).into_code(), "(- a) ** b");
        Ok(())
    }

    #[test]
    fn test_standalone_operands() -> Result<()> {
        let x = || id_("x");
        assert_eq!(x()?.yield_().add(litint(1)).into_code(), "(yield x) + 1");
        assert_eq!(x()?.unpack().add(litint(1)).into_code(), "(* x) + 1");
        assert_eq!(litint(1).mul(x()?.yield_from()).into_code(), "1 * (yield from x)");
        assert_eq!(x()?.yield_().await_().into_code(), "await (yield x)");
        assert_eq!(x()?.yield_().attr(id_("y")?).into_code(), "(yield x).y");
        assert_eq!(
            id_("f")?.call([x()?.unpack(), x()?.unpack_kv()]).into_code(),
            "f(* x, ** x)"
        );
        assert_eq!(id_("y")?.assign(x()?.yield_()).into_code(), "y = yield x");
        assert_eq!(x()?.yield_().precedence(), ExprPrecedence::Atom);
        Ok(())
    }

    #[test]
    fn test_negative_literal_base() {
        assert_eq!(litint(-1).pow(litint(2)).into_code(), "(-1) ** 2");
        assert_eq!(litint(2).pow(litint(-1)).into_code(), "2 ** (-1)");
    }

    #[test]
    fn test_unary() -> Result<()> {
        assert_eq!(litint(10).await_().into_code(), "await 10");
        assert_eq!(litint(10).positive().into_code(), "+ 10");
        assert_eq!(id_("foo")?.not_().into_code(), "not foo");
        assert_eq!(id_("foo")?.invert().into_code(), "~ foo");
        assert_eq!(
            list_([litint(1), litint(2), litint(3)]).unpack().into_code(),
            "* [1, 2, 3]"
        );
        assert_eq!(
            dict_([kv(litint(1), litstr("a"))]).unpack_kv().into_code(),
            "** {1: 'a'}"
        );
        assert_eq!(litint(10).yield_().into_code(), "yield 10");
        assert_eq!(
            list_([litint(10), litint(42)]).yield_from().into_code(),
            "yield from [10, 42]"
        );
        assert_eq!(id_("a")?.add(id_("b")?).not_().into_code(), "not a + b");
        assert_eq!(id_("a")?.add(id_("b")?).neg().into_code(), "- (a + b)");
        assert_eq!(id_("x")?.attr(id_("y")?).await_().into_code(), "await x.y");
        Ok(())
    }
}
