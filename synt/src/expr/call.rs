// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::Codegen;

use super::Empty;
use crate::{
    wrap_child, Codegen, CodegenState, ExprPrecedence, Expression, Identifier, Precedence, Slot,
};

/// `name=value` in an argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    name: Identifier,
    value: Expression,
}

impl Keyword {
    pub fn new(name: Identifier, value: impl Into<Expression>) -> Self {
        Self {
            name,
            value: wrap_child(value.into(), Slot::KeywordValue),
        }
    }
}

impl<'a> Codegen<'a> for Keyword {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.name.codegen(state);
        state.add_token("=");
        self.value.codegen(state);
    }
}

impl<E: Into<Expression>> From<(Identifier, E)> for Keyword {
    fn from((name, value): (Identifier, E)) -> Self {
        Self::new(name, value)
    }
}

/// Renders `a, b, k=v` for positional arguments followed by keywords.
pub(crate) fn codegen_arguments<'a>(
    args: &[Expression],
    keywords: &[Keyword],
    state: &mut CodegenState<'a>,
) {
    state.add_comma_separated(args);
    if !args.is_empty() && !keywords.is_empty() {
        state.add_token(", ");
    }
    state.add_comma_separated(keywords);
}

/// `target(args, name=value)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    target: Box<Expression>,
    args: Vec<Expression>,
    keywords: Vec<Keyword>,
}

impl Call {
    pub fn new(
        target: impl Into<Expression>,
        args: impl IntoIterator<Item = Expression>,
        keywords: impl IntoIterator<Item = Keyword>,
    ) -> Self {
        Self {
            target: Box::new(wrap_child(target.into(), Slot::CallTarget)),
            args: args.into_iter().collect(),
            keywords: keywords.into_iter().collect(),
        }
    }

    pub fn target(&self) -> &Expression {
        &self.target
    }
}

impl Precedence for Call {
    fn precedence(&self) -> ExprPrecedence {
        ExprPrecedence::Call
    }
}

impl<'a> Codegen<'a> for Call {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.target.codegen(state);
        state.add_token("(");
        codegen_arguments(&self.args, &self.keywords, state);
        state.add_token(")");
    }
}

/// `target.name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    target: Box<Expression>,
    name: Identifier,
}

impl Attribute {
    pub fn new(target: impl Into<Expression>, name: Identifier) -> Self {
        let target = match target.into() {
            // `1.real` would lex as a float followed by a name.
            Expression::Literal(lit) if lit.as_str().bytes().all(|b| b.is_ascii_digit()) => {
                super::Wrapped::new(lit).into()
            }
            target => wrap_child(target, Slot::AttributeTarget),
        };
        Self {
            target: Box::new(target),
            name,
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }
}

impl Precedence for Attribute {
    fn precedence(&self) -> ExprPrecedence {
        ExprPrecedence::Call
    }
}

impl<'a> Codegen<'a> for Attribute {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.target.codegen(state);
        state.add_token(".");
        self.name.codegen(state);
    }
}

/// `lower:upper` or `lower:upper:step`. Use [`Empty`] for an omitted bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    lower: Expression,
    upper: Expression,
    step: Option<Expression>,
}

impl Slice {
    pub fn new(lower: impl Into<Expression>, upper: impl Into<Expression>) -> Self {
        Self {
            lower: wrap_child(lower.into(), Slot::SlicePart),
            upper: wrap_child(upper.into(), Slot::SlicePart),
            step: None,
        }
    }

    pub fn step(mut self, step: impl Into<Expression>) -> Self {
        self.step = Some(wrap_child(step.into(), Slot::SlicePart));
        self
    }
}

impl Default for Slice {
    /// `:`
    fn default() -> Self {
        Self::new(Empty, Empty)
    }
}

impl<'a> Codegen<'a> for Slice {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.lower.codegen(state);
        state.add_token(":");
        self.upper.codegen(state);
        if let Some(step) = &self.step {
            state.add_token(":");
            step.codegen(state);
        }
    }
}

/// One entry between the brackets of a subscript.
#[derive(Debug, Clone, PartialEq, Eq, Codegen)]
pub enum SubscriptItem {
    Slice(Slice),
    Index(Expression),
}

impl From<Slice> for SubscriptItem {
    fn from(s: Slice) -> Self {
        Self::Slice(s)
    }
}

impl From<Expression> for SubscriptItem {
    fn from(e: Expression) -> Self {
        Self::Index(e)
    }
}

impl From<Identifier> for SubscriptItem {
    fn from(id: Identifier) -> Self {
        Self::Index(id.into())
    }
}

/// `target[a, b:c]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscript {
    target: Box<Expression>,
    items: Vec<SubscriptItem>,
}

impl Subscript {
    pub fn new<I>(target: impl Into<Expression>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SubscriptItem>,
    {
        Self {
            target: Box::new(wrap_child(target.into(), Slot::SubscriptTarget)),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl Precedence for Subscript {
    fn precedence(&self) -> ExprPrecedence {
        ExprPrecedence::Call
    }
}

impl<'a> Codegen<'a> for Subscript {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.target.codegen(state);
        state.add_token("[");
        state.add_comma_separated(&self.items);
        state.add_token("]");
    }
}

/// `lower:upper`; pass [`Empty`] for an omitted bound.
pub fn slice_(lower: impl Into<Expression>, upper: impl Into<Expression>) -> Slice {
    Slice::new(lower, upper)
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_call() -> Result<()> {
        let code = id_("a")?
            .attr(id_("b")?)
            .call([litint(1), litint(2)])
            .into_code();
        assert_eq!(code, "a.b(1, 2)");

        let code = id_("print")?
            .call_kw(
                [litstr("x")],
                [(id_("sep")?, litstr("")), (id_("end")?, NONE.into())],
            )
            .into_code();
        assert_eq!(code, "print('x', sep='', end=None)");

        let code = id_("f")?.call_kw([], [(id_("k")?, litint(1))]).into_code();
        assert_eq!(code, "f(k=1)");
        assert_eq!(id_("f")?.call([]).into_code(), "f()");
        Ok(())
    }

    #[test]
    fn test_targets_are_wrapped() -> Result<()> {
        let sum = id_("a")?.add(id_("b")?);
        assert_eq!(sum.clone().call([]).into_code(), "(a + b)()");
        assert_eq!(sum.clone().attr(id_("real")?).into_code(), "(a + b).real");
        assert_eq!(sum.subscribe([litint(0)]).into_code(), "(a + b)[0]");
        assert_eq!(litint(1).attr(id_("real")?).into_code(), "(1).real");
        assert_eq!(litfloat(1.5).attr(id_("real")?).into_code(), "1.5.real");
        assert_eq!(
            id_("a")?.call([]).attr(id_("b")?).subscribe([litint(1)]).call([]).into_code(),
            "a().b[1]()"
        );
        Ok(())
    }

    #[test]
    fn test_keyword_values() -> Result<()> {
        let named = litint(1).named_as(id_("x")?);
        let code = id_("f")?.call_kw([named.clone()], [(id_("k")?, named)]).into_code();
        assert_eq!(code, "f(x := 1, k=(x := 1))");
        Ok(())
    }

    #[test]
    fn test_slices() -> Result<()> {
        assert_eq!(slice_(litint(5), litint(10)).into_code(), "5:10");
        assert_eq!(
            slice_(litint(5), litint(10)).step(id_("a")?).into_code(),
            "5:10:a"
        );
        assert_eq!(slice_(Empty, litint(-1)).into_code(), ":-1");

        let code = id_("a")?
            .subscribe([
                SubscriptItem::from(slice_(litint(1), Empty)),
                litint(2).into(),
            ])
            .into_code();
        assert_eq!(code, "a[1:, 2]");
        Ok(())
    }
}
