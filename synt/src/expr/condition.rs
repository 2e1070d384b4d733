// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::Precedence;

use crate::{wrap_child, Codegen, CodegenState, ExprPrecedence, Expression, Precedence, Slot};

/// `body if test else orelse`
///
/// Every part that is itself conditional or looser is parenthesized, including a nested
/// `else` branch.
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Conditional)]
pub struct Condition {
    test: Box<Expression>,
    body: Box<Expression>,
    orelse: Box<Expression>,
}

impl Condition {
    pub fn new(
        test: impl Into<Expression>,
        body: impl Into<Expression>,
        orelse: impl Into<Expression>,
    ) -> Self {
        let part = |e: Expression| Box::new(wrap_child(e, Slot::ConditionPart));
        Self {
            test: part(test.into()),
            body: part(body.into()),
            orelse: part(orelse.into()),
        }
    }
}

impl<'a> Codegen<'a> for Condition {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.body.codegen(state);
        state.add_token(" if ");
        self.test.codegen(state);
        state.add_token(" else ");
        self.orelse.codegen(state);
    }
}

/// Holds `body if test` until the `else` branch arrives.
#[derive(Debug)]
#[must_use]
pub struct ConditionBuilder {
    test: Expression,
    body: Expression,
}

impl ConditionBuilder {
    pub fn new(body: impl Into<Expression>, test: impl Into<Expression>) -> Self {
        Self {
            test: test.into(),
            body: body.into(),
        }
    }

    pub fn else_(self, orelse: impl Into<Expression>) -> Expression {
        Condition::new(self.test, self.body, orelse).into()
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_condition() -> Result<()> {
        let code = id_("a")?.if_(id_("b")?).else_(id_("c")?).into_code();
        assert_eq!(code, "a if b else c");
        Ok(())
    }

    #[test]
    fn test_nested_conditions() -> Result<()> {
        let inner = || -> Result<Expression> { Ok(id_("a")?.if_(id_("b")?).else_(id_("c")?)) };
        let code = inner()?.if_(id_("d")?).else_(id_("e")?).into_code();
        assert_eq!(code, "(a if b else c) if d else e");
        let code = id_("d")?.if_(inner()?).else_(inner()?).into_code();
        assert_eq!(code, "d if (a if b else c) else (a if b else c)");

        let code = id_("x")?
            .bool_or(id_("y")?)
            .if_(id_("t")?.not_())
            .else_(lambda_([], NONE))
            .into_code();
        assert_eq!(code, "x or y if not t else (lambda: None)");
        Ok(())
    }
}
