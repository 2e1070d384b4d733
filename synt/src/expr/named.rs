// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::Precedence;

use crate::{
    wrap_child, Codegen, CodegenState, ExprPrecedence, Expression, Identifier, Precedence, Slot,
};

/// `target := value`
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(NamedExpr)]
pub struct NamedExpr {
    target: Identifier,
    value: Box<Expression>,
}

impl NamedExpr {
    pub fn new(target: Identifier, value: impl Into<Expression>) -> Self {
        Self {
            target,
            value: Box::new(wrap_child(value.into(), Slot::NamedValue)),
        }
    }
}

impl<'a> Codegen<'a> for NamedExpr {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.target.codegen(state);
        state.add_token(" := ");
        self.value.codegen(state);
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_named() -> Result<()> {
        let code = id_("a")?.named(litint(1))?.into_code();
        assert_eq!(code, "a := 1");

        let code = litint(1)
            .add(litint(2))
            .named_as(id_("a")?)
            .is_(TRUE)
            .into_code();
        assert_eq!(code, "(a := 1 + 2) is True");
        Ok(())
    }

    #[test]
    fn test_nested_named() -> Result<()> {
        let inner = litint(1).named_as(id_("b")?);
        assert_eq!(inner.named_as(id_("a")?).into_code(), "a := (b := 1)");
        Ok(())
    }

    #[test]
    fn test_target_must_be_identifier() {
        assert_eq!(
            litint(1).named(litint(2)),
            Err(SyntError::NotAnIdentifier(ExprKind::Literal))
        );
    }
}
