// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::Precedence;

use crate::{
    wrap_child, Codegen, CodegenState, ExprPrecedence, Expression, Identifier, Precedence, Slot,
};

/// `lambda a, b: body`
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Lambda)]
pub struct Closure {
    args: Vec<Identifier>,
    body: Box<Expression>,
}

impl Closure {
    pub fn new(args: impl IntoIterator<Item = Identifier>, body: impl Into<Expression>) -> Self {
        Self {
            args: args.into_iter().collect(),
            body: Box::new(wrap_child(body.into(), Slot::LambdaBody)),
        }
    }
}

impl<'a> Codegen<'a> for Closure {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("lambda");
        if !self.args.is_empty() {
            state.add_token(" ");
            state.add_comma_separated(&self.args);
        }
        state.add_token(": ");
        self.body.codegen(state);
    }
}

/// Collects parameters until [`ret`](Self::ret) supplies the body.
#[derive(Debug, Default)]
#[must_use]
pub struct ClosureBuilder {
    args: Vec<Identifier>,
}

impl ClosureBuilder {
    pub fn new(args: impl IntoIterator<Item = Identifier>) -> Self {
        Self {
            args: args.into_iter().collect(),
        }
    }

    pub fn arg(mut self, arg: Identifier) -> Self {
        self.args.push(arg);
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = Identifier>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn ret(self, body: impl Into<Expression>) -> Expression {
        Closure::new(self.args, body).into()
    }

    pub fn return_(self, body: impl Into<Expression>) -> Expression {
        self.ret(body)
    }
}

pub fn lambda_(
    args: impl IntoIterator<Item = Identifier>,
    body: impl Into<Expression>,
) -> Expression {
    Closure::new(args, body).into()
}

/// `lambda_` with the body given last.
pub fn closure(args: impl IntoIterator<Item = Identifier>) -> ClosureBuilder {
    ClosureBuilder::new(args)
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_lambda() -> Result<()> {
        let (x, y, z) = (id_("x")?, id_("y")?, id_("z")?);
        let code = lambda_([x.clone(), y.clone(), z.clone()], x.add(y).add(z)).into_code();
        assert_eq!(code, "lambda x, y, z: x + y + z");
        assert_eq!(lambda_([], NONE).into_code(), "lambda: None");
        Ok(())
    }

    #[test]
    fn test_body_wrapping() -> Result<()> {
        let nested = lambda_([id_("a")?], lambda_([], litint(1)));
        assert_eq!(nested.into_code(), "lambda a: lambda: 1");
        let named = lambda_([], litint(1).named_as(id_("a")?));
        assert_eq!(named.into_code(), "lambda: (a := 1)");
        let called = lambda_([], litint(1)).call([]);
        assert_eq!(called.into_code(), "(lambda: 1)()");
        Ok(())
    }

    #[test]
    fn test_closure_builder() -> Result<()> {
        let (x, y, z) = (id_("x")?, id_("y")?, id_("z")?);
        let built = closure([x.clone(), y.clone()])
            .arg(z.clone())
            .ret(x.clone().add(y.clone()).add(z.clone()));
        assert_eq!(built.into_code(), "lambda x, y, z: x + y + z");
        let eager = lambda_([x.clone(), y.clone(), z.clone()], x.add(y).add(z));
        assert_eq!(built, eager);
        assert_eq!(closure([]).return_(NONE).into_code(), "lambda: None");
        Ok(())
    }
}
