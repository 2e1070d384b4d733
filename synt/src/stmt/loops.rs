// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::statement_value;
use crate::error::missing_fields;
use crate::{Block, Codegen, CodegenState, Expression, Result, Statement};

fn codegen_orelse<'a>(orelse: &Option<Block>, state: &mut CodegenState<'a>) {
    if let Some(orelse) = orelse {
        state.add_newline();
        state.add_indent();
        state.add_token("else");
        orelse.codegen_suite(state);
    }
}

/// `[async ]for target in iter:`, with an optional `else` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
    target: Expression,
    iter: Expression,
    body: Block,
    orelse: Option<Block>,
    is_async: bool,
}

impl ForLoop {
    pub fn else_(mut self, body: impl IntoIterator<Item = Statement>) -> Self {
        self.orelse = Some(Block::new(body));
        self
    }
}

impl<'a> Codegen<'a> for ForLoop {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        if self.is_async {
            state.add_token("async ");
        }
        state.add_token("for ");
        self.target.codegen_target(state);
        state.add_token(" in ");
        self.iter.codegen(state);
        self.body.codegen_suite(state);
        codegen_orelse(&self.orelse, state);
    }
}

#[derive(Debug)]
#[must_use]
pub struct ForLoopBuilder {
    target: Expression,
    iter: Option<Expression>,
    is_async: bool,
}

impl ForLoopBuilder {
    pub fn new(target: impl Into<Expression>) -> Self {
        Self {
            target: target.into(),
            iter: None,
            is_async: false,
        }
    }

    pub fn in_(mut self, iter: impl Into<Expression>) -> Self {
        self.iter = Some(statement_value(iter));
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> Result<ForLoop> {
        let iter = self.iter.ok_or_else(|| missing_fields(vec!["iter"]))?;
        Ok(ForLoop {
            target: self.target,
            iter,
            body: Block::new(body),
            orelse: None,
            is_async: self.is_async,
        })
    }
}

/// `while test:`, with an optional `else` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileLoop {
    test: Expression,
    body: Block,
    orelse: Option<Block>,
}

impl WhileLoop {
    pub fn else_(mut self, body: impl IntoIterator<Item = Statement>) -> Self {
        self.orelse = Some(Block::new(body));
        self
    }
}

impl<'a> Codegen<'a> for WhileLoop {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("while ");
        self.test.codegen(state);
        self.body.codegen_suite(state);
        codegen_orelse(&self.orelse, state);
    }
}

#[derive(Debug)]
#[must_use]
pub struct WhileLoopBuilder {
    test: Expression,
}

impl WhileLoopBuilder {
    pub fn new(test: impl Into<Expression>) -> Self {
        Self { test: test.into() }
    }

    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> WhileLoop {
        WhileLoop {
            test: self.test,
            body: Block::new(body),
            orelse: None,
        }
    }
}

pub fn for_(target: impl Into<Expression>) -> ForLoopBuilder {
    ForLoopBuilder::new(target)
}

pub fn while_(test: impl Into<Expression>) -> WhileLoopBuilder {
    WhileLoopBuilder::new(test)
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_for() -> Result<()> {
        let i = || id_("i");
        let stmt = for_(i()?)
            .in_(id_("range")?.call([litint(5)]))
            .block(stmts![if_(i()?.gt(litint(2)))
                .block(stmts![BREAK])
                .else_(stmts![CONTINUE])])?
            .else_(stmts![PASS]);
        let expected = "\
for i in range(5):
    if i > 2:
        break
    else:
        continue
else:
    pass";
        assert_eq!(stmt.into_code(), expected);
        Ok(())
    }

    #[test]
    fn test_for_target_and_async() -> Result<()> {
        let target = tup([id_("k")?.into(), id_("v")?.into()]);
        let stmt = for_(target)
            .in_(id_("d")?.attr(id_("items")?).call([]))
            .async_()
            .block([])?;
        assert_eq!(
            stmt.into_code(),
            "async for k, v in d.items():\n    pass"
        );
        Ok(())
    }

    #[test]
    fn test_for_named_iter() -> Result<()> {
        let stmt = for_(id_("i")?)
            .in_(id_("y")?.named(id_("xs")?)?)
            .block(stmts![PASS])?;
        assert_eq!(stmt.into_code(), "for i in (y := xs):\n    pass");
        let stmt = while_(id_("y")?.named(id_("f")?.call([]))?).block(stmts![PASS]);
        assert_eq!(stmt.into_code(), "while y := f():\n    pass");
        Ok(())
    }

    #[test]
    fn test_for_requires_iter() -> Result<()> {
        assert_eq!(
            for_(id_("i")?).block(stmts![PASS]),
            Err(SyntError::MissingRequiredFields(vec!["iter"]))
        );
        Ok(())
    }

    #[test]
    fn test_while() -> Result<()> {
        let i = || id_("i");
        let stmt = while_(i()?.lt(litint(5)))
            .block(stmts![
                i()?.assign(i()?.add(litint(1))),
                if_(i()?.eq(litint(3))).block(stmts![BREAK])
            ])
            .else_(stmts![PASS]);
        let expected = "\
while i < 5:
    i = i + 1
    if i == 3:
        break
else:
    pass";
        assert_eq!(stmt.into_code(), expected);
        Ok(())
    }
}
