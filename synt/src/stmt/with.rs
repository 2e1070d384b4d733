// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::statement_value;
use crate::{Block, Codegen, CodegenState, Expression, Identifier, Result, Statement, SyntError};

/// `context[ as target]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithItem {
    context: Expression,
    asname: Option<Expression>,
}

impl WithItem {
    pub fn new(context: impl Into<Expression>) -> Self {
        Self {
            context: statement_value(context),
            asname: None,
        }
    }

    pub fn as_(mut self, target: impl Into<Expression>) -> Self {
        self.asname = Some(target.into());
        self
    }
}

impl<'a> Codegen<'a> for WithItem {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.context.codegen(state);
        if let Some(asname) = &self.asname {
            state.add_token(" as ");
            asname.codegen(state);
        }
    }
}

impl From<Expression> for WithItem {
    fn from(context: Expression) -> Self {
        Self::new(context)
    }
}

impl From<Identifier> for WithItem {
    fn from(context: Identifier) -> Self {
        Self::new(context)
    }
}

impl<C, T> From<(C, T)> for WithItem
where
    C: Into<Expression>,
    T: Into<Expression>,
{
    fn from((context, target): (C, T)) -> Self {
        Self::new(context).as_(target)
    }
}

/// `[async ]with item, item as target:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct With {
    items: Vec<WithItem>,
    body: Block,
    is_async: bool,
}

impl<'a> Codegen<'a> for With {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        if self.is_async {
            state.add_token("async ");
        }
        state.add_token("with ");
        state.add_comma_separated(&self.items);
        self.body.codegen_suite(state);
    }
}

#[derive(Debug)]
#[must_use]
pub struct WithBuilder {
    items: Vec<WithItem>,
    is_async: bool,
}

impl WithBuilder {
    /// Fails with [`SyntError::EmptyCollection`] when `items` is empty.
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WithItem>,
    {
        let items: Vec<WithItem> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(SyntError::EmptyCollection("with item"));
        }
        Ok(Self {
            items,
            is_async: false,
        })
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> With {
        With {
            items: self.items,
            body: Block::new(body),
            is_async: self.is_async,
        }
    }
}

pub fn with_<I>(items: I) -> Result<WithBuilder>
where
    I: IntoIterator,
    I::Item: Into<WithItem>,
{
    WithBuilder::new(items)
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_with() -> Result<()> {
        let stmt = with_([
            WithItem::new(id_("a")?),
            WithItem::new(id_("b")?).as_(id_("b2")?),
            (id_("c")?, id_("c2")?).into(),
        ])?
        .block([]);
        assert_eq!(stmt.into_code(), "with a, b as b2, c as c2:\n    pass");
        Ok(())
    }

    #[test]
    fn test_async_with() -> Result<()> {
        let open = id_("open")?.call([litstr("f.txt")]);
        let stmt = with_([(open, id_("f")?)])?
            .async_()
            .block(stmts![id_("f")?.attr(id_("read")?).call([]).await_()]);
        assert_eq!(
            stmt.into_code(),
            "async with open('f.txt') as f:\n    await f.read()"
        );
        Ok(())
    }

    #[test]
    fn test_with_named_context() -> Result<()> {
        let cm = id_("cm")?.named(id_("open")?.call([]))?;
        let stmt = with_([(cm, id_("f")?)])?.block(stmts![PASS]);
        assert_eq!(stmt.into_code(), "with (cm := open()) as f:\n    pass");
        Ok(())
    }

    #[test]
    fn test_with_requires_items() {
        assert_eq!(
            with_(Vec::<WithItem>::new()).map(|b| b.block([])),
            Err(SyntError::EmptyCollection("with item"))
        );
    }
}
