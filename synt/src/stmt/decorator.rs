// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{ClassDefBuilder, FunctionDefBuilder};
use crate::{Expression, Identifier};

/// Decorators collected ahead of the `def` or `class` they apply to.
///
/// Decorators render one per line, outermost first, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct DecoratorGroup {
    decorators: Vec<Expression>,
}

impl DecoratorGroup {
    pub fn new(decorator: impl Into<Expression>) -> Self {
        Self {
            decorators: vec![decorator.into()],
        }
    }

    pub fn dec(mut self, decorator: impl Into<Expression>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    pub fn def_(self, name: Identifier) -> FunctionDefBuilder {
        FunctionDefBuilder::with_decorators(self.decorators).def_(name)
    }

    pub fn async_def(self, name: Identifier) -> FunctionDefBuilder {
        FunctionDefBuilder::with_decorators(self.decorators).async_def(name)
    }

    pub fn class_(self, name: Identifier) -> ClassDefBuilder {
        ClassDefBuilder::with_decorators(self.decorators).class_(name)
    }
}

pub fn dec(decorator: impl Into<Expression>) -> DecoratorGroup {
    DecoratorGroup::new(decorator)
}
