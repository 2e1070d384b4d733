// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{Block, Codegen, CodegenState, Expression, Statement};

/// `if ... elif ... else ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// The `if` pair followed by every `elif` pair. Never empty.
    tests: Vec<(Expression, Block)>,
    orelse: Option<Block>,
}

impl<'a> Codegen<'a> for Branch {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        for (i, (test, body)) in self.tests.iter().enumerate() {
            if i > 0 {
                state.add_newline();
            }
            state.add_indent();
            state.add_token(if i == 0 { "if " } else { "elif " });
            test.codegen(state);
            body.codegen_suite(state);
        }
        if let Some(orelse) = &self.orelse {
            state.add_newline();
            state.add_indent();
            state.add_token("else");
            orelse.codegen_suite(state);
        }
    }
}

/// A test waiting for its body.
#[derive(Debug)]
#[must_use]
pub struct BranchBuilder {
    tests: Vec<(Expression, Block)>,
    test: Expression,
}

impl BranchBuilder {
    pub fn new(test: impl Into<Expression>) -> Self {
        Self {
            tests: vec![],
            test: test.into(),
        }
    }

    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> BranchChain {
        let mut tests = self.tests;
        tests.push((self.test, Block::new(body)));
        BranchChain { tests }
    }
}

/// A branch with at least one body, which may still take `elif` and `else` clauses.
#[derive(Debug)]
#[must_use]
pub struct BranchChain {
    tests: Vec<(Expression, Block)>,
}

impl BranchChain {
    pub fn elif_(self, test: impl Into<Expression>) -> BranchBuilder {
        BranchBuilder {
            tests: self.tests,
            test: test.into(),
        }
    }

    /// Adds the fallback body and finishes the statement.
    pub fn else_(self, body: impl IntoIterator<Item = Statement>) -> Branch {
        Branch {
            tests: self.tests,
            orelse: Some(Block::new(body)),
        }
    }

    pub fn build(self) -> Branch {
        Branch {
            tests: self.tests,
            orelse: None,
        }
    }
}

impl From<BranchChain> for Statement {
    fn from(chain: BranchChain) -> Self {
        Self::Branch(chain.build())
    }
}

/// Starts an `if` statement. See [`ExpressionExt::if_`](crate::ExpressionExt::if_) for the
/// conditional expression.
pub fn if_(test: impl Into<Expression>) -> BranchBuilder {
    BranchBuilder::new(test)
}
