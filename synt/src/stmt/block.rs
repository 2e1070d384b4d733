// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{Codegen, CodegenState, Statement};

/// An ordered list of statements rendered at the same depth, one per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    body: Vec<Statement>,
}

impl Block {
    pub fn new(body: impl IntoIterator<Item = Statement>) -> Self {
        Self {
            body: body.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.body
    }

    /// True when rendering would emit no statement at all, looking through nested blocks.
    pub fn is_blank(&self) -> bool {
        self.body.iter().all(is_blank)
    }

    /// Renders `:` and then this block as the body of a compound statement, one level deeper.
    ///
    /// A blank body comes out as `pass`.
    pub(crate) fn codegen_suite<'a>(&self, state: &mut CodegenState<'a>) {
        state.add_token(":");
        state.add_newline();
        state.indent(state.default_indent);
        if self.is_blank() {
            state.add_indent();
            state.add_token("pass");
        } else {
            self.codegen(state);
        }
        state.dedent();
    }
}

impl<'a> Codegen<'a> for Block {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        for (i, stmt) in self.body.iter().filter(|s| !is_blank(s)).enumerate() {
            if i > 0 {
                state.add_newline();
            }
            stmt.codegen(state);
        }
    }
}

fn is_blank(stmt: &Statement) -> bool {
    matches!(stmt, Statement::Block(block) if block.is_blank())
}

impl FromIterator<Statement> for Block {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self::new(iter)
    }
}
