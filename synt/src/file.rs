// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use tracing::debug;

use crate::{Block, Codegen, CodegenConfig, CodegenState, Statement};

/// A whole source file: top-level statements rendered one per line, with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    pub body: Block,
}

impl File {
    pub fn new(body: impl IntoIterator<Item = Statement>) -> Self {
        Self {
            body: Block::new(body),
        }
    }

    /// Renders with `indent_atom` as the indentation unit, starting `depth` levels deep.
    pub fn into_str(&self, indent_atom: &str, depth: usize) -> String {
        self.render(&CodegenConfig {
            indent: indent_atom.to_string(),
            initial_depth: depth,
            ..Default::default()
        })
    }

    pub fn render(&self, config: &CodegenConfig) -> String {
        let mut state = CodegenState::with_config(config);
        self.codegen(&mut state);
        debug!(
            statements = self.body.len(),
            bytes = state.tokens.len(),
            "rendered file"
        );
        state.tokens
    }
}

impl<'a> Codegen<'a> for File {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.body.codegen(state);
    }
}

impl FromIterator<Statement> for File {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self::new(iter)
    }
}
