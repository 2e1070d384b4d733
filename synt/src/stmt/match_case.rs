// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{Block, Codegen, CodegenState, Expression, Statement};

/// `case pattern[ if guard]:` and its body. Any expression is accepted as a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCase {
    pattern: Expression,
    guard: Option<Expression>,
    body: Block,
}

impl<'a> Codegen<'a> for MatchCase {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("case ");
        self.pattern.codegen(state);
        if let Some(guard) = &self.guard {
            state.add_token(" if ");
            guard.codegen(state);
        }
        self.body.codegen_suite(state);
    }
}

/// `match subject:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    subject: Expression,
    cases: Vec<MatchCase>,
}

impl Match {
    pub fn new(subject: impl Into<Expression>) -> Self {
        Self {
            subject: subject.into(),
            cases: vec![],
        }
    }

    pub fn case_(self, pattern: impl Into<Expression>) -> MatchCaseBuilder {
        MatchCaseBuilder {
            parent: self,
            pattern: pattern.into(),
            guard: None,
        }
    }
}

impl<'a> Codegen<'a> for Match {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("match ");
        self.subject.codegen(state);
        state.add_token(":");
        state.indent(state.default_indent);
        if self.cases.is_empty() {
            state.add_newline();
            state.add_indent();
            state.add_token("pass");
        }
        for case in &self.cases {
            state.add_newline();
            case.codegen(state);
        }
        state.dedent();
    }
}

/// A case waiting for its body. [`block`](Self::block) hands the `match` back.
#[derive(Debug)]
#[must_use]
pub struct MatchCaseBuilder {
    parent: Match,
    pattern: Expression,
    guard: Option<Expression>,
}

impl MatchCaseBuilder {
    pub fn if_(mut self, guard: impl Into<Expression>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> Match {
        let mut parent = self.parent;
        parent.cases.push(MatchCase {
            pattern: self.pattern,
            guard: self.guard,
            body: Block::new(body),
        });
        parent
    }
}

pub fn match_(subject: impl Into<Expression>) -> Match {
    Match::new(subject)
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_match() -> Result<()> {
        let x = || id_("x");
        let stmt = match_(id_("a")?)
            .case_(id_("b")?)
            .block(stmts![PASS])
            .case_(id_("Point")?.call([x()?.into(), id_("y")?.into()]))
            .block(stmts![PASS])
            .case_(list_([x()?.into()]).as_(id_("y")?))
            .block(stmts![PASS])
            .case_(UNDERSCORE)
            .block(stmts![PASS]);
        let expected = "\
match a:
    case b:
        pass
    case Point(x, y):
        pass
    case [x] as y:
        pass
    case _:
        pass";
        assert_eq!(stmt.into_code(), expected);
        Ok(())
    }

    #[test]
    fn test_guard_and_empty() -> Result<()> {
        let stmt = match_(id_("p")?)
            .case_(id_("n")?)
            .if_(id_("n")?.gt(litint(0)))
            .block(stmts![return_(id_("n")?)]);
        assert_eq!(
            stmt.into_code(),
            "match p:\n    case n if n > 0:\n        return n"
        );
        assert_eq!(match_(id_("p")?).into_code(), "match p:\n    pass");
        Ok(())
    }
}
