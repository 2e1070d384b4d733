// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use itertools::Itertools;
use synt_derive::Precedence;

use super::ExprKind;
use crate::error::require_fields;
use crate::{
    wrap_child, Codegen, CodegenState, ExprPrecedence, Expression, Identifier, Precedence,
    Result, Slot, SyntError,
};

/// One `[async ]for targets in iterator [if filter]*` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComprehensionNode {
    targets: Vec<Identifier>,
    iterator: Expression,
    filters: Vec<Expression>,
    is_async: bool,
}

impl ComprehensionNode {
    pub fn new(
        targets: Vec<Identifier>,
        iterator: impl Into<Expression>,
        filters: impl IntoIterator<Item = Expression>,
        is_async: bool,
    ) -> Self {
        Self {
            targets,
            iterator: wrap_child(iterator.into(), Slot::ComprehensionIterator),
            filters: filters
                .into_iter()
                .map(|f| wrap_child(f, Slot::ComprehensionFilter))
                .collect(),
            is_async,
        }
    }
}

impl<'a> Codegen<'a> for ComprehensionNode {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        if self.is_async {
            state.add_token("async ");
        }
        state.add_token("for ");
        state.add_comma_separated(&self.targets);
        state.add_token(" in ");
        self.iterator.codegen(state);
        for filter in &self.filters {
            state.add_token(" if ");
            filter.codegen(state);
        }
    }
}

/// The part of a comprehension between its brackets: `element for x in xs if x`.
///
/// Not an expression by itself; wrap it in a [`ListComp`], [`SetComp`], [`DictComp`] or
/// [`Generator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comprehension {
    element: Box<Expression>,
    nodes: Vec<ComprehensionNode>,
}

impl Comprehension {
    /// Fails with [`SyntError::EmptyCollection`] when `nodes` is empty.
    pub fn new(
        element: impl Into<Expression>,
        nodes: impl IntoIterator<Item = ComprehensionNode>,
    ) -> Result<Self> {
        let nodes = nodes.into_iter().collect_vec();
        if nodes.is_empty() {
            return Err(SyntError::EmptyCollection("comprehension clause"));
        }
        Ok(Self {
            element: Box::new(wrap_child(element.into(), Slot::ComprehensionElement)),
            nodes,
        })
    }

    pub fn element(&self) -> &Expression {
        &self.element
    }

    fn check_element(self, want_pair: bool, expected: ExprKind) -> Result<Self> {
        let actual = self.element.kind();
        let is_pair = actual == ExprKind::KeyValuePair;
        if is_pair == want_pair {
            Ok(self)
        } else {
            tracing::debug!(%expected, %actual, "comprehension element has the wrong kind");
            Err(SyntError::ResultKindMismatch { expected, actual })
        }
    }
}

impl<'a> Codegen<'a> for Comprehension {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.element.codegen(state);
        for node in &self.nodes {
            state.add_token(" ");
            node.codegen(state);
        }
    }
}

#[derive(Debug)]
struct NodeBuilder {
    targets: Vec<Identifier>,
    iterator: Option<Expression>,
    filters: Vec<Expression>,
    is_async: bool,
}

/// Builds a [`Comprehension`] clause by clause, usually started from
/// [`ExpressionExt::for_`](crate::ExpressionExt::for_).
///
/// Methods other than [`for_`](Self::for_) and [`async_for`](Self::async_for) apply to the
/// most recently started clause.
#[derive(Debug)]
#[must_use]
pub struct ComprehensionBuilder {
    element: Expression,
    nodes: Vec<NodeBuilder>,
}

impl ComprehensionBuilder {
    pub fn new(
        element: impl Into<Expression>,
        targets: impl IntoIterator<Item = Identifier>,
        is_async: bool,
    ) -> Self {
        Self {
            element: element.into(),
            nodes: vec![NodeBuilder::new(targets, is_async)],
        }
    }

    fn current(&mut self) -> &mut NodeBuilder {
        // `nodes` starts with one entry and only ever grows.
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }

    /// Starts another clause.
    pub fn for_(mut self, targets: impl IntoIterator<Item = Identifier>) -> Self {
        self.nodes.push(NodeBuilder::new(targets, false));
        self
    }

    pub fn async_for(mut self, targets: impl IntoIterator<Item = Identifier>) -> Self {
        self.nodes.push(NodeBuilder::new(targets, true));
        self
    }

    /// Replaces the targets of the current clause.
    pub fn target(mut self, targets: impl IntoIterator<Item = Identifier>) -> Self {
        self.current().targets = targets.into_iter().collect();
        self
    }

    pub fn in_(mut self, iterator: impl Into<Expression>) -> Self {
        self.current().iterator = Some(iterator.into());
        self
    }

    pub fn if_(mut self, filter: impl Into<Expression>) -> Self {
        self.current().filters.push(filter.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.current().is_async = true;
        self
    }

    pub fn sync(mut self) -> Self {
        self.current().is_async = false;
        self
    }

    /// Fails with every field missing from any clause, reported once each.
    pub fn build(self) -> Result<Comprehension> {
        let missing = self
            .nodes
            .iter()
            .flat_map(NodeBuilder::missing)
            .unique()
            .collect_vec();
        require_fields(missing)?;
        let nodes = self.nodes.into_iter().filter_map(NodeBuilder::finish);
        Comprehension::new(self.element, nodes)
    }
}

impl NodeBuilder {
    fn new(targets: impl IntoIterator<Item = Identifier>, is_async: bool) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            iterator: None,
            filters: vec![],
            is_async,
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if self.iterator.is_none() {
            missing.push("iterator");
        }
        if self.targets.is_empty() {
            missing.push("target");
        }
        missing
    }

    fn finish(self) -> Option<ComprehensionNode> {
        let iterator = self.iterator?;
        Some(ComprehensionNode::new(
            self.targets,
            iterator,
            self.filters,
            self.is_async,
        ))
    }
}

/// Anything that can become a finished [`Comprehension`].
pub trait IntoComprehension {
    fn into_comprehension(self) -> Result<Comprehension>;
}

impl IntoComprehension for Comprehension {
    fn into_comprehension(self) -> Result<Comprehension> {
        Ok(self)
    }
}

impl IntoComprehension for ComprehensionBuilder {
    fn into_comprehension(self) -> Result<Comprehension> {
        self.build()
    }
}

macro_rules! comprehension_display {
    ($(#[$attr:meta])* $name:ident, $open:literal, $close:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Precedence)]
        #[precedence(Atom)]
        pub struct $name(Comprehension);

        impl<'a> Codegen<'a> for $name {
            fn codegen(&self, state: &mut CodegenState<'a>) {
                state.add_token($open);
                self.0.codegen(state);
                state.add_token($close);
            }
        }
    };
}

comprehension_display!(
    /// `[x for x in xs]`
    ListComp, "[", "]"
);
comprehension_display!(
    /// `{x for x in xs}`
    SetComp, "{", "}"
);
comprehension_display!(
    /// `{k: v for k, v in xs}`
    DictComp, "{", "}"
);
comprehension_display!(
    /// `(x for x in xs)`
    Generator, "(", ")"
);

impl ListComp {
    /// The element must not be a `key: value` pair.
    pub fn new(comp: impl IntoComprehension) -> Result<Self> {
        Ok(Self(comp.into_comprehension()?.check_element(false, ExprKind::List)?))
    }
}

impl SetComp {
    /// The element must not be a `key: value` pair.
    pub fn new(comp: impl IntoComprehension) -> Result<Self> {
        Ok(Self(comp.into_comprehension()?.check_element(false, ExprKind::Set)?))
    }
}

impl DictComp {
    /// The element must be a `key: value` pair.
    pub fn new(comp: impl IntoComprehension) -> Result<Self> {
        Ok(Self(
            comp.into_comprehension()?
                .check_element(true, ExprKind::KeyValuePair)?,
        ))
    }
}

impl Generator {
    pub fn new(comp: impl IntoComprehension) -> Result<Self> {
        Ok(Self(comp.into_comprehension()?))
    }
}

pub fn list_comp(comp: impl IntoComprehension) -> Result<Expression> {
    ListComp::new(comp).map(Into::into)
}

pub fn set_comp(comp: impl IntoComprehension) -> Result<Expression> {
    SetComp::new(comp).map(Into::into)
}

pub fn dict_comp(comp: impl IntoComprehension) -> Result<Expression> {
    DictComp::new(comp).map(Into::into)
}

pub fn gen(comp: impl IntoComprehension) -> Result<Expression> {
    Generator::new(comp).map(Into::into)
}
