// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::Precedence;

use crate::{wrap_child, Codegen, CodegenState, ExprPrecedence, Expression, Precedence, Slot};

/// `[a, b]`
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Atom)]
pub struct List {
    elements: Vec<Expression>,
}

impl List {
    pub fn new(elements: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }
}

impl<'a> Codegen<'a> for List {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("[");
        state.add_comma_separated(&self.elements);
        state.add_token("]");
    }
}

/// `{a, b}`. There is no literal for the empty set, so it renders as `set()`.
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Atom)]
pub struct Set {
    elements: Vec<Expression>,
}

impl Set {
    pub fn new(elements: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }
}

impl<'a> Codegen<'a> for Set {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        if self.elements.is_empty() {
            state.add_token("set()");
            return;
        }
        state.add_token("{");
        state.add_comma_separated(&self.elements);
        state.add_token("}");
    }
}

/// `{k: v, **rest}`. Entries are usually [`KVPair`]s or `**` unpackings.
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Atom)]
pub struct Dict {
    entries: Vec<Expression>,
}

impl Dict {
    pub fn new(entries: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl<'a> Codegen<'a> for Dict {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("{");
        state.add_comma_separated(&self.entries);
        state.add_token("}");
    }
}

/// `(a, b)`, `(a,)` or `()`.
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Atom)]
pub struct Tuple {
    elements: Vec<Expression>,
}

impl Tuple {
    pub fn new(elements: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn elements(&self) -> &[Expression] {
        &self.elements
    }

    /// Renders without the parentheses, as an assignment or `for` target: `a, b` or `a,`.
    pub fn codegen_implicit<'a>(&self, state: &mut CodegenState<'a>) {
        match self.elements.as_slice() {
            [] => state.add_token("()"),
            [only] => {
                only.codegen(state);
                state.add_token(",");
            }
            elements => state.add_comma_separated(elements),
        }
    }
}

impl<'a> Codegen<'a> for Tuple {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        if self.elements.is_empty() {
            state.add_token("()");
            return;
        }
        state.add_token("(");
        self.codegen_implicit(state);
        state.add_token(")");
    }
}

/// `key: value` inside a dict display or comprehension.
#[derive(Debug, Clone, PartialEq, Eq, Precedence)]
#[precedence(Atom)]
pub struct KVPair {
    key: Box<Expression>,
    value: Box<Expression>,
}

impl KVPair {
    pub fn new(key: impl Into<Expression>, value: impl Into<Expression>) -> Self {
        Self {
            key: Box::new(wrap_child(key.into(), Slot::PairPart)),
            value: Box::new(wrap_child(value.into(), Slot::PairPart)),
        }
    }
}

impl<'a> Codegen<'a> for KVPair {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        self.key.codegen(state);
        state.add_token(": ");
        self.value.codegen(state);
    }
}

pub fn list_(elements: impl IntoIterator<Item = Expression>) -> Expression {
    List::new(elements).into()
}

pub fn set_(elements: impl IntoIterator<Item = Expression>) -> Expression {
    Set::new(elements).into()
}

/// Entries are `key: value` pairs from [`kv`] or `**mapping` unpackings.
pub fn dict_(entries: impl IntoIterator<Item = Expression>) -> Expression {
    Dict::new(entries).into()
}

pub fn tup(elements: impl IntoIterator<Item = Expression>) -> Expression {
    Tuple::new(elements).into()
}

pub fn kv(key: impl Into<Expression>, value: impl Into<Expression>) -> Expression {
    KVPair::new(key, value).into()
}

/// Alias of [`kv`].
pub fn pair(key: impl Into<Expression>, value: impl Into<Expression>) -> Expression {
    kv(key, value)
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_displays() -> Result<()> {
        assert_eq!(list_([litint(1), litint(2)]).into_code(), "[1, 2]");
        assert_eq!(list_([]).into_code(), "[]");
        assert_eq!(set_([id_("a")?.into(), litint(1)]).into_code(), "{a, 1}");
        assert_eq!(set_([]).into_code(), "set()");
        assert_eq!(dict_([kv(litstr("a"), id_("b")?)]).into_code(), "{'a': b}");
        assert_eq!(dict_([]).into_code(), "{}");
        assert_eq!(
            dict_([kv(litint(1), litint(2)), id_("rest")?.unpack_kv()]).into_code(),
            "{1: 2, ** rest}"
        );
        Ok(())
    }

    #[test]
    fn test_tuples() {
        assert_eq!(tup([litstr("abc")]).into_code(), "('abc',)");
        assert_eq!(tup([litint(1), litint(2)]).into_code(), "(1, 2)");
        assert_eq!(tup([]).into_code(), "()");
    }

    #[test]
    fn test_pair_parts_are_wrapped() -> Result<()> {
        let pair = kv(id_("a")?.named_as(id_("b")?), lambda_([], litint(1)));
        assert_eq!(pair.into_code(), "(b := a): lambda: 1");
        Ok(())
    }
}
