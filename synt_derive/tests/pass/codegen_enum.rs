// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree

use synt_derive::Codegen;

pub struct CodegenState<'a> {
    tokens: String,
    indent: &'a str,
}

pub trait Codegen<'a> {
    fn codegen(&self, state: &mut CodegenState<'a>);
}

pub struct Name(&'static str);

impl<'a> Codegen<'a> for Name {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.tokens.push_str(self.0);
    }
}

pub struct Pass;

impl<'a> Codegen<'a> for Pass {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.tokens.push_str(state.indent);
        state.tokens.push_str("pass");
    }
}

#[derive(Codegen)]
pub enum Node {
    Name(Name),
    Pass(Box<Pass>),
}

impl<'a, T: Codegen<'a>> Codegen<'a> for Box<T> {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        (**self).codegen(state)
    }
}

fn main() {
    let mut state = CodegenState {
        tokens: String::new(),
        indent: "  ",
    };
    Node::Name(Name("foo")).codegen(&mut state);
    Node::Pass(Box::new(Pass)).codegen(&mut state);
    assert_eq!(state.tokens, "foo  pass");
}
