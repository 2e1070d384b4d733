// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree

use synt_derive::Precedence;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExprPrecedence {
    Atom,
    Call,
    Lambda,
}

pub trait Precedence {
    fn precedence(&self) -> ExprPrecedence;
}

#[derive(Precedence)]
#[precedence(Atom)]
pub struct Name {
    #[allow(dead_code)]
    value: String,
}

#[derive(Precedence)]
#[precedence(Call)]
pub struct Call<T> {
    #[allow(dead_code)]
    target: T,
}

#[derive(Precedence)]
#[precedence(Lambda)]
pub struct Lambda;

#[derive(Precedence)]
pub enum Expr {
    Name(Name),
    Call(Call<Box<Expr>>),
    Lambda(Lambda),
}

fn main() {
    let name = Expr::Name(Name {
        value: "foo".into(),
    });
    assert_eq!(name.precedence(), ExprPrecedence::Atom);
    let call = Expr::Call(Call {
        target: Box::new(name),
    });
    assert_eq!(call.precedence(), ExprPrecedence::Call);
    assert_eq!(Expr::Lambda(Lambda).precedence(), ExprPrecedence::Lambda);
}
