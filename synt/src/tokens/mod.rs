// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod ident;
pub use ident::{id_, Identifier};

pub mod keywords;

mod lit;
pub use lit::{
    litbool, litfloat, litint, litstr, Literal, ELLIPSIS, FALSE, NONE, TRUE, UNDERSCORE,
};
