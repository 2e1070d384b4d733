// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use regex::Regex;
use synt_derive::Precedence;

use super::keywords::is_hard_keyword;
use crate::{Codegen, CodegenState, ExprPrecedence, Precedence, Result, SyntError};

thread_local! {
    static ASCII_IDENTIFIER_RE: Regex = Regex::new(r"\A[a-zA-Z_][a-zA-Z0-9_]*\z").expect("regex");
    /// Used to verify identifiers when there's a non-ascii character in them.
    // This changes across unicode revisions, and skips the NFKC normalization Python applies
    // before checking.
    static UNICODE_IDENTIFIER_RE: Regex =
        Regex::new(r"\A[\p{XID_Start}_]\p{XID_Continue}*\z").expect("regex");
}

/// A valid Python identifier that is not a reserved word.
///
/// See <https://docs.python.org/3.12/reference/lexical_analysis.html#identifiers>.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Precedence)]
#[precedence(Atom)]
pub struct Identifier(String);

impl Identifier {
    /// Checks `raw` immediately; fails with [`SyntError::InvalidIdentifier`].
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if verify_identifier(&raw) && !is_hard_keyword(&raw) {
            Ok(Self(raw))
        } else {
            Err(SyntError::InvalidIdentifier(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shorthand for [`Identifier::new`]. `id` alone would read like a function call on an id.
pub fn id_(raw: impl Into<String>) -> Result<Identifier> {
    Identifier::new(raw)
}

fn verify_identifier(name: &str) -> bool {
    if name.is_ascii() {
        ASCII_IDENTIFIER_RE.with(|r| r.is_match(name))
    } else {
        UNICODE_IDENTIFIER_RE.with(|r| r.is_match(name))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Identifier {
    type Err = SyntError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<'a> Codegen<'a> for Identifier {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token(&self.0);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::IntoCode;

    #[test]
    fn test_valid() {
        for raw in ["foo", "_", "__init__", "x1", "Ünïcode", "\u{0100}\u{0101}", "match", "type"] {
            assert_eq!(id_(raw).map(|i| i.into_code()), Ok(raw.to_string()), "{raw}");
        }
    }

    #[test]
    fn test_invalid() {
        for raw in ["", "foo bar", "1x", "a-b", "a.b", "class", "None", "yield", "\u{2603}"] {
            assert_eq!(
                id_(raw),
                Err(SyntError::InvalidIdentifier(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_parse() {
        let id: Identifier = "snake_case".parse().expect("valid");
        assert_eq!(id.as_str(), "snake_case");
        assert_eq!(id.to_string(), "snake_case");
        assert!("not ok".parse::<Identifier>().is_err());
    }
}
