// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use itertools::Itertools;
use thiserror::Error;

use crate::expr::ExprKind;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SyntError {
    #[error("{0:?} is not a valid identifier")]
    InvalidIdentifier(String),
    #[error("expected an expression of kind `{expected}`, found `{actual}`")]
    ResultKindMismatch { expected: ExprKind, actual: ExprKind },
    #[error("missing required field(s): {}", quoted(.0))]
    MissingRequiredFields(Vec<&'static str>),
    #[error("unrecognized operator: {0:?}")]
    UnrecognizedOperator(String),
    #[error("at least one {0} is required")]
    EmptyCollection(&'static str),
    #[error("expression of kind `{0}` is not an identifier")]
    NotAnIdentifier(ExprKind),
    #[error("cannot set a cause on a `raise` without an exception")]
    RaiseCauseWithoutException,
    #[error("a `try` needs an `except` handler before its `else` body")]
    TryElseWithoutHandler,
}

pub type Result<T, E = SyntError> = std::result::Result<T, E>;

fn quoted(fields: &[&'static str]) -> String {
    fields.iter().map(|f| format!("`{}`", f)).join(", ")
}

/// Turns a list of missing builder fields into an error, or `Ok` when nothing is missing.
pub(crate) fn require_fields(missing: Vec<&'static str>) -> Result<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing_fields(missing))
    }
}

pub(crate) fn missing_fields(missing: Vec<&'static str>) -> SyntError {
    tracing::debug!(?missing, "builder finalized with missing fields");
    SyntError::MissingRequiredFields(missing)
}
