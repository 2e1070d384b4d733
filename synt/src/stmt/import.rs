// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use synt_derive::Codegen;

use crate::expr::{Alias, ModPath};
use crate::{Codegen, CodegenState, Identifier, Result, SyntError};

/// The `*` of `from m import *`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportStar;

impl<'a> Codegen<'a> for ImportStar {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_token("*");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Codegen)]
pub enum ImportName {
    Star(ImportStar),
    Path(ModPath),
    Alias(Alias),
}

impl From<ImportStar> for ImportName {
    fn from(s: ImportStar) -> Self {
        Self::Star(s)
    }
}

impl From<ModPath> for ImportName {
    fn from(p: ModPath) -> Self {
        Self::Path(p)
    }
}

impl From<Identifier> for ImportName {
    fn from(id: Identifier) -> Self {
        Self::Path(id.into())
    }
}

impl From<Alias> for ImportName {
    fn from(a: Alias) -> Self {
        Self::Alias(a)
    }
}

fn collect_names<I>(names: I) -> Result<Vec<ImportName>>
where
    I: IntoIterator,
    I::Item: Into<ImportName>,
{
    let names: Vec<ImportName> = names.into_iter().map(Into::into).collect();
    if names.is_empty() {
        return Err(SyntError::EmptyCollection("import name"));
    }
    Ok(names)
}

/// `import a, b.c, d as e`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    names: Vec<ImportName>,
}

impl Import {
    pub fn new<I>(names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<ImportName>,
    {
        Ok(Self {
            names: collect_names(names)?,
        })
    }
}

impl<'a> Codegen<'a> for Import {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("import ");
        state.add_comma_separated(&self.names);
    }
}

/// `from module import a, b as c`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFrom {
    module: ModPath,
    names: Vec<ImportName>,
}

impl<'a> Codegen<'a> for ImportFrom {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        state.add_indent();
        state.add_token("from ");
        self.module.codegen(state);
        state.add_token(" import ");
        state.add_comma_separated(&self.names);
    }
}

/// Holds the module of a `from` import until its names are known.
#[derive(Debug)]
#[must_use]
pub struct ImportFromBuilder {
    module: ModPath,
}

impl ImportFromBuilder {
    pub fn new(module: impl Into<ModPath>) -> Self {
        Self {
            module: module.into(),
        }
    }

    pub fn import_<I>(self, names: I) -> Result<ImportFrom>
    where
        I: IntoIterator,
        I::Item: Into<ImportName>,
    {
        Ok(ImportFrom {
            module: self.module,
            names: collect_names(names)?,
        })
    }
}

pub fn import_<I>(names: I) -> Result<Import>
where
    I: IntoIterator,
    I::Item: Into<ImportName>,
{
    Import::new(names)
}

pub fn from_(module: impl Into<ModPath>) -> ImportFromBuilder {
    ImportFromBuilder::new(module)
}
