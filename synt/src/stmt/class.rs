// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::function::codegen_decorators;
use crate::error::missing_fields;
use crate::expr::{codegen_arguments, Keyword};
use crate::ty::codegen_type_params;
use crate::{Block, Codegen, CodegenState, Expression, Identifier, Result, Statement, TypeParam};

/// `class Name[T](bases, key=value):` with its decorators and body.
///
/// The argument list is left out entirely when there are no bases or keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    decorators: Vec<Expression>,
    name: Identifier,
    type_params: Vec<TypeParam>,
    bases: Vec<Expression>,
    keywords: Vec<Keyword>,
    body: Block,
}

impl ClassDef {
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn body(&self) -> &Block {
        &self.body
    }
}

impl<'a> Codegen<'a> for ClassDef {
    fn codegen(&self, state: &mut CodegenState<'a>) {
        codegen_decorators(&self.decorators, state);
        state.add_indent();
        state.add_token("class ");
        self.name.codegen(state);
        codegen_type_params(&self.type_params, state);
        if !self.bases.is_empty() || !self.keywords.is_empty() {
            state.add_token("(");
            codegen_arguments(&self.bases, &self.keywords, state);
            state.add_token(")");
        }
        self.body.codegen_suite(state);
    }
}

#[derive(Debug, Default)]
#[must_use]
pub struct ClassDefBuilder {
    decorators: Vec<Expression>,
    name: Option<Identifier>,
    type_params: Vec<TypeParam>,
    bases: Vec<Expression>,
    keywords: Vec<Keyword>,
}

impl ClassDefBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_decorators(decorators: Vec<Expression>) -> Self {
        Self {
            decorators,
            ..Default::default()
        }
    }

    pub fn decorator(mut self, decorator: impl Into<Expression>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    pub fn dec(self, decorator: impl Into<Expression>) -> Self {
        self.decorator(decorator)
    }

    pub fn class_(mut self, name: Identifier) -> Self {
        self.name = Some(name);
        self
    }

    pub fn type_param(mut self, param: impl Into<TypeParam>) -> Self {
        self.type_params.push(param.into());
        self
    }

    pub fn ty<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TypeParam>,
    {
        self.type_params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Adds one base class.
    pub fn arg(mut self, base: impl Into<Expression>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn bases(mut self, bases: impl IntoIterator<Item = Expression>) -> Self {
        self.bases.extend(bases);
        self
    }

    /// Adds a class keyword such as `metaclass=ABCMeta`.
    pub fn keyword(mut self, name: Identifier, value: impl Into<Expression>) -> Self {
        self.keywords.push(Keyword::new(name, value));
        self
    }

    pub fn kwargs<I>(mut self, keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Keyword>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn block(self, body: impl IntoIterator<Item = Statement>) -> Result<ClassDef> {
        let name = self.name.ok_or_else(|| missing_fields(vec!["name"]))?;
        Ok(ClassDef {
            decorators: self.decorators,
            name,
            type_params: self.type_params,
            bases: self.bases,
            keywords: self.keywords,
            body: Block::new(body),
        })
    }
}

pub fn class_(name: Identifier) -> ClassDefBuilder {
    ClassDefBuilder::new().class_(name)
}

#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::stmt::ClassDefBuilder;

    #[test]
    fn test_class_def() -> Result<()> {
        let a = || id_("a");
        let method = dec(id_("abstractmethod")?)
            .def_(id_("baz")?)
            .arg(id_("self")?)
            .arg(arg(a()?).ty(id_("T")?))
            .returns(id_("str")?)
            .block(stmts![return_(fstring([
                FormatPart::from("Bar("),
                fnode(a()?).into(),
                ").baz".into(),
            ]))])?;
        let cls = dec(id_("foo")?)
            .class_(id_("Bar")?)
            .type_param(id_("T")?)
            .keyword(id_("metaclass")?, id_("ABCMeta")?)
            .block(stmts![method])?;
        let expected = "\
@foo
class Bar[T](metaclass=ABCMeta):
    @abstractmethod
    def baz(self, a: T) -> str:
        return f\"Bar({a}).baz\"";
        assert_eq!(cls.into_code(), expected);
        Ok(())
    }

    #[test]
    fn test_bases() -> Result<()> {
        let cls = class_(id_("C")?)
            .bases([id_("A")?.into(), id_("B")?.attr(id_("Mixin")?)])
            .kwargs([(id_("total")?, FALSE)])
            .block([])?;
        assert_eq!(cls.into_code(), "class C(A, B.Mixin, total=False):\n    pass");
        assert_eq!(
            class_(id_("D")?).block(stmts![PASS])?.into_code(),
            "class D:\n    pass"
        );
        Ok(())
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            ClassDefBuilder::new().block([]),
            Err(SyntError::MissingRequiredFields(vec!["name"]))
        );
    }
}
