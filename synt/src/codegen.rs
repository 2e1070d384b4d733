// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

/// Knobs for rendering a tree into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// One level of indentation, e.g. four spaces or a tab.
    pub indent: String,
    /// Number of indentation levels the outermost statements start at.
    pub initial_depth: usize,
    /// Line separator between statements.
    pub newline: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            initial_depth: 0,
            newline: LINE_ENDING.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct CodegenState<'a> {
    pub tokens: String,
    pub indent_tokens: Vec<&'a str>,
    pub default_newline: &'a str,
    pub default_indent: &'a str,
}

impl<'a> CodegenState<'a> {
    /// A state whose current indentation is `depth` copies of `indent`.
    pub fn new(indent: &'a str, depth: usize) -> Self {
        Self {
            tokens: Default::default(),
            indent_tokens: vec![indent; depth],
            default_newline: LINE_ENDING,
            default_indent: indent,
        }
    }

    pub fn with_config(config: &'a CodegenConfig) -> Self {
        Self {
            default_newline: &config.newline,
            ..Self::new(&config.indent, config.initial_depth)
        }
    }

    pub fn indent(&mut self, v: &'a str) {
        self.indent_tokens.push(v);
    }
    pub fn dedent(&mut self) {
        self.indent_tokens.pop();
    }
    pub fn add_indent(&mut self) {
        self.tokens.extend(self.indent_tokens.iter().cloned());
    }
    pub fn add_token(&mut self, tok: &str) {
        self.tokens.push_str(tok);
    }
    pub fn add_newline(&mut self) {
        self.tokens.push_str(self.default_newline);
    }

    /// Emits `items` separated by `", "`.
    pub fn add_comma_separated<'n, T, I>(&mut self, items: I)
    where
        T: Codegen<'a> + 'n,
        I: IntoIterator<Item = &'n T>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.add_token(", ");
            }
            item.codegen(self);
        }
    }
}

impl<'a> fmt::Display for CodegenState<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens)
    }
}

pub trait Codegen<'a> {
    fn codegen(&self, state: &mut CodegenState<'a>);
}

impl<'a, T> Codegen<'a> for Option<T>
where
    T: Codegen<'a>,
{
    fn codegen(&self, state: &mut CodegenState<'a>) {
        if let Some(s) = &self {
            s.codegen(state);
        }
    }
}

impl<'a, T> Codegen<'a> for Box<T>
where
    T: Codegen<'a> + ?Sized,
{
    fn codegen(&self, state: &mut CodegenState<'a>) {
        (**self).codegen(state)
    }
}

/// Renders a node on its own, at depth zero with the default indentation.
pub trait IntoCode {
    fn into_code(&self) -> String;
}

impl<T> IntoCode for T
where
    T: for<'a> Codegen<'a>,
{
    fn into_code(&self) -> String {
        let mut state = CodegenState::default();
        self.codegen(&mut state);
        state.to_string()
    }
}

// Output has to be byte-identical across platforms, so this is not cfg(windows) dependent.
const LINE_ENDING: &str = "\n";
const DEFAULT_INDENT: &str = "    ";

impl<'a> Default for CodegenState<'a> {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT, 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Word(&'static str);

    impl<'a> Codegen<'a> for Word {
        fn codegen(&self, state: &mut CodegenState<'a>) {
            state.add_indent();
            state.add_token(self.0);
        }
    }

    #[test]
    fn test_indentation_stack() {
        let mut state = CodegenState::new("\t", 1);
        Word("a").codegen(&mut state);
        state.add_newline();
        state.indent("  ");
        Word("b").codegen(&mut state);
        state.dedent();
        state.add_newline();
        Word("c").codegen(&mut state);
        assert_eq!(state.to_string(), "\ta\n\t  b\n\tc");
    }

    #[test]
    fn test_with_config() {
        let config = CodegenConfig {
            indent: "  ".into(),
            initial_depth: 2,
            newline: "\r\n".into(),
        };
        let mut state = CodegenState::with_config(&config);
        Word("x").codegen(&mut state);
        state.add_newline();
        assert_eq!(state.to_string(), "    x\r\n");
    }

    #[test]
    fn test_comma_separated() {
        let mut state = CodegenState::default();
        state.add_comma_separated(&[Word("a"), Word("b"), Word("c")]);
        assert_eq!(state.to_string(), "a, b, c");
        assert_eq!(Some(Word("z")).into_code(), "z");
        assert_eq!(None::<Word>.into_code(), "");
    }
}
