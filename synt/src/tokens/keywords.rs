// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Python 3.12 keyword tables.

/// Reserved words. None of these can be used as an identifier.
pub const HARD_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Words that are only keywords in some contexts, and stay valid identifiers.
pub const SOFT_KEYWORDS: [&str; 4] = ["_", "case", "match", "type"];

pub fn is_hard_keyword(s: &str) -> bool {
    HARD_KEYWORDS.contains(&s)
}

pub fn is_soft_keyword(s: &str) -> bool {
    SOFT_KEYWORDS.contains(&s)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keywords() {
        assert!(is_hard_keyword("False"));
        assert!(is_hard_keyword("yield"));
        assert!(!is_hard_keyword("type"));
        assert!(is_soft_keyword("type"));
        assert!(is_soft_keyword("_"));
        assert!(!is_soft_keyword("print"));
    }

    #[test]
    fn test_tables_sorted() {
        let mut sorted = HARD_KEYWORDS;
        sorted.sort_unstable();
        assert_eq!(sorted, HARD_KEYWORDS);
    }
}
