//! Python reserved words.

/// Hard keywords of Python 3. Soft keywords (`match`, `case`, `type`, `_`)
/// are valid identifiers and are not listed.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Returns true if `name` is a Python keyword and cannot be used as an
/// identifier.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        for name in ["class", "from", "None", "True", "False", "lambda", "async"] {
            assert!(is_keyword(name), "{name} is a keyword");
        }
        for name in ["none", "Class", "match", "case", "type", "_", "self", "print"] {
            assert!(!is_keyword(name), "{name} is not a keyword");
        }
    }
}
