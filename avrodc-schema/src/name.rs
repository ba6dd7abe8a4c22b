//! Avro naming rules and identifier casing.

use std::fmt;

/// Fully-qualified name of a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    name: String,
    namespace: Option<String>,
    fullname: String,
}

impl Name {
    /// Creates a name from a (possibly dotted) name and an optional namespace.
    ///
    /// A dotted name is already fully qualified and ignores `namespace`.
    /// An empty namespace is treated as absent.
    #[must_use]
    pub fn new(name: &str, namespace: Option<&str>) -> Self {
        if let Some((ns, short)) = name.rsplit_once('.') {
            return Self {
                name: short.to_string(),
                namespace: (!ns.is_empty()).then(|| ns.to_string()),
                fullname: name.to_string(),
            };
        }

        let namespace = namespace.filter(|ns| !ns.is_empty());
        let fullname = match namespace {
            Some(ns) => format!("{ns}.{name}"),
            None => name.to_string(),
        };
        Self {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            fullname,
        }
    }

    /// Returns the short name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the fully-qualified name.
    #[must_use]
    pub fn fullname(&self) -> &str {
        &self.fullname
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fullname)
    }
}

/// Returns the fullnames a type reference may denote, most specific first.
///
/// A bare name is tried in the enclosing namespace before being taken as-is.
#[must_use]
pub fn reference_candidates(reference: &str, enclosing_namespace: Option<&str>) -> Vec<String> {
    match enclosing_namespace {
        Some(ns) if !ns.is_empty() && !reference.contains('.') => {
            vec![format!("{ns}.{reference}"), reference.to_string()]
        }
        _ => vec![reference.to_string()],
    }
}

/// Converts an underscore-delimited name to CapitalCase.
///
/// Each segment is title-cased (a letter following a non-letter is
/// upper-cased, every other letter lower-cased) and the segments are joined
/// without separators.
#[must_use]
pub fn capital_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for segment in s.split('_') {
        let mut previous_cased = false;
        for c in segment.chars() {
            let cased = c.is_lowercase() || c.is_uppercase();
            if cased && !previous_cased {
                result.extend(c.to_uppercase());
            } else if cased {
                result.extend(c.to_lowercase());
            } else {
                result.push(c);
            }
            previous_cased = cased;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_name_with_namespace() {
        let name = Name::new("Person", Some("com.example"));
        assert_eq!(name.name(), "Person");
        assert_eq!(name.namespace(), Some("com.example"));
        assert_eq!(name.fullname(), "com.example.Person");
    }

    #[test]
    fn test_name_without_namespace() {
        let name = Name::new("Person", None);
        assert_eq!(name.namespace(), None);
        assert_eq!(name.fullname(), "Person");

        let empty = Name::new("Person", Some(""));
        assert_eq!(empty.namespace(), None);
        assert_eq!(empty.fullname(), "Person");
    }

    #[test]
    fn test_dotted_name_overrides_namespace() {
        let name = Name::new("org.other.Address", Some("com.example"));
        assert_eq!(name.name(), "Address");
        assert_eq!(name.namespace(), Some("org.other"));
        assert_eq!(name.fullname(), "org.other.Address");
    }

    #[test]
    fn test_reference_candidates() {
        assert_eq!(
            reference_candidates("Address", Some("com.example")),
            ["com.example.Address", "Address"]
        );
        assert_eq!(
            reference_candidates("org.other.Address", Some("com.example")),
            ["org.other.Address"]
        );
        assert_eq!(reference_candidates("Address", None), ["Address"]);
    }

    #[test]
    fn test_capital_case() {
        assert_eq!(capital_case("person"), "Person");
        assert_eq!(capital_case("user_profile"), "UserProfile");
        assert_eq!(capital_case("Person"), "Person");
        assert_eq!(capital_case("HTTP_request"), "HttpRequest");
        assert_eq!(capital_case("v2record"), "V2Record");
        assert_eq!(capital_case("a__b"), "AB");
    }

    proptest! {
        #[test]
        fn prop_capital_case_removes_underscores(s in "[a-z_]{0,24}") {
            let cased = capital_case(&s);
            prop_assert!(!cased.contains('_'));
            prop_assert_eq!(cased.len(), s.replace('_', "").len());
        }

        #[test]
        fn prop_capital_case_capitalizes_each_segment(
            segments in proptest::collection::vec("[a-z]{1,8}", 1..5)
        ) {
            let cased = capital_case(&segments.join("_"));
            let expected: String = segments
                .iter()
                .map(|s| {
                    let mut chars = s.chars();
                    let first = chars.next().map(|c| c.to_ascii_uppercase());
                    first.into_iter().chain(chars).collect::<String>()
                })
                .collect();
            prop_assert_eq!(cased, expected);
        }
    }
}
