//! Detection of constructs the pattern grammar does not model.
//!
//! These never alter the analysis; they are surfaced next to the verdict so
//! a reader knows which parts of the text may have been mis-read.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::brace_scanner::CodeMap;
use super::dependency_extractor::declared_classes;

static CONDITIONAL_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#[ \t]*(?:if|elif|else|endif)\b").unwrap());

static GENERIC_CONSTRAINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bwhere\s+[A-Za-z_]\w*\s*:").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limitation {
    ConditionalCompilation,
    MultipleClasses,
    GenericConstraints,
}

impl Limitation {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConditionalCompilation => "L001",
            Self::MultipleClasses => "L002",
            Self::GenericConstraints => "L003",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ConditionalCompilation => {
                "conditional compilation directives are read as plain text; every branch is analyzed"
            }
            Self::MultipleClasses => {
                "more than one class declaration; constructor detection uses the first class only"
            }
            Self::GenericConstraints => {
                "methods with `where` constraint clauses are not recognized as methods"
            }
        }
    }
}

impl std::fmt::Display for Limitation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.description())
    }
}

pub fn detect_limitations(source: &str) -> Vec<Limitation> {
    let checks = [
        (
            Limitation::ConditionalCompilation,
            CONDITIONAL_DIRECTIVE.is_match(source),
        ),
        (
            Limitation::MultipleClasses,
            declared_classes(source, &CodeMap::new(source)).len() > 1,
        ),
        (
            Limitation::GenericConstraints,
            GENERIC_CONSTRAINT.is_match(source),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(limitation, present)| present.then_some(limitation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_plain_class_has_no_limitations() {
        assert!(detect_limitations("class A(IB b) { void Run() { b.Go(); } }").is_empty());
    }

    #[test]
    fn test_all_limitations_in_fixed_order() {
        let source = indoc! {"
            class Outer
            {
                T Make<T>() where T : new() { return new T(); }
            #if DEBUG
                class Inner { }
            #endif
            }
        "};
        assert_eq!(
            detect_limitations(source),
            vec![
                Limitation::ConditionalCompilation,
                Limitation::MultipleClasses,
                Limitation::GenericConstraints,
            ]
        );
    }

    #[test]
    fn test_class_word_in_comment_is_not_a_second_class() {
        let source = indoc! {"
            // This class replaces the old class Legacy
            public class Orders(IOrderService orders)
            {
                private const string Hint = \"class Fake { }\";
            }
        "};
        assert!(detect_limitations(source).is_empty());
    }

    #[test]
    fn test_display_includes_code() {
        assert!(Limitation::MultipleClasses.to_string().starts_with("[L002]"));
    }
}
