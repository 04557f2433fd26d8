//! Maps method bodies to the dependencies they reference.

use regex::Regex;
use tracing::{debug, trace};

use super::brace_scanner::{block_end, expression_end};
use super::dependency_extractor::class_name;
use super::grammar::{is_keyword, is_structural_keyword, whole_word, METHOD_SIGNATURE};
use super::types::{DependencyDescriptor, MethodUsage};

/// Methods that reference at least one dependency, in source order.
///
/// A dependency is referenced when its parameter name or field name occurs
/// as a whole word anywhere between the method signature and the end of its
/// body. Constructors (methods named after the class) are skipped.
pub fn extract_method_usages(
    source: &str,
    dependencies: &[DependencyDescriptor],
) -> Vec<MethodUsage> {
    if dependencies.is_empty() {
        return Vec::new();
    }

    let class = class_name(source);
    let matchers = reference_matchers(dependencies);

    let usages: Vec<MethodUsage> = METHOD_SIGNATURE
        .captures_iter(source)
        .filter_map(|caps| {
            let signature = caps.get(0)?;
            let name = caps.name("name")?.as_str();
            let return_type = caps.name("return_type")?.as_str();
            if is_structural_keyword(return_type) || is_keyword(name) || class == Some(name) {
                return None;
            }

            let end_index = match caps.name("body")?.as_str() {
                "=>" => expression_end(source, signature.end() - 2),
                _ => block_end(source, signature.end() - 1),
            };
            let span = &source[signature.start()..end_index];

            let dependency_keys: Vec<String> = matchers
                .iter()
                .filter(|matcher| matcher.is_referenced_in(span))
                .map(|matcher| matcher.type_name.to_string())
                .collect();
            trace!(method = name, references = dependency_keys.len(), "mapped method");

            (!dependency_keys.is_empty()).then(|| MethodUsage {
                method_name: name.to_string(),
                start_index: signature.start(),
                end_index,
                dependency_keys,
            })
        })
        .collect();

    debug!(count = usages.len(), "mapped method usages");
    usages
}

struct ReferenceMatcher<'a> {
    type_name: &'a str,
    patterns: Vec<Regex>,
}

impl ReferenceMatcher<'_> {
    fn is_referenced_in(&self, span: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(span))
    }
}

fn reference_matchers(dependencies: &[DependencyDescriptor]) -> Vec<ReferenceMatcher<'_>> {
    dependencies
        .iter()
        .map(|dependency| ReferenceMatcher {
            type_name: &dependency.type_name,
            patterns: dependency.reference_names().map(whole_word).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::dependency_extractor::extract_dependencies;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn usages(source: &str) -> Vec<(String, Vec<String>)> {
        let deps = extract_dependencies(source, true);
        extract_method_usages(source, &deps)
            .into_iter()
            .map(|u| (u.method_name, u.dependency_keys))
            .collect()
    }

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_block_and_expression_bodies() {
        let source = indoc! {"
            public class Checkout(IOrderService orders, IEmailService mail)
            {
                public Order Place(Cart cart)
                {
                    if (cart.IsEmpty) { return null; }
                    return orders.Create(cart);
                }

                public Task Notify(Order order) => mail.Send(order.Email);

                private static int Total(Cart cart) => cart.Sum();
            }
        "};
        assert_eq!(
            usages(source),
            vec![
                ("Place".to_string(), owned(&["IOrderService"])),
                ("Notify".to_string(), owned(&["IEmailService"])),
            ]
        );
    }

    #[test]
    fn test_field_references_count() {
        let source = indoc! {"
            public class Checkout
            {
                private readonly IOrderService _orders = default!;
                private readonly IEmailService _mail = default!;

                public Checkout(IOrderService orders, IEmailService mail)
                {
                    _orders = orders;
                    _mail = mail;
                }

                public async Task Complete(int id)
                {
                    var order = await _orders.Find(id);
                    await _mail.Send(order);
                }
            }
        "};
        assert_eq!(
            usages(source),
            vec![(
                "Complete".to_string(),
                owned(&["IOrderService", "IEmailService"])
            )]
        );
    }

    #[test]
    fn test_constructor_is_not_a_method() {
        let source = indoc! {"
            public class Checkout
            {
                public Checkout(IOrderService orders) { orders.Warm(); }
            }
        "};
        assert!(usages(source).is_empty());
    }

    #[test]
    fn test_spans_cover_signature_through_closing_brace() {
        let source = "class C(IA a) { public void Run() { a.Go(); } }";
        let deps = extract_dependencies(source, true);
        let usage = &extract_method_usages(source, &deps)[0];
        assert_eq!(
            &source[usage.start_index..usage.end_index],
            "public void Run() { a.Go(); }"
        );
    }

    #[test]
    fn test_partial_identifier_is_not_a_reference() {
        let source = indoc! {"
            class C(IA a)
            {
                public void Run() { var alpha = 1; }
            }
        "};
        assert!(usages(source).is_empty());
    }

    #[test]
    fn test_statement_blocks_are_not_methods() {
        let source = indoc! {"
            class C(IA a)
            {
                public void Run()
                {
                    if (ready) { a.Go(); }
                    else if (late) { a.Stop(); }
                    var x = new Thing(a) { Name = \"n\" };
                }
            }
        "};
        assert_eq!(usages(source), vec![("Run".to_string(), owned(&["IA"]))]);
    }

    #[test]
    fn test_no_dependencies_yields_no_usages() {
        assert!(extract_method_usages("class C { void Run() { } }", &[]).is_empty());
    }
}
