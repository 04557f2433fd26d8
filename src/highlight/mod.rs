//! Colorized markup over the analyzed source text.
//!
//! Matches are located on the raw text and recorded as non-overlapping byte
//! ranges; the first claim on a range wins. Rendering then escapes every
//! segment with the same routine, so stripping the inserted tags always gives
//! back exactly the escaped input.

use std::collections::BTreeMap;

use tracing::debug;

use crate::analysis::{whole_word, AnalysisResult, DependencyDescriptor};

/// CSS class of dependency highlights.
pub const DEPENDENCY_CLASS: &str = "dep-highlight";
/// CSS class of the marker on methods that use more than one dependency.
pub const MIXED_CLASS: &str = "mixed-responsibility";

const SELECTED_OPACITY: &str = "1";
const UNSELECTED_OPACITY: &str = "0.6";

/// Escape `&`, `<`, `>`, `"` and `'`.
pub fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Render `source` as escaped markup with dependency and mixed-method spans.
///
/// With `selected_type_name` set, only that dependency is highlighted (at full
/// opacity). An unknown selection highlights no dependency. Mixed-method
/// markers are applied regardless of the selection.
pub fn highlight(
    source: &str,
    result: &AnalysisResult,
    selected_type_name: Option<&str>,
) -> String {
    let active: Vec<&DependencyDescriptor> = match selected_type_name {
        Some(selected) => result
            .dependencies
            .iter()
            .filter(|dependency| dependency.type_name == selected)
            .collect(),
        None => result.dependencies.iter().collect(),
    };
    let opacity = if selected_type_name.is_some() {
        SELECTED_OPACITY
    } else {
        UNSELECTED_OPACITY
    };

    let mut marks = MarkSet::default();
    for (index, dependency) in active.iter().enumerate() {
        let tokens = dependency
            .reference_names()
            .chain(std::iter::once(dependency.type_name.as_str()));
        for token in tokens {
            let pattern = whole_word(token);
            for found in pattern.find_iter(source) {
                marks.claim(found.start(), found.end(), index);
            }
        }
    }

    for method in &result.mixed_methods {
        if let Some((start, end)) = method_name_occurrence(source, result, method) {
            marks.mark_mixed(start, end);
        }
    }

    debug!(marks = marks.len(), active = active.len(), "highlighted source");
    marks.render(source, &active, opacity)
}

/// Declaration-site occurrence of a method name.
fn method_name_occurrence(
    source: &str,
    result: &AnalysisResult,
    method: &str,
) -> Option<(usize, usize)> {
    let pattern = whole_word(method);
    let declared = result
        .method_usages
        .iter()
        .filter(|usage| usage.method_name == method)
        .filter_map(|usage| {
            let span = source.get(usage.start_index..usage.end_index)?;
            pattern
                .find(span)
                .map(|m| (usage.start_index + m.start(), usage.start_index + m.end()))
        })
        .next();
    declared.or_else(|| pattern.find(source).map(|m| (m.start(), m.end())))
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    end: usize,
    dependency: Option<usize>,
    mixed: bool,
}

/// Non-overlapping marked ranges keyed by start offset.
#[derive(Default)]
struct MarkSet {
    marks: BTreeMap<usize, Mark>,
}

impl MarkSet {
    fn len(&self) -> usize {
        self.marks.len()
    }

    fn overlapping(&self, start: usize, end: usize) -> Vec<usize> {
        self.marks
            .range(..end)
            .rev()
            .take_while(|(_, mark)| mark.end > start)
            .map(|(&mark_start, _)| mark_start)
            .collect()
    }

    fn claim(&mut self, start: usize, end: usize, dependency: usize) {
        if self.overlapping(start, end).is_empty() {
            self.marks.insert(
                start,
                Mark {
                    end,
                    dependency: Some(dependency),
                    mixed: false,
                },
            );
        }
    }

    /// Layer a mixed marker over `start..end`, displacing partial overlaps.
    fn mark_mixed(&mut self, start: usize, end: usize) {
        if let Some(mark) = self.marks.get_mut(&start) {
            if mark.end == end {
                mark.mixed = true;
                return;
            }
        }
        for displaced in self.overlapping(start, end) {
            self.marks.remove(&displaced);
        }
        self.marks.insert(
            start,
            Mark {
                end,
                dependency: None,
                mixed: true,
            },
        );
    }

    fn render(&self, source: &str, active: &[&DependencyDescriptor], opacity: &str) -> String {
        let mut out = String::with_capacity(source.len() + self.marks.len() * 128);
        let mut cursor = 0;

        for (&start, mark) in &self.marks {
            out.push_str(&escape(&source[cursor..start]));
            let token = escape(&source[start..mark.end]);
            let inner = match mark.dependency.and_then(|index| active.get(index)) {
                Some(dependency) => dependency_span(dependency, &token, opacity),
                None => token.into_owned(),
            };
            if mark.mixed {
                out.push_str(&format!(
                    r#"<span class="{MIXED_CLASS}" title="Method uses multiple dependencies">{inner}</span>"#
                ));
            } else {
                out.push_str(&inner);
            }
            cursor = mark.end;
        }
        out.push_str(&escape(&source[cursor..]));
        out
    }
}

fn dependency_span(dependency: &DependencyDescriptor, token: &str, opacity: &str) -> String {
    let color = &dependency.color;
    format!(
        r#"<span class="{DEPENDENCY_CLASS}" data-dependency="{}" style="background-color: {color}33; border-bottom: 2px solid {color}; opacity: {opacity}">{token}</span>"#,
        escape(&dependency.type_name),
    )
}
