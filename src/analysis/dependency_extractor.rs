//! Dependency extraction from constructor parameters and readonly fields.
//!
//! Constructor parameters are read first (primary-constructor style, then
//! conventional style), followed by `private readonly <type> <name> =` field
//! declarations. A field whose type was already discovered from the
//! constructor is attached to that descriptor instead of creating a new one.

use std::collections::HashMap;

use regex::Captures;
use tracing::debug;

use super::brace_scanner::CodeMap;
use super::framework_types::{base_type_name, FrameworkFilter};
use super::grammar::{
    is_keyword, CLASS_DECLARATION, CONVENTIONAL_CONSTRUCTOR, PARAMETER, PRIMARY_CONSTRUCTOR,
    READONLY_FIELD,
};
use super::palette::color_for;
use super::types::DependencyDescriptor;

/// Extract dependencies, optionally dropping the standard framework services.
pub fn extract_dependencies(
    source: &str,
    filter_framework_types: bool,
) -> Vec<DependencyDescriptor> {
    extract_dependencies_with(source, &FrameworkFilter::from_flag(filter_framework_types))
}

/// Extract dependencies using a caller-supplied framework filter.
pub fn extract_dependencies_with(
    source: &str,
    filter: &FrameworkFilter,
) -> Vec<DependencyDescriptor> {
    let mut registry = DependencyRegistry::default();

    if let Some(parameters) = constructor_parameters(source) {
        for (type_name, name) in parse_parameter_list(parameters) {
            if accepts_type(type_name, filter) {
                registry.discover_parameter(type_name, name);
            }
        }
    }

    for caps in READONLY_FIELD.captures_iter(source) {
        let type_name = &caps["type"];
        if accepts_type(type_name, filter) {
            registry.discover_field(type_name, &caps["name"]);
        }
    }

    let dependencies = registry.into_descriptors();
    debug!(count = dependencies.len(), "extracted dependencies");
    dependencies
}

/// Name of the first declared class, if any.
pub fn class_name(source: &str) -> Option<&str> {
    declared_classes(source, &CodeMap::new(source)).into_iter().next()
}

/// Names of `class` declarations outside comments and string literals.
pub(crate) fn declared_classes<'a>(source: &'a str, code: &CodeMap) -> Vec<&'a str> {
    CLASS_DECLARATION
        .captures_iter(source)
        .filter(|caps| caps.get(0).is_some_and(|m| code.is_code(m.start())))
        .filter_map(|caps| caps.name("name"))
        .map(|m| m.as_str())
        .filter(|name| !is_keyword(name))
        .collect()
}

fn accepts_type(type_name: &str, filter: &FrameworkFilter) -> bool {
    !is_keyword(base_type_name(type_name)) && !filter.is_excluded(type_name)
}

/// Raw parameter list of the class constructor.
///
/// A primary constructor wins. Otherwise the first conventional constructor
/// named after a declared class is used, falling back to the first
/// `Name(params) {` shape whose name is not a keyword.
fn constructor_parameters(source: &str) -> Option<&str> {
    let code = CodeMap::new(source);
    let in_code = |caps: &Captures<'_>| caps.get(0).is_some_and(|m| code.is_code(m.start()));

    let primary = PRIMARY_CONSTRUCTOR
        .captures_iter(source)
        .find(|caps| in_code(caps))
        .and_then(|caps| caps.name("params"));
    if let Some(params) = primary {
        debug!("matched primary constructor");
        return Some(params.as_str());
    }

    let classes = declared_classes(source, &code);
    let candidates: Vec<Captures<'_>> = CONVENTIONAL_CONSTRUCTOR
        .captures_iter(source)
        .filter(|caps| in_code(caps) && !is_keyword(&caps["name"]))
        .collect();
    let named_after_class = candidates
        .iter()
        .position(|caps| classes.iter().any(|class| *class == &caps["name"]));
    let chosen = match named_after_class {
        Some(position) => candidates.get(position),
        None => candidates.first(),
    }?;

    let params = chosen.name("params")?;
    debug!("matched conventional constructor");
    Some(params.as_str())
}

/// `<type> <name>` pairs of a parameter list, split on top-level commas.
fn parse_parameter_list(parameters: &str) -> Vec<(&str, &str)> {
    split_top_level(parameters)
        .into_iter()
        .filter_map(|parameter| PARAMETER.captures(parameter))
        .filter_map(|caps| {
            let type_name = caps.name("type")?.as_str();
            let name = caps.name("name")?.as_str();
            (!is_keyword(name)).then_some((type_name, name))
        })
        .collect()
}

fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in list.char_indices() {
        match ch {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&list[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}

/// Discovery-ordered descriptor set keyed by type name.
#[derive(Default)]
struct DependencyRegistry {
    descriptors: Vec<DependencyDescriptor>,
    index: HashMap<String, usize>,
}

impl DependencyRegistry {
    fn discover_parameter(&mut self, type_name: &str, parameter_name: &str) {
        if !self.index.contains_key(type_name) {
            self.insert(type_name, parameter_name, None);
        }
    }

    fn discover_field(&mut self, type_name: &str, field_name: &str) {
        match self.index.get(type_name) {
            Some(&position) => {
                let descriptor = &mut self.descriptors[position];
                if descriptor.field_name.is_none() {
                    descriptor.field_name = Some(field_name.to_string());
                }
            }
            None => self.insert(type_name, "", Some(field_name.to_string())),
        }
    }

    fn insert(&mut self, type_name: &str, parameter_name: &str, field_name: Option<String>) {
        let position = self.descriptors.len();
        self.descriptors.push(DependencyDescriptor {
            type_name: type_name.to_string(),
            parameter_name: parameter_name.to_string(),
            field_name,
            color: color_for(position).to_string(),
        });
        self.index.insert(type_name.to_string(), position);
    }

    fn into_descriptors(self) -> Vec<DependencyDescriptor> {
        self.descriptors
    }
}
