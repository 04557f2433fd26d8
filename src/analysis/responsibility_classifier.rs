//! Heuristic Single Responsibility verdict.
//!
//! A class whose dependencies are only ever used together looks like one
//! responsibility with several collaborators. A class where at least two
//! dependencies each have a dedicated method that touches nothing else looks
//! like separate responsibilities sharing a type.
//!
//! The threshold (two or more dependencies with an exclusive single-dependency
//! consumer) is a heuristic policy, not a proof of cohesion.

use tracing::debug;

use super::types::{Classification, DependencyDescriptor, MethodUsage};

/// Minimum number of exclusively-consumed dependencies that flags a class.
pub const EXCLUSIVE_DEPENDENCY_THRESHOLD: usize = 2;

pub fn classify(
    dependencies: &[DependencyDescriptor],
    method_usages: &[MethodUsage],
) -> Classification {
    let mixed_methods: Vec<String> = method_usages
        .iter()
        .filter(|usage| usage.is_mixed())
        .map(|usage| usage.method_name.clone())
        .collect();

    let exclusive = exclusively_used_dependencies(dependencies, method_usages);
    let has_multiple_responsibilities = exclusive.len() >= EXCLUSIVE_DEPENDENCY_THRESHOLD;

    debug!(
        exclusive = exclusive.len(),
        mixed = mixed_methods.len(),
        has_multiple_responsibilities,
        "classified class"
    );

    Classification {
        has_multiple_responsibilities,
        mixed_methods,
    }
}

/// Dependencies with at least one consumer method that references nothing else.
pub fn exclusively_used_dependencies<'a>(
    dependencies: &'a [DependencyDescriptor],
    method_usages: &[MethodUsage],
) -> Vec<&'a str> {
    dependencies
        .iter()
        .map(|dependency| dependency.type_name.as_str())
        .filter(|type_name| {
            method_usages
                .iter()
                .filter(|usage| usage.uses(type_name))
                .any(|usage| usage.dependency_keys.len() == 1)
        })
        .collect()
}
