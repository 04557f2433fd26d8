use serde::{Deserialize, Serialize};

use super::limitations::Limitation;

/// One distinct injected dependency type found in the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDescriptor {
    /// Declared type token, unique within one analysis.
    pub type_name: String,
    /// Constructor parameter bound to the type; empty when found only as a field.
    pub parameter_name: String,
    /// Backing `private readonly` field bound to the type.
    pub field_name: Option<String>,
    pub color: String,
}

impl DependencyDescriptor {
    /// Identifiers that count as a reference to this dependency.
    pub fn reference_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.parameter_name.as_str())
            .chain(self.field_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Dependency footprint of one method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodUsage {
    pub method_name: String,
    /// Byte offset of the signature start.
    pub start_index: usize,
    /// Byte offset just past the closing brace or terminating `;`.
    pub end_index: usize,
    /// Referenced dependency type names, in dependency order.
    pub dependency_keys: Vec<String>,
}

impl MethodUsage {
    pub fn uses(&self, type_name: &str) -> bool {
        self.dependency_keys.iter().any(|key| key == type_name)
    }

    pub fn is_mixed(&self) -> bool {
        self.dependency_keys.len() > 1
    }
}

/// Output of the responsibility classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub has_multiple_responsibilities: bool,
    /// Methods referencing more than one dependency.
    pub mixed_methods: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub dependencies: Vec<DependencyDescriptor>,
    pub method_usages: Vec<MethodUsage>,
    pub has_multiple_responsibilities: bool,
    pub mixed_methods: Vec<String>,
    /// Constructs present in the text that the analyzer does not model.
    #[serde(default)]
    pub limitations: Vec<Limitation>,
}

impl AnalysisResult {
    pub fn dependency(&self, type_name: &str) -> Option<&DependencyDescriptor> {
        self.dependencies
            .iter()
            .find(|dependency| dependency.type_name == type_name)
    }

    /// Names of the methods referencing `type_name`, in source order.
    pub fn consumers_of(&self, type_name: &str) -> Vec<&str> {
        self.method_usages
            .iter()
            .filter(|usage| usage.uses(type_name))
            .map(|usage| usage.method_name.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
