use crate::descriptor::{OutputModelType, TypeDescriptor};
use crate::error::{GenerateError, GenerateResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opt-in entry: generate `type_name` as `output`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRegistration {
    pub type_name: String,
    pub output: OutputModelType,
}

/// Explicit list of the types that should be generated.
///
/// An empty registry opts every descriptor in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    entries: Vec<ModelRegistration>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registrations(
        registrations: impl IntoIterator<Item = ModelRegistration>,
    ) -> GenerateResult<Self> {
        let mut registry = Self::new();
        for registration in registrations {
            registry.register(registration.type_name, registration.output)?;
        }
        Ok(registry)
    }

    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        output: OutputModelType,
    ) -> GenerateResult<()> {
        let type_name = type_name.into();
        if self.output_for(&type_name).is_some() {
            return Err(GenerateError::DuplicateRegistration(type_name));
        }
        self.entries.push(ModelRegistration { type_name, output });
        Ok(())
    }

    pub fn output_for(&self, type_name: &str) -> Option<OutputModelType> {
        self.entries
            .iter()
            .find(|entry| entry.type_name == type_name)
            .map(|entry| entry.output)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Select the descriptors to generate, in registration order.
    ///
    /// Every registered type must have exactly one descriptor whose kind
    /// matches the registered output shape.
    pub fn resolve<'a>(
        &self,
        descriptors: &'a [TypeDescriptor],
    ) -> GenerateResult<Vec<&'a TypeDescriptor>> {
        let mut by_name: HashMap<&str, &'a TypeDescriptor> = HashMap::new();
        for descriptor in descriptors {
            if by_name.insert(descriptor.name.as_str(), descriptor).is_some() {
                return Err(GenerateError::DuplicateDescriptor(descriptor.name.clone()));
            }
        }

        if self.is_empty() {
            return Ok(descriptors.iter().collect());
        }

        self.entries
            .iter()
            .map(|entry| {
                let descriptor = by_name
                    .get(entry.type_name.as_str())
                    .copied()
                    .ok_or_else(|| GenerateError::MissingDescriptor(entry.type_name.clone()))?;

                let found = descriptor.output_model_type()?;
                if found != entry.output {
                    return Err(GenerateError::OutputModeMismatch {
                        type_name: entry.type_name.clone(),
                        expected: entry.output,
                        found,
                    });
                }

                Ok(descriptor)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{MemberDescriptor, SemanticType};

    fn descriptors() -> Vec<TypeDescriptor> {
        vec![
            TypeDescriptor::enumeration("Status", [("Active", 0), ("Disabled", 1)]),
            TypeDescriptor::object(
                "Person",
                vec![MemberDescriptor::new("Name", SemanticType::primitive("string"))],
            ),
            TypeDescriptor::object("Internal", vec![]),
        ]
    }

    #[test]
    fn test_empty_registry_selects_everything() {
        let all = descriptors();
        let selected = ModelRegistry::new().resolve(&all).unwrap();
        let names: Vec<&str> = selected.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Status", "Person", "Internal"]);
    }

    #[test]
    fn test_resolve_in_registration_order() {
        let all = descriptors();
        let mut registry = ModelRegistry::new();
        registry.register("Person", OutputModelType::Interface).unwrap();
        registry.register("Status", OutputModelType::Enum).unwrap();

        let selected = registry.resolve(&all).unwrap();
        let names: Vec<&str> = selected.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Person", "Status"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = ModelRegistry::new();
        registry.register("Person", OutputModelType::Interface).unwrap();
        assert_eq!(
            registry.register("Person", OutputModelType::Interface),
            Err(GenerateError::DuplicateRegistration("Person".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_descriptor() {
        let all = descriptors();
        let registry = ModelRegistry::from_registrations([ModelRegistration {
            type_name: "Invoice".to_string(),
            output: OutputModelType::Interface,
        }])
        .unwrap();

        assert_eq!(
            registry.resolve(&all),
            Err(GenerateError::MissingDescriptor("Invoice".to_string()))
        );
    }

    #[test]
    fn test_output_mode_mismatch() {
        let all = descriptors();
        let mut registry = ModelRegistry::new();
        registry.register("Status", OutputModelType::Interface).unwrap();

        assert_eq!(
            registry.resolve(&all),
            Err(GenerateError::OutputModeMismatch {
                type_name: "Status".to_string(),
                expected: OutputModelType::Interface,
                found: OutputModelType::Enum,
            })
        );
    }

    #[test]
    fn test_duplicate_descriptor() {
        let mut all = descriptors();
        all.push(TypeDescriptor::object("Person", vec![]));

        assert_eq!(
            ModelRegistry::new().resolve(&all),
            Err(GenerateError::DuplicateDescriptor("Person".to_string()))
        );
    }

    #[test]
    fn test_parse_registrations() {
        let json = r#"[{ "typeName": "Status", "output": "enum" }]"#;
        let registrations: Vec<ModelRegistration> = serde_json::from_str(json).unwrap();
        let registry = ModelRegistry::from_registrations(registrations).unwrap();
        assert_eq!(registry.output_for("Status"), Some(OutputModelType::Enum));
    }
}
