use serde::{Deserialize, Serialize};

/// Casing convention applied to emitted member names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyMode {
    #[default]
    CamelCase,
    PascalCase,
}

/// Presentation options for TypeScript generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    /// Emit a `<Name>ValidationRules` constant next to interfaces whose
    /// members carry validation rules
    pub generate_validation_rules: bool,

    /// Mark non-required members with `?` and nullable primitives with `| null`
    pub strict_null_checks: bool,

    /// Casing of interface member names
    pub property_mode: PropertyMode,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            generate_validation_rules: false,
            strict_null_checks: true,
            property_mode: PropertyMode::CamelCase,
        }
    }
}

impl GenerationOptions {
    /// Strict null checks with validation rules
    pub fn strict() -> Self {
        Self {
            generate_validation_rules: true,
            strict_null_checks: true,
            ..Default::default()
        }
    }

    /// Bare declarations: no nullability markers, no validation rules
    pub fn minimal() -> Self {
        Self {
            generate_validation_rules: false,
            strict_null_checks: false,
            property_mode: PropertyMode::CamelCase,
        }
    }

    pub fn with_property_mode(mut self, property_mode: PropertyMode) -> Self {
        self.property_mode = property_mode;
        self
    }
}
