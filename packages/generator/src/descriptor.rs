use crate::error::{GenerateError, GenerateResult};
use crate::validation::ValidationRule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Source-side description of a type to be rendered as TypeScript.
///
/// Built by whatever inspects the host application's models (or read from a
/// descriptor file) and handed to a generator once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
}

/// Kind of a described type.
///
/// Kinds the generator does not know about are kept as `Unsupported` so that
/// the generator reports them instead of the deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeKind {
    Enum,
    Object,
    Unsupported(String),
}

/// One field/property of a [`TypeDescriptor`], or one variant of an enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    pub name: String,

    /// Absent for enum members
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<SemanticType>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub validation_rules: BTreeSet<ValidationRule>,

    /// Explicit enum ordinal; defaults to the member's position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// Semantic type of an object member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticType {
    /// Source primitive, mapped through the primitive lookup table
    Primitive(String),

    /// Source primitive that may hold null
    NullablePrimitive(String),

    /// Reference to another object type, emitted as its bare name
    Object(String),

    /// Sequence of the inner type, emitted as `T[]`
    Collection(Box<SemanticType>),

    /// Reference to an enum type, emitted as its bare name
    Enum(String),
}

/// Which textual shape a descriptor is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputModelType {
    Interface,
    Enum,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind, members: Vec<MemberDescriptor>) -> Self {
        Self {
            name: name.into(),
            kind,
            members,
        }
    }

    /// Describe an object type with the given members
    pub fn object(name: impl Into<String>, members: Vec<MemberDescriptor>) -> Self {
        Self::new(name, TypeKind::Object, members)
    }

    /// Describe an enum from `(name, ordinal)` pairs, in declaration order
    pub fn enumeration<S: Into<String>>(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = (S, i64)>,
    ) -> Self {
        let members = variants
            .into_iter()
            .map(|(variant, value)| MemberDescriptor::variant(variant, value))
            .collect();
        Self::new(name, TypeKind::Enum, members)
    }

    /// Output shape selected by this descriptor's kind
    pub fn output_model_type(&self) -> GenerateResult<OutputModelType> {
        match &self.kind {
            TypeKind::Object => Ok(OutputModelType::Interface),
            TypeKind::Enum => Ok(OutputModelType::Enum),
            TypeKind::Unsupported(kind) => Err(GenerateError::UnsupportedTypeKind {
                type_name: self.name.clone(),
                kind: kind.clone(),
            }),
        }
    }

    /// Names of every object and enum type referenced by this descriptor's members
    pub fn referenced_types(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for member in &self.members {
            if let Some(semantic_type) = &member.semantic_type {
                semantic_type.collect_references(&mut names);
            }
        }
        names
    }
}

impl MemberDescriptor {
    /// An optional member with no validation rules
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type: Some(semantic_type),
            required: false,
            validation_rules: BTreeSet::new(),
            value: None,
        }
    }

    /// An enum member with an explicit ordinal
    pub fn variant(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            semantic_type: None,
            required: false,
            validation_rules: BTreeSet::new(),
            value: Some(value),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.validation_rules.insert(rule);
        self
    }
}

impl SemanticType {
    pub fn primitive(name: impl Into<String>) -> Self {
        SemanticType::Primitive(name.into())
    }

    pub fn nullable(name: impl Into<String>) -> Self {
        SemanticType::NullablePrimitive(name.into())
    }

    pub fn object(name: impl Into<String>) -> Self {
        SemanticType::Object(name.into())
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        SemanticType::Enum(name.into())
    }

    pub fn collection(inner: SemanticType) -> Self {
        SemanticType::Collection(Box::new(inner))
    }

    fn collect_references(&self, names: &mut BTreeSet<String>) {
        match self {
            SemanticType::Object(name) | SemanticType::Enum(name) => {
                names.insert(name.clone());
            }
            SemanticType::Collection(inner) => inner.collect_references(names),
            SemanticType::Primitive(_) | SemanticType::NullablePrimitive(_) => {}
        }
    }
}

impl From<String> for TypeKind {
    fn from(kind: String) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "enum" => TypeKind::Enum,
            "object" | "interface" | "class" => TypeKind::Object,
            _ => TypeKind::Unsupported(kind),
        }
    }
}

impl From<TypeKind> for String {
    fn from(kind: TypeKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Enum => f.write_str("enum"),
            TypeKind::Object => f.write_str("object"),
            TypeKind::Unsupported(kind) => f.write_str(kind),
        }
    }
}

impl fmt::Display for OutputModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputModelType::Interface => f.write_str("interface"),
            OutputModelType::Enum => f.write_str("enum"),
        }
    }
}
