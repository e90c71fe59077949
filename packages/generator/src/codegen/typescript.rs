use crate::codegen::CodeGenerator;
use crate::descriptor::{MemberDescriptor, OutputModelType, SemanticType, TypeDescriptor};
use crate::error::{GenerateError, GenerateResult, TypeMappingError};
use crate::naming::{apply_property_mode, is_valid_type_name, property_key};
use crate::options::GenerationOptions;
use crate::validation::ValidationRule;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

/// TypeScript code generator for type descriptors
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }

    /// `export enum Name { Member = ordinal, ... }`, in member order
    fn generate_enum(&self, descriptor: &TypeDescriptor) -> GenerateResult<String> {
        let mut lines = vec![format!("export enum {} {{", descriptor.name)];
        let mut seen = HashSet::new();

        for (index, member) in descriptor.members.iter().enumerate() {
            if member.name.is_empty() {
                return Err(GenerateError::invalid_member(
                    &descriptor.name,
                    "",
                    "member name is empty",
                ));
            }
            if member.semantic_type.is_some() {
                return Err(GenerateError::invalid_member(
                    &descriptor.name,
                    &member.name,
                    "enum members are name and ordinal only",
                ));
            }
            if !seen.insert(member.name.as_str()) {
                return Err(GenerateError::invalid_member(
                    &descriptor.name,
                    &member.name,
                    "duplicate member name",
                ));
            }

            let value = member.value.unwrap_or(index as i64);
            lines.push(format!("  {} = {},", property_key(&member.name), value));
        }

        lines.push("}".to_string());
        Ok(lines.join("\n"))
    }

    /// `export interface Name { ... }`, followed by the validation rules
    /// constant when requested and any member carries rules
    fn generate_interface(
        &self,
        descriptor: &TypeDescriptor,
        options: &GenerationOptions,
    ) -> GenerateResult<String> {
        let mut lines = vec![format!("export interface {} {{", descriptor.name)];
        let mut seen = HashSet::new();
        let mut rules: Vec<(String, &BTreeSet<ValidationRule>)> = Vec::new();

        for member in &descriptor.members {
            let key = member_name(&descriptor.name, member, options)?;
            if !seen.insert(key.clone()) {
                return Err(GenerateError::invalid_member(
                    &descriptor.name,
                    &member.name,
                    format!("duplicate member name '{}'", key),
                ));
            }

            let property = self.generate_property(&descriptor.name, member, options)?;
            lines.push(format!("  {};", property));

            if options.generate_validation_rules && !member.validation_rules.is_empty() {
                rules.push((key, &member.validation_rules));
            }
        }

        lines.push("}".to_string());
        let mut output = lines.join("\n");

        if !rules.is_empty() {
            output.push_str("\n\n");
            output.push_str(&generate_validation_rules(&descriptor.name, &rules));
        }

        Ok(output)
    }
}

impl CodeGenerator for TypeScriptGenerator {
    #[instrument(skip_all, fields(type_name = %descriptor.name))]
    fn generate(
        &self,
        descriptor: &TypeDescriptor,
        options: &GenerationOptions,
    ) -> GenerateResult<String> {
        let shape = descriptor.output_model_type()?;

        if !is_valid_type_name(&descriptor.name) {
            return Err(GenerateError::InvalidTypeName(descriptor.name.clone()));
        }

        let output = match shape {
            OutputModelType::Enum => self.generate_enum(descriptor)?,
            OutputModelType::Interface => self.generate_interface(descriptor, options)?,
        };

        debug!(members = descriptor.members.len(), "generated {}", shape);
        Ok(output)
    }

    fn generate_type(
        &self,
        type_: &SemanticType,
        options: &GenerationOptions,
    ) -> Result<String, TypeMappingError> {
        match type_ {
            SemanticType::Primitive(name) => map_primitive(name),

            SemanticType::NullablePrimitive(name) => {
                let base = map_primitive(name)?;
                if options.strict_null_checks {
                    Ok(format!("{} | null", base))
                } else {
                    Ok(base)
                }
            }

            SemanticType::Object(name) | SemanticType::Enum(name) => {
                if is_valid_type_name(name) {
                    Ok(name.clone())
                } else {
                    Err(TypeMappingError::InvalidReference(name.clone()))
                }
            }

            SemanticType::Collection(inner) => {
                let element = self.generate_type(inner, options)?;
                if element.contains(" | ") {
                    Ok(format!("({})[]", element))
                } else {
                    Ok(format!("{}[]", element))
                }
            }
        }
    }

    fn generate_property(
        &self,
        owner: &str,
        member: &MemberDescriptor,
        options: &GenerationOptions,
    ) -> GenerateResult<String> {
        let name = member_name(owner, member, options)?;

        let semantic_type = member.semantic_type.as_ref().ok_or_else(|| {
            GenerateError::invalid_member(owner, &member.name, "object members need a type")
        })?;

        let type_ = self
            .generate_type(semantic_type, options)
            .map_err(|e| GenerateError::invalid_member(owner, &member.name, e.to_string()))?;

        let optional_marker = if options.strict_null_checks && !member.required {
            "?"
        } else {
            ""
        };

        Ok(format!("{}{}: {}", property_key(&name), optional_marker, type_))
    }
}

/// Cased member name; empty names are rejected
fn member_name(
    owner: &str,
    member: &MemberDescriptor,
    options: &GenerationOptions,
) -> GenerateResult<String> {
    let name = apply_property_mode(&member.name, options.property_mode);
    if name.is_empty() {
        return Err(GenerateError::invalid_member(
            owner,
            &member.name,
            "member name is empty",
        ));
    }
    Ok(name)
}

/// Primitive lookup table. `System.`-qualified names are accepted.
fn map_primitive(name: &str) -> Result<String, TypeMappingError> {
    let key = name
        .strip_prefix("System.")
        .unwrap_or(name)
        .to_ascii_lowercase();

    let mapped = match key.as_str() {
        "string" | "char" | "guid" | "uuid" | "timespan" | "uri" => "string",
        "byte" | "sbyte" | "short" | "ushort" | "int" | "uint" | "long" | "ulong" | "float"
        | "double" | "decimal" | "single" | "int16" | "int32" | "int64" | "uint16" | "uint32"
        | "uint64" | "number" => "number",
        "bool" | "boolean" => "boolean",
        "datetime" | "datetimeoffset" | "date" => "Date",
        "object" | "dynamic" | "any" => "any",
        _ => return Err(TypeMappingError::UnknownPrimitive(name.to_string())),
    };

    Ok(mapped.to_string())
}

fn generate_validation_rules(
    type_name: &str,
    rules: &[(String, &BTreeSet<ValidationRule>)],
) -> String {
    let mut lines = vec![format!("export const {}ValidationRules = {{", type_name)];

    for (key, rule_set) in rules {
        let rendered: Vec<String> = rule_set.iter().map(|r| r.to_typescript()).collect();
        lines.push(format!("  {}: [{}],", property_key(key), rendered.join(", ")));
    }

    lines.push("};".to_string());
    lines.join("\n")
}
