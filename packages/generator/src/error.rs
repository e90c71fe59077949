use crate::descriptor::OutputModelType;
use thiserror::Error;

/// Errors that can occur while generating TypeScript declarations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Unsupported type kind '{kind}' for type '{type_name}'")]
    UnsupportedTypeKind { type_name: String, kind: String },

    #[error("Invalid member type for '{type_name}.{member}': {reason}")]
    InvalidMemberType {
        type_name: String,
        member: String,
        reason: String,
    },

    #[error("Invalid type name '{0}'")]
    InvalidTypeName(String),

    #[error("Type '{0}' is registered more than once")]
    DuplicateRegistration(String),

    #[error("Type '{0}' is described more than once")]
    DuplicateDescriptor(String),

    #[error("Registered type '{0}' has no descriptor")]
    MissingDescriptor(String),

    #[error("Type '{type_name}' is registered as {expected} but described as {found}")]
    OutputModeMismatch {
        type_name: String,
        expected: OutputModelType,
        found: OutputModelType,
    },

    #[error("Types '{first}' and '{second}' would both be written to '{file_name}'")]
    DuplicateModule {
        file_name: String,
        first: String,
        second: String,
    },
}

impl GenerateError {
    pub(crate) fn invalid_member(
        type_name: &str,
        member: &str,
        reason: impl Into<String>,
    ) -> Self {
        GenerateError::InvalidMemberType {
            type_name: type_name.to_string(),
            member: member.to_string(),
            reason: reason.into(),
        }
    }
}

/// Reasons a semantic type cannot be mapped to a TypeScript type expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMappingError {
    #[error("no TypeScript mapping for primitive '{0}'")]
    UnknownPrimitive(String),

    #[error("'{0}' is not a valid type reference")]
    InvalidReference(String),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
