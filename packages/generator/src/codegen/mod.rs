pub mod typescript;

use crate::descriptor::{MemberDescriptor, SemanticType, TypeDescriptor};
use crate::error::{GenerateResult, TypeMappingError};
use crate::options::GenerationOptions;

/// Capability for rendering type descriptors as target-language source.
///
/// Implementations are stateless: every call is a pure function of its inputs,
/// so one generator can be shared freely across threads.
pub trait CodeGenerator: Send + Sync {
    /// Render a complete declaration for `descriptor`
    fn generate(
        &self,
        descriptor: &TypeDescriptor,
        options: &GenerationOptions,
    ) -> GenerateResult<String>;

    /// Render the type expression for a member's semantic type
    fn generate_type(
        &self,
        type_: &SemanticType,
        options: &GenerationOptions,
    ) -> Result<String, TypeMappingError>;

    /// Render a single interface member (name + optional marker + type)
    fn generate_property(
        &self,
        owner: &str,
        member: &MemberDescriptor,
        options: &GenerationOptions,
    ) -> GenerateResult<String>;
}
