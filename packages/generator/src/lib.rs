//! # tsmodel generator
//!
//! Renders source-side type descriptors as TypeScript declarations.
//!
//! ## Features
//!
//! - **Enums**: `export enum` blocks with explicit ordinals, in declaration order
//! - **Interfaces**: member casing, primitive mapping, `T[]` collections and
//!   strict-null-check markers
//! - **Validation rules**: optional sibling `<Name>ValidationRules` constant
//! - **Registry**: explicit opt-in list of the types to generate
//! - **Modules**: per-type files with imports, or one combined file
//!
//! ## Example
//!
//! ```rust
//! use tsmodel_generator::{
//!     CodeGenerator, GenerationOptions, MemberDescriptor, SemanticType, TypeDescriptor,
//!     TypeScriptGenerator,
//! };
//!
//! let person = TypeDescriptor::object(
//!     "Person",
//!     vec![
//!         MemberDescriptor::new("Name", SemanticType::primitive("string")).required(),
//!         MemberDescriptor::new("Age", SemanticType::nullable("int")),
//!     ],
//! );
//!
//! let ts_gen = TypeScriptGenerator::new();
//! let output = ts_gen.generate(&person, &GenerationOptions::default()).unwrap();
//! assert!(output.contains("age?: number | null;"));
//! ```

pub mod codegen;
pub mod descriptor;
pub mod error;
pub mod module;
pub mod naming;
pub mod options;
pub mod registry;
pub mod validation;

// Re-export main types for convenience
pub use codegen::{typescript::TypeScriptGenerator, CodeGenerator};
pub use descriptor::{MemberDescriptor, OutputModelType, SemanticType, TypeDescriptor, TypeKind};
pub use error::{GenerateError, GenerateResult, TypeMappingError};
pub use module::{assemble, GeneratedModule, ModuleLayout};
pub use options::{GenerationOptions, PropertyMode};
pub use registry::{ModelRegistration, ModelRegistry};
pub use validation::ValidationRule;
