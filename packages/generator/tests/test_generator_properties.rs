/// Behavioural properties of the TypeScript generator
///
/// These tests validate that:
/// - Enum output lists every member once, in order, with its ordinal
/// - Interface output names every member exactly once
/// - Output is byte-for-byte identical across calls and threads
/// - Nullability and validation emission follow the options

use std::sync::Arc;
use std::thread;
use tsmodel_generator::{
    CodeGenerator, GenerateError, GenerationOptions, MemberDescriptor, SemanticType,
    TypeDescriptor, TypeKind, TypeScriptGenerator, ValidationRule,
};

fn account() -> TypeDescriptor {
    TypeDescriptor::object(
        "Account",
        vec![
            MemberDescriptor::new("Id", SemanticType::primitive("Guid")).required(),
            MemberDescriptor::new("Email", SemanticType::primitive("string"))
                .required()
                .with_rule(ValidationRule::Required)
                .with_rule(ValidationRule::Email),
            MemberDescriptor::new("DisplayName", SemanticType::primitive("string"))
                .with_rule(ValidationRule::MinLength { value: 2 })
                .with_rule(ValidationRule::MaxLength { value: 64 }),
            MemberDescriptor::new("Balance", SemanticType::nullable("decimal")),
            MemberDescriptor::new("Status", SemanticType::enumeration("AccountStatus")).required(),
            MemberDescriptor::new(
                "Addresses",
                SemanticType::collection(SemanticType::object("Address")),
            ),
            MemberDescriptor::new("CreatedAt", SemanticType::primitive("DateTime")).required(),
        ],
    )
}

#[test]
fn test_enum_entries_in_order_with_ordinals() {
    let variants = [("Pending", 0), ("Active", 1), ("Suspended", 5), ("Closed", 9)];
    let status = TypeDescriptor::enumeration("AccountStatus", variants);

    let output = TypeScriptGenerator::new()
        .generate(&status, &GenerationOptions::default())
        .expect("Failed to generate enum");

    let entries: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("  "))
        .map(str::trim)
        .collect();

    assert_eq!(
        entries,
        vec!["Pending = 0,", "Active = 1,", "Suspended = 5,", "Closed = 9,"]
    );
}

#[test]
fn test_every_member_appears_exactly_once() {
    let output = TypeScriptGenerator::new()
        .generate(&account(), &GenerationOptions::minimal())
        .expect("Failed to generate interface");

    for name in ["id", "email", "displayName", "balance", "status", "addresses", "createdAt"] {
        let needle = format!("  {}: ", name);
        assert_eq!(
            output.matches(&needle).count(),
            1,
            "member {} should appear exactly once in:\n{}",
            name,
            output
        );
    }
}

#[test]
fn test_generation_is_idempotent() {
    let gen = TypeScriptGenerator::new();
    let options = GenerationOptions::strict();

    let results: Vec<String> = (0..10)
        .map(|_| gen.generate(&account(), &options).expect("Generation failed"))
        .collect();

    for i in 1..results.len() {
        assert_eq!(results[0], results[i], "Generation {} differs from generation 0", i);
    }
}

#[test]
fn test_generator_is_shareable_across_threads() {
    let gen: Arc<dyn CodeGenerator> = Arc::new(TypeScriptGenerator::new());
    let descriptor = Arc::new(account());
    let expected = gen
        .generate(&descriptor, &GenerationOptions::strict())
        .expect("Generation failed");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let gen = Arc::clone(&gen);
            let descriptor = Arc::clone(&descriptor);
            thread::spawn(move || gen.generate(&descriptor, &GenerationOptions::strict()))
        })
        .collect();

    for handle in handles {
        let output = handle.join().expect("thread panicked").expect("Generation failed");
        assert_eq!(output, expected);
    }
}

#[test]
fn test_strict_null_checks_marks_optional_members() {
    let output = TypeScriptGenerator::new()
        .generate(&account(), &GenerationOptions::default())
        .unwrap();

    assert!(output.contains("  id: string;"));
    assert!(output.contains("  displayName?: string;"));
    assert!(output.contains("  balance?: number | null;"));
    assert!(output.contains("  status: AccountStatus;"));
    assert!(output.contains("  addresses?: Address[];"));
    assert!(output.contains("  createdAt: Date;"));
}

#[test]
fn test_without_strict_null_checks_nothing_is_optional() {
    let output = TypeScriptGenerator::new()
        .generate(&account(), &GenerationOptions::minimal())
        .unwrap();

    assert!(!output.contains('?'));
    assert!(!output.contains("null"));
    assert!(output.contains("  balance: number;"));
}

#[test]
fn test_validation_declaration_lists_rules_per_member() {
    let output = TypeScriptGenerator::new()
        .generate(&account(), &GenerationOptions::strict())
        .unwrap();

    let (_, rules) = output
        .split_once("\n\n")
        .expect("validation declaration should follow the interface");

    assert_eq!(
        rules,
        [
            "export const AccountValidationRules = {",
            "  email: [{ rule: \"required\" }, { rule: \"email\" }],",
            "  displayName: [{ rule: \"minLength\", value: 2 }, { rule: \"maxLength\", value: 64 }],",
            "};",
        ]
        .join("\n")
    );
}

#[test]
fn test_validation_disabled_emits_no_declaration() {
    let options = GenerationOptions {
        generate_validation_rules: false,
        ..GenerationOptions::strict()
    };
    let output = TypeScriptGenerator::new().generate(&account(), &options).unwrap();

    assert!(!output.contains("ValidationRules"));
    assert!(!output.contains("rule:"));
}

#[test]
fn test_unsupported_kind_from_descriptor_file() {
    let json = r#"{ "name": "Handler", "kind": "delegate", "members": [] }"#;
    let descriptor: TypeDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(descriptor.kind, TypeKind::Unsupported("delegate".to_string()));

    let err = TypeScriptGenerator::new()
        .generate(&descriptor, &GenerationOptions::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported type kind 'delegate' for type 'Handler'"
    );
}

#[test]
fn test_invalid_member_type_in_collection() {
    let descriptor = TypeDescriptor::object(
        "Basket",
        vec![MemberDescriptor::new(
            "Items",
            SemanticType::collection(SemanticType::primitive("Widget")),
        )],
    );

    let err = TypeScriptGenerator::new()
        .generate(&descriptor, &GenerationOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidMemberType { ref type_name, ref member, .. }
            if type_name == "Basket" && member == "Items"
    ));
}
