use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsmodel_generator::{
    assemble, CodeGenerator, GenerationOptions, MemberDescriptor, ModuleLayout, SemanticType,
    TypeDescriptor, TypeScriptGenerator, ValidationRule,
};

fn wide_object(members: usize) -> TypeDescriptor {
    let members = (0..members)
        .map(|i| {
            let semantic_type = match i % 4 {
                0 => SemanticType::primitive("string"),
                1 => SemanticType::nullable("int"),
                2 => SemanticType::collection(SemanticType::object("Item")),
                _ => SemanticType::enumeration("Status"),
            };
            MemberDescriptor::new(format!("Field{}", i), semantic_type)
                .with_rule(ValidationRule::Required)
        })
        .collect();

    TypeDescriptor::object("Wide", members)
}

fn generate_enum(c: &mut Criterion) {
    let status = TypeDescriptor::enumeration(
        "Status",
        (0..32).map(|i| (format!("Variant{}", i), i as i64)),
    );
    let gen = TypeScriptGenerator::new();
    let options = GenerationOptions::default();

    c.bench_function("generate_enum_32", |b| {
        b.iter(|| gen.generate(black_box(&status), black_box(&options)))
    });
}

fn generate_interface(c: &mut Criterion) {
    let wide = wide_object(64);
    let gen = TypeScriptGenerator::new();
    let options = GenerationOptions::strict();

    c.bench_function("generate_interface_64", |b| {
        b.iter(|| gen.generate(black_box(&wide), black_box(&options)))
    });
}

fn assemble_modules(c: &mut Criterion) {
    let models: Vec<TypeDescriptor> = (0..16)
        .map(|i| {
            let mut descriptor = wide_object(16);
            descriptor.name = format!("Model{}", i);
            descriptor
        })
        .collect();
    let refs: Vec<&TypeDescriptor> = models.iter().collect();
    let gen = TypeScriptGenerator::new();
    let options = GenerationOptions::default();

    c.bench_function("assemble_per_type_16", |b| {
        b.iter(|| assemble(&gen, black_box(&refs), &options, &ModuleLayout::PerType))
    });
}

criterion_group!(benches, generate_enum, generate_interface, assemble_modules);
criterion_main!(benches);
