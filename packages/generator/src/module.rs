//! Assembles generated declarations into `.ts` module contents.
//!
//! Nothing here touches the file system; callers receive file names and
//! contents and decide where to write them.

use crate::codegen::CodeGenerator;
use crate::descriptor::TypeDescriptor;
use crate::error::{GenerateError, GenerateResult};
use crate::naming::file_stem;
use crate::options::GenerationOptions;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

pub const GENERATED_HEADER: &str = "// This file is auto-generated by tsmodel. Do not edit.";

/// How declarations are grouped into files
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleLayout {
    /// One `<file-stem>.ts` per type, importing the types it references
    #[default]
    PerType,
    /// Every declaration in one file with the given name
    SingleFile(String),
}

/// Contents of one generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub file_name: String,
    pub contents: String,
}

/// Generate every descriptor and group the output per `layout`.
///
/// Fails on the first descriptor that cannot be generated, or when two types
/// map to the same per-type file name.
pub fn assemble<G: CodeGenerator + ?Sized>(
    generator: &G,
    descriptors: &[&TypeDescriptor],
    options: &GenerationOptions,
    layout: &ModuleLayout,
) -> GenerateResult<Vec<GeneratedModule>> {
    match layout {
        ModuleLayout::PerType => {
            check_file_names(descriptors)?;
            descriptors
                .iter()
                .map(|descriptor| per_type_module(generator, descriptor, descriptors, options))
                .collect()
        }

        ModuleLayout::SingleFile(file_name) => {
            let declarations = descriptors
                .iter()
                .map(|descriptor| generator.generate(descriptor, options))
                .collect::<GenerateResult<Vec<String>>>()?;

            Ok(vec![GeneratedModule {
                file_name: file_name.clone(),
                contents: format!("{}\n\n{}\n", GENERATED_HEADER, declarations.join("\n\n")),
            }])
        }
    }
}

/// Module file name for a type
pub fn module_file_name(type_name: &str) -> String {
    format!("{}.ts", file_stem(type_name))
}

fn check_file_names(descriptors: &[&TypeDescriptor]) -> GenerateResult<()> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    for descriptor in descriptors {
        let file_name = module_file_name(&descriptor.name);
        if let Some(first) = owners.get(&file_name) {
            return Err(GenerateError::DuplicateModule {
                file_name,
                first: first.to_string(),
                second: descriptor.name.clone(),
            });
        }
        owners.insert(file_name, descriptor.name.as_str());
    }
    Ok(())
}

fn per_type_module<G: CodeGenerator + ?Sized>(
    generator: &G,
    descriptor: &TypeDescriptor,
    all: &[&TypeDescriptor],
    options: &GenerationOptions,
) -> GenerateResult<GeneratedModule> {
    let declaration = generator.generate(descriptor, options)?;
    let known: HashSet<&str> = all.iter().map(|d| d.name.as_str()).collect();

    let imports: Vec<String> = descriptor
        .referenced_types()
        .into_iter()
        .filter(|name| *name != descriptor.name)
        .map(|name| {
            if !known.contains(name.as_str()) {
                warn!(
                    type_name = %descriptor.name,
                    "referenced type '{}' is not part of this generation run", name
                );
            }
            format!("import {{ {} }} from \"./{}\";", name, file_stem(&name))
        })
        .collect();

    let mut contents = String::from(GENERATED_HEADER);
    contents.push_str("\n\n");
    if !imports.is_empty() {
        contents.push_str(&imports.join("\n"));
        contents.push_str("\n\n");
    }
    contents.push_str(&declaration);
    contents.push('\n');

    Ok(GeneratedModule {
        file_name: module_file_name(&descriptor.name),
        contents,
    })
}
