use crate::commands::generate::{GenerateArgs, Project};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use tracing::warn;
use tsmodel_common::{FileSystem, RealFileSystem};
use tsmodel_generator::{CodeGenerator, TypeScriptGenerator};

#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    /// Project directory containing tsmodel.config.json (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,
}

pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    check_with_fs(&args, cwd, &RealFileSystem)
}

/// Generate every selected type without writing anything, reporting each failure
pub fn check_with_fs(args: &CheckArgs, cwd: &str, fs: &dyn FileSystem) -> Result<()> {
    let project = Project::load(fs, Path::new(cwd).join(&args.path))?;
    let registry = project.config.registry()?;
    let selected = registry.resolve(&project.descriptors)?;

    // same options `generate` uses without flags
    let options = GenerateArgs::default().options(&project.config);
    let generator = TypeScriptGenerator::new();

    println!("{}", "🔍 Checking type descriptors...".bright_blue().bold());

    let mut error_count = 0;
    for descriptor in &selected {
        match generator.generate(descriptor, &options) {
            Ok(_) => println!("  {} {}", "✓".green(), descriptor.name),
            Err(e) => {
                error_count += 1;
                warn!(type_name = %descriptor.name, "generation failed: {}", e);
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    descriptor.name,
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!("{} {} types OK", "✅".green(), selected.len());
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} types failed to generate",
            error_count,
            selected.len()
        ))
    }
}
