use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;
use tsmodel_common::{load_descriptors, write_modules, FileSystem, RealFileSystem};
use tsmodel_generator::{
    assemble, GenerationOptions, ModuleLayout, PropertyMode, TypeDescriptor, TypeScriptGenerator,
};

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Project directory containing tsmodel.config.json (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Write every declaration into one file with this name
    #[arg(long)]
    pub single_file: Option<String>,

    /// Mark optional members with `?` and nullable primitives with `| null`
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub strict_null_checks: Option<bool>,

    /// Emit `<Name>ValidationRules` constants
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub validation_rules: Option<bool>,

    /// Use PascalCase member names instead of camelCase
    #[arg(long)]
    pub pascal_case: bool,
}

/// Config plus the descriptors it points at
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub descriptors: Vec<TypeDescriptor>,
}

impl Project {
    pub fn load(fs: &dyn FileSystem, root: PathBuf) -> Result<Self> {
        let config = Config::load(fs, &root)?;
        let descriptor_dir = config.get_descriptor_dir(&root);

        if !fs.exists(&descriptor_dir) {
            return Err(anyhow!(
                "Descriptor directory does not exist: {}",
                descriptor_dir.display()
            ));
        }

        let descriptors = load_descriptors(fs, &descriptor_dir)?;
        info!(
            "loaded {} descriptors from {}",
            descriptors.len(),
            descriptor_dir.display()
        );

        Ok(Self {
            root,
            config,
            descriptors,
        })
    }
}

impl GenerateArgs {
    /// Config options with command-line overrides applied
    pub fn options(&self, config: &Config) -> GenerationOptions {
        let mut options = config.options.clone();
        if let Some(strict) = self.strict_null_checks {
            options.strict_null_checks = strict;
        }
        if let Some(validation) = self.validation_rules {
            options.generate_validation_rules = validation;
        }
        if self.pascal_case {
            options.property_mode = PropertyMode::PascalCase;
        }
        options
    }

    pub fn layout(&self, config: &Config) -> ModuleLayout {
        match &self.single_file {
            Some(file_name) => ModuleLayout::SingleFile(file_name.clone()),
            None => config.layout.clone(),
        }
    }
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    generate_with_fs(&args, cwd, &RealFileSystem).map(|_| ())
}

/// Run generation against `fs`, returning the written paths
pub fn generate_with_fs(
    args: &GenerateArgs,
    cwd: &str,
    fs: &dyn FileSystem,
) -> Result<Vec<PathBuf>> {
    let project = Project::load(fs, Path::new(cwd).join(&args.path))?;
    let config = &project.config;

    if !args.stdout {
        println!("{}", "🔨 Generating TypeScript models...".bright_blue().bold());
    }

    if project.descriptors.is_empty() {
        // keep piped output clean
        if args.stdout {
            eprintln!("{}", "⚠️  No type descriptors found".yellow());
        } else {
            println!("{}", "⚠️  No type descriptors found".yellow());
        }
        return Ok(vec![]);
    }

    let registry = config.registry()?;
    let selected = registry.resolve(&project.descriptors)?;
    let options = args.options(config);
    let layout = args.layout(config);

    let modules = assemble(&TypeScriptGenerator::new(), &selected, &options, &layout)?;

    if args.stdout {
        for module in &modules {
            println!("{}", module.contents);
        }
        return Ok(vec![]);
    }

    let out_dir = match &args.out_dir {
        Some(out) => project.root.join(out),
        None => config.get_out_dir(&project.root),
    };

    let written = write_modules(fs, &out_dir, &modules)?;
    for path in &written {
        let relative = path.strip_prefix(&project.root).unwrap_or(path);
        println!("  {} {}", "✓".green(), relative.display());
    }

    println!();
    println!(
        "{} Generated {} types into {} files",
        "✅".green(),
        selected.len(),
        written.len()
    );

    Ok(written)
}
