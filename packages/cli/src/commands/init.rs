use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use tsmodel_common::{FileSystem, RealFileSystem};

const EXAMPLE_DESCRIPTORS: &str = r#"[
  {
    "name": "Status",
    "kind": "enum",
    "members": [
      { "name": "Active", "value": 0 },
      { "name": "Disabled", "value": 1 }
    ]
  },
  {
    "name": "Person",
    "kind": "object",
    "members": [
      {
        "name": "Name",
        "type": { "primitive": "string" },
        "required": true,
        "validationRules": [{ "rule": "required" }, { "rule": "maxLength", "value": 50 }]
      },
      { "name": "Age", "type": { "nullablePrimitive": "int" } },
      { "name": "Status", "type": { "enum": "Status" }, "required": true }
    ]
  }
]
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory holding JSON type descriptors
    #[arg(short, long, default_value = "models")]
    pub descriptor_dir: String,

    /// Directory generated TypeScript is written to
    #[arg(short, long, default_value = "generated")]
    pub out_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    init_with_fs(&args, cwd, &RealFileSystem)
}

pub fn init_with_fs(args: &InitArgs, cwd: &str, fs: &dyn FileSystem) -> Result<()> {
    let root = Path::new(cwd);
    let config_path = root.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if fs.exists(&config_path) && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing tsmodel project...".bright_blue().bold());

    let descriptor_dir = root.join(&args.descriptor_dir);
    if !fs.exists(&descriptor_dir) {
        fs.create_dir_all(&descriptor_dir)?;
        println!("  {} Created {}/", "✓".green(), args.descriptor_dir);
    }

    let example_file = descriptor_dir.join("example.json");
    if !fs.exists(&example_file) {
        fs.write(&example_file, EXAMPLE_DESCRIPTORS)?;
        println!("  {} Created {}/example.json", "✓".green(), args.descriptor_dir);
    }

    let config = Config {
        descriptor_dir: args.descriptor_dir.clone(),
        out_dir: args.out_dir.clone(),
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs.write(&config_path, &config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Describe your models in {}/", args.descriptor_dir);
    println!("  2. Run: tsmodel generate");
    println!("  3. Check output in {}/", args.out_dir);

    Ok(())
}
