mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, generate, init, CheckArgs, GenerateArgs, InitArgs};
use tracing_subscriber::EnvFilter;

/// tsmodel - TypeScript declarations from type descriptors
#[derive(Parser, Debug)]
#[command(name = "tsmodel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new tsmodel project
    Init(InitArgs),

    /// Generate TypeScript files from type descriptors
    Generate(GenerateArgs),

    /// Validate type descriptors without writing files
    Check(CheckArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Generate(args) => generate(args, &cwd),
                Command::Check(args) => check(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
