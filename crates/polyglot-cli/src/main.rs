//! Command-line interface for the polyglot greeter.
//!
//! Selects a language module, loads it at runtime and invokes its
//! greet capability. Every failure is terminal: the error is printed
//! and the process exits with status 1.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use polyglot_core::config::{defaults, env_vars, module_dir};
use polyglot_core::{platform_extension, ModuleLoader, ModuleRegistry};

/// Polyglot - greet the universe through dynamically loaded language modules.
#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Option<Command>,

    /// Language to greet in.
    language: Option<String>,

    /// Directory holding compiled greeter modules.
    #[arg(long, global = true)]
    module_dir: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a language module and print its greeting.
    Greet {
        /// Language to greet in.
        language: Option<String>,
    },
    /// List greeter modules discovered in the module directory.
    List,
    /// Validate a module file without invoking it.
    Validate {
        /// Path to the module file.
        #[arg(required = true)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let module_dir = module_dir(args.module_dir.clone());

    match args.command {
        Some(Command::Greet { language }) => run_greet(language, module_dir),
        Some(Command::List) => run_list(&module_dir),
        Some(Command::Validate { path }) => run_validate(&path),
        None => run_greet(args.language, module_dir),
    }
}

/// Initialize logging: compact human format by default, JSON when
/// POLYGLOT_LOG_JSON is set.
fn init_logging(verbose: bool) {
    let json_logging = std::env::var(env_vars::LOG_JSON)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    }
}

/// Resolve the selector, load the module and invoke its greeting.
fn run_greet(language: Option<String>, module_dir: PathBuf) -> Result<()> {
    let language = language.unwrap_or_else(|| defaults::LANGUAGE.to_string());
    let registry = ModuleRegistry::new(module_dir);

    let path = match registry.resolve(&language) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Known languages: {}", registry.languages().join(", "));
            std::process::exit(1);
        }
    };

    tracing::debug!(language = %language, path = %path.display(), "resolved module");

    let loader = ModuleLoader::new();
    let greeter = loader.load(&path)?;
    greeter.greet();

    Ok(())
}

/// List discovered modules.
fn run_list(module_dir: &Path) -> Result<()> {
    let loader = ModuleLoader::new();
    let modules = loader.discover(module_dir);

    println!("Discovered Modules");
    println!("==================\n");

    if modules.is_empty() {
        println!("  No modules found.");
        println!();
        println!("  Searched in:");
        println!("    - {}", module_dir.display());
    } else {
        for info in &modules {
            println!("  {}", info.language);
            println!("    Path: {}", info.path.display());
            println!();
        }
        println!("Total: {} module(s)", modules.len());
    }

    Ok(())
}

/// Validate a module file: open, look up and assert, but do not invoke.
fn run_validate(path: &Path) -> Result<()> {
    let loader = ModuleLoader::new();

    match loader.load(path) {
        Ok(greeter) => {
            let info = greeter.info();

            println!("Module Validation: PASSED");
            println!();
            println!("Language:    {}", info.language);
            println!("ABI:         {}", info.abi_version);
            println!("Path:        {}", info.path.display());

            Ok(())
        }
        Err(e) => {
            println!("Module Validation: FAILED");
            println!();
            println!("Error: {}", e);
            println!();
            println!("Make sure:");
            println!("  1. The module file exists");
            println!("  2. The file has a .{} extension", platform_extension());
            println!("  3. The module was built against the current greeter ABI");

            std::process::exit(1);
        }
    }
}
