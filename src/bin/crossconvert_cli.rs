//! Cross Convert CLI - writes the generated header
//!
//! Commands: generate, check
//! Manifests and errors are JSON on stdout, logs go to stderr
//! When the header itself goes to stdout, the manifest goes to stderr
//! Returns non-zero on any generation failure

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crossconvert_core::{GenerateError, GenerationPipeline, GeneratorConfig};

#[derive(Parser)]
#[command(name = "crossconvert-cli")]
#[command(about = "Cross Convert CLI - BidirectionalTypeMap header generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON generator configuration (defaults to the built-in tf2 set)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header
    Generate {
        /// Output file, `-` for stdout
        output: PathBuf,

        /// Print the generation manifest as JSON (to stderr when OUTPUT is `-`)
        #[arg(short, long)]
        manifest: bool,
    },

    /// Build and render without writing, print the manifest
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            print_json(&serde_json::json!({
                "success": false,
                "error": format!("Failed to load configuration: {}", e),
            }));
            return ExitCode::FAILURE;
        }
    };

    let pipeline = GenerationPipeline::new(config);
    let header = match pipeline.generate() {
        Ok(h) => h,
        Err(e) => {
            print_json(&serde_json::json!({ "success": false, "error": e.to_string() }));
            return ExitCode::from(2);
        }
    };

    match cli.command {
        Commands::Generate { output, manifest } => {
            if let Err(e) = write_output(&output, &header.text) {
                print_json(&serde_json::json!({
                    "success": false,
                    "error": format!("Failed to write {}: {}", output.display(), e),
                }));
                return ExitCode::FAILURE;
            }
            log::info!("wrote {}", output.display());
            if manifest {
                let value = serde_json::json!({ "success": true, "manifest": header.manifest });
                if is_stdout(&output) {
                    eprint_json(&value);
                } else {
                    print_json(&value);
                }
            }
            ExitCode::SUCCESS
        }

        Commands::Check => {
            print_json(&serde_json::json!({ "success": true, "manifest": header.manifest }));
            ExitCode::SUCCESS
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, GenerateError> {
    match path {
        Some(p) => GeneratorConfig::load(p),
        None => GeneratorConfig::builtin(),
    }
}

/// Hands the complete text to the destination in one write.
fn write_output(output: &Path, text: &str) -> io::Result<()> {
    if is_stdout(output) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    } else {
        fs::write(output, text)
    }
}

fn is_stdout(output: &Path) -> bool {
    output == Path::new("-")
}

fn eprint_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => eprintln!("{}", s),
        Err(e) => eprintln!("failed to encode output: {}", e),
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("failed to encode output: {}", e),
    }
}
