use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use swagmodel_gen::{generate, io::DEFAULT_EXTENSION, load_model, select_package, write_document};
use swagmodel_util::GeneratorConfig;
use tracing::{error, info};

/// Generate a Swagger document from a stereotyped design model.
#[derive(Parser, Debug)]
#[command(name = "swagmodel", version, about)]
struct Args {
    /// Model export (JSON or YAML)
    model: PathBuf,

    /// Package to generate, as a `/`-separated path below the model root
    #[arg(long, short)]
    package: Option<String>,

    /// Directory to write the document to (defaults to the model's directory)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// File extension of the written document
    #[arg(long)]
    extension: Option<String>,

    /// Print the document instead of writing it
    #[arg(long)]
    stdout: bool,
}

/// CLI entry point
fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = GeneratorConfig::load();
    match run(args, config) {
        Ok(Some(written)) => {
            info!(path = %written.display(), "generation complete");
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(error) => {
            error!(error = %format!("{error:#}"), "generation failed");
            Err(error)
        }
    }
}

/// Generates the selected package. Returns the written path, or `None` when
/// the document went to stdout.
fn run(args: Args, config: GeneratorConfig) -> Result<Option<PathBuf>> {
    let Args {
        model,
        package,
        output_dir,
        extension,
        stdout,
    } = args;

    let root = load_model(&model).with_context(|| format!("load model {}", model.display()))?;
    let selected = select_package(&root, package.as_deref())?;
    let document = generate(selected).with_context(|| format!("generate package '{}'", selected.name))?;

    if stdout {
        print!("{}", document.text);
        return Ok(None);
    }

    let output_dir = output_dir
        .or_else(|| config.output_dir())
        .unwrap_or_else(|| model_directory(&model));
    let extension = extension
        .or(config.extension)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let written = write_document(&document, &output_dir, &extension)?;
    Ok(Some(written))
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Directory holding the model file; documents land next to it by default.
fn model_directory(model: &Path) -> PathBuf {
    model
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
