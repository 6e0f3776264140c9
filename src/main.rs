use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use tmd::document::io::{
    create_document_file, date_stem, new_document_text, save_document, unique_tmd_path,
};
use tmd::document::{MatchLocation, generate_outline, load_document, search_document};
use tmd::export::export_document;
use tmd::{Config, ExportFormat, serialize};

#[derive(Parser, Debug)]
#[command(name = "tmd")]
#[command(about = "Format, inspect and export .tmd workout logs")]
#[command(version)]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and re-serialize a file into normal form
    Fmt {
        file: PathBuf,
        /// Write the result back instead of printing it
        #[arg(short, long)]
        write: bool,
    },
    /// Export a file to another format
    Export {
        file: PathBuf,
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },
    /// Search exercise names, notes and cells
    Search { file: PathBuf, query: String },
    /// List exercises with their set counts
    Outline { file: PathBuf },
    /// Create a new file named after today's date
    New {
        /// Directory to create the file in
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// File name without extension, instead of the date
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show the active configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "tmd=debug" } else { "tmd=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn create_new_file(dir: &Path, name: Option<String>, config: &Config) -> Result<PathBuf> {
    if !dir.is_dir() {
        bail!("Not a directory: {}", dir.display());
    }

    let stem = match name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        Some(_) => bail!("File name cannot be empty"),
        None => date_stem(
            chrono::Local::now().date_naive(),
            &config.new_file.date_format,
        )?,
    };

    let path = unique_tmd_path(dir, &stem);
    create_document_file(&path, &new_document_text(config)).await?;
    Ok(path)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Command::Fmt { file, write } => {
            let document = load_document(&file).await?;
            if write {
                save_document(&file, &document).await?;
            } else {
                print!("{}", serialize(&document));
            }
        }
        Command::Export { file, format } => {
            let document = load_document(&file).await?;
            let format = format.unwrap_or(config.export.default_format);
            print!("{}", export_document(&document, format)?);
        }
        Command::Search { file, query } => {
            let document = load_document(&file).await?;
            let results = search_document(&document, &query);
            if results.is_empty() {
                println!("No matches for '{query}'");
            }
            for result in results {
                let exercise = &document.exercises[result.exercise_index].name;
                let location = match result.location {
                    MatchLocation::Name => "name".to_string(),
                    MatchLocation::Note => "note".to_string(),
                    MatchLocation::Cell { row, column } => format!("row {row}, column {column}"),
                };
                println!("{exercise} ({location}): {}", result.text);
            }
        }
        Command::Outline { file } => {
            let document = load_document(&file).await?;
            if let Some(title) = document.title.as_deref().filter(|title| !title.is_empty()) {
                println!("{title}");
            }
            for item in generate_outline(&document) {
                println!("{:>3}. {} ({} sets)", item.exercise_index + 1, item.name, item.set_count);
            }
        }
        Command::New { dir, name } => {
            let path = create_new_file(&dir, name, &config).await?;
            println!("{}", path.display());
        }
        Command::Config { init } => {
            if init {
                Config::init_default()?;
                if let Some(path) = Config::get_config_path() {
                    println!("Wrote {}", path.display());
                }
            } else {
                print!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}
