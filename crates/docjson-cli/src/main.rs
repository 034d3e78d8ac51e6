//! # docjson CLI
//!
//! Converts files into normalized JSON records.
//!
//! ## Commands
//!
//! - `docjson convert <ITEMS>` - run a batch from a JSON array of input items
//! - `docjson file <PATH>...` - convert local files
//! - `docjson classify <MIME> <FILE_NAME>` - show the detected category
//!
//! ## Examples
//!
//! ```bash
//! docjson file report.pdf prices.xlsx --separate-sheets true --pretty
//! docjson convert items.json --continue-on-failure true
//! RUST_LOG=docjson=debug docjson file scan.png --ocr-language deu
//! ```
//!
//! Configuration comes from `--config`, or a discovered `docjson.toml`, with
//! command-line flags applied on top. Records go to stdout, logs to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docjson::core::io::item_from_path;
use docjson::{ConfigOverrides, ConversionConfig, DocjsonError, InputItem, OutputItem, classify};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docjson")]
#[command(about = "Convert PDFs, Word files, spreadsheets, CSV, images, JSON and text into JSON records")]
#[command(version)]
struct Cli {
    /// Config file (.toml, .yaml, .yml or .json). Defaults to a discovered docjson.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: OverrideArgs,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Flags that take precedence over the config file.
#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Attachment name to read from each item
    #[arg(long, global = true)]
    binary_property: Option<String>,

    /// Add the source file name to every record
    #[arg(long, global = true)]
    include_file_name: Option<bool>,

    /// Label spreadsheet records with their sheet name
    #[arg(long, global = true)]
    include_sheet_name: Option<bool>,

    /// Add row numbers to spreadsheet and CSV rows
    #[arg(long, global = true)]
    include_row_numbers: Option<bool>,

    /// Emit one record per worksheet
    #[arg(long, global = true)]
    separate_sheets: Option<bool>,

    /// Record failures as {"error": ...} instead of stopping
    #[arg(long, global = true)]
    continue_on_failure: Option<bool>,

    /// Tesseract language code for images
    #[arg(long, global = true)]
    ocr_language: Option<String>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        ConfigOverrides {
            binary_property_name: args.binary_property,
            include_file_name: args.include_file_name,
            include_sheet_name: args.include_sheet_name,
            include_row_numbers: args.include_row_numbers,
            separate_sheets: args.separate_sheets,
            continue_on_failure: args.continue_on_failure,
            ocr_language: args.ocr_language,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON array of input items ("-" reads stdin)
    Convert {
        /// Items file
        items: PathBuf,
    },

    /// Convert files from disk
    File {
        /// Files to convert, in output order
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// MIME type for every file instead of guessing from the extension
        #[arg(short, long)]
        mime_type: Option<String>,
    },

    /// Print the format category for a MIME type and file name
    Classify {
        mime_type: String,
        file_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?.with_overrides(&cli.overrides.into());

    match cli.command {
        Commands::Convert { items } => {
            let items = read_items(&items)?;
            let output = convert(&items, &config).await?;
            print_json(&output, cli.pretty)
        }

        Commands::File { paths, mime_type } => {
            let mut items = Vec::with_capacity(paths.len());
            for path in &paths {
                let item = item_from_path(path, &config.binary_property_name, mime_type.as_deref())
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                items.push(item);
            }
            let output = convert(&items, &config).await?;
            print_json(&output, cli.pretty)
        }

        Commands::Classify { mime_type, file_name } => {
            println!("{}", classify(&mime_type, &file_name));
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explicit file, else discovered `docjson.toml`, else defaults.
fn load_config(path: Option<&Path>) -> Result<ConversionConfig> {
    if let Some(path) = path {
        return ConversionConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match ConversionConfig::discover().context("Failed to discover docjson.toml")? {
        Some(config) => {
            tracing::debug!("Using discovered config file");
            Ok(config)
        }
        None => Ok(ConversionConfig::default()),
    }
}

fn read_items(path: &Path) -> Result<Vec<InputItem>> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read items from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read items file {}", path.display()))?
    };

    parse_items(&content)
}

fn parse_items(content: &str) -> Result<Vec<InputItem>> {
    serde_json::from_str(content).context("Items must be a JSON array of {binary, parameters} objects")
}

async fn convert(items: &[InputItem], config: &ConversionConfig) -> Result<Vec<OutputItem>> {
    match docjson::run(items, config).await {
        Ok(output) => Ok(output),
        Err(DocjsonError::BatchAborted {
            item_index,
            completed,
            source,
        }) => {
            tracing::warn!(completed = completed.len(), "Batch stopped at item {}", item_index);
            Err(anyhow::Error::new(*source).context(format!("Item {} failed", item_index)))
        }
        Err(other) => Err(other.into()),
    }
}

fn print_json(output: &[OutputItem], pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };
    println!("{}", json);
    Ok(())
}
