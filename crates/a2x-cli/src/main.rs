use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use a2x::{Config, Schema, Value, XmlDocument};

#[derive(Debug, Parser)]
#[command(
    name = "a2x",
    version,
    about = "Convert JSON data to XML, guided by a position schema"
)]
struct Args {
    /// Input JSON file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Schema JSON file
    #[arg(short, long, value_name = "SCHEMA")]
    schema: Option<PathBuf>,
    /// Version written in the XML declaration
    #[arg(long, default_value = "1.0")]
    xml_version: String,
    /// Encoding written in the XML declaration
    #[arg(long, default_value = "UTF-8")]
    encoding: String,
    /// Maximum nesting depth (0 means unlimited)
    #[arg(long, default_value_t = 0)]
    max_depth: u16,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();

    let input_data = read_input(args.input.as_deref())?;
    let value: Value = serde_json::from_str(&input_data).context("input is not valid JSON")?;

    let schema = args.schema.as_deref().map(read_schema).transpose()?;

    let config = Config::new(args.xml_version, args.encoding).with_max_depth(args.max_depth);
    let doc = XmlDocument::with_config(&value, schema.as_ref(), &config)
        .context("failed to convert input to XML")?;

    write_output(args.output.as_deref(), doc.as_xml().as_bytes())?;
    Ok(())
}

fn read_schema(path: &Path) -> Result<Schema> {
    info!(path = %path.display(), "loading schema");
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let schema: Schema = serde_json::from_str(&raw)
        .with_context(|| format!("schema file {} is not valid JSON", path.display()))?;
    debug!(empty = schema.is_empty(), "schema loaded");
    Ok(schema)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
