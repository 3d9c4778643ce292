//! fsutils - File listing and delimited table tool

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indexmap::IndexMap;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use fsutils::config::{OutputFormat, TableOptions};
use fsutils::formats::{read_json, read_yaml};
use fsutils::output::{render_to_stdout, JsonLinesOutput};
use fsutils::{append_table, fs, read_table, write_table, CellValue, Row, TableReader};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Table,
    Json,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Jsonl => OutputFormat::JsonLines,
        }
    }
}

/// File listing and delimited table tool
#[derive(Parser, Debug)]
#[command(name = "fsutils")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List files in a directory, sorted
    Ls {
        dir: PathBuf,

        /// Only keep files with this extension (without the dot)
        #[arg(long)]
        ext: Option<String>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Print the rows of a table file
    Read {
        file: PathBuf,

        #[command(flatten)]
        table: TableArgs,

        /// Skip lines starting with this prefix (ignored with --stream)
        #[arg(long)]
        comment: Option<String>,

        /// Read one line at a time; empty fields are kept as ""
        #[arg(long)]
        stream: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: CliOutputFormat,
    },

    /// Write rows from a JSON or YAML array of objects to a table file
    Write {
        input: PathBuf,
        output: PathBuf,

        /// Leading columns, in order (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Append rows from a JSON or YAML array of objects to a table file
    Append {
        input: PathBuf,
        output: PathBuf,

        /// Field delimiter (`\t` is accepted for a tab)
        #[arg(short, long, default_value = "\t", value_parser = parse_delimiter)]
        delimiter: String,
    },
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Field delimiter (`\t` is accepted for a tab)
    #[arg(short, long, default_value = "\t", value_parser = parse_delimiter)]
    delimiter: String,

    /// The file has no header line
    #[arg(long)]
    no_header: bool,
}

impl TableArgs {
    fn options(&self) -> TableOptions {
        TableOptions::new()
            .with_delimiter(self.delimiter.clone())
            .with_header(!self.no_header)
    }
}

fn parse_delimiter(s: &str) -> std::result::Result<String, String> {
    let delimiter = s.replace("\\t", "\t");
    if delimiter.is_empty() {
        return Err("delimiter must not be empty".to_string());
    }
    Ok(delimiter)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FSUTILS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Ls {
            dir,
            ext,
            recursive,
        } => {
            let files = fs::list_files(&dir, ext.as_deref(), recursive)
                .with_context(|| format!("Failed to list directory: {}", dir.display()))?;
            let mut stdout = std::io::stdout().lock();
            for file in files {
                writeln!(stdout, "{}", file.display())?;
            }
        }
        Command::Read {
            file,
            table,
            comment,
            stream,
            format,
        } => {
            let mut options = table.options();
            if let Some(prefix) = comment {
                options = options.with_comment_prefix(prefix);
            }
            read_command(&file, &options, stream, format.into())
                .with_context(|| format!("Failed to read table: {}", file.display()))?;
        }
        Command::Write {
            input,
            output,
            columns,
            table,
        } => {
            let rows = load_rows(&input)?;
            write_table(&rows, &output, &columns, &table.options())
                .with_context(|| format!("Failed to write table: {}", output.display()))?;
            tracing::info!(rows = rows.len(), path = %output.display(), "table written");
        }
        Command::Append {
            input,
            output,
            delimiter,
        } => {
            let rows = load_rows(&input)?;
            let options = TableOptions::new().with_delimiter(delimiter);
            append_table(&rows, &output, &options)
                .with_context(|| format!("Failed to append to table: {}", output.display()))?;
            tracing::info!(rows = rows.len(), path = %output.display(), "rows appended");
        }
    }

    Ok(())
}

fn read_command(
    file: &Path,
    options: &TableOptions,
    stream: bool,
    format: OutputFormat,
) -> Result<()> {
    if !stream {
        let records = read_table(file, options)?;
        return render_to_stdout(&records, format);
    }

    let reader = TableReader::open(file, options)?;
    if format == OutputFormat::JsonLines {
        let output = JsonLinesOutput;
        let mut stdout = std::io::stdout().lock();
        for record in reader {
            output.write_record(&record?, &mut stdout)?;
        }
        return Ok(());
    }

    let records = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    render_to_stdout(&records, format)
}

/// Load rows from a JSON or YAML array of objects
fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let objects = match ext.as_str() {
        "yaml" | "yml" => read_yaml::<Vec<IndexMap<String, Value>>>(path),
        _ => read_json::<Vec<IndexMap<String, Value>>>(path),
    }
    .with_context(|| format!("Failed to load rows from: {}", path.display()))?;

    Ok(objects
        .into_iter()
        .map(|object| {
            object
                .into_iter()
                .map(|(key, value)| (key, CellValue::from(value)))
                .collect()
        })
        .collect())
}
