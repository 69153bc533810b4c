use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use quill_convert::{build_style_manager, convert_to_path, ConvertOptions, InputFormat};

#[derive(Parser)]
#[command(
    name = "quill",
    version,
    about = "Convert Markdown and plain text files to styled DOCX documents"
)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SourceFormat {
    Markdown,
    Text,
}

impl From<SourceFormat> for InputFormat {
    fn from(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Markdown => InputFormat::Markdown,
            SourceFormat::Text => InputFormat::PlainText,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file to DOCX
    Convert {
        /// Path to the Markdown or plain text input file
        file: String,

        /// Output path (default: input path with a .docx extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Built-in style template to apply
        #[arg(long, default_value = "academic-paper")]
        template: String,

        /// Path to a JSON file with per-style overrides
        #[arg(long)]
        styles: Option<String>,

        /// How to interpret the input
        #[arg(long, value_enum, default_value = "markdown")]
        format: SourceFormat,
    },

    /// List the built-in style templates
    Templates,

    /// Print the effective style configuration as JSON
    Styles {
        /// Apply a template before printing
        #[arg(long)]
        template: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            file,
            output,
            template,
            styles,
            format,
        } => {
            handle_convert(
                &file,
                output.as_deref(),
                template,
                styles.as_deref(),
                format,
                cli.quiet,
            )?;
        }
        Commands::Templates => {
            handle_templates();
        }
        Commands::Styles { template } => {
            handle_styles(template.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn handle_convert(
    file: &str,
    output: Option<&str>,
    template: String,
    styles: Option<&str>,
    format: SourceFormat,
    quiet: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let custom_styles = match styles {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path, e))?,
        ),
        None => None,
    };

    let out_path = match output {
        Some(path) => PathBuf::from(path),
        None => Path::new(file).with_extension("docx"),
    };

    let options = ConvertOptions {
        template: Some(template),
        custom_styles,
        format: format.into(),
    };
    convert_to_path(&content, &out_path, &options)
        .map_err(|e| anyhow::anyhow!("Error converting document: {}", e))?;

    if !quiet {
        println!("{} {}", "Created".green(), out_path.display());
    }
    Ok(())
}

fn handle_templates() {
    println!("{}", "Available templates:".bold());
    for (name, description) in quill_convert::TEMPLATES {
        println!("  {}  {}", name.green(), description.dimmed());
    }
}

fn handle_styles(template: Option<&str>) -> Result<()> {
    let manager = build_style_manager(template, None)?;
    println!("{}", manager.export_config());
    Ok(())
}
