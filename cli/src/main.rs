//! draftkit CLI - raw rich-text document renderer

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use draftkit::render::{to_json, to_text};
use draftkit::{parse_file, BlockRenderer, ContentMap, JsonFormat, RenderOptions, UrlOpener};

#[derive(Parser)]
#[command(name = "draftkit")]
#[command(version)]
#[command(about = "Render raw rich-text documents to element trees and text", long_about = None)]
struct Cli {
    /// Input document (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Content map resolving media ids (JSON)
    #[arg(long, value_name = "FILE", env = "DRAFTKIT_CONTENT_MAP")]
    content_map: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to every output (elements JSON, text, stats)
    Convert {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Content map resolving media ids (JSON)
        #[arg(long, value_name = "FILE", env = "DRAFTKIT_CONTENT_MAP")]
        content_map: Option<PathBuf>,

        /// Container width in logical pixels
        #[arg(long, default_value = "375")]
        width: f32,
    },

    /// Render a document to an element tree (JSON)
    Render {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Content map resolving media ids (JSON)
        #[arg(long, value_name = "FILE", env = "DRAFTKIT_CONTENT_MAP")]
        content_map: Option<PathBuf>,

        /// Container width in logical pixels
        #[arg(long, default_value = "375")]
        width: f32,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render a document to plain text
    Text {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Content map resolving media ids (JSON)
        #[arg(long, value_name = "FILE", env = "DRAFTKIT_CONTENT_MAP")]
        content_map: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Content map resolving media ids (JSON)
        #[arg(long, value_name = "FILE", env = "DRAFTKIT_CONTENT_MAP")]
        content_map: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            content_map,
            width,
        }) => cmd_convert(&input, output.as_deref(), content_map.as_deref(), width),
        Some(Commands::Render {
            input,
            output,
            content_map,
            width,
            compact,
        }) => cmd_render(
            &input,
            output.as_deref(),
            content_map.as_deref(),
            width,
            compact,
        ),
        Some(Commands::Text {
            input,
            output,
            content_map,
        }) => cmd_text(&input, output.as_deref(), content_map.as_deref()),
        Some(Commands::Info { input, content_map }) => cmd_info(&input, content_map.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    cli.content_map.as_deref(),
                    RenderOptions::default().container_width,
                )
            } else {
                println!("{}", "Usage: draftkit <FILE> [OUTPUT]".yellow());
                println!("       draftkit --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Tap handlers are never invoked from the command line.
fn cli_opener() -> UrlOpener {
    Arc::new(|url: &str| info!("tap on {}", url))
}

fn load_content_map(path: Option<&Path>) -> draftkit::Result<ContentMap> {
    match path {
        Some(path) => ContentMap::from_file(path),
        None => Ok(ContentMap::new()),
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    content_map: Option<&Path>,
    width: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing document...");
    let doc = parse_file(input)?;
    let content = load_content_map(content_map)?;
    pb.inc(1);

    pb.set_message("Rendering...");
    let options = RenderOptions::new().with_container_width(width);
    let result = BlockRenderer::new(options, cli_opener()).render_with_stats(&doc, &content);
    pb.inc(1);

    pb.set_message("Writing elements...");
    let json = to_json(&result.elements, JsonFormat::Pretty)?;
    fs::write(output_dir.join("elements.json"), &json)?;
    pb.inc(1);

    pb.set_message("Writing text...");
    fs::write(output_dir.join("content.txt"), to_text(&result.elements))?;
    fs::write(
        output_dir.join("stats.json"),
        serde_json::to_string_pretty(&result.stats)?,
    )?;
    pb.inc(1);

    pb.finish_with_message(format!("Rendered {} elements", result.len()));

    println!("\n{}", "Output files:".green().bold());
    println!("  {} elements.json", "├─".dimmed());
    println!("  {} content.txt", "├─".dimmed());
    println!("  {} stats.json", "└─".dimmed());

    Ok(())
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    content_map: Option<&Path>,
    width: f32,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let content = load_content_map(content_map)?;

    let options = RenderOptions::new().with_container_width(width);
    let elements = BlockRenderer::new(options, cli_opener()).render(&doc, &content);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&elements, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    content_map: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let content = load_content_map(content_map)?;

    let elements = BlockRenderer::new(RenderOptions::default(), cli_opener()).render(&doc, &content);
    let text = to_text(&elements);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path, content_map: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let content = load_content_map(content_map)?;
    let result = BlockRenderer::new(RenderOptions::default(), cli_opener())
        .render_with_stats(&doc, &content);
    let stats = &result.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Entities".bold(), doc.entity_map.len());
    println!("{}: {}", "Content items".bold(), content.len());

    println!();
    println!("{}", "Render Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    println!("{}: {}", "Elements".bold(), stats.element_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Media".bold(), stats.media_count);
    println!("{}: {}", "Skipped blocks".bold(), stats.skipped_count);
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "draftkit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Raw rich-text document renderer");
    println!();
    println!("License: MIT");
}
