//! ganttgrid CLI - Gantt chart grid renderer
//!
//! Command-line interface for validating, rendering, and exporting charts.

mod raster;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ganttgrid_core::{ChartConfig, Page};
use ganttgrid_render::{
    load_chart, Exporter, DEFAULT_CONTAINER_ID, DEFAULT_EXPORT_FILENAME,
};
use raster::CommandRasterizer;

#[derive(Parser)]
#[command(name = "ganttgrid")]
#[command(author, version, about = "Gantt chart grid renderer", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a chart configuration
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Render a chart to HTML markup
    Render {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Container id the chart mounts into
        #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
        container_id: String,
    },

    /// Export a chart as a PNG image
    Export {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILENAME)]
        output: PathBuf,

        /// Container id the chart mounts into
        #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
        container_id: String,

        /// External rasterization command (markup on stdin, PNG on stdout)
        #[arg(long, env = "GANTTGRID_RASTERIZER")]
        rasterizer: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check(&file),
        Commands::Render {
            file,
            output,
            container_id,
        } => render(&file, output.as_deref(), &container_id),
        Commands::Export {
            file,
            output,
            container_id,
            rasterizer,
        } => export(&file, &output, &container_id, rasterizer.as_deref()),
    }
}

fn check(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let config = ChartConfig::from_json(&raw)
        .with_context(|| format!("invalid chart config in {}", file.display()))?;

    let tasks: usize = config.swimlanes.iter().map(|lane| lane.tasks.len()).sum();
    println!(
        "{}: ok ({} weeks, {} swimlanes, {} tasks)",
        file.display(),
        config.weeks,
        config.swimlanes.len(),
        tasks
    );
    Ok(())
}

fn render(file: &Path, output: Option<&Path>, container_id: &str) -> Result<()> {
    let mut page = Page::new();
    page.insert(container_id);
    load_chart(&mut page, file, container_id)?;

    let markup = page
        .get(container_id)
        .map(ToString::to_string)
        .unwrap_or_default();

    match output {
        Some(out) => {
            std::fs::write(out, &markup)
                .with_context(|| format!("cannot write {}", out.display()))?;
            println!("wrote {}", out.display());
        }
        None => println!("{markup}"),
    }
    Ok(())
}

fn export(
    file: &Path,
    output: &Path,
    container_id: &str,
    rasterizer: Option<&str>,
) -> Result<()> {
    let mut page = Page::new();
    page.insert(container_id);
    load_chart(&mut page, file, container_id)?;

    let exporter = match rasterizer {
        Some(command) => Exporter::with_rasterizer(Box::new(CommandRasterizer::new(command))),
        None => Exporter::new(),
    };

    exporter
        .export_as_png(&page, container_id, output)
        .context("image export failed")?;
    println!("wrote {}", output.display());
    Ok(())
}
