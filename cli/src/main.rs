//! unscan CLI - document reconstruction and export tool
//!
//! Consumes recorded perception observations (JSON files holding the
//! region, table-grid, and text-line detections of each page) and exports
//! the reconstructed document in the requested format. Running the
//! perception models themselves is out of scope here; any backend that
//! can produce observation files can feed this tool.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tempfile::NamedTempFile;

use unscan::analyzer::collect_source_files;
use unscan::{
    Document, DocumentAnalyzer, Error, ExportOptions, OutputFormat, PageObservation,
};

#[derive(Parser)]
#[command(name = "unscan")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reconstruct and export scanned-document analysis results", long_about = None)]
struct Cli {
    /// Observation file (JSON array of page observations) or a directory
    /// of observation files
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output format: json, csv, html, md/markdown, vertical, horizontal
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output directory
    #[arg(short, long, default_value = "results", value_name = "DIR")]
    outdir: PathBuf,

    /// Strip line breaks from recognized contents in the output
    #[arg(long)]
    ignore_line_break: bool,

    /// Export cropped figure images (requires --images)
    #[arg(long)]
    figure: bool,

    /// Also export crops of text lines inside each figure
    #[arg(long)]
    figure_letter: bool,

    /// Width of exported figure thumbnails in pixels
    #[arg(long, default_value = "200")]
    figure_width: u32,

    /// Directory to save figure images
    #[arg(long, default_value = "figures", value_name = "DIR")]
    figure_dir: PathBuf,

    /// Page images backing the observation file, one per page in order
    #[arg(long, value_name = "FILE", num_args = 1..)]
    images: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = if cli.input.is_dir() {
        run_batch(&cli)
    } else {
        run_single(&cli)
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn export_options(cli: &Cli) -> ExportOptions {
    ExportOptions::new()
        .with_ignore_line_break(cli.ignore_line_break)
        .with_figures(cli.figure)
        .with_figure_letters(cli.figure_letter)
        .with_figure_width(cli.figure_width)
        .with_figure_dir(cli.figure_dir.clone())
}

fn run_single(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format: OutputFormat = cli.format.parse()?;
    let options = export_options(cli);
    fs::create_dir_all(&cli.outdir)?;

    let started = Instant::now();
    let out_path = process_file(&cli.input, cli, format, &options)?;
    println!(
        "{} {} ({:.2}s)",
        "Saved to".green(),
        out_path.display(),
        started.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_batch(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format: OutputFormat = cli.format.parse()?;
    let options = export_options(cli);
    fs::create_dir_all(&cli.outdir)?;

    if !cli.images.is_empty() {
        log::warn!("--images applies to single-file runs only; ignoring");
    }

    let files: Vec<PathBuf> = collect_source_files(&cli.input)?
        .into_iter()
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // One file's failure is recorded and the batch carries on.
    let mut failures = 0usize;
    for path in &files {
        pb.set_message(path.display().to_string());
        let started = Instant::now();
        match process_file(path, cli, format, &options) {
            Ok(out_path) => {
                pb.println(format!(
                    "{} {} -> {} ({:.2}s)",
                    "ok".green(),
                    path.display(),
                    out_path.display(),
                    started.elapsed().as_secs_f64()
                ));
            }
            Err(e) => {
                failures += 1;
                pb.println(format!("{} {}: {}", "failed".red(), path.display(), e));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let succeeded = files.len() - failures;
    println!(
        "{}: {} succeeded, {} failed",
        "Batch complete".green().bold(),
        succeeded,
        failures
    );

    Ok(())
}

fn process_file(
    path: &Path,
    cli: &Cli,
    format: OutputFormat,
    options: &ExportOptions,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let doc = load_document(path)?;

    let output = if cli.images.is_empty() {
        unscan::export(&doc, format, options)?
    } else {
        let images = load_images(&cli.images)?;
        unscan::export_with_images(&doc, &images, format, options)?
    };

    write_output(&cli.outdir, path, format, &output)
}

/// Reconstruct a document from a recorded observation file.
fn load_document(path: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    let observations: Vec<PageObservation> = serde_json::from_str(&data)?;

    let pages = observations
        .into_iter()
        .enumerate()
        .map(|(index, observation)| {
            DocumentAnalyzer::reconstruct_page(observation, index)
                .map_err(|e| Error::page_failure(index, e))
        })
        .collect::<unscan::Result<Vec<_>>>()?;

    Ok(Document::from_pages(pages))
}

fn load_images(paths: &[PathBuf]) -> Result<Vec<image::RgbImage>, Box<dyn std::error::Error>> {
    paths
        .iter()
        .map(|p| Ok(image::open(p)?.to_rgb8()))
        .collect()
}

/// Stage the export in a temp file and persist it atomically, so a failed
/// write never leaves partial output behind.
fn write_output(
    outdir: &Path,
    source: &Path,
    format: OutputFormat,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let out_path = outdir.join(format!("{}.{}", stem, format.extension()));

    let mut staged = NamedTempFile::new_in(outdir)?;
    staged.write_all(content.as_bytes())?;
    staged.persist(&out_path)?;

    log::info!("wrote {}", out_path.display());
    Ok(out_path)
}
