mod dataset;
mod extract;
mod ollama;
mod pdf;
mod prompt;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(
    name = "pdf_dataset",
    about = "Build a Persian instruction-tuning dataset from a PDF via a local Ollama model"
)]
struct Cli {
    /// Path to the input PDF
    pdf_path: PathBuf,

    /// Output JSON file
    #[arg(long, default_value = "dataset.json")]
    output: PathBuf,

    /// Ollama model name
    #[arg(long, default_value = "aya-expanse-8b-IQ2_M")]
    model: String,

    /// Ollama server base URL
    #[arg(long, default_value = "http://localhost:11434")]
    host: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    if !cli.pdf_path.exists() {
        error!("PDF file not found: {}", cli.pdf_path.display());
        return Ok(());
    }

    info!("Connecting to Ollama at {} (model {})...", cli.host, cli.model);
    let client = ollama::OllamaClient::new(&cli.host, &cli.model)?;
    if !client.health_check().await {
        error!("Cannot reach Ollama at {}", cli.host);
        info!("Make sure Ollama is running and the model is installed:");
        info!("ollama pull {}", client.model());
        return Ok(());
    }

    info!("Extracting text from {}...", cli.pdf_path.display());
    let pages = match pdf::load_pages(&cli.pdf_path) {
        Ok(pages) if !pages.is_empty() => pages,
        Ok(_) => {
            error!("No text extracted from the PDF");
            return Ok(());
        }
        Err(e) => {
            error!("PDF extraction failed: {:#}", e);
            return Ok(());
        }
    };

    info!("Generating dataset for {} pages...", pages.len());
    let records = run_pipeline(&client, &pages).await;

    info!("Total records extracted: {}", records.len());
    if let Err(e) = dataset::save_dataset(&cli.output, &records) {
        error!("Failed to save dataset: {:#}", e);
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

/// Sequential page loop: prompt → generate → extract, accumulating records.
/// A generator failure skips that page and the loop continues.
async fn run_pipeline(client: &ollama::OllamaClient, pages: &[pdf::Page]) -> Vec<dataset::Record> {
    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages (eta {eta})")
            .unwrap()
            .progress_chars("=> "),
    );

    let mut records = Vec::new();
    for page in pages {
        let prompt = prompt::build_prompt(&page.content);
        match client.generate(&prompt).await {
            Ok(response) => {
                let page_records = extract::extract_records(&response);
                if !page_records.is_empty() {
                    info!(
                        "Extracted {} records from page {}",
                        page_records.len(),
                        page.number
                    );
                    records.extend(page_records);
                }
            }
            Err(e) => {
                warn!("Skipping page {}: {:#}", page.number, e);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    records
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
