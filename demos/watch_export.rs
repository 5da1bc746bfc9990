//! Export walkthrough with a progress bar.
//!
//! Lists recent exports, creates a new CSV export job, renders its progress
//! with indicatif, and downloads the finished archive.
//!
//! Run with: `KOORDINATES_API_KEY=your-key cargo run --example watch_export`

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use koordinates::{Client, ExportState};
use std::time::Duration;

fn get_api_key() -> String {
    std::env::var("KOORDINATES_API_KEY")
        .expect("KOORDINATES_API_KEY environment variable is required")
}
fn get_host() -> String {
    std::env::var("KOORDINATES_HOST").unwrap_or_else(|_| "https://labs.koordinates.com".into())
}
const DEFAULT_LAYER_ID: u64 = 50614;

fn success(text: &str) {
    println!("{} {}", "✔".green(), text);
}

fn error(text: &str) {
    println!("{} {}", "✖".red(), text);
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos:>3}% {msg}")
            .unwrap(),
    );
    pb
}

#[tokio::main]
async fn main() -> Result<(), koordinates::Error> {
    let client = Client::builder(get_host(), get_api_key()).build()?;

    let layer_id: u64 = std::env::var("KOORDINATES_LAYER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LAYER_ID);

    // Show what the account already has
    println!("{}", "Recent exports".bold());
    let exports = client.list_exports().await?;
    for export in exports.iter().take(5) {
        println!(
            "  #{} {} [{:?}]",
            export.id,
            export.name.dimmed(),
            export.state
        );
    }

    // Create the new job and watch it
    let export = client.generate_export(layer_id).await?;
    success(&format!("created export #{} ({})", export.id, export.name));

    let pb = progress_bar();
    pb.set_message("building archive");

    let download_url = loop {
        let details = client.get_export_details(export.id).await?;
        pb.set_position((details.progress * 100.0) as u64);

        match details.state {
            ExportState::Complete => {
                pb.finish_with_message("archive ready");
                break details
                    .download_url
                    .expect("complete exports have a download URL");
            }
            ExportState::Processing => {
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
            state => {
                pb.abandon_with_message("export did not complete");
                error(&format!("export ended in state {state:?}"));
                return Ok(());
            }
        }
    };

    let path = client.download_export(&download_url).await?;
    success(&format!("archive saved to {}", path.display()));

    Ok(())
}
