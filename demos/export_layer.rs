//! Basic export example.
//!
//! Creates a CSV export job for a layer, waits for the archive to be built,
//! and downloads it to a temp file.
//!
//! Run with: `KOORDINATES_API_KEY=your-key cargo run --example export_layer`

use koordinates::{Client, ExportState};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), koordinates::Error> {
    // Create a client for your site with your API key
    let api_key = std::env::var("KOORDINATES_API_KEY").expect("KOORDINATES_API_KEY must be set");
    let host = std::env::var("KOORDINATES_HOST")
        .unwrap_or_else(|_| "https://labs.koordinates.com".into());
    let layer_id: u64 = std::env::var("KOORDINATES_LAYER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(50614);

    let client = Client::builder(host, api_key).build()?;

    // Kick off the export job
    let export = client.generate_export(layer_id).await?;
    println!("created export {} ({})", export.id, export.name);

    // Poll until the archive is ready, then download it
    loop {
        let details = client.get_export_details(export.id).await?;
        match details.state {
            ExportState::Complete => {
                let url = details
                    .download_url
                    .expect("complete exports have a download URL");
                let path = client.download_export(&url).await?;
                println!("archive saved to {}", path.display());
                break;
            }
            ExportState::Processing => {
                println!("processing... {:.0}%", details.progress * 100.0);
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
            state => {
                eprintln!("export ended in state {state:?}");
                break;
            }
        }
    }

    Ok(())
}
