//! Rust client for the Koordinates geospatial data export API.
//!
//! Koordinates sites publish geospatial layers that can be packaged into
//! downloadable archives by server-side export jobs. This crate covers that
//! surface: create an export job for a layer, list and inspect jobs, and
//! download a completed archive to a local temp file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use koordinates::{Client, ExportState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), koordinates::Error> {
//!     let client = Client::builder("https://labs.koordinates.com", "your-api-key").build()?;
//!
//!     let export = client.generate_export(50614).await?;
//!
//!     let details = client.get_export_details(export.id).await?;
//!     if details.state == ExportState::Complete {
//!         let url = details.download_url.expect("complete exports have a download URL");
//!         let path = client.download_export(&url).await?;
//!         println!("saved to {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod download;
mod error;
mod types;
mod version;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use types::*;
pub use version::{build_user_agent, SDK_VERSION};
