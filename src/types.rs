//! API types for the Koordinates client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coordinate reference system requested for generated exports.
pub const EXPORT_CRS: &str = "EPSG:4326";

/// Vector format requested for generated exports.
pub const EXPORT_VECTOR_FORMAT: &str = "text/csv";

/// Lifecycle state of an export job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportState {
    /// Archive is built and ready to download.
    Complete,
    /// Job is still being processed.
    Processing,
    /// Job failed on the service side.
    Error,
    /// Archive expired and is no longer downloadable.
    Gone,
    /// Job was cancelled.
    Cancelled,
}

/// Summary record for an export job, as returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSummary {
    /// Export job ID.
    pub id: u64,
    /// Export name.
    pub name: String,
    /// Current job state.
    pub state: ExportState,
    /// Archive download URL, present once the job is complete.
    pub download_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// How the export was requested (the service sends `"web"`).
    pub created_via: String,
    /// Self-referential URL for this export.
    pub url: String,
}

/// Full export job record.
#[derive(Debug, Clone, Deserialize)]
pub struct Export {
    /// Export job ID.
    pub id: u64,
    /// Export name.
    pub name: String,
    /// Current job state.
    pub state: ExportState,
    /// Archive download URL, present once the job is complete.
    pub download_url: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// How the export was requested.
    pub created_via: String,
    /// Self-referential URL for this export.
    pub url: String,
    /// Account that requested the export.
    pub user: User,
    /// Delivery mechanism.
    pub delivery: Delivery,
    /// Items included in the export.
    pub items: Vec<ExportItem>,
    /// Coordinate reference system of the output.
    pub crs: CrsDescriptor,
    /// Cropping extent; `null` for whole-layer exports.
    pub extent: Option<Value>,
    /// Output formats by data kind.
    pub formats: ExportFormats,
    /// Service-defined export options.
    pub options: Option<Value>,
    /// Estimated unzipped size in bytes.
    pub size_estimate_unzipped: u64,
    /// Final zipped size in bytes, once complete.
    pub size_complete_zipped: Option<u64>,
    /// Final unzipped size in bytes, once complete.
    pub size_complete_unzipped: Option<u64>,
    /// Whether the export was cropped to an extent.
    pub is_cropped: bool,
    /// Invoice reference; always `null` on this API surface.
    pub invoice: Option<Value>,
    /// Site the export was generated from.
    pub from: Provenance,
    /// Completion fraction in `[0, 1]`.
    pub progress: f64,
    /// When the archive was downloaded.
    pub downloaded_at: Option<String>,
    /// When the job finished.
    pub finished_at: Option<String>,
}

/// Account metadata embedded in [`Export`] responses.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// User ID.
    pub id: u64,
    /// Self-referential URL for this user.
    pub url: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Country code.
    pub country: String,
    /// Geotag URI.
    pub geotag: String,
    /// Email address.
    pub email: String,
    /// Whether the account is locked.
    pub is_locked: bool,
    /// Whether the account is a site administrator.
    pub is_site_admin: bool,
    /// Seat type.
    pub seat_type: String,
    /// When the account was created.
    pub date_joined: String,
}

/// How a completed export is delivered (the service sends `"download"`).
#[derive(Debug, Clone, Deserialize)]
pub struct Delivery {
    /// Delivery method.
    pub method: String,
}

/// A single item packaged into an export.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportItem {
    /// URL of the exported layer or table.
    pub item: String,
    /// Display colour.
    pub color: String,
    /// Display title.
    pub title: String,
    /// Full output format name.
    pub format: String,
    /// Short output format name.
    pub short_format: String,
    /// Data type identifier.
    pub data_type: String,
    /// Human-readable data type.
    pub data_type_label: String,
}

/// Coordinate reference system descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct CrsDescriptor {
    /// CRS identifier, e.g. `EPSG:4326`.
    pub id: String,
    /// Self-referential URL.
    pub url: String,
    /// Human-readable name.
    pub name: String,
    /// CRS kind.
    pub kind: String,
    /// Horizontal unit.
    pub unit_horizontal: String,
    /// Vertical unit.
    pub unit_vertical: String,
    /// External reference URL.
    pub url_external: String,
    /// Horizontal component; `null` for plain geographic systems.
    pub component_horizontal: Option<Value>,
    /// Vertical component; `null` for plain geographic systems.
    pub component_vertical: Option<Value>,
    /// Spatial reference ID.
    pub srid: u32,
}

/// Output formats by data kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportFormats {
    /// Vector output MIME type.
    pub vector: String,
}

/// Site the export originates from.
#[derive(Debug, Clone, Deserialize)]
pub struct Provenance {
    /// Site name.
    pub name: String,
    /// Site domain.
    pub domain: String,
    /// Owning organisation.
    pub owner: String,
    /// Short owner name.
    pub owner_short: String,
    /// Copyright statement.
    pub copyright: String,
}

/// Request body for creating an export job.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExport {
    /// Coordinate reference system for the output.
    pub crs: String,
    /// Layers or tables to include.
    pub items: Vec<CreateExportItem>,
    /// Requested output formats.
    pub formats: ExportFormats,
}

/// Reference to a single item in a [`CreateExport`] request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExportItem {
    /// Full API URL of the layer to export.
    pub item: String,
}

impl CreateExport {
    /// Build the standard CSV export request for a single layer URL.
    pub(crate) fn csv_layer(layer_url: String) -> Self {
        Self {
            crs: EXPORT_CRS.into(),
            items: vec![CreateExportItem { item: layer_url }],
            formats: ExportFormats {
                vector: EXPORT_VECTOR_FORMAT.into(),
            },
        }
    }
}
