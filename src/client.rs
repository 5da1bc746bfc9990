//! Main Koordinates client implementation.

use crate::download::{create_exclusive, temp_archive_path};
use crate::error::{Error, Result};
use crate::types::*;
use crate::version::build_user_agent;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

const API_PREFIX: &str = "/services/api/v1.x";

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    host: String,
    api_key: String,
    timeout: Option<Duration>,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder for the given site host and API key.
    ///
    /// Neither value is validated here; a malformed host or key surfaces as
    /// a request failure on the first call.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: None,
            user_agent_suffix: None,
        }
    }

    /// Set an explicit request timeout.
    ///
    /// By default no timeout is imposed and the transport's own policy
    /// applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        // Warn about insecure connections
        if !self.host.starts_with("https://") {
            warn!(
                host = %self.host,
                "API host is not using HTTPS. This is insecure."
            );
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(Error::Http)?;

        let user_agent = build_user_agent(self.user_agent_suffix.as_deref());

        Ok(Client {
            host: self.host,
            api_key: self.api_key,
            http_client,
            user_agent,
        })
    }
}

/// Client for the Koordinates export API.
///
/// Holds the site host and API key immutably; each operation is an
/// independent request/response exchange with no session state, so a client
/// can be shared freely across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use koordinates::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), koordinates::Error> {
///     let client = Client::builder("https://labs.koordinates.com", "your-api-key").build()?;
///
///     let export = client.generate_export(50614).await?;
///     println!("export {} is {:?}", export.id, export.state);
///     Ok(())
/// }
/// ```
pub struct Client {
    host: String,
    api_key: String,
    http_client: reqwest::Client,
    user_agent: String,
}

impl Client {
    /// Create a new client builder.
    pub fn builder(host: impl Into<String>, api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(host, api_key)
    }

    /// Create an export job for a layer, requesting `EPSG:4326` coordinates
    /// and CSV vector output.
    ///
    /// Returns the created [`Export`], typically still in the
    /// [`Processing`](ExportState::Processing) state.
    pub async fn generate_export(&self, layer_id: u64) -> Result<Export> {
        let layer_url = format!("{}{}/layers/{}/", self.host, API_PREFIX, layer_id);
        self.post("/exports/", &CreateExport::csv_layer(layer_url))
            .await
    }

    /// List export jobs visible to the authenticated account.
    ///
    /// Only the first page the service returns is fetched, in the service's
    /// own order.
    pub async fn list_exports(&self) -> Result<Vec<ExportSummary>> {
        self.get("/exports").await
    }

    /// Get the full record for an export job, including its current state
    /// and progress.
    pub async fn get_export_details(&self, export_id: u64) -> Result<Export> {
        self.get(&format!("/exports/{}", export_id)).await
    }

    /// Download an export archive to a fresh temporary file and return its
    /// path.
    ///
    /// `download_url` comes from an export's
    /// [`download_url`](Export::download_url) field and is only valid once
    /// the job is [`Complete`](ExportState::Complete). The file is created
    /// exclusively (a collision on the generated path is an error) and is
    /// fully written and flushed before the path is returned. Ownership of
    /// the file passes to the caller; a failed download may leave a partial
    /// file behind.
    pub async fn download_export(&self, download_url: &str) -> Result<PathBuf> {
        let mut response = self
            .http_client
            .get(download_url)
            .headers(self.base_headers())
            .send()
            .await?;

        let path = temp_archive_path();
        debug!(url = download_url, path = %path.display(), "downloading export archive");

        let mut file = create_exclusive(&path).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(path)
    }

    // === Internal methods ===

    fn base_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("key {}", self.api_key)).unwrap(),
        );
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent).unwrap());
        headers
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}{}", self.host, API_PREFIX, path);
        debug!(%method, %url, "sending API request");

        let mut headers = self.base_headers();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut req = self.http_client.request(method, &url).headers(headers);
        if let Some(b) = body {
            req = req.json(b);
        }

        let response = req.send().await?;

        // Failure is signalled by an `errors` key in the body, not by the
        // HTTP status code, so decode generically before going typed.
        let value: serde_json::Value = response.json().await.map_err(Error::Http)?;

        if let Some(err) = Error::from_envelope(&value) {
            return Err(err);
        }

        serde_json::from_value(value).map_err(Error::Json)
    }
}
