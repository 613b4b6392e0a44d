//! Asynchronous client for the design service REST API.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use design_core::{DesignFile, DesignNode, ImageMap};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};

/// Default REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.figma.com/v1";

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Raster or vector format images are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG raster.
    #[default]
    Png,
    /// JPEG raster.
    Jpg,
    /// SVG vector.
    Svg,
    /// PDF document.
    Pdf,
}

impl ImageFormat {
    /// Query parameter value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown image format: {s}")),
        }
    }
}

/// Connection settings for [`DesignClient`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// REST API base URL.
    pub api_base: String,
    /// Personal access token.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            timeout: Duration::from_secs(60),
            user_agent: format!("design-markup/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    /// Default settings with the given token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }
}

/// Asynchronous design service client.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct DesignClient {
    inner: Arc<InnerClient>,
}

struct InnerClient {
    http: Client,
    api_base: Url,
    token: String,
}

impl fmt::Debug for DesignClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesignClient")
            .field("api_base", &self.inner.api_base.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct NodesResponse {
    nodes: HashMap<String, Option<NodeEntry>>,
}

#[derive(Deserialize)]
struct NodeEntry {
    document: DesignNode,
}

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    images: HashMap<String, Option<String>>,
}

impl DesignClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingToken`] if no non-empty token is set.
    /// Returns [`FetchError::InvalidUrl`] if the API base is malformed.
    /// Returns [`FetchError::Http`] if the HTTP client fails to build.
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        let token = config
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(FetchError::MissingToken)?;

        let api_base =
            Url::parse(&config.api_base).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if api_base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.api_base));
        }

        let http = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(InnerClient {
                http,
                api_base,
                token,
            }),
        })
    }

    /// The API base URL.
    #[must_use]
    pub fn api_base(&self) -> &Url {
        &self.inner.api_base
    }

    /// Fetch a whole file (`GET /files/{key}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that is not a design file.
    pub async fn get_file(&self, file_key: &str) -> FetchResult<DesignFile> {
        let url = self.endpoint(&["files", file_key])?;
        let file: DesignFile = self.get_json(url).await?;
        debug!(file = %file.name, version = %file.version, "Fetched design file");
        Ok(file)
    }

    /// Fetch selected nodes of a file (`GET /files/{key}/nodes?ids=..`).
    ///
    /// Ids the service could not find are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unexpected body.
    pub async fn get_file_nodes(
        &self,
        file_key: &str,
        ids: &[String],
    ) -> FetchResult<HashMap<String, DesignNode>> {
        let mut url = self.endpoint(&["files", file_key, "nodes"])?;
        url.query_pairs_mut().append_pair("ids", &ids.join(","));

        let response: NodesResponse = self.get_json(url).await?;
        let nodes: HashMap<String, DesignNode> = response
            .nodes
            .into_iter()
            .filter_map(|(id, entry)| entry.map(|e| (id, e.document)))
            .collect();

        debug!(requested = ids.len(), found = nodes.len(), "Fetched file nodes");
        Ok(nodes)
    }

    /// Render nodes and return their image URLs (`GET /images/{key}`).
    ///
    /// Ids that failed to render are absent from the map. An empty id list
    /// returns an empty map without contacting the service.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, a body
    /// reporting a render error, or an unexpected body.
    pub async fn get_images(
        &self,
        file_key: &str,
        ids: &[String],
        format: ImageFormat,
    ) -> FetchResult<ImageMap> {
        if ids.is_empty() {
            return Ok(ImageMap::new());
        }

        let mut url = self.endpoint(&["images", file_key])?;
        url.query_pairs_mut()
            .append_pair("ids", &ids.join(","))
            .append_pair("format", format.as_str());

        let response: ImagesResponse = self.get_json(url).await?;
        if let Some(err) = response.err {
            return Err(FetchError::UnexpectedResponse(err));
        }

        let images: ImageMap = response
            .images
            .into_iter()
            .filter_map(|(id, url)| url.map(|u| (id, u)))
            .collect();

        if images.len() < ids.len() {
            warn!(
                requested = ids.len(),
                resolved = images.len(),
                "Some image renders were not returned"
            );
        }
        debug!(count = images.len(), %format, "Resolved image URLs");
        Ok(images)
    }

    fn endpoint(&self, segments: &[&str]) -> FetchResult<Url> {
        let mut url = self.inner.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(self.inner.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        debug!(%url, "GET");
        let response = self
            .inner
            .http
            .get(url)
            .header(TOKEN_HEADER, self.inner.token.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Best-effort message from an error body: its `err` or `message` field,
/// else the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["err", "message"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.trim().to_string())
}
