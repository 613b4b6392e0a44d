//! # Design Markup CLI
//!
//! Fetches a design file, converts its first top-level frame into a static
//! HTML page and writes it to disk.
//!
//! ## Usage
//!
//! ```bash
//! FIGMA_API_KEY_TOKEN=figd_... \
//!   cargo run -p design-cli -- --file-url https://www.figma.com/design/AbC123/Landing
//! ```
//!
//! ## Pipeline
//!
//! parse file key → fetch file → pick first frame → collect image nodes →
//! resolve image URLs → convert → write `<output-dir>/<output-name>`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;

use clap::Parser;
use design_core::{collect_image_node_ids, CompileOptions, DesignError, ImageMap, MarkupCompiler};
use design_fetch::{parse_file_key, DesignClient, FetchConfig, FetchError, ImageFormat};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Command-line arguments for design-markup.
#[derive(Debug, Clone, Parser)]
#[command(name = "design-markup")]
#[command(about = "Convert a design file frame into a static HTML page")]
#[command(version)]
pub struct CliArgs {
    /// Design file URL (e.g., <https://www.figma.com/design/KEY/Name>)
    #[arg(long, env = "FIGMA_FILE_URL")]
    pub file_url: Option<String>,

    /// Personal access token for the design service
    #[arg(long, env = "FIGMA_API_KEY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Directory the page is written to
    #[arg(long, default_value = "./output")]
    pub output_dir: PathBuf,

    /// File name of the page
    #[arg(long, default_value = "Frame.html")]
    pub output_name: String,

    /// Format image nodes are rendered in (png, jpg, svg, pdf)
    #[arg(long, default_value = "png")]
    pub image_format: ImageFormat,

    /// REST API base URL
    #[arg(long, env = "FIGMA_API_BASE", default_value = design_fetch::DEFAULT_API_BASE)]
    pub api_base: String,

    /// CSS color of the page background
    #[arg(long, default_value = "black")]
    pub page_background: String,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Design file URL.
    pub file_url: Option<String>,
    /// Access token.
    pub token: Option<String>,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Output file name.
    pub output_name: String,
    /// Image render format.
    pub image_format: ImageFormat,
    /// REST API base URL.
    pub api_base: String,
    /// Page background color.
    pub page_background: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file_url: None,
            token: None,
            output_dir: PathBuf::from("./output"),
            output_name: "Frame.html".to_string(),
            image_format: ImageFormat::Png,
            api_base: design_fetch::DEFAULT_API_BASE.to_string(),
            page_background: CompileOptions::default().page_background,
        }
    }
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            file_url: args.file_url,
            token: args.token,
            output_dir: args.output_dir,
            output_name: args.output_name,
            image_format: args.image_format,
            api_base: args.api_base,
            page_background: args.page_background,
        }
    }
}

/// Result type for CLI runs.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// No file URL was given.
    #[error("a design file URL is required (--file-url or FIGMA_FILE_URL)")]
    MissingFileUrl,

    /// Talking to the design service failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The fetched document could not be converted.
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Writing the page failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Run the whole pipeline and return the path of the written page.
///
/// # Errors
///
/// Returns an error if the file URL is missing or invalid, the design service
/// request fails, the file has no frame to convert, or the page cannot be
/// written. Nothing is written on error.
pub async fn run(config: &CliConfig) -> CliResult<PathBuf> {
    let file_url = config
        .file_url
        .as_deref()
        .ok_or(CliError::MissingFileUrl)?;
    let file_key = parse_file_key(file_url)?;

    let client = DesignClient::new(FetchConfig {
        api_base: config.api_base.clone(),
        token: config.token.clone(),
        ..FetchConfig::default()
    })?;

    info!(%file_key, api_base = %client.api_base(), "Fetching design file");
    let file = client.get_file(&file_key).await?;

    let root = file.first_frame()?;
    info!(node = %root.name, node_type = ?root.node_type, "Converting node");

    let image_ids = collect_image_node_ids(root);
    info!(count = image_ids.len(), "Found image/vector nodes");

    let images = if image_ids.is_empty() {
        ImageMap::new()
    } else {
        debug!(format = %config.image_format, "Fetching image URLs");
        client
            .get_images(&file_key, &image_ids, config.image_format)
            .await?
    };

    let options = CompileOptions {
        page_background: config.page_background.clone(),
        ..CompileOptions::default()
    };
    let conversion = MarkupCompiler::with_options(images, options).convert(root);
    if !conversion.diagnostics.is_empty() {
        warn!(
            count = conversion.diagnostics.len(),
            "Conversion finished with diagnostics"
        );
    }

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| CliError::Io {
            path: config.output_dir.clone(),
            source,
        })?;

    let output_path = config.output_dir.join(&config.output_name);
    tokio::fs::write(&output_path, conversion.html)
        .await
        .map_err(|source| CliError::Io {
            path: output_path.clone(),
            source,
        })?;

    info!(path = %output_path.display(), "Conversion complete");
    Ok(output_path)
}
