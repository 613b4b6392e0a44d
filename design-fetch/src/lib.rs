//! # Design Fetch
//!
//! Remote document fetcher for the design service REST API.
//!
//! Retrieves a file's node tree and resolves image-like node ids into
//! rendered image URLs, producing the [`design_core::ImageMap`] the markup
//! compiler consumes. Failures are returned as [`FetchError`] and never
//! retried.
//!
//! ```no_run
//! # async fn demo() -> design_fetch::FetchResult<()> {
//! use design_fetch::{parse_file_key, DesignClient, FetchConfig, ImageFormat};
//!
//! let key = parse_file_key("https://www.figma.com/design/AbC123/Landing")?;
//! let client = DesignClient::new(FetchConfig::with_token("figd_..."))?;
//! let file = client.get_file(&key).await?;
//! let root = file.first_frame().map_err(|e| {
//!     design_fetch::FetchError::UnexpectedResponse(e.to_string())
//! })?;
//! let ids = design_core::collect_image_node_ids(root);
//! let images = client.get_images(&key, &ids, ImageFormat::Png).await?;
//! # let _ = images;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod file_key;

pub use client::{DesignClient, FetchConfig, ImageFormat, DEFAULT_API_BASE, TOKEN_HEADER};
pub use error::{FetchError, FetchResult};
pub use file_key::parse_file_key;
