//! File key extraction from shareable design URLs.

use crate::error::{FetchError, FetchResult};

/// Extract the file key from a file URL.
///
/// The key is the run of ASCII alphanumerics after the first `file/` or
/// `design/` path segment, e.g. `https://www.figma.com/design/AbC123/My-Page`
/// yields `AbC123`.
///
/// # Errors
///
/// Returns [`FetchError::InvalidFileUrl`] when no key follows either marker.
pub fn parse_file_key(url: &str) -> FetchResult<String> {
    let invalid = || FetchError::InvalidFileUrl(url.to_string());

    let rest = ["file/", "design/"]
        .iter()
        .filter_map(|marker| url.find(marker).map(|at| (at, marker.len())))
        .min_by_key(|(at, _)| *at)
        .map(|(at, len)| &url[at + len..])
        .ok_or_else(invalid)?;

    let key: String = rest
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect();

    if key.is_empty() {
        Err(invalid())
    } else {
        Ok(key)
    }
}
