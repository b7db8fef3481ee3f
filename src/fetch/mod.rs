//! Fetching rendered chart images.
//!
//! The query string is posted as a form body instead of being placed in
//! the URL, so the URL length limit does not apply.

use std::time::Duration;

use base64::Engine as _;

use crate::chart::{Chart, RenderOptions};
use crate::error::{Result, SmartChartError};
use crate::query::Separator;
use crate::validation::Validation;
use crate::BASE_URL;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// POSTs a form-encoded `body` to `url` and returns the response bytes.
    ///
    /// # Errors
    /// Returns [`SmartChartError::Fetch`] on transport failure or a
    /// non-success status.
    fn post_form(&self, url: &str, body: String) -> Result<Vec<u8>>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default)]
pub struct ReqwestClient;

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn post_form(&self, url: &str, body: String) -> Result<Vec<u8>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SmartChartError::Fetch(format!("failed to create HTTP client: {e}")))?;

        let response = client
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    SmartChartError::Fetch(format!("request to {url} timed out"))
                } else if e.is_connect() {
                    SmartChartError::Fetch(format!("failed to connect to {url}"))
                } else {
                    SmartChartError::Fetch(format!("request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SmartChartError::Fetch(format!("{url} answered HTTP {status}")));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| SmartChartError::Fetch(format!("failed to read response from {url}: {e}")))
    }
}

/// Validates `chart` (except URL length) and downloads its image.
///
/// # Errors
/// Returns validation errors as they are, and transport failures as
/// [`SmartChartError::Fetch`]. Nothing is retried.
pub fn fetch_image_with_client(chart: &Chart, client: &impl HttpClient) -> Result<Vec<u8>> {
    chart.validate_skipping(&[Validation::UrlLength])?;
    let body = chart.query_string(&RenderOptions {
        encode: true,
        validate: false,
        separator: Separator::Ampersand,
    })?;

    tracing::info!(chart = chart.shape().name(), bytes = body.len(), "fetching chart image");
    match client.post_form(BASE_URL, body) {
        Ok(image) => {
            tracing::debug!(bytes = image.len(), "received chart image");
            Ok(image)
        }
        Err(e) => {
            tracing::warn!(error = %e, "chart image fetch failed");
            Err(e)
        }
    }
}

/// [`fetch_image_with_client`] using [`ReqwestClient`].
///
/// # Errors
/// See [`fetch_image_with_client`].
pub fn fetch_image(chart: &Chart) -> Result<Vec<u8>> {
    fetch_image_with_client(chart, &ReqwestClient)
}

/// `data:` URI of a PNG image.
#[must_use]
pub fn data_uri(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

/// `<img>` tag with the fetched image inlined as a data URI.
///
/// # Errors
/// See [`fetch_image_with_client`].
pub fn embedded_html(
    chart: &Chart,
    client: &impl HttpClient,
    attributes: &[(&str, &str)],
) -> Result<String> {
    let image = fetch_image_with_client(chart, client)?;
    Ok(chart.img_tag(&data_uri(&image), attributes))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
