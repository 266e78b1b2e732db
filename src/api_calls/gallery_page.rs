use reqwest::Client;
use tracing::debug;

use super::ApiError;

/// Fetches the album page itself, which holds the gallery configuration
pub async fn get(client: &Client, page_url: &str) -> Result<String, ApiError> {
    let resp = client
        .get(page_url)
        .send()
        .await
        .map_err(ApiError::Network)?;
    let resp = resp.error_for_status().map_err(ApiError::Network)?;
    let html = resp.text().await.map_err(ApiError::Network)?;

    debug!("HTML: {}", html);

    Ok(html)
}
