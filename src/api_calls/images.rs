use std::collections::BTreeMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::gallery_config::GalleryConfig;

use super::{album::AlbumData, build_request_url, query, ApiError, ALBUM_METHOD, API_BASE};

/// Every image of the album, in a single page sized to the album's item count
pub async fn get(
    client: &Client,
    config: &GalleryConfig,
    album: &AlbumData,
) -> Result<Vec<ImageRecord>, ApiError> {
    let url = build_request_url(
        config,
        album.pagination.total_items,
        API_BASE,
        ALBUM_METHOD,
    )?;
    let body: Body = query(client, &url).await?;

    info!("Received image data for {} images", body.images.len());

    Ok(body.images)
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body {
    pub images: Vec<ImageRecord>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRecord {
    pub base_url: String,
    pub image_key: String,
    #[serde(rename = "URLFilename")]
    pub url_filename: String,
    /// Keyed by size label, e.g. `L`, `X2`, `O`
    pub sizes: BTreeMap<String, SizeInfo>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeInfo {
    pub ext: String,
}
