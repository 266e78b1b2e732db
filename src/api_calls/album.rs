use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::gallery_config::GalleryConfig;

use super::{build_request_url, query, ApiError, ALBUM_METHOD, API_BASE};

/// Characters that can't appear in a directory name on common filesystems
const RESERVED_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>'];

/// Album metadata only, no image is requested
pub async fn get(client: &Client, config: &GalleryConfig) -> Result<AlbumData, ApiError> {
    let url = build_request_url(config, 0, API_BASE, ALBUM_METHOD)?;
    let album: AlbumData = query(client, &url).await?;

    info!(
        "Album data: {} albums, {} items",
        album.albums.len(),
        album.pagination.total_items
    );

    Ok(album)
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlbumData {
    pub pagination: Pagination,
    pub albums: Vec<Album>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pagination {
    pub total_items: u64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Album {
    pub title: String,
}

#[derive(Error, Debug)]
pub enum AlbumNameError {
    #[error("album data does not contain any album")]
    NoAlbum,
    #[error("album title \"{0}\" can't be used as a directory name")]
    Unusable(String),
}

/// Title of the first album, without characters reserved in paths
pub fn album_name(album: &AlbumData) -> Result<String, AlbumNameError> {
    let title = &album.albums.first().ok_or(AlbumNameError::NoAlbum)?.title;
    let name = sanitize_title(title);

    // Would land in the output directory itself, or above it
    if name.is_empty() || name.chars().all(|c| c == '.') {
        return Err(AlbumNameError::Unusable(title.clone()));
    }

    Ok(name)
}

fn sanitize_title(title: &str) -> String {
    title.chars().filter(|c| !RESERVED_CHARS.contains(c)).collect()
}
