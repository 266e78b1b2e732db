use thiserror::Error;
use tracing::info;

use crate::api_calls::images::ImageRecord;

/// Which sizes of an image to download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSelection {
    /// Every size the image offers
    All,
    /// This size, which the image must offer. The command line never asks for a single size,
    /// this is for callers that need exactly one url per image
    Exactly(String),
    /// Those of these sizes the image offers, others are skipped
    AnyOf(Vec<String>),
}

impl From<Vec<String>> for SizeSelection {
    fn from(sizes: Vec<String>) -> Self {
        if sizes.is_empty() {
            SizeSelection::All
        } else {
            SizeSelection::AnyOf(sizes)
        }
    }
}

#[derive(Error, Debug)]
pub enum SizeError {
    #[error("size {size} not available for image {image_key} (available: {available:?})")]
    NotAvailable {
        size: String,
        image_key: String,
        available: Vec<String>,
    },
}

pub fn image_urls(image: &ImageRecord, selection: &SizeSelection) -> Result<Vec<String>, SizeError> {
    let sizes: Vec<&str> = match selection {
        SizeSelection::All => image.sizes.keys().map(String::as_str).collect(),
        SizeSelection::Exactly(size) => {
            if !image.sizes.contains_key(size) {
                return Err(SizeError::NotAvailable {
                    size: size.clone(),
                    image_key: image.image_key.clone(),
                    available: image.sizes.keys().cloned().collect(),
                });
            }
            vec![size.as_str()]
        }
        SizeSelection::AnyOf(sizes) => sizes
            .iter()
            .map(String::as_str)
            .filter(|s| image.sizes.contains_key(*s))
            .collect(),
    };

    info!("Generating URLs for sizes {:?}", sizes);

    Ok(sizes
        .into_iter()
        .filter_map(|size| {
            image.sizes.get(size).map(|info| {
                format!(
                    "{}i-{}/1/{}/{}-{}.{}",
                    image.base_url, image.image_key, size, image.url_filename, size, info.ext
                )
            })
        })
        .collect())
}
