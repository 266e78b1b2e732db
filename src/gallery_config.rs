use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info};

const MARKER: &str = "galleryConfig";

// Only matches an object written on a single line, with no `;` between its last `}` and the
// end of the assignment. Pages that spread the object over several lines are not supported.
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"galleryConfig\s*=\s*(\{.*?\})\s*;").expect("gallery config pattern is valid")
});

/// Configuration blob the gallery page embeds for its own scripts
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryConfig {
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Parameters identifying the album to the API, passed through as-is
    pub gallery_request_data: Map<String, Value>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(default)]
    pub url: Option<String>,
}

impl GalleryConfig {
    /// First non-empty breadcrumb url, which is the root of the site
    pub fn base_url(&self) -> Option<&str> {
        self.breadcrumbs
            .iter()
            .filter_map(|b| b.url.as_deref())
            .find(|u| !u.is_empty())
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("page does not contain any gallery configuration")]
    NotFound,
    #[error("couldn't parse embedded gallery configuration")]
    Json(#[source] serde_json::Error),
}

pub fn extract_gallery_config(html: &str) -> Result<GalleryConfig, ExtractError> {
    for line in html.lines().filter(|l| l.contains(MARKER)) {
        let json_text = match ASSIGNMENT.captures(line).and_then(|c| c.get(1)) {
            Some(m) => m.as_str(),
            // Mentions the variable without assigning it
            None => continue,
        };
        debug!("`{}` found in `{}`", json_text, line);

        let config: GalleryConfig = serde_json::from_str(json_text).map_err(ExtractError::Json)?;
        info!(
            "Parsed gallery configuration: {}",
            serde_json::to_string_pretty(&config).unwrap_or_default()
        );
        return Ok(config);
    }

    Err(ExtractError::NotFound)
}
