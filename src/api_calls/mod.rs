use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use url::form_urlencoded;

use crate::gallery_config::GalleryConfig;

pub mod album;
pub mod gallery_page;
pub mod images;

pub const API_BASE: &str = "/services/api/json/1.4.0/";
pub const ALBUM_METHOD: &str = "rpc.gallery.getalbum";

// -----

/// Status every API answer carries next to the actual payload
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct Status {
    #[serde(default)]
    stat: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub async fn query<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, ApiError> {
    info!("Requesting {}", url);

    let req = client.get(url);
    let resp = req.send().await.map_err(ApiError::Network)?;
    let status_code = resp.status();

    let root: Value = resp.json().await.map_err(ApiError::Parse)?;
    debug!("Received answer ({}): {}", status_code, root);

    let status = Status::deserialize(&root).unwrap_or_default();
    if status.stat.as_deref() == Some("fail") {
        return Err(ApiError::Application {
            message: status.message.unwrap_or_default(),
            status_code,
        });
    }

    serde_json::from_value(root).map_err(ApiError::Shape)
}

// -----

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("problem with http/network")]
    Network(#[source] reqwest::Error),
    #[error("couldn't parse received json")]
    Parse(#[source] reqwest::Error),
    #[error("received json is missing expected fields")]
    Shape(#[source] serde_json::Error),
    #[error("\"{message}\" ({status_code})")]
    Application {
        message: String,
        status_code: StatusCode,
    },
    #[error(transparent)]
    RequestUrl(#[from] RequestUrlError),
}

#[derive(Error, Debug)]
pub enum RequestUrlError {
    #[error("gallery configuration has no breadcrumb with a url")]
    NoBaseUrl,
}

// -----

/// Builds an API url from the page's own request data, asking for `size` images per page
pub fn build_request_url(
    config: &GalleryConfig,
    size: u64,
    api_base: &str,
    method: &str,
) -> Result<String, RequestUrlError> {
    let base_url = config
        .base_url()
        .ok_or(RequestUrlError::NoBaseUrl)?
        .trim_end_matches('/');

    let mut params = config.gallery_request_data.clone();
    params.insert("method".to_owned(), Value::from(method));
    params.insert("returnModelList".to_owned(), Value::Bool(true));
    params.insert("PageSize".to_owned(), Value::from(size));

    let mut query_string = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &params {
        query_string.append_pair(key, &query_value(value));
    }

    Ok(format!("{}{}?{}", base_url, api_base, query_string.finish()))
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
