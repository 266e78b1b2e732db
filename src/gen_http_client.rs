use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT},
    Client, ClientBuilder,
};

#[allow(clippy::declare_interior_mutable_const)]
const MY_USER_AGENT: HeaderValue = HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/105.0.0.0 Safari/537.36");
#[allow(clippy::declare_interior_mutable_const)]
const MY_ACCEPT_LANGUAGE: HeaderValue = HeaderValue::from_static("en-US,en;q=0.9");

pub fn make_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, MY_USER_AGENT);
    headers.insert(ACCEPT_LANGUAGE, MY_ACCEPT_LANGUAGE);
    headers
}

/// One client for the whole run, every request goes through it one after the other
pub fn make_client(headers: HeaderMap) -> reqwest::Result<Client> {
    ClientBuilder::new()
        .default_headers(headers)
        .gzip(true)
        .build()
}
