use std::path::{Path, PathBuf};

use anyhow::Result;
use reqwest::Client;
use tokio::fs::create_dir_all;
use tracing::info;

use crate::{
    api_calls::{album, album::album_name, gallery_page, images},
    gallery_config::extract_gallery_config,
    image_urls::{image_urls, SizeSelection},
};

use super::file::download_file;

/// What was done for one album
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSummary {
    pub title: String,
    pub dest_dir: PathBuf,
    pub images: usize,
    pub files: Vec<PathBuf>,
}

/// Downloads every image of the album at `page_url`, in the selected sizes, to a sub-directory of
/// `output_dir` named after the album
pub async fn dl_album(
    client: &Client,
    page_url: &str,
    output_dir: &Path,
    sizes: &SizeSelection,
) -> Result<AlbumSummary> {
    // Album page, then the configuration its scripts use
    let html = gallery_page::get(client, page_url).await?;
    let config = extract_gallery_config(&html)?;

    // Metadata first, its item count sizes the image request
    let album_data = album::get(client, &config).await?;
    let name = album_name(&album_data)?;
    let title = album_data
        .albums
        .first()
        .map(|a| a.title.clone())
        .unwrap_or_default();
    println!("Found album \"{}\"", title);

    let dest_dir = output_dir.join(&name);
    create_dir_all(&dest_dir).await?;

    let images = images::get(client, &config, &album_data).await?;
    println!("Found {} images.", images.len());
    println!("Outputting to {}", dest_dir.display());

    // One file at a time, in the order given by the API
    let mut files = Vec::new();
    for image in &images {
        for url in image_urls(image, sizes)? {
            files.push(download_file(client, &url, &dest_dir).await?);
        }
    }

    info!(
        "Album \"{}\": {} files from {} images",
        name,
        files.len(),
        images.len()
    );

    Ok(AlbumSummary {
        title,
        dest_dir,
        images: images.len(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{api_calls::API_BASE, gen_http_client::make_client, gen_http_client::make_headers};

    use super::*;

    async fn mount_album(server: &MockServer) {
        let html = format!(
            "<html>\n<script>\ngalleryConfig = {{\"breadcrumbs\":[{{\"url\":\"{}\"}}],\"galleryRequestData\":{{\"Album\":\"abc\"}}}};\n</script>\n</html>",
            server.uri()
        );
        Mock::given(method("GET"))
            .and(path("/MyTrip"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .expect(1)
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(API_BASE))
            .and(query_param("Album", "abc"))
            .and(query_param("method", "rpc.gallery.getalbum"))
            .and(query_param("returnModelList", "true"))
            .and(query_param("PageSize", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stat": "ok",
                "Pagination": {"TotalItems": 2},
                "Albums": [{"Title": "My:Trip"}]
            })))
            .expect(1)
            .mount(server)
            .await;

        let base = format!("{}/photos/", server.uri());
        Mock::given(method("GET"))
            .and(path(API_BASE))
            .and(query_param("PageSize", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stat": "ok",
                "Images": [
                    {"BaseUrl": base, "ImageKey": "k1", "URLFilename": "one", "Sizes": {"L": {"ext": "jpg"}}},
                    {"BaseUrl": base, "ImageKey": "k2", "URLFilename": "two", "Sizes": {"L": {"ext": "jpg"}}}
                ]
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn downloads_whole_album() {
        let server = MockServer::start().await;
        mount_album(&server).await;

        for (key, name) in [("k1", "one"), ("k2", "two")] {
            Mock::given(method("GET"))
                .and(path(format!("/photos/i-{}/1/L/{}-L.jpg", key, name)))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(name.as_bytes().to_vec()))
                .expect(1)
                .mount(&server)
                .await;
        }

        let out = tempdir().unwrap();
        let client = make_client(make_headers()).unwrap();
        let summary = dl_album(
            &client,
            &format!("{}/MyTrip", server.uri()),
            out.path(),
            &SizeSelection::All,
        )
        .await
        .unwrap();

        let dest_dir = out.path().join("MyTrip");
        assert_eq!(summary.title, "My:Trip");
        assert_eq!(summary.dest_dir, dest_dir);
        assert_eq!(summary.images, 2);
        assert_eq!(
            summary.files,
            vec![dest_dir.join("one-L.jpg"), dest_dir.join("two-L.jpg")]
        );
        assert_eq!(std::fs::read(dest_dir.join("one-L.jpg")).unwrap(), b"one");
        assert_eq!(std::fs::read(dest_dir.join("two-L.jpg")).unwrap(), b"two");

        // Html page, two api calls, two images
        assert_eq!(server.received_requests().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unavailable_sizes_download_nothing() {
        let server = MockServer::start().await;
        mount_album(&server).await;

        let out = tempdir().unwrap();
        let summary = dl_album(
            &Client::new(),
            &format!("{}/MyTrip", server.uri()),
            out.path(),
            &SizeSelection::AnyOf(vec!["X3".to_owned()]),
        )
        .await
        .unwrap();

        assert!(summary.files.is_empty());
        assert!(out.path().join("MyTrip").is_dir());
    }

    #[tokio::test]
    async fn page_without_config_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let out = tempdir().unwrap();
        let res = dl_album(
            &Client::new(),
            &format!("{}/MyTrip", server.uri()),
            out.path(),
            &SizeSelection::All,
        )
        .await;

        assert!(res.is_err());
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn api_failure_is_reported() {
        let server = MockServer::start().await;
        let html = format!(
            "galleryConfig = {{\"breadcrumbs\":[{{\"url\":\"{}\"}}],\"galleryRequestData\":{{}}}};",
            server.uri()
        );
        Mock::given(method("GET"))
            .and(path("/MyTrip"))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(API_BASE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stat": "fail",
                "code": 5,
                "message": "invalid album"
            })))
            .mount(&server)
            .await;

        let out = tempdir().unwrap();
        let err = dl_album(
            &Client::new(),
            &format!("{}/MyTrip", server.uri()),
            out.path(),
            &SizeSelection::All,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("invalid album"));
    }
}
