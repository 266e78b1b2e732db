use std::path::{Path, PathBuf};

use reqwest::Client;
use thiserror::Error;
use tokio::{
    fs::{remove_file, rename, File},
    io::AsyncWriteExt,
};
use tokio_stream::StreamExt;
use percent_encoding::percent_decode_str;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("'{0}' has no file name")]
    NoFileName(String),
    #[error("'{0}' can't be used as a file name")]
    UnsafeFileName(String),
    #[error("problem with http/network while downloading '{filename}'")]
    Network {
        filename: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("couldn't write '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Download a file to a dir, named after the last segment of its url. Replaces any existing file
pub async fn download_file(
    client: &Client,
    url: &str,
    dest_dir: &Path,
) -> Result<PathBuf, DownloadError> {
    // Build all paths
    let paths = MyPaths::from_url_dest_dir(url, dest_dir)?;

    println!("Downloading {}...", paths.filename);

    // Perform actual download
    if let Err(e) = dl_file_to_disk(client, url, &paths).await {
        // Don't leave a partial file behind
        let _ = remove_file(&paths.temp).await;
        return Err(e);
    }

    // Rename from temporary filename to permanent one
    rename(&paths.temp, &paths.dest)
        .await
        .map_err(|source| DownloadError::Io {
            path: paths.dest.clone(),
            source,
        })?;

    debug!("Saved {} to {}", url, paths.dest.display());

    Ok(paths.dest)
}

struct MyPaths {
    filename: String,
    dest: PathBuf,
    temp: PathBuf,
}

impl MyPaths {
    fn from_url_dest_dir(url: &str, dest_dir: &Path) -> Result<MyPaths, DownloadError> {
        // Extract filename, everything after the last slash
        let raw = url.rsplit('/').next().unwrap_or(url);
        let filename = percent_decode_str(raw).decode_utf8_lossy().into_owned();

        if filename.is_empty() {
            return Err(DownloadError::NoFileName(url.to_owned()));
        }
        if filename == "." || filename == ".." || filename.contains(&['/', '\\'][..]) {
            return Err(DownloadError::UnsafeFileName(filename));
        }

        // Append filename
        let dest = dest_dir.join(&filename);
        let temp = dest_dir.join(format!("._{}", filename));

        Ok(MyPaths {
            filename,
            dest,
            temp,
        })
    }
}

/// Streams the body of a URL to the temporary path
async fn dl_file_to_disk(client: &Client, url: &str, paths: &MyPaths) -> Result<(), DownloadError> {
    let network = |source: reqwest::Error| DownloadError::Network {
        filename: paths.filename.clone(),
        source,
    };
    let io = |source: std::io::Error| DownloadError::Io {
        path: paths.temp.clone(),
        source,
    };

    let resp = client.get(url).send().await.map_err(network)?;
    let resp = resp.error_for_status().map_err(network)?;

    let mut file = File::create(&paths.temp).await.map_err(io)?;
    let mut stream = resp.bytes_stream();

    while let Some(data) = stream.next().await {
        file.write_all(&data.map_err(network)?).await.map_err(io)?
    }
    file.flush().await.map_err(io)?;

    Ok(())
}
