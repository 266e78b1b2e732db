mod album;
mod file;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{error, info};

use crate::{
    gen_http_client::{make_client, make_headers},
    image_urls::SizeSelection,
    DownloadParameters,
};

use self::album::dl_album;

pub async fn do_download(params: DownloadParameters) -> Result<()> {
    // Make the HTTP client with correct headers
    let client = make_client(make_headers())?;

    let output_dir: PathBuf = params.output_dir.components().collect();
    let sizes = SizeSelection::from(params.sizes);

    println!("Downloading to {}", output_dir.display());

    let mut failed = Vec::new();
    for url in &params.urls {
        println!("Processing {}", url);

        match dl_album(&client, url, &output_dir, &sizes).await {
            Ok(summary) => info!(
                "{}: {} files from {} images saved to {}",
                url,
                summary.files.len(),
                summary.images,
                summary.dest_dir.display()
            ),
            Err(e) if params.keep_going => {
                error!("Album {} failed: {:#}", url, e);
                println!("Failed {}: {:#}", url, e);
                failed.push(url.as_str());
            }
            Err(e) => return Err(e.context(format!("Album {} failed", url))),
        }
    }

    if !failed.is_empty() {
        return Err(anyhow!(
            "{} of {} albums failed: {}",
            failed.len(),
            params.urls.len(),
            failed.join(", ")
        ));
    }

    Ok(())
}
