mod api_calls;
mod download;
mod gallery_config;
mod gen_http_client;
mod image_urls;
mod logging;
mod parsers;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use download::do_download;
use logging::init_logging;

use parsers::*;

// -----

/// Download SmugMug albums, one directory per album
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct DownloadParameters {
    /// Where album directories will be created
    #[arg(short, long, alias = "output_dir", value_name = "DIR")]
    output_dir: PathBuf,
    /// Only download these sizes (e.g. `L`, `X2`, `O`). Sizes an image doesn't have are skipped. If none are given, every size is downloaded
    #[arg(short, long, num_args = 0.., value_name = "SIZE")]
    sizes: Vec<String>,
    /// Write logs to this file instead of the terminal. The file is overwritten on each run
    #[arg(long, value_name = "FILE")]
    logfile: Option<PathBuf>,
    /// Logging level: trace, debug, info, warning, error or critical. Defaults to warning
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    loglevel: Option<LevelFilter>,
    /// When an album fails, report it and carry on with the next ones instead of stopping
    #[arg(short, long)]
    keep_going: bool,
    /// Album page(s) to download
    #[arg(required = true, value_name = "URL", value_parser = parse_album_url)]
    urls: Vec<String>,
}

// -----

#[tokio::main]
async fn main() -> Result<()> {
    let params = DownloadParameters::parse();

    init_logging(params.loglevel, params.logfile.as_deref())?;

    do_download(params).await
}
