use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Installs the global subscriber. With a log file, output goes there (truncated) instead of stderr
pub fn init_logging(level: Option<LevelFilter>, logfile: Option<&Path>) -> Result<()> {
    let (writer, ansi) = match logfile {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow!("Failed to create log file `{}`: {}", path.display(), e))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_max_level(level.unwrap_or(DEFAULT_LEVEL))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to set up logging: {}", e))
}
