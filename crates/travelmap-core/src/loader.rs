// crates/travelmap-core/src/loader.rs

//! # Store Loader
//!
//! Reads the itinerary store file at startup. A missing, unparsable or
//! inconsistent file is replaced by the built-in itinerary, which is written
//! back once so the next start finds a valid file.

use crate::error::{Result, TravelError};
use crate::model::TravelData;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Store file location used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "data/travel_data.json";

/// Where the in-memory itinerary came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Parsed and validated from the store file.
    Loaded(PathBuf),
    /// Built-in defaults. `persisted` tells whether writing them back succeeded.
    Seeded { reason: String, persisted: bool },
}

/// Result of [`load_or_seed`]: the itinerary plus how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub data: TravelData,
    pub source: DataSource,
}

impl LoadOutcome {
    pub fn was_seeded(&self) -> bool {
        matches!(self.source, DataSource::Seeded { .. })
    }
}

/// **Strict Loader:** parses and validates the store file, no fallback.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TravelData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            TravelError::NotFound(format!("store file not found at {}", path.display()))
        }
        _ => TravelError::Io(e),
    })?;

    let data: TravelData = serde_json::from_reader(BufReader::new(file))?;
    data.validate()?;
    Ok(data)
}

/// **Startup Loader:** loads the store file, or seeds it with the defaults.
///
/// Never fails. At most one write happens, and only on the seed path; a
/// failed write is logged and the defaults are still returned.
pub fn load_or_seed(path: impl AsRef<Path>) -> LoadOutcome {
    let path = path.as_ref();

    // 1) Try the store file
    let err = match load_from_path(path) {
        Ok(data) => {
            info!(
                path = %path.display(),
                locations = data.locations.len(),
                routes = data.routes.len(),
                "loaded itinerary from store file"
            );
            return LoadOutcome {
                data,
                source: DataSource::Loaded(path.to_path_buf()),
            };
        }
        Err(err) => err,
    };

    // 2) Fallback: built-in itinerary
    warn!(path = %path.display(), error = %err, "using default itinerary");
    let data = TravelData::defaults();

    // 3) Best-effort: write it back
    let persisted = match data.save_as(path) {
        Ok(()) => {
            info!(path = %path.display(), "wrote default itinerary to store file");
            true
        }
        Err(write_err) => {
            warn!(path = %path.display(), error = %write_err, "could not write store file");
            false
        }
    };

    LoadOutcome {
        data,
        source: DataSource::Seeded {
            reason: err.to_string(),
            persisted,
        },
    }
}

impl TravelData {
    /// Pretty JSON with 2-space indentation and a trailing newline, the
    /// exact bytes [`TravelData::save_as`] writes.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Writes the itinerary to `path`, creating missing parent directories.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
