// Listing of the files held in each project unit's areas

use super::{ArchiveError, ProjectUnit};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::Path;

/// One entry in a source or results area
#[derive(Debug, Clone, Serialize)]
pub struct AreaEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitInventory {
    pub label: String,
    pub source: Vec<AreaEntry>,
    pub results: Vec<AreaEntry>,
}

pub(crate) fn scan_unit(unit: &ProjectUnit) -> Result<UnitInventory, ArchiveError> {
    Ok(UnitInventory {
        label: unit.label.clone(),
        source: scan_area(&unit.source_dir())?,
        results: scan_area(&unit.results_dir())?,
    })
}

/// Entries of an area sorted by name; a missing area is empty
fn scan_area(dir: &Path) -> Result<Vec<AreaEntry>, ArchiveError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    log::debug!("scanning {}", dir.display());

    let read_err = |source: std::io::Error| ArchiveError::Io {
        action: "read directory",
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let metadata = entry.metadata().map_err(read_err)?;
        entries.push(AreaEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: metadata.is_dir(),
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
