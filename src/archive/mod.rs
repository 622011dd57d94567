//! Program result archive layout.
//!
//! An archive root holds one directory per project unit, each with a
//! `source/` and a `results/` area, plus a single aggregate report file:
//!
//! ```text
//! .
//! ├── P1/{source/, results/}
//! ├── P2/{source/, results/}
//! ├── P3/{source/, results/}
//! └── results.pdf
//! ```
//!
//! Area contents are never interpreted, only listed.

pub mod inventory;

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use inventory::{AreaEntry, UnitInventory};

pub const DEFAULT_UNITS: &[&str] = &["P1", "P2", "P3"];
pub const DEFAULT_REPORT: &str = "results.pdf";
pub const SOURCE_AREA: &str = "source";
pub const RESULTS_AREA: &str = "results";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive root '{0}' does not exist or is not a directory.")]
    MissingRoot(PathBuf),

    #[error("Invalid project label '{0}'. Labels must be a single non-empty path component.")]
    InvalidLabel(String),

    #[error("'{0}' exists but is not a directory.")]
    NotADirectory(PathBuf),

    #[error("Failed to {action} '{path}'")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One labelled program folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUnit {
    pub label: String,
    pub dir: PathBuf,
}

impl ProjectUnit {
    pub fn source_dir(&self) -> PathBuf {
        self.dir.join(SOURCE_AREA)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.dir.join(RESULTS_AREA)
    }
}

/// A departure from the expected layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Violation {
    MissingUnit(String),
    MissingSource(String),
    MissingResults(String),
    MissingReport(String),
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingUnit(label) => write!(f, "missing project directory '{}/'", label),
            Violation::MissingSource(label) => {
                write!(f, "missing source area '{}/{}/'", label, SOURCE_AREA)
            }
            Violation::MissingResults(label) => {
                write!(f, "missing results area '{}/{}/'", label, RESULTS_AREA)
            }
            Violation::MissingReport(name) => write!(f, "missing aggregate report '{}'", name),
        }
    }
}

/// Result of checking an archive root
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub root: PathBuf,
    pub violations: Vec<Violation>,
}

impl LayoutReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// An archive rooted at a directory
#[derive(Debug, Clone)]
pub struct Archive {
    root: PathBuf,
    units: Vec<ProjectUnit>,
    report_name: String,
}

impl Archive {
    pub fn new<S: AsRef<str>>(root: &Path, labels: &[S], report_name: &str) -> Result<Self, ArchiveError> {
        let mut units = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref().trim();
            validate_label(label)?;
            units.push(ProjectUnit {
                label: label.to_string(),
                dir: root.join(label),
            });
        }
        validate_label(report_name)?;
        Ok(Self {
            root: root.to_path_buf(),
            units,
            report_name: report_name.to_string(),
        })
    }

    /// Archive with the P1/P2/P3 units and `results.pdf`
    pub fn with_defaults(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            units: DEFAULT_UNITS
                .iter()
                .map(|label| ProjectUnit {
                    label: label.to_string(),
                    dir: root.join(label),
                })
                .collect(),
            report_name: DEFAULT_REPORT.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn units(&self) -> &[ProjectUnit] {
        &self.units
    }

    pub fn report_path(&self) -> PathBuf {
        self.root.join(&self.report_name)
    }

    fn ensure_root(&self) -> Result<(), ArchiveError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(ArchiveError::MissingRoot(self.root.clone()))
        }
    }

    /// Compare the tree on disk against the expected layout
    pub fn check(&self) -> Result<LayoutReport, ArchiveError> {
        self.ensure_root()?;
        log::debug!("checking archive layout under {}", self.root.display());

        let mut violations = Vec::new();
        for unit in &self.units {
            if !unit.dir.is_dir() {
                violations.push(Violation::MissingUnit(unit.label.clone()));
                continue;
            }
            if !unit.source_dir().is_dir() {
                violations.push(Violation::MissingSource(unit.label.clone()));
            }
            if !unit.results_dir().is_dir() {
                violations.push(Violation::MissingResults(unit.label.clone()));
            }
        }
        if !self.report_path().is_file() {
            violations.push(Violation::MissingReport(self.report_name.clone()));
        }

        Ok(LayoutReport {
            root: self.root.clone(),
            violations,
        })
    }

    /// Create any missing unit directories and areas.
    /// The aggregate report is never created. Returns the directories made.
    pub fn init(&self) -> Result<Vec<PathBuf>, ArchiveError> {
        self.ensure_root()?;
        let mut created = Vec::new();
        for unit in &self.units {
            for dir in [unit.dir.clone(), unit.source_dir(), unit.results_dir()] {
                if dir.is_dir() {
                    continue;
                }
                if dir.exists() {
                    return Err(ArchiveError::NotADirectory(dir));
                }
                std::fs::create_dir_all(&dir).map_err(|source| ArchiveError::Io {
                    action: "create directory",
                    path: dir.clone(),
                    source,
                })?;
                log::debug!("created {}", dir.display());
                created.push(dir);
            }
        }
        Ok(created)
    }

    /// List the files in every unit's source and results areas
    pub fn inventory(&self) -> Result<Vec<UnitInventory>, ArchiveError> {
        self.ensure_root()?;
        self.units.iter().map(inventory::scan_unit).collect()
    }
}

fn validate_label(label: &str) -> Result<(), ArchiveError> {
    let path = Path::new(label);
    let mut components = path.components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    );
    if label.is_empty() || !single_normal {
        return Err(ArchiveError::InvalidLabel(label.to_string()));
    }
    Ok(())
}
