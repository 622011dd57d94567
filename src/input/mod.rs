// Input file loading shared by the three programs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a program's input file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File '{0}' not found.")]
    NotFound(PathBuf),

    #[error("Permission denied to read '{0}'.")]
    PermissionDenied(PathBuf),

    #[error("File '{0}' is not valid UTF-8 text.")]
    NotText(PathBuf),

    #[error("Failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the whole input file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, InputError> {
    log::debug!("reading input file {}", path.display());
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => InputError::PermissionDenied(path.to_path_buf()),
        ErrorKind::InvalidData => InputError::NotText(path.to_path_buf()),
        _ => InputError::Io { path: path.to_path_buf(), source: e },
    })
}

/// Iterate over lines with 1-based line numbers
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(i, line)| (i + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_text(&temp_dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bin.dat");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_text(&path).unwrap_err(), InputError::NotText(_)));
    }

    #[test]
    fn test_numbered_lines() {
        let lines: Vec<_> = numbered_lines("a\n\nb").collect();
        assert_eq!(lines, vec![(1, "a"), (2, ""), (3, "b")]);
    }
}
