//! Cucumber JSON run reports, as written by the `json:` formatter.

use std::{fs::File, io, io::BufReader, path::Path};
use thiserror::Error;

pub mod model;

use self::model::Report;

/// Why a report couldn't be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("not a cucumber report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and decodes a whole report into memory.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Report, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let report = serde_json::from_reader(reader)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_report_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Cart","uri":"cart.feature","elements":[{{"type":"scenario","name":"Add","steps":[]}}]}}]"#
        )
        .unwrap();

        let report = load(file.path()).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].name, "Cart");
        assert_eq!(report[0].elements.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load("/nonexistent/cucumber-report.json");

        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_invalid_document_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"a list of features\"}}").unwrap();

        assert!(matches!(load(file.path()), Err(LoadError::Json(_))));
    }
}
