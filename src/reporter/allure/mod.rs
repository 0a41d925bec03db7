use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::configuration::constants::common::RESULT_SUFFIX;

use self::model::test_result::TestResult;

pub mod model;

/// Destination of converted results.
pub trait ResultWriter {
    /// Writes `{uuid}-result.json` for the given test case.
    fn write_result(&self, result: &TestResult) -> io::Result<PathBuf>;

    /// Writes an attachment file under the given name.
    fn write_attachment(&self, name: &str, data: &[u8]) -> io::Result<PathBuf>;
}

/// An Allure results directory on disk.
#[derive(Debug, Clone)]
pub struct ResultsDirectory {
    path: PathBuf,
}

impl ResultsDirectory {
    /// Opens the directory, creating it and its parents when missing.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn result_file_name(result: &TestResult) -> String {
        format!("{}{}", result.uuid(), RESULT_SUFFIX)
    }

    fn write_file(&self, name: &str, data: &[u8]) -> io::Result<PathBuf> {
        let target = self.path.join(name);
        if let Err(err) = fs::write(&target, data) {
            // Leave nothing half written behind.
            let _ = fs::remove_file(&target);
            return Err(err);
        }
        debug!("Written {} ({} bytes)", target.display(), data.len());
        Ok(target)
    }
}

impl ResultWriter for ResultsDirectory {
    fn write_result(&self, result: &TestResult) -> io::Result<PathBuf> {
        let document = serde_json::to_vec_pretty(result)?;
        self.write_file(&Self::result_file_name(result), &document)
    }

    fn write_attachment(&self, name: &str, data: &[u8]) -> io::Result<PathBuf> {
        self.write_file(name, data)
    }
}
