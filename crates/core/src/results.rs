//! The shared result file under the XDG data directory.
//!
//! The processor writes it, the API reads it back verbatim. Contents are
//! opaque text to the reader.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;

use crate::error::CoreError;
use crate::processing::{self, ProcessingRecord};
use crate::xdg::BaseDirs;

/// Application directory name under the data home.
pub const APP_DIR: &str = "polyglot-example";

/// Result file name inside [`APP_DIR`].
pub const RESULT_FILE: &str = "result.txt";

/// Contents of the result file plus where it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredResult {
    pub content: String,
    pub path: PathBuf,
}

/// Reads and writes `<dir>/result.txt`.
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    /// Store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store at `<data home>/polyglot-example`.
    pub fn from_base_dirs(base_dirs: &BaseDirs) -> Result<Self, CoreError> {
        let data_home = base_dirs.resolve_data_home().ok_or_else(|| {
            CoreError::Internal("neither XDG_DATA_HOME nor HOME is set".to_string())
        })?;
        Ok(Self::new(data_home.join(APP_DIR)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(RESULT_FILE)
    }

    /// Read the latest result.
    ///
    /// Contents are decoded as lossy UTF-8, so any bytes read back
    /// successfully. A missing file is [`CoreError::NotFound`]; any other
    /// I/O failure is [`CoreError::Internal`].
    pub async fn read(&self) -> Result<StoredResult, CoreError> {
        let path = self.path();
        match fs::read(&path).await {
            Ok(bytes) => Ok(StoredResult {
                content: String::from_utf8_lossy(&bytes).into_owned(),
                path,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CoreError::NotFound {
                entity: "Result file",
                path,
            }),
            Err(e) => Err(CoreError::Internal(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Render `record` and replace the result file with it.
    ///
    /// Writes to a uniquely named sibling first and renames it into place,
    /// so readers and concurrent writers only ever see a complete file.
    pub async fn save(&self, record: &ProcessingRecord) -> Result<PathBuf, CoreError> {
        let internal = |what: &str, e: std::io::Error| {
            CoreError::Internal(format!("failed to {what} in {}: {e}", self.dir.display()))
        };

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| internal("create directory", e))?;

        let path = self.path();
        let tmp = self
            .dir
            .join(format!(".{RESULT_FILE}.{}.tmp", uuid::Uuid::new_v4()));

        fs::write(&tmp, processing::render(record))
            .await
            .map_err(|e| internal("write result", e))?;

        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(internal("replace result", e));
        }

        Ok(path)
    }
}
