//! Request-scoped storage for uploaded files

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// A file written under the upload directory for the duration of one request.
///
/// The file is removed when the value is dropped, whatever path the handler
/// took to get there.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
    file: Option<File>,
}

impl TempUpload {
    /// Create an empty file with a fresh random name inside `dir`
    pub async fn create(dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(dir).await?;
        let path = dir.join(uuid::Uuid::new_v4().to_string());
        let file = File::create(&path).await?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn write_chunk(&mut self, chunk: &[u8]) -> std::io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.write_all(chunk).await,
            None => Err(std::io::Error::other("upload already finished")),
        }
    }

    /// Flush and close the file so it can be read back by path
    pub async fn finish(&mut self) -> std::io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().await?;
            file.sync_all().await?;
        }
        Ok(())
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        // Close the handle before unlinking
        self.file.take();
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("Removed upload {:?}", self.path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove upload {:?}: {}", self.path, e),
        }
    }
}
