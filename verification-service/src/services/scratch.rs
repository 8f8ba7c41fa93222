use service_core::error::AppError;
use std::path::PathBuf;
use tokio::fs;

/// Spool area for uploads that only live for the duration of a request.
///
/// Files are keyed by the client-supplied filename, so two concurrent
/// uploads sharing a name will overwrite or prematurely delete each
/// other's spool file. Nothing ever reads the spooled bytes back.
#[derive(Clone)]
pub struct ScratchStore {
    dir: PathBuf,
}

impl ScratchStore {
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).await?;
        }
        Ok(Self { dir })
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    pub async fn spool(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AppError> {
        let path = self.path_for(filename);
        fs::write(&path, data).await?;
        Ok(path)
    }

    pub async fn discard(&self, filename: &str) -> Result<(), AppError> {
        let path = self.path_for(filename);
        if path.exists() {
            fs::remove_file(path).await?;
        }
        Ok(())
    }
}
