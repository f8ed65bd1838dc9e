use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::books::domain::model::CatalogDocument;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::json::to_pretty_json;

/// Keeps the catalog as a single pretty-printed JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonBookRepository {
    data_file: PathBuf,
}

impl JsonBookRepository {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    // sibling of the data file so the final rename stays on one filesystem
    fn temp_file(&self) -> PathBuf {
        let name = self.data_file.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "catalog".to_string());
        self.data_file.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn read_catalog(&self) -> LibraryResult<CatalogDocument> {
        debug!(path = %self.data_file.display(), "reading catalog");
        match fs::read_to_string(&self.data_file).await {
            Ok(text) if text.trim().is_empty() => Ok(CatalogDocument::default()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.data_file.display(), "catalog file does not exist yet");
                Ok(CatalogDocument::default())
            }
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    async fn write_catalog(&self, catalog: &CatalogDocument) -> LibraryResult<()> {
        debug!(path = %self.data_file.display(), "writing catalog");
        let text = to_pretty_json(catalog)?;
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_file = self.temp_file();
        if let Err(err) = fs::write(&temp_file, text).await {
            let _ = fs::remove_file(&temp_file).await;
            return Err(LibraryError::from(err));
        }
        if let Err(err) = fs::rename(&temp_file, &self.data_file).await {
            let _ = fs::remove_file(&temp_file).await;
            return Err(LibraryError::from(err));
        }
        Ok(())
    }
}
