use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::CatalogDocument;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;

/// In-memory catalog, used for the `memory` store and as a test double.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    catalog: RwLock<CatalogDocument>,
    writes: AtomicUsize,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: CatalogDocument) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            writes: AtomicUsize::new(0),
        }
    }

    // number of completed write_catalog calls
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn read_catalog(&self) -> LibraryResult<CatalogDocument> {
        Ok(self.catalog.read().await.clone())
    }

    async fn write_catalog(&self, catalog: &CatalogDocument) -> LibraryResult<()> {
        *self.catalog.write().await = catalog.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::model::{BookEntity, CatalogDocument};
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;

    #[tokio::test]
    async fn test_should_start_empty() {
        let repo = MemoryBookRepository::new();
        assert_eq!(CatalogDocument::default(), repo.read_catalog().await.expect("should read catalog"));
        assert_eq!(0, repo.writes());
    }

    #[tokio::test]
    async fn test_should_round_trip_catalog() {
        let repo = MemoryBookRepository::new();
        let catalog = CatalogDocument::new(vec![BookEntity::new(0, Some(json!("A")), Some(json!("B")))]);
        repo.write_catalog(&catalog).await.expect("should write catalog");
        assert_eq!(catalog, repo.read_catalog().await.expect("should read catalog"));
        assert_eq!(1, repo.writes());
    }
}
