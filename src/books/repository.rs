pub mod json_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::CatalogDocument;
use crate::core::library::LibraryResult;

/// Storage port for the catalog. The whole document is loaded and saved at
/// once; there is no record level access and no locking between a read and
/// the following write.
#[async_trait]
pub trait BookRepository: Sync + Send {
    // load the whole catalog, an empty document when nothing was stored yet
    async fn read_catalog(&self) -> LibraryResult<CatalogDocument>;

    // replace the stored catalog with the given document
    async fn write_catalog(&self, catalog: &CatalogDocument) -> LibraryResult<()>;
}
