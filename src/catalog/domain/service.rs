use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};
use crate::books::domain::model::{BookEntity, CatalogDocument};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

/// Catalog operations over the stored document. Every call reads the whole
/// catalog, changes the copy in memory and writes it back. Storage failures
/// are logged and never reach the caller: a failed read continues with an
/// empty catalog and a failed write is reported as done.
pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    async fn load_catalog(&self) -> CatalogDocument {
        match self.book_repository.read_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                error!(error = %err, "failed to read catalog, using an empty one");
                CatalogDocument::default()
            }
        }
    }

    async fn save_catalog(&self, catalog: &CatalogDocument) {
        if let Err(err) = self.book_repository.write_catalog(catalog).await {
            error!(error = %err, "failed to write catalog");
        }
    }
}

fn book_not_found(id: Option<i64>) -> LibraryError {
    match id {
        Some(id) => LibraryError::not_found(format!("book {} not found", id).as_str()),
        None => LibraryError::not_found("book id is not a number"),
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.load_catalog().await;
        Ok(catalog.books().iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, title: Option<Value>, author: Option<Value>) -> LibraryResult<BookDto> {
        let mut catalog = self.load_catalog().await;
        let book = BookEntity::new(catalog.next_book_id()?, title, author);
        catalog.append(book.clone());
        self.save_catalog(&catalog).await;
        info!(book_id = book.id, "added book");
        Ok(BookDto::from(&book))
    }

    async fn find_book_by_id(&self, id: Option<i64>) -> LibraryResult<BookDto> {
        let catalog = self.load_catalog().await;
        id.and_then(|id| catalog.find(id))
            .map(BookDto::from)
            .ok_or_else(|| book_not_found(id))
    }

    async fn update_book(&self, id: Option<i64>, title: Option<Value>, author: Option<Value>) -> LibraryResult<BookDto> {
        let mut catalog = self.load_catalog().await;
        let updated = id.and_then(|id| catalog.position(id))
            .and_then(|ndx| catalog.replace_details(ndx, title, author));
        // written back even when nothing matched
        self.save_catalog(&catalog).await;
        updated.map(|book| BookDto::from(&book)).ok_or_else(|| book_not_found(id))
    }

    async fn remove_book(&self, id: Option<i64>) -> LibraryResult<BookDto> {
        let mut catalog = self.load_catalog().await;
        let removed = id.and_then(|id| catalog.position(id))
            .and_then(|ndx| catalog.remove_at(ndx));
        self.save_catalog(&catalog).await;
        if let Some(ref book) = removed {
            info!(book_id = book.id, "removed book");
        }
        removed.map(|book| BookDto::from(&book)).ok_or_else(|| book_not_found(id))
    }
}
