pub mod service;

use async_trait::async_trait;
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, title: Option<Value>, author: Option<Value>) -> LibraryResult<BookDto>;
    // a `None` id could not be read from the path and matches no book
    async fn find_book_by_id(&self, id: Option<i64>) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: Option<i64>, title: Option<Value>, author: Option<Value>) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: Option<i64>) -> LibraryResult<BookDto>;
}
