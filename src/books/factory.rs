use std::sync::Arc;
use tracing::info;
use crate::books::repository::BookRepository;
use crate::books::repository::json_book_repository::JsonBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration) -> Arc<dyn BookRepository> {
    match config.store {
        RepositoryStore::JsonFile => {
            info!(path = %config.data_file.display(), "using json file catalog");
            Arc::new(JsonBookRepository::new(config.data_file.clone()))
        }
        RepositoryStore::Memory => {
            info!("using in-memory catalog");
            Arc::new(MemoryBookRepository::new())
        }
    }
}
