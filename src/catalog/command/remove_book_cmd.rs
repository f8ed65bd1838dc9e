use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::parse_book_id;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

// carries the book as it was before removal
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(parse_book_id(req.book_id.as_str())).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_REPO: Arc<dyn BookRepository> = Arc::new(MemoryBookRepository::new());
        static ref ADD_CMD: AddBookCommand = AddBookCommand::new(
            factory::create_catalog_service(&Configuration::new("test.json"), SUT_REPO.clone()));
        static ref GET_CMD: GetBookCommand = GetBookCommand::new(
            factory::create_catalog_service(&Configuration::new("test.json"), SUT_REPO.clone()));
        static ref REMOVE_CMD: RemoveBookCommand = RemoveBookCommand::new(
            factory::create_catalog_service(&Configuration::new("test.json"), SUT_REPO.clone()));
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let res = ADD_CMD.execute(AddBookCommandRequest::new("test book", "test author"))
            .await.expect("should add book");
        let removed = REMOVE_CMD.execute(RemoveBookCommandRequest::new(res.book.id.to_string()))
            .await.expect("should remove book");
        assert_eq!(res.book, removed.book);

        let loaded = GET_CMD.execute(GetBookCommandRequest::new(res.book.id.to_string())).await;
        assert!(matches!(loaded, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_not_remove_unknown_book() {
        let res = REMOVE_CMD.execute(RemoveBookCommandRequest::new("not-a-number".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
