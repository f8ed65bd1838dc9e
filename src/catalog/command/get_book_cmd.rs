use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::parse_book_id;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(parse_book_id(req.book_id.as_str()))
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
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
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_REPO: Arc<dyn BookRepository> = Arc::new(MemoryBookRepository::new());
        static ref ADD_CMD: AddBookCommand = AddBookCommand::new(
            factory::create_catalog_service(&Configuration::new("test.json"), SUT_REPO.clone()));
        static ref GET_CMD: GetBookCommand = GetBookCommand::new(
            factory::create_catalog_service(&Configuration::new("test.json"), SUT_REPO.clone()));
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let res = ADD_CMD.execute(AddBookCommandRequest::new("test book", "test author"))
            .await.expect("should add book");
        let loaded = GET_CMD.execute(GetBookCommandRequest::new(res.book.id.to_string()))
            .await.expect("should get book");
        assert_eq!(res.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_not_get_unknown_book() {
        let res = GET_CMD.execute(GetBookCommandRequest::new("-42".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        let res = GET_CMD.execute(GetBookCommandRequest::new("abc".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
