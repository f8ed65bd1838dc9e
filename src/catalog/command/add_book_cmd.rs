use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Neither field is required, a missing one is stored as missing.
#[derive(Debug, Default, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: Some(Value::from(title)),
            author: Some(Value::from(author)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(req.title, req.author)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use serde_json::json;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_REPO: Arc<dyn BookRepository> = Arc::new(MemoryBookRepository::new());
        static ref SUT_CMD: AddBookCommand = AddBookCommand::new(
            factory::create_catalog_service(&Configuration::new("test.json"), SUT_REPO.clone()));
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let res = SUT_CMD.execute(AddBookCommandRequest::new("test book", "test author"))
            .await.expect("should add book");
        assert_eq!(Some(json!("test book")), res.book.title);
        assert_eq!(Some(json!("test author")), res.book.author);
    }

    #[tokio::test]
    async fn test_should_assign_increasing_ids() {
        let first = SUT_CMD.execute(AddBookCommandRequest::new("A", "B")).await.expect("should add book");
        let second = SUT_CMD.execute(AddBookCommandRequest::new("C", "D")).await.expect("should add book");
        assert!(second.book.id > first.book.id);
    }

    #[tokio::test]
    async fn test_should_accept_missing_fields() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{"title":"only title"}"#).expect("should parse request");
        let res = SUT_CMD.execute(req).await.expect("should add book");
        assert_eq!(None, res.book.author);
        let json = serde_json::to_value(&res).expect("should serialize");
        assert!(json.get("author").is_none());
        assert_eq!(res.book.id, json["id"].as_i64().expect("should have id"));
    }

    #[tokio::test]
    async fn test_should_accept_any_json_details() {
        let req: AddBookCommandRequest = serde_json::from_str(r#"{"title":5,"author":null}"#).expect("should parse request");
        let res = SUT_CMD.execute(req).await.expect("should add book");
        assert_eq!(Some(json!(5)), res.book.title);
        assert_eq!(None, res.book.author);
    }
}
