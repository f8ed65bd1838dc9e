use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::model::parse_book_id;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// The body carries title and author only; book_id is taken from the path.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub book_id: String,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: Some(Value::from(title)),
            author: Some(Value::from(author)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(
            parse_book_id(req.book_id.as_str()), req.title, req.author)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
