use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::model::BookEntity;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str) -> BookDto {
        BookDto {
            id,
            title: Some(Value::from(title)),
            author: Some(Value::from(author)),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.clone(),
            author: other.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new(0, "title", "author");
        assert_eq!(Some(json!("title")), book.title);
        assert_eq!(Some(json!("author")), book.author);
    }

    #[tokio::test]
    async fn test_should_convert_entity() {
        let entity = BookEntity::new(9, Some(Value::from("title")), None);
        let dto = BookDto::from(&entity);
        assert_eq!(9, dto.id);
        assert_eq!(Some(json!("title")), dto.title);
        assert_eq!(None, dto.author);
    }

    #[tokio::test]
    async fn test_should_serialize_fields_in_order() {
        let json = serde_json::to_string(&BookDto::new(0, "A", "B")).expect("should serialize");
        assert_eq!(r#"{"id":0,"title":"A","author":"B"}"#, json);
    }

    #[tokio::test]
    async fn test_should_serialize_non_string_details() {
        let dto = BookDto::from(&BookEntity::new(1, Some(json!(5)), Some(json!(["A", "B"]))));
        let json = serde_json::to_string(&dto).expect("should serialize");
        assert_eq!(r#"{"id":1,"title":5,"author":["A","B"]}"#, json);
    }
}
