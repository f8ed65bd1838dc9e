use std::sync::Arc;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) repository: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            repository,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub(crate) async fn log_request<B>(req: Request<B>, next: Next<B>) -> Response {
    info!(method = %req.method(), uri = %req.uri(), "req");
    next.run(req).await
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            // not-found is answered with a bare status, no body
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, String::new())
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{json_to_server_error, ServerError};

    #[tokio::test]
    async fn test_should_map_not_found_to_empty_404() {
        let (status, body) = ServerError::from(CommandError::NotFound { message: "book 3".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_should_map_other_errors() {
        let (status, _) = ServerError::from(CommandError::Runtime { message: "io".to_string(), reason_code: None });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        let (status, _) = ServerError::from(CommandError::Serialization { message: "bad".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_map_json_error_to_bad_request() {
        let json_err = serde_json::from_str::<Vec<i64>>("{}").unwrap_err();
        let (status, body) = json_to_server_error(json_err);
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert!(!body.is_empty());
    }
}
