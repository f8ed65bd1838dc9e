use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, log_request, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.repository.clone())
}

// Bodies are taken the way a strict JSON body parser takes them: objects and
// arrays only. An array carries no named fields, so title and author are absent.
fn body_fields(body: Value) -> Result<Value, ServerError> {
    match body {
        Value::Object(_) => Ok(body),
        Value::Array(_) => Ok(Value::Object(Map::new())),
        other => Err((StatusCode::BAD_REQUEST, format!("unexpected request body {}", other))),
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status))
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

pub(crate) async fn status(State(state): State<AppState>) -> String {
    state.config.listening_message()
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new()).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(body_fields(json.0)?).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = AddBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(body_fields(json.0)?).map_err(json_to_server_error)?;
    req.book_id = book_id;
    let svc = build_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
