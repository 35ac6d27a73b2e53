//! HTTP-обвязка над `GameService`.
//!
//! - `GET  /healthz`
//! - `POST /api/table` – создать стол
//! - `POST /api/table/join?id=..&player=..` – сесть за стол
//! - `GET  /api/table/{id}` – снапшот стола
//! - `POST /api/table/{id}/action` с телом `{"move": "hit", "player": "p1"}`
//! - `GET  /api/table/{id}/history` – история событий
//! - `GET  /api/tables` – лобби

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::warn;
use serde::Deserialize;

use super::dto::{HistoryDto, TableSnapshot, TableSummaryDto};
use super::errors::{ApiError, ErrorCode};
use super::service::GameService;

/// Собрать роутер со всеми эндпоинтами.
pub fn create_router(service: GameService) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/tables", get(list_tables))
        .route("/api/table", post(create_table))
        .route("/api/table/join", post(join_table))
        .route("/api/table/{id}", get(get_table))
        .route("/api/table/{id}/action", post(table_action))
        .route("/api/table/{id}/history", get(table_history))
        .with_state(service)
}

/// HTTP-статус для кода ошибки.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.code);
        warn!("запрос отклонён ({status}): {self}");
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct JoinParams {
    id: Option<String>,
    player: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActionBody {
    #[serde(rename = "move")]
    mv: Option<String>,
    player: Option<String>,
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_tables(State(service): State<GameService>) -> Json<Vec<TableSummaryDto>> {
    Json(service.list())
}

async fn create_table(State(service): State<GameService>) -> Json<TableSnapshot> {
    Json(service.create())
}

async fn join_table(
    State(service): State<GameService>,
    Query(params): Query<JoinParams>,
) -> Result<Json<TableSnapshot>, ApiError> {
    let id = params.id.unwrap_or_default();
    let player = params.player.unwrap_or_default();
    service.join(&id, &player).map(Json)
}

async fn get_table(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> Result<Json<TableSnapshot>, ApiError> {
    service.get(&id).map(Json)
}

async fn table_action(
    State(service): State<GameService>,
    Path(id): Path<String>,
    body: Result<Json<ActionBody>, JsonRejection>,
) -> Result<Json<TableSnapshot>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::bad_request("invalid json"))?;
    let mv = body.mv.unwrap_or_default();
    let player = body.player.unwrap_or_default();
    service.act(&id, &player, &mv).map(Json)
}

async fn table_history(
    State(service): State<GameService>,
    Path(id): Path<String>,
) -> Result<Json<HistoryDto>, ApiError> {
    service.history(&id).map(Json)
}
