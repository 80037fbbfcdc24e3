use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Html,
    Json,
};

use crate::errors::AppError;
use crate::models::{CreateTaskRequest, StatusResponse, Task};
use crate::state::AppState;
use crate::ui::INDEX_HTML;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    Ok(Json(state.tasks.list().await?))
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Json(payload) = payload?;
    state
        .tasks
        .create(payload.title.as_deref(), payload.description.as_deref())
        .await?;
    Ok(Json(StatusResponse::success()))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Path(id) = id?;
    state.tasks.toggle(id).await?;
    Ok(Json(StatusResponse::success()))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Path(id) = id?;
    state.tasks.remove(id).await?;
    Ok(Json(StatusResponse::success()))
}
