//! Todo API handlers
//!
//! Each handler decodes its input, makes one service call and reshapes the
//! result. Body decoding failures are turned into `ApiError::Decode` before
//! the service is reached.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiResult,
    models::{CreateTodoRequest, TodoResponse, UpdateTodoRequest},
    state::AppState,
};

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoResponse>)> {
    let Json(request) = payload?;

    let item = state.items.create(request.title).await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

/// List todos
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<TodoResponse>>> {
    let items = state.items.list().await?;

    Ok(Json(items.into_iter().map(TodoResponse::from).collect()))
}

/// Get todo by ID
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoResponse>> {
    let item = state.items.get(&id).await?;

    Ok(Json(item.into()))
}

/// Update todo title and completion flag
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> ApiResult<Json<TodoResponse>> {
    let Json(request) = payload?;

    let item = state
        .items
        .update(&id, request.title, request.completed)
        .await?;

    Ok(Json(item.into()))
}

/// Delete todo
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.items.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
