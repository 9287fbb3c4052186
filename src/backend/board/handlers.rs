//! Board HTTP Handlers
//!
//! Thin adapters between the `/api/board` routes and [`BoardService`]. The
//! caller's identity always comes from [`AuthUser`]; bodies and path ids are
//! taken as `Result`s so their rejections share the JSON error shape.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::service::BoardService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::kanban::{
    Board, BoardList, CreateListRequest, CreateTaskRequest, StatusMessage, Task, UpdateTaskRequest,
};

/// `GET /api/board`
pub async fn get_board(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Board>, BackendError> {
    let board = service.get_or_create_board(&user.user_id).await?;
    Ok(Json(board))
}

/// `POST /api/board/list`
pub async fn create_list(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BoardList>), BackendError> {
    let Json(request) = payload?;
    let list = service.create_list(&user.user_id, &request.title).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// `DELETE /api/board/list/{id}`
pub async fn delete_list(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    list_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<StatusMessage>, BackendError> {
    let Path(list_id) = list_id?;
    service.delete_list(&user.user_id, list_id).await?;
    Ok(Json(StatusMessage::new("List deleted")))
}

/// `POST /api/board/task`
pub async fn create_task(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), BackendError> {
    let Json(request) = payload?;
    let task = service.create_task(&user.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/board/task/{id}`
pub async fn update_task(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    task_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, BackendError> {
    let Path(task_id) = task_id?;
    let Json(request) = payload?;
    let changes = request.into_changes()?;
    let task = service.update_task(&user.user_id, task_id, changes).await?;
    Ok(Json(task))
}

/// `DELETE /api/board/task/{id}`
pub async fn delete_task(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    task_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<StatusMessage>, BackendError> {
    let Path(task_id) = task_id?;
    service.delete_task(&user.user_id, task_id).await?;
    Ok(Json(StatusMessage::new("Task deleted")))
}
