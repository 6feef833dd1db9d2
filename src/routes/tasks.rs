use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{CreateTaskRequest, TaskFilter, UpdateTaskStatusRequest},
    store::TaskStore,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use validator::Validate;

/// Retrieves the authenticated user's tasks.
///
/// Supports filtering by `status` and by a `search` term matched against task
/// titles and descriptions (case-sensitive). Without filters, the full owned
/// set is returned in insertion order. Tasks of other users are never
/// included.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` objects.
/// - `400 Bad Request`: Unknown status value or empty search term.
/// - `401 Unauthorized`: Missing or invalid authentication token.
#[get("")]
pub async fn get_tasks(
    store: web::Data<TaskStore>,
    filter: web::Query<TaskFilter>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    filter.validate()?;

    let tasks = store.get_tasks(&filter, &user.0).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task owned by the authenticated user.
///
/// Expects a JSON body with non-empty `title` and `description`. The task is
/// created with status `OPEN` and the caller as its owner.
///
/// ## Responses:
/// - `201 Created`: The newly created `Task` as JSON.
/// - `400 Bad Request`: Empty or overlong title/description.
/// - `401 Unauthorized`: Missing or invalid authentication token.
#[post("")]
pub async fn create_task(
    store: web::Data<TaskStore>,
    task_data: web::Json<CreateTaskRequest>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let task = store.create_task(task_data.into_inner(), &user.0).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves one of the authenticated user's tasks by id.
///
/// ## Responses:
/// - `200 OK`: The `Task` as JSON.
/// - `401 Unauthorized`: Missing or invalid authentication token.
/// - `404 Not Found`: No such task under this user. A task owned by someone
///   else yields the same response as a nonexistent id.
#[get("/{id}")]
pub async fn get_task(
    store: web::Data<TaskStore>,
    task_id: web::Path<i32>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = store.get_task_by_id(task_id.into_inner(), &user.0).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Updates the status of one of the authenticated user's tasks.
///
/// Status is the only mutable task field; title and description are fixed at
/// creation.
///
/// ## Responses:
/// - `200 OK`: The updated `Task` as JSON.
/// - `400 Bad Request`: Status value outside OPEN / IN_PROGRESS / DONE.
/// - `401 Unauthorized`: Missing or invalid authentication token.
/// - `404 Not Found`: No such task under this user.
#[patch("/{id}/status")]
pub async fn update_task_status(
    store: web::Data<TaskStore>,
    task_id: web::Path<i32>,
    body: web::Json<UpdateTaskStatusRequest>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let task = store
        .update_task_status(task_id.into_inner(), body.status, &user.0)
        .await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes one of the authenticated user's tasks.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: Missing or invalid authentication token.
/// - `404 Not Found`: No such task under this user.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<TaskStore>,
    task_id: web::Path<i32>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    store.delete_task(task_id.into_inner(), &user.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
