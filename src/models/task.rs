use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task is yet to be started. The status every task is created with.
    Open,
    /// Task is currently being worked on.
    InProgress,
    /// Task is completed.
    Done,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Identifier of the user who owns the task. Set at creation, never reassigned.
    pub user_id: i32,
}

/// Input structure for creating a task.
///
/// Status is not part of the input: new tasks always start as `OPEN`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

/// Query parameters for filtering tasks when listing them.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskFilter {
    /// Filter tasks by status.
    pub status: Option<TaskStatus>,
    /// Case-sensitive substring match against title or description.
    #[validate(length(min = 1))]
    pub search: Option<String>,
}

/// Body of the status-update operation. The only mutation a task supports.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskStatusRequest {
    pub status: TaskStatus,
}
