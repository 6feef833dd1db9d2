use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{CreateTaskRequest, Task, TaskFilter, TaskStatus, User};

const TASK_COLUMNS: &str = "id, title, description, status, user_id";

/// Persists tasks. Every operation that targets a specific task filters by
/// both the task id and the owner's user id, so a task belonging to someone
/// else is indistinguishable from one that does not exist.
#[derive(Clone)]
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a new task owned by `owner`. New tasks always start as `OPEN`.
    pub async fn create_task(
        &self,
        input: CreateTaskRequest,
        owner: &User,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (title, description, status, user_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(TaskStatus::Open)
        .bind(owner.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    /// Lists the owner's tasks, optionally restricted by status equality and
    /// a case-sensitive substring match on title or description.
    ///
    /// Conditions are appended to the owner-scoped base query with positional
    /// parameters, then bound in the same order. Results come back in
    /// insertion order.
    pub async fn get_tasks(&self, filter: &TaskFilter, owner: &User) -> Result<Vec<Task>, AppError> {
        let mut sql = format!("SELECT {} FROM tasks WHERE user_id = $1", TASK_COLUMNS);
        let mut param_count = 2;

        if filter.status.is_some() {
            sql.push_str(&format!(" AND status = ${}", param_count));
            param_count += 1;
        }
        if filter.search.is_some() {
            sql.push_str(&format!(
                " AND (title LIKE ${} OR description LIKE ${})",
                param_count,
                param_count + 1
            ));
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, Task>(&sql).bind(owner.id);

        if let Some(status) = filter.status {
            query = query.bind(status);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            query = query.bind(pattern.clone());
            query = query.bind(pattern);
        }

        let tasks = query.fetch_all(&self.pool).await?;

        Ok(tasks)
    }

    pub async fn get_task_by_id(&self, id: i32, owner: &User) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1 AND user_id = $2",
            TASK_COLUMNS
        ))
        .bind(id)
        .bind(owner.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Updates only the status of an owned task and returns the updated row.
    ///
    /// A single owner-scoped UPDATE keeps lookup and mutation atomic; zero
    /// updated rows means the task is absent or not owned by the caller.
    pub async fn update_task_status(
        &self,
        id: i32,
        status: TaskStatus,
        owner: &User,
    ) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks SET status = $1 WHERE id = $2 AND user_id = $3 RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(status)
        .bind(id)
        .bind(owner.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Deletes an owned task. Absence is detected from the affected-row count
    /// of the delete itself rather than a separate existence check.
    pub async fn delete_task(&self, id: i32, owner: &User) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }

        Ok(())
    }
}
