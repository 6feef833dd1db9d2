pub mod task;
pub mod user;

pub use task::{CreateTaskRequest, Task, TaskFilter, TaskStatus, UpdateTaskStatusRequest};
pub use user::User;
