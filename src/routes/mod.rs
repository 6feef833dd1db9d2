pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

use crate::error::AppError;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    )
    // actix rejects an unparseable path segment with 404 by default; a
    // non-numeric task id is malformed input and must be a 400 instead.
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    )
    .service(health::health)
    .service(
        web::scope("/auth")
            .service(auth::signup)
            .service(auth::login),
    )
    .service(
        web::scope("/tasks")
            .service(tasks::get_tasks)
            .service(tasks::create_task)
            .service(tasks::get_task)
            .service(tasks::update_task_status)
            .service(tasks::delete_task),
    );
}
