use askama::Template;
use axum::{
    Form, Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
};
use chrono::Datelike;
use std::sync::Arc;

use crate::task::{
    ActionError, Task, TaskAction, TaskForm, TaskService, TaskServiceError, TaskStatus,
};

/// Custom error type for task handler operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// Represents an error during template rendering.
    #[error("Template rendering failed")]
    Template(#[from] askama::Error),
    /// Represents a task service error.
    #[error("Task service error")]
    Service(#[from] TaskServiceError),
    /// The posted form did not name exactly one action.
    #[error("Invalid task action: {0}")]
    InvalidAction(#[from] ActionError),
}

impl axum::response::IntoResponse for TaskError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, user_facing_error_message) = match &self {
            TaskError::InvalidAction(_) => (
                StatusCode::BAD_REQUEST,
                "The submitted form must contain exactly one task action.",
            ),
            _ => {
                tracing::error!("Task request failed: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred while processing your request. Please try again later.",
                )
            }
        };

        let error_template = ErrorMessageTemplate::new(user_facing_error_message.to_string());
        let Ok(rendered) = error_template.render() else {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        };

        (status_code, Html(rendered)).into_response()
    }
}

#[derive(Template)]
#[template(path = "tasks.html")]
struct TasksTemplate {
    tasks: Vec<Task>,
    statuses: &'static [TaskStatus],
    total_count: usize,
    completed_count: usize,
    in_progress_count: usize,
    year: i32,
}

impl TasksTemplate {
    pub fn new(tasks: Vec<Task>, year: i32) -> Self {
        let count = |status: TaskStatus| {
            tasks
                .iter()
                .filter(|task| task.status() == status)
                .count()
        };
        let completed_count = count(TaskStatus::Completed);
        let in_progress_count = count(TaskStatus::InProgress);
        Self {
            total_count: tasks.len(),
            completed_count,
            in_progress_count,
            statuses: &TaskStatus::ALL,
            tasks,
            year,
        }
    }
}

#[derive(Template)]
#[template(path = "tasks/error_message.html")]
struct ErrorMessageTemplate {
    message: String,
}

impl ErrorMessageTemplate {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

/// Renders the task page for an already ordered list of tasks.
pub fn render_tasks_page(tasks: Vec<Task>) -> Result<String, askama::Error> {
    let year = chrono::Utc::now().year();
    TasksTemplate::new(tasks, year).render()
}

#[derive(Clone, Debug)]
pub struct TaskState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

/// Handler for GET / that lists every task, newest first.
#[tracing::instrument(skip(state))]
async fn tasks_handler(State(state): State<Arc<TaskState>>) -> Result<Html<String>, TaskError> {
    let task_service = TaskService::new(&state.db);
    let tasks = task_service.list_tasks().await?;
    render_tasks_page(tasks).map(Html).map_err(TaskError::from)
}

/// Handler for POST / that applies one mutation and redirects back to the page.
#[tracing::instrument(skip(state))]
async fn task_action_handler(
    State(state): State<Arc<TaskState>>,
    OriginalUri(uri): OriginalUri,
    Form(form): Form<TaskForm>,
) -> Result<Redirect, TaskError> {
    let action = TaskAction::try_from(form)?;
    let task_service = TaskService::new(&state.db);
    task_service.apply(action).await?;
    Ok(Redirect::to(uri.path()))
}

/// Creates and returns the task router.
pub fn create_task_router(state: Arc<TaskState>) -> Router {
    Router::new()
        .route("/", get(tasks_handler).post(task_action_handler))
        .with_state(state)
}
