use crate::entities::*;
use sea_orm::*;

pub mod action;
pub mod web;

pub use crate::entities::sea_orm_active_enums::TaskStatus;
pub use action::{ActionError, TaskAction, TaskForm};

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Task {
    id: i32,
    text: String,
    status: TaskStatus,
    created_at: chrono::NaiveDateTime,
}

impl Task {
    pub fn new(
        id: i32,
        text: String,
        status: TaskStatus,
        created_at: chrono::NaiveDateTime,
    ) -> Self {
        Self {
            id,
            text,
            status,
            created_at,
        }
    }

    /// Returns the ID of the task.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the task description.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn created_at(&self) -> chrono::NaiveDateTime {
        self.created_at
    }

    /// Task text with `&`, `<` and `>` replaced by named entities, ready to
    /// embed as HTML element content.
    pub fn html_text(&self) -> std::borrow::Cow<'_, str> {
        html_escape::encode_text(&self.text)
    }

    pub fn has_status(&self, status: &TaskStatus) -> bool {
        self.status == *status
    }
}

impl From<todo::Model> for Task {
    fn from(model: todo::Model) -> Self {
        Task::new(model.id, model.task, model.status, model.created_at)
    }
}

/// Characters stripped from submitted task text: ASCII space, tab, line feed,
/// carriage return, NUL and vertical tab. Other Unicode whitespace is kept.
fn is_form_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Runs the task mutations and the listing, one statement each.
pub struct TaskService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl TaskService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TaskService<'_> {
        TaskService { db }
    }

    /// Inserts a task with the store's default status and timestamp.
    ///
    /// # Arguments
    ///
    /// * `text` - The submitted description; surrounding whitespace is trimmed.
    ///
    /// # Returns
    ///
    /// The ID assigned by the store, or `None` when the trimmed text is empty
    /// and nothing was inserted.
    #[tracing::instrument(skip(self))]
    pub async fn add_task(&self, text: &str) -> Result<Option<i32>, TaskServiceError> {
        let text = text.trim_matches(is_form_whitespace);
        if text.is_empty() {
            tracing::debug!("Skipped blank task submission");
            return Ok(None);
        }

        let active_model = todo::ActiveModel {
            task: ActiveValue::Set(text.to_string()),
            ..Default::default()
        };
        let result = todo::Entity::insert(active_model).exec(self.db).await?;
        tracing::info!("Created task {}", result.last_insert_id);
        Ok(Some(result.last_insert_id))
    }

    /// Sets the status of the task with the given ID.
    ///
    /// # Returns
    ///
    /// The number of rows changed. Zero is not an error: the task may already
    /// be gone.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: i32,
        status: TaskStatus,
    ) -> Result<u64, TaskServiceError> {
        let result = todo::Entity::update_many()
            .set(todo::ActiveModel {
                status: ActiveValue::Set(status),
                ..Default::default()
            })
            .filter(todo::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        tracing::debug!("Status update affected {} row(s)", result.rows_affected);
        Ok(result.rows_affected)
    }

    /// Deletes the task with the given ID.
    ///
    /// # Returns
    ///
    /// The number of rows removed. Deleting an absent task removes nothing.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task(&self, id: i32) -> Result<u64, TaskServiceError> {
        let result = todo::Entity::delete_by_id(id).exec(self.db).await?;
        tracing::debug!("Delete affected {} row(s)", result.rows_affected);
        Ok(result.rows_affected)
    }

    /// Retrieves every task, newest first.
    ///
    /// Rows sharing a `created_at` value are ordered by descending ID so the
    /// latest insertion still comes first.
    #[tracing::instrument(skip(self))]
    pub async fn list_tasks(&self) -> Result<Vec<Task>, TaskServiceError> {
        let tasks = todo::Entity::find()
            .order_by_desc(todo::Column::CreatedAt)
            .order_by_desc(todo::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from)
            .collect();
        Ok(tasks)
    }

    /// Executes a decoded action.
    #[tracing::instrument(skip(self))]
    pub async fn apply(&self, action: TaskAction) -> Result<(), TaskServiceError> {
        match action {
            TaskAction::Add { text } => {
                self.add_task(&text).await?;
            }
            TaskAction::UpdateStatus { id, status } => {
                self.update_status(id, status).await?;
            }
            TaskAction::Delete { id } => {
                self.delete_task(id).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(text: &str) -> Task {
        let created_at = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Task::new(1, text.to_string(), TaskStatus::Pending, created_at)
    }

    #[test]
    fn can_escape_markup_with_named_entities() {
        assert_eq!(task("<b>bold & more").html_text(), "&lt;b&gt;bold &amp; more");
        assert_eq!(task("Buy milk").html_text(), "Buy milk");
    }

    #[test]
    fn can_strip_only_ascii_form_whitespace() {
        assert!(is_form_whitespace(' '));
        assert!(is_form_whitespace('\x0B'));
        assert!(!is_form_whitespace('\u{a0}'));
        assert!(!is_form_whitespace('\u{2003}'));
    }
}
