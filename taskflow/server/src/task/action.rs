use serde::Deserialize;

use crate::entities::sea_orm_active_enums::TaskStatus;

/// Raw form body posted to the task page.
///
/// The submit controls name the action (`add_task`, `update_status`,
/// `delete_task`); the remaining fields carry its arguments.
#[derive(Debug, Default, Deserialize)]
pub struct TaskForm {
    pub add_task: Option<String>,
    pub update_status: Option<String>,
    pub delete_task: Option<String>,
    pub task: Option<String>,
    pub id: Option<String>,
    pub status: Option<String>,
}

/// A decoded mutation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Create a task from the submitted text. Trimming happens at insertion.
    Add { text: String },
    UpdateStatus { id: i32, status: TaskStatus },
    Delete { id: i32 },
}

/// Error type for forms that do not name exactly one action.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("No task action was submitted")]
    Missing,
    #[error("Conflicting task actions were submitted: {0}")]
    Conflicting(String),
}

impl TryFrom<TaskForm> for TaskAction {
    type Error = ActionError;

    fn try_from(form: TaskForm) -> Result<Self, Self::Error> {
        let submitted: Vec<&str> = [
            ("add_task", form.add_task.is_some()),
            ("update_status", form.update_status.is_some()),
            ("delete_task", form.delete_task.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect();

        match submitted.as_slice() {
            [] => Err(ActionError::Missing),
            ["add_task"] => Ok(TaskAction::Add {
                text: form.task.unwrap_or_default(),
            }),
            ["update_status"] => Ok(TaskAction::UpdateStatus {
                id: coerce_id(form.id.as_deref().unwrap_or_default()),
                status: TaskStatus::coerce(form.status.as_deref().unwrap_or_default()),
            }),
            ["delete_task"] => Ok(TaskAction::Delete {
                id: coerce_id(form.id.as_deref().unwrap_or_default()),
            }),
            _ => Err(ActionError::Conflicting(submitted.join(", "))),
        }
    }
}

/// Reads an identifier the lenient way a form field deserves: leading ASCII
/// whitespace is skipped, then an optional sign and the leading digits are
/// taken. Input without leading digits yields `0`; out-of-range values
/// saturate.
pub fn coerce_id(raw: &str) -> i32 {
    let trimmed = raw.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });
    let value = if negative { -magnitude } else { magnitude };

    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
