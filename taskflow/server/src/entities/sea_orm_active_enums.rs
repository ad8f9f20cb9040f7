use sea_orm::entity::prelude::*;

/// Lifecycle state of a task, stored as its display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TaskStatus {
    #[default]
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

impl TaskStatus {
    /// Every status, in the order the selector offers them.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Maps a submitted value onto a status, falling back to `Pending` for
    /// anything that is not an exact match.
    pub fn coerce(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .unwrap_or_default()
    }

    /// CSS class for the task card border.
    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "status-pending",
            TaskStatus::InProgress => "status-progress",
            TaskStatus::Completed => "status-completed",
        }
    }

    /// Font Awesome icon shown next to the task text.
    pub fn icon_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "far fa-circle",
            TaskStatus::InProgress => "fas fa-clock",
            TaskStatus::Completed => "fas fa-check-circle",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == TaskStatus::Completed
    }
}
