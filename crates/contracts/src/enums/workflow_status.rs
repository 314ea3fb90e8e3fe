use serde::{Deserialize, Serialize};

/// Приоритет для статусов, которых нет в таблице
pub const UNKNOWN_STATUS_PRIORITY: u32 = 999;

/// Стадия PST/PSW. В записях статус хранится сырым кодом,
/// этот тип только описывает известные коды.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowStatus {
    NotStarted,
    InProgress,
    Done,
}

impl WorkflowStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowStatus::NotStarted => "N",
            WorkflowStatus::InProgress => "P",
            WorkflowStatus::Done => "Y",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkflowStatus::NotStarted => "Not started",
            WorkflowStatus::InProgress => "In progress",
            WorkflowStatus::Done => "Done",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(WorkflowStatus::NotStarted),
            "P" => Some(WorkflowStatus::InProgress),
            "Y" => Some(WorkflowStatus::Done),
            _ => None,
        }
    }

    /// Позиция в процессе: меньше = раньше
    pub fn priority(&self) -> u32 {
        match self {
            WorkflowStatus::NotStarted => 1,
            WorkflowStatus::InProgress => 2,
            WorkflowStatus::Done => 3,
        }
    }

    pub fn all() -> Vec<WorkflowStatus> {
        vec![
            WorkflowStatus::NotStarted,
            WorkflowStatus::InProgress,
            WorkflowStatus::Done,
        ]
    }
}

/// Приоритет сырого кода статуса; неизвестные и пустые идут в конец
pub fn status_priority(code: Option<&str>) -> u32 {
    code.and_then(WorkflowStatus::from_code)
        .map(|s| s.priority())
        .unwrap_or(UNKNOWN_STATUS_PRIORITY)
}

/// Статус завершён (точное совпадение с кодом "Y")
pub fn is_done(code: Option<&str>) -> bool {
    code == Some(WorkflowStatus::Done.code())
}
