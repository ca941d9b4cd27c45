use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entrada del libro de registro (auditoría)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub id: i32,
    pub action: String,
    pub occurred_at: NaiveDateTime,
    pub user_id: i32,
}
