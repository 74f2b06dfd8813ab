use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One logged conversational turn. Rows are immutable once written; the
/// `id` the store assigns on insert is the retrieval order.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Exchange {
    pub id: i64,
    pub user_id: String,
    pub usuario: String,
    pub assistente: String,
}
