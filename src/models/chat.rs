use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ==================== USER ====================
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

// ==================== CHAT ====================
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chat {
    pub id: i64,
    pub user_id: i64,
    pub chat_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub user_id: i64,
    pub content: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

// ==================== TRANSACTION ====================
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredTransaction {
    pub id: i64,
    pub user_id: i64,
    pub tx_type: String, // swap/transfer/bridge/deposit/withdraw
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
