use crate::{config::Config, error::Result, models::*};
use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// ==================== USER QUERIES ====================
impl Database {
    pub async fn find_or_create_user(&self, address: &str) -> Result<User> {
        if let Some(user) = self.get_user(address).await? {
            return Ok(user);
        }

        // A concurrent request may have inserted the same wallet.
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (address) VALUES ($1)
            ON CONFLICT (address) DO UPDATE SET address = EXCLUDED.address
            RETURNING id, address, created_at
            "#,
        )
        .bind(address)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn get_user(&self, address: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, address, created_at FROM users WHERE address = $1",
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

// ==================== CHAT QUERIES ====================
impl Database {
    pub async fn create_chat(&self, user_id: i64, chat_type: &str) -> Result<Chat> {
        let chat = sqlx::query_as::<_, Chat>(
            r#"
            INSERT INTO chats (user_id, chat_type) VALUES ($1, $2)
            RETURNING id, user_id, chat_type, created_at
            "#,
        )
        .bind(user_id)
        .bind(chat_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(chat)
    }

    pub async fn store_message(
        &self,
        chat_id: i64,
        user_id: i64,
        content: &serde_json::Value,
    ) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (chat_id, user_id, content) VALUES ($1, $2, $3)
            RETURNING id, chat_id, user_id, content, created_at
            "#,
        )
        .bind(chat_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(message)
    }
}

// ==================== TRANSACTION QUERIES ====================
impl Database {
    pub async fn store_transaction(
        &self,
        user_id: i64,
        tx_type: &str,
        metadata: &serde_json::Value,
    ) -> Result<StoredTransaction> {
        let tx = sqlx::query_as::<_, StoredTransaction>(
            r#"
            INSERT INTO transactions (user_id, tx_type, metadata) VALUES ($1, $2, $3)
            RETURNING id, user_id, tx_type, metadata, created_at
            "#,
        )
        .bind(user_id)
        .bind(tx_type)
        .bind(metadata)
        .fetch_one(&self.pool)
        .await?;
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[tokio::test]
    async fn database_new_returns_error_on_invalid_url() {
        let mut config = test_config();
        config.database_url = "not-a-url".to_string();
        let result = Database::new(&config).await;
        assert!(result.is_err());
    }
}
