pub mod models;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS historico (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT,
                usuario TEXT,
                assistente TEXT
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_historico_user ON historico(user_id, id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // ── History Operations ─────────────────────────────────────────

    /// Append one exchange to the user's log. There is no update or
    /// delete; the log only grows.
    pub async fn append_exchange(
        &self,
        user_id: &str,
        usuario: &str,
        assistente: &str,
    ) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO historico (user_id, usuario, assistente) VALUES (?1, ?2, ?3)")
            .bind(user_id)
            .bind(usuario)
            .bind(assistente)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All exchanges for a user in insertion order; empty if none exist.
    /// The store imposes no window; trimming to the recent entries is
    /// the prompt composer's job.
    pub async fn load_history(&self, user_id: &str) -> anyhow::Result<Vec<models::Exchange>> {
        let rows = sqlx::query_as::<_, models::Exchange>(
            "SELECT * FROM historico WHERE user_id = ?1 ORDER BY id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
