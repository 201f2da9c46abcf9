use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

// Database connection manager
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    // Create a new database connection pool and make sure the schema exists
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        // Every connection to sqlite::memory: opens a fresh database, so keep exactly one alive
        let in_memory = database_url.contains(":memory:");
        let options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(3));
        let options = if in_memory {
            options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            options.max_connections(10)
        };

        let pool = options.connect(database_url).await?;
        Self::create_tables(&pool).await?;

        Ok(Database { pool })
    }

    async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                full_name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                phone TEXT NOT NULL,
                password TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
