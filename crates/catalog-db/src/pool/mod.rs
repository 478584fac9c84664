//! Database connection pool management

mod sqlite;

pub use sqlite::{create_lazy_pool, create_pool, ping, DatabaseConfig};

// Re-export SqlitePool for convenience
pub use sqlx::sqlite::SqlitePool;
