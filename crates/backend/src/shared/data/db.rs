use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_DATASET_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_dataset (
        id TEXT PRIMARY KEY NOT NULL,
        code TEXT NOT NULL DEFAULT '',
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        measurement_type TEXT NOT NULL,
        detector TEXT NOT NULL,
        voltage_kv REAL NOT NULL,
        file_size_mb REAL NOT NULL,
        sample TEXT NOT NULL DEFAULT '',
        acquired_at TEXT,
        file_path TEXT NOT NULL DEFAULT '',
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_DATASET_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_a001_dataset_measurement_type ON a001_dataset (measurement_type);",
    "CREATE INDEX IF NOT EXISTS idx_a001_dataset_detector ON a001_dataset (detector);",
];

/// sqlite URL for a file path, with Windows drive letters handled
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_DATASET_TABLE.to_string(),
    ))
    .await?;
    for sql in CREATE_DATASET_INDEXES {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_absolute_unix_path() {
        let url = sqlite_url(Path::new("/var/lib/catalog.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/catalog.db?mode=rwc");
    }
}
