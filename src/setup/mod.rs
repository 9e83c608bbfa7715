//! # Schema Setup
//!
//! One-shot bootstrap: open one administrative connection, read the SQL
//! script, submit it as a single multi-statement batch, close the
//! connection.
//!
//! Once a connection is open it is closed on every exit path. The script
//! itself must be safe to re-run (`CREATE ... IF NOT EXISTS`); nothing here
//! makes a partially applied batch atomic.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sqlx::{Connection, MySqlConnection};
use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::observability::Event;
use crate::store::{server_connect_options, StoreError};

/// Default script location, relative to the working directory
pub const DEFAULT_SCHEMA_PATH: &str = "./schema.sql";

/// Setup errors (all fatal)
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to connect: {0}")]
    Connect(#[source] StoreError),

    #[error("failed to read {}: {source}", .path.display())]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to execute schema script: {0}")]
    Execute(#[source] StoreError),

    #[error("failed to close connection: {0}")]
    Close(#[source] StoreError),
}

/// A connection able to apply an opaque multi-statement batch
#[async_trait]
pub trait SchemaConnection: Send {
    /// Submit the whole script in one round-trip
    async fn execute_batch(&mut self, script: &str) -> Result<(), StoreError>;

    /// Close the connection
    async fn close(self) -> Result<(), StoreError>;
}

#[async_trait]
impl SchemaConnection for MySqlConnection {
    async fn execute_batch(&mut self, script: &str) -> Result<(), StoreError> {
        sqlx::Executor::execute(&mut *self, sqlx::raw_sql(script)).await?;
        Ok(())
    }

    async fn close(self) -> Result<(), StoreError> {
        Connection::close(self).await?;
        Ok(())
    }
}

/// Connect to the server with the configured credentials and apply the
/// script at `path`.
///
/// `DB_DATABASE` is ignored: the database may not exist yet.
pub async fn run(settings: &Settings, path: &Path) -> Result<(), SetupError> {
    info!(event = %Event::SetupBegin, script = %path.display(), "starting database setup");

    let conn = MySqlConnection::connect_with(&server_connect_options(settings))
        .await
        .map_err(|e| SetupError::Connect(e.into()))?;

    info!(event = %Event::SetupConnected, host = %settings.db_host, "connected to MySQL server");

    apply_schema(conn, path).await
}

/// Read and apply the script over an open connection, then close it.
///
/// The connection is closed whether or not the script applied; an apply
/// error takes precedence over a close error.
pub async fn apply_schema<C: SchemaConnection>(mut conn: C, path: &Path) -> Result<(), SetupError> {
    let applied = read_and_execute(&mut conn, path).await;
    let closed = conn.close().await.map_err(SetupError::Close);

    info!(event = %Event::SetupConnectionClosed, "connection closed");

    applied?;
    closed?;

    info!(
        event = %Event::SetupComplete,
        script = %path.display(),
        "database and tables created"
    );
    Ok(())
}

async fn read_and_execute<C: SchemaConnection>(conn: &mut C, path: &Path) -> Result<(), SetupError> {
    let script = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SetupError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;

    conn.execute_batch(&script).await.map_err(SetupError::Execute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct Journal {
        batches: Vec<String>,
        closed: bool,
    }

    struct RecordingConnection {
        journal: Arc<Mutex<Journal>>,
        fail_execute: bool,
    }

    impl RecordingConnection {
        fn new(fail_execute: bool) -> (Self, Arc<Mutex<Journal>>) {
            let journal = Arc::new(Mutex::new(Journal::default()));
            let conn = Self {
                journal: journal.clone(),
                fail_execute,
            };
            (conn, journal)
        }
    }

    #[async_trait]
    impl SchemaConnection for RecordingConnection {
        async fn execute_batch(&mut self, script: &str) -> Result<(), StoreError> {
            self.journal.lock().unwrap().batches.push(script.to_string());
            if self.fail_execute {
                return Err(StoreError::Unavailable("syntax error near CREATE".to_string()));
            }
            Ok(())
        }

        async fn close(self) -> Result<(), StoreError> {
            self.journal.lock().unwrap().closed = true;
            Ok(())
        }
    }

    fn script_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_applies_whole_script_as_one_batch() {
        let script = "CREATE DATABASE IF NOT EXISTS shopfront;\nUSE shopfront;\n";
        let file = script_file(script);
        let (conn, journal) = RecordingConnection::new(false);

        apply_schema(conn, file.path()).await.unwrap();

        let journal = journal.lock().unwrap();
        assert_eq!(journal.batches, vec![script.to_string()]);
        assert!(journal.closed);
    }

    #[tokio::test]
    async fn test_closes_connection_when_batch_fails() {
        let file = script_file("CREATE TABLE broken (");
        let (conn, journal) = RecordingConnection::new(true);

        let err = apply_schema(conn, file.path()).await.unwrap_err();

        assert!(matches!(err, SetupError::Execute(_)));
        assert!(journal.lock().unwrap().closed);
    }

    #[tokio::test]
    async fn test_missing_script_executes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sql");
        let (conn, journal) = RecordingConnection::new(false);

        let err = apply_schema(conn, &path).await.unwrap_err();

        assert!(matches!(err, SetupError::ReadScript { .. }));
        assert!(err.to_string().contains("missing.sql"));
        let journal = journal.lock().unwrap();
        assert!(journal.batches.is_empty());
        assert!(journal.closed);
    }

    fn assert_schema_connection<C: SchemaConnection>() {}

    #[test]
    fn test_mysql_connection_applies_schema() {
        assert_schema_connection::<MySqlConnection>();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connect_error() {
        let settings = Settings {
            db_host: "127.0.0.1".to_string(),
            db_port: 1,
            db_database: Some("not_created_yet".to_string()),
            ..Settings::default()
        };
        let file = script_file("CREATE DATABASE IF NOT EXISTS shopfront;");

        let err = run(&settings, file.path()).await.unwrap_err();

        assert!(matches!(err, SetupError::Connect(_)));
    }

    #[test]
    fn test_bundled_schema_creates_all_tables() {
        let schema = include_str!("../../schema.sql");
        for table in ["users", "orders", "applicants"] {
            assert!(
                schema.contains(&format!("CREATE TABLE IF NOT EXISTS {table}")),
                "schema.sql should create {table}"
            );
        }
    }
}
