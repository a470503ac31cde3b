//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use ijara_orders::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// A migrated SQLite database inside its own temporary directory. The
/// directory (database file and WAL companions included) is removed when the
/// fixture is dropped, so every test starts from an empty schema.
pub struct TestDb {
    db_path: PathBuf,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join(filename);
        let database_url = db_path.to_string_lossy().into_owned();

        let pool =
            establish_connection_pool(&database_url).expect("failed to build SQLite pool");
        let mut conn = pool.get().expect("failed to check out a connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations failed");

        TestDb {
            db_path,
            pool,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}
