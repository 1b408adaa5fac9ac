mod datetime;

pub use datetime::*;

/// Persistence handle shared by every store.
///
/// Constructed once by the caller and passed down explicitly, so tests can
/// build isolated instances against their own database files. Reads go
/// through `read_db`; all writes and transactions go through the
/// single-connection `write_db`.
#[derive(Clone)]
pub struct Store {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl Store {
    pub fn new(read_db: sqlx::SqlitePool, write_db: sqlx::SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    /// Build a store backed by one pool for both reads and writes. Used by
    /// CLI commands and tests where the read/write split does not matter.
    pub fn single(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}
