use diesel::{
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, Pool},
    SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

#[derive(Error, Debug)]
pub enum DbSetupError {
    #[error("Failed to create DB pool: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Failed to run database migrations: {0}")]
    Migration(Box<dyn std::error::Error + Send + Sync>),
}

/// Applied to every connection the pool hands out. SQLite leaves foreign
/// keys off unless asked, per connection.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool, DbSetupError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas));

    // Every in-memory connection is its own database, so it must never be
    // recycled by the pool.
    if database_url == ":memory:" {
        builder = builder.max_size(1).idle_timeout(None).max_lifetime(None);
    }

    let pool = builder.build(manager)?;

    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(DbSetupError::Migration)?;
    if !applied.is_empty() {
        log::info!("Applied {} database migration(s)", applied.len());
    }

    Ok(pool)
}
