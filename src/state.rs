use diesel::{
    r2d2::{ConnectionManager, PooledConnection},
    SqliteConnection,
};

use bcrypt::BcryptError;

use crate::{
    config::Config,
    db::DbPool,
    error::ApiError,
    features::auth::{hash_password, TokenManager},
};

pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Everything a handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub tokens: TokenManager,
    pub bcrypt_cost: u32,
    /// Hash checked when a login names an unknown email, so both failure
    /// paths pay for one bcrypt verification.
    pub decoy_hash: String,
}

impl AppState {
    pub fn new(pool: DbPool, config: &Config) -> Result<Self, BcryptError> {
        Ok(AppState {
            pool,
            tokens: TokenManager::new(&config.jwt_secret, config.jwt_expires_minutes),
            bcrypt_cost: config.bcrypt_cost,
            decoy_hash: hash_password("fitcooker-decoy-password", config.bcrypt_cost)?,
        })
    }

    pub fn conn(&self) -> Result<DbConn, ApiError> {
        Ok(self.pool.get()?)
    }
}
