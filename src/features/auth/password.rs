use bcrypt::{hash, verify, BcryptError};

/// Salted bcrypt hash at the configured cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}

pub fn verify_password(stored_hash: &str, input_password: &str) -> Result<bool, BcryptError> {
    verify(input_password, stored_hash)
}
