use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

/// Whether `value` is already a bcrypt hash in modular-crypt format.
///
/// The `$2…$` prefix tags the algorithm variant, and the rest of the string
/// embeds cost and salt, so a stored hash is fully self-describing.
pub fn is_bcrypt_hash(value: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

/// Hashes `value` unless it is already a bcrypt hash.
///
/// Every password write goes through here. Re-hashing a stored hash would
/// make the account permanently unverifiable after any unrelated re-save,
/// so an already-hashed value passes through unchanged.
pub fn ensure_hashed(value: &str) -> Result<String, AppError> {
    if is_bcrypt_hash(value) {
        Ok(value.to_string())
    } else {
        hash_password(value)
    }
}
