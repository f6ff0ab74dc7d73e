// Password policy and bcrypt hashing

use bcrypt::{hash, verify, DEFAULT_COST};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Checks the password policy before hashing
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Hashes a password with bcrypt at the default cost
pub fn hash_password(password: &str) -> Result<String, String> {
    hash(password, DEFAULT_COST).map_err(|e| e.to_string())
}

/// Checks `password` against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}
