/// Password hashing with bcrypt
use crate::error::EstateError;

/// Hashes a credential on the blocking pool
///
/// bcrypt is CPU-bound and must stay off the async worker threads.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, EstateError> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| EstateError::Hashing(format!("Hashing task failed: {}", e)))??;
    Ok(hashed)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, EstateError> {
    Ok(bcrypt::verify(password, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ADMIN_BCRYPT_COST;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("Admin@123", 4).await.unwrap();

        assert_ne!(hash, "Admin@123");
        assert!(verify_password("Admin@123", &hash).unwrap());
        assert!(!verify_password("admin@123", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_hash_encodes_cost() {
        let hash = hash_password("Admin@123", ADMIN_BCRYPT_COST).await.unwrap();
        assert!(hash.starts_with("$2b$10$"));
    }

    #[tokio::test]
    async fn test_invalid_cost_is_hashing_error() {
        let err = hash_password("Admin@123", 2).await.unwrap_err();
        assert!(matches!(err, EstateError::Hashing(_)));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("Admin@123", "not-a-hash").is_err());
    }
}
