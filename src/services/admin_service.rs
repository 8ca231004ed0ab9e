use crate::models::ServiceError;
use crate::repositories::AdminRepository;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::Arc;

pub struct AdminService {
    repository: Arc<dyn AdminRepository>,
}

impl AdminService {
    pub fn new(repository: Arc<dyn AdminRepository>) -> Self {
        Self { repository }
    }

    fn hash_password(password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// Create the admin account with the default password if it is missing.
    pub async fn ensure_seed_account(
        &self,
        username: &str,
        default_password: &str,
    ) -> Result<(), ServiceError> {
        if self.repository.find_password_hash(username).await?.is_some() {
            return Ok(());
        }

        let hash = Self::hash_password(default_password)?;
        self.repository.upsert_password_hash(username, &hash).await?;
        tracing::info!("Seeded admin account '{}'", username);
        Ok(())
    }

    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, ServiceError> {
        let Some(stored) = self.repository.find_password_hash(username).await? else {
            return Ok(false);
        };

        let Ok(parsed_hash) = PasswordHash::new(&stored) else {
            tracing::error!("Stored admin password hash is not parsable");
            return Ok(false);
        };

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    pub async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        if !self.verify_credentials(username, current_password).await? {
            return Err(ServiceError::AuthenticationError(
                "Current password is incorrect".to_string(),
            ));
        }

        let hash = Self::hash_password(new_password)?;
        self.repository.upsert_password_hash(username, &hash).await?;
        tracing::info!("Admin password updated for '{}'", username);
        Ok(())
    }
}
