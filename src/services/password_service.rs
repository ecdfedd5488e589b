use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::utils::AppError;

/// Hashing collaborator
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> Result<String, AppError> {
        bcrypt::hash(plain, self.cost).map_err(|e| AppError::Hashing(format!("Failed to hash password: {}", e)))
    }
}

/// Demo password given to every user created from the screen.
/// Hashed on first use, the same hash is handed out afterwards.
pub struct PlaceholderPassword {
    plain: String,
    hasher: Arc<dyn PasswordHasher>,
    hashed: OnceCell<String>,
}

impl PlaceholderPassword {
    pub fn new(plain: impl Into<String>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            plain: plain.into(),
            hasher,
            hashed: OnceCell::new(),
        }
    }

    pub async fn hash(&self) -> Result<String, AppError> {
        let hashed = self
            .hashed
            .get_or_try_init(|| async {
                let hasher = self.hasher.clone();
                let plain = self.plain.clone();
                log::info!("🔑 Hashing placeholder password");
                match tokio::task::spawn_blocking(move || hasher.hash(&plain)).await {
                    Ok(hashed) => hashed,
                    Err(e) => Err(AppError::Hashing(format!("Hashing task failed: {}", e))),
                }
            })
            .await?;
        Ok(hashed.clone())
    }
}
