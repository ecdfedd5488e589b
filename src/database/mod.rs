use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{NewUser, User, UserChanges};
use crate::utils::AppError;

/// Storage collaborator for User records
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<User>, AppError>;
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, AppError>;
    async fn create(&self, user: NewUser) -> Result<User, AppError>;
    /// Returns `None` when no record has this id
    async fn update(&self, id: u64, changes: UserChanges) -> Result<Option<User>, AppError>;
    /// Returns the removed record, `None` when it did not exist
    async fn delete(&self, id: u64) -> Result<Option<User>, AppError>;
    async fn count(&self) -> Result<usize, AppError>;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<u64, User>,
    last_id: u64,
}

/// In-memory user store. Ids come from a counter and are never reused.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<RwLock<Table>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let table = self.users.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, AppError> {
        let table = self.users.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut table = self.users.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Storage("user id sequence exhausted".to_string()))?;
        let now = Utc::now();

        let record = User {
            id,
            name: user.name,
            email: user.email,
            bod: user.bod,
            email_verified_at: user.email_verified_at,
            password: user.password,
            remember_token: user.remember_token,
            created_at: now,
            updated_at: now,
        };

        table.last_id = id;
        table.rows.insert(id, record.clone());
        log::debug!("💾 users: inserted #{}", id);
        Ok(record)
    }

    async fn update(&self, id: u64, changes: UserChanges) -> Result<Option<User>, AppError> {
        let mut table = self.users.write().await;
        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        record.name = changes.name;
        record.email = changes.email;
        record.bod = changes.bod;
        record.updated_at = Utc::now();
        log::debug!("💾 users: updated #{}", id);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: u64) -> Result<Option<User>, AppError> {
        let mut table = self.users.write().await;
        let removed = table.rows.remove(&id);
        if removed.is_some() {
            log::debug!("💾 users: deleted #{}", id);
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.users.read().await.rows.len())
    }
}
