use chrono::{NaiveDate, Utc};

use crate::database::UserRepository;
use crate::models::NewUser;
use crate::services::PlaceholderPassword;
use crate::utils::{remember_token, AppError};

/// Demo dataset: (name, email, birthday)
const DEMO_USERS: &[(&str, &str, &str)] = &[
    ("Mary Anderson", "mary@example.com", "1990-04-12"),
    ("John Carter", "john@example.com", "1985-11-03"),
    ("alice Martins", "alice@example.com", "1999-01-27"),
    ("Bob Lee", "bob@example.com", "2001-07-19"),
    ("Carla Souza", "carla@example.com", "1978-09-30"),
    ("Daniel Kim", "daniel@example.com", "1995-02-14"),
    ("Elena Petrova", "elena@example.com", "1988-06-05"),
    ("Frank Ocean", "frank@example.com", "1992-12-24"),
];

/// Seeds the demo users. Only inserts into an empty store.
pub async fn seed_demo_users(repo: &dyn UserRepository, password: &PlaceholderPassword) -> Result<usize, AppError> {
    let count = repo.count().await?;
    if count > 0 {
        log::info!("👥 Users: {} already in store — skipping seed", count);
        return Ok(0);
    }

    log::info!("👥 Users: seeding {} demo users...", DEMO_USERS.len());

    let hashed = password.hash().await?;
    for (name, email, bod) in DEMO_USERS {
        let bod = NaiveDate::parse_from_str(bod, "%Y-%m-%d")
            .map_err(|e| AppError::Storage(format!("Invalid demo birthday {}: {}", bod, e)))?;

        repo.create(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            bod,
            email_verified_at: Some(Utc::now()),
            password: hashed.clone(),
            remember_token: remember_token(),
        })
        .await?;
    }

    log::info!("   ✅ Inserted {} demo users", DEMO_USERS.len());
    Ok(DEMO_USERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDb;
    use crate::services::BcryptHasher;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seed_only_once() {
        let db = MemoryDb::new();
        let password = PlaceholderPassword::new("password", Arc::new(BcryptHasher::new(4)));

        let inserted = seed_demo_users(&db, &password).await.unwrap();
        assert_eq!(inserted, DEMO_USERS.len());

        let again = seed_demo_users(&db, &password).await.unwrap();
        assert_eq!(again, 0);
        assert_eq!(db.count().await.unwrap(), DEMO_USERS.len());
    }

    #[tokio::test]
    async fn test_seeded_users_are_valid() {
        let db = MemoryDb::new();
        let password = PlaceholderPassword::new("password", Arc::new(BcryptHasher::new(4)));
        seed_demo_users(&db, &password).await.unwrap();

        for user in db.list_all().await.unwrap() {
            assert!(user.name.chars().count() >= 3);
            assert!(crate::services::validation::is_valid_email(&user.email));
        }
    }
}
