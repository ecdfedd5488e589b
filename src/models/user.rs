use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: u64,  // atribuído pelo storage, nunca muda
    pub name: String,
    pub email: String,
    pub bod: NaiveDate,
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(skip_serializing, default)]
    pub remember_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full years lived at `today`. Future birthdays count as zero.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut years = today.year() - self.bod.year();
        if (today.month(), today.day()) < (self.bod.month(), self.bod.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    /// Day and month of the birthday, e.g. "01 January"
    pub fn birthday(&self) -> String {
        self.bod.format("%d %B").to_string()
    }
}

/// Fields required to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub bod: NaiveDate,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub password: String,
    pub remember_token: String,
}

/// Editable fields; everything else on the record stays untouched
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub bod: NaiveDate,
}
