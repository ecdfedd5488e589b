use serde::{Deserialize, Serialize};

use super::User;
use chrono::NaiveDate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    #[default]
    Name,
    Email,
    Bod,
    Birthday,
    Age,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Email => "email",
            SortColumn::Bod => "bod",
            SortColumn::Birthday => "birthday",
            SortColumn::Age => "age",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, utoipa::ToSchema)]
pub struct SortBy {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Column descriptor consumed by the table template
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct TableHeader {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub sortable: bool,
}

impl TableHeader {
    fn new(key: &str, label: &str, class: Option<&str>, sortable: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            class: class.map(str::to_string),
            sortable,
        }
    }
}

/// Fixed column list of the users table. Not derived from data.
pub fn user_headers() -> Vec<TableHeader> {
    vec![
        TableHeader::new("id", "#", Some("w-1"), true),
        TableHeader::new("name", "Name", Some("w-64"), true),
        TableHeader::new("bod", "BOD", Some("w-32"), true),
        TableHeader::new("birthday", "Birthday", Some("w-auto"), true),
        TableHeader::new("age", "Age", Some("w-20"), true),
        TableHeader::new("email", "E-mail", None, false),
    ]
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct UserRow {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub bod: NaiveDate,
    pub birthday: String,
    pub age: u32,
}

impl UserRow {
    pub fn from_user(user: &User, today: NaiveDate) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            bod: user.bod,
            birthday: user.birthday(),
            age: user.age_on(today),
        }
    }
}

/// Data provider output: `{ rows, headers }`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct UserTable {
    pub rows: Vec<UserRow>,
    pub headers: Vec<TableHeader>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sort_is_name_asc() {
        let sort = SortBy::default();
        assert_eq!(sort.column, SortColumn::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_only_email_is_not_sortable() {
        let headers = user_headers();
        let unsortable: Vec<_> = headers.iter().filter(|h| !h.sortable).map(|h| h.key.as_str()).collect();
        assert_eq!(unsortable, vec!["email"]);
        assert_eq!(headers[0].label, "#");
    }

    #[test]
    fn test_sort_by_wire_format() {
        let sort: SortBy = serde_json::from_str(r#"{"column":"bod","direction":"desc"}"#).unwrap();
        assert_eq!(sort.column, SortColumn::Bod);
        assert_eq!(sort.direction, SortDirection::Desc);
        assert_eq!(sort.direction.toggled(), SortDirection::Asc);
    }
}
