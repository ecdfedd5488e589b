// ==================== LISTING ====================
// Filtro por nome (case-insensitive) + ordenação por uma coluna. Sem paginação.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};

use crate::models::{user_headers, SortBy, SortColumn, SortDirection, User, UserRow, UserTable, UsersScreen};

/// Case-insensitive substring match on the name
pub fn name_matches(user: &User, term: &str) -> bool {
    user.name.to_lowercase().contains(&term.to_lowercase())
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn compare(a: &User, b: &User, column: SortColumn, today: NaiveDate) -> Ordering {
    let primary = match column {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::Name => compare_text(&a.name, &b.name),
        SortColumn::Email => compare_text(&a.email, &b.email),
        SortColumn::Bod => a.bod.cmp(&b.bod),
        SortColumn::Birthday => (a.bod.month(), a.bod.day()).cmp(&(b.bod.month(), b.bod.day())),
        SortColumn::Age => a.age_on(today).cmp(&b.age_on(today)),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Filtered and ordered users for the given search and sort
pub fn query_users(mut users: Vec<User>, search: Option<&str>, sort_by: SortBy, today: NaiveDate) -> Vec<User> {
    if let Some(term) = search.filter(|t| !t.is_empty()) {
        users.retain(|user| name_matches(user, term));
    }

    users.sort_by(|a, b| {
        let ord = compare(a, b, sort_by.column, today);
        match sort_by.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    users
}

/// Pure derivation of the table shown by the screen
pub fn derive_view(state: &UsersScreen, users: Vec<User>, today: NaiveDate) -> UserTable {
    let rows = query_users(users, state.search_term(), state.sort_by, today)
        .iter()
        .map(|user| UserRow::from_user(user, today))
        .collect();

    UserTable {
        rows,
        headers: user_headers(),
    }
}
