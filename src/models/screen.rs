use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{SortBy, SortColumn, SortDirection};

// ==================== SCREEN STATE ====================
// Snapshot que o cliente envia em cada ação e recebe de volta atualizado

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UsersScreen {
    pub search: String,
    pub sort_by: SortBy,
    pub drawer: bool,
    pub add_modal: bool,
    pub edit_modal: bool,
    pub form: UserForm,
}

impl UsersScreen {
    /// Back to the initial snapshot: filters, sort, overlays and form buffer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Raw search term; only the empty string means "no filter"
    pub fn search_term(&self) -> Option<&str> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.as_str())
        }
    }
}

/// Form buffer shared by the add and edit modals
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub bod: String,
    pub user_id: Option<u64>,
}

/// Form input that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub bod: NaiveDate,
}

/// Messages keyed by form field
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, utoipa::ToSchema)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn summary(&self) -> String {
        self.0.values().flatten().cloned().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
impl FieldErrors {
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ==================== ACTIONS ====================

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScreenAction {
    Render,
    Search { search: String },
    Sort { column: SortColumn, direction: Option<SortDirection> },
    OpenAdd,
    CloseAdd,
    CloseEdit,
    OpenDrawer,
    CloseDrawer,
    Save,
    Edit { user_id: u64 },
    Update,
    Delete { user_id: u64 },
    Clear,
}

impl ScreenAction {
    pub fn name(&self) -> &'static str {
        match self {
            ScreenAction::Render => "render",
            ScreenAction::Search { .. } => "search",
            ScreenAction::Sort { .. } => "sort",
            ScreenAction::OpenAdd => "open_add",
            ScreenAction::CloseAdd => "close_add",
            ScreenAction::CloseEdit => "close_edit",
            ScreenAction::OpenDrawer => "open_drawer",
            ScreenAction::CloseDrawer => "close_drawer",
            ScreenAction::Save => "save",
            ScreenAction::Edit { .. } => "edit",
            ScreenAction::Update => "update",
            ScreenAction::Delete { .. } => "delete",
            ScreenAction::Clear => "clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_wire_format() {
        let screen: UsersScreen = serde_json::from_str(
            r#"{"search":"ali","sortBy":{"column":"age","direction":"desc"},"addModal":true,"form":{"name":"Al","userId":7}}"#,
        )
        .unwrap();
        assert_eq!(screen.search, "ali");
        assert_eq!(screen.sort_by.column, SortColumn::Age);
        assert!(screen.add_modal);
        assert!(!screen.edit_modal);
        assert_eq!(screen.form.user_id, Some(7));
        assert_eq!(screen.form.email, "");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut screen = UsersScreen {
            search: "bob".into(),
            drawer: true,
            edit_modal: true,
            ..Default::default()
        };
        screen.form.name = "Bob".into();
        screen.reset();
        assert_eq!(screen, UsersScreen::default());
    }

    #[test]
    fn test_only_empty_search_is_no_filter() {
        assert_eq!(UsersScreen::default().search_term(), None);
        let screen = UsersScreen { search: " ".into(), ..Default::default() };
        assert_eq!(screen.search_term(), Some(" "));
        let screen = UsersScreen { search: "ann ".into(), ..Default::default() };
        assert_eq!(screen.search_term(), Some("ann "));
    }

    #[test]
    fn test_action_tags() {
        let action: ScreenAction = serde_json::from_str(r#"{"action":"delete","user_id":3}"#).unwrap();
        assert_eq!(action, ScreenAction::Delete { user_id: 3 });
        let action: ScreenAction = serde_json::from_str(r#"{"action":"sort","column":"bod"}"#).unwrap();
        assert_eq!(action, ScreenAction::Sort { column: SortColumn::Bod, direction: None });
        assert_eq!(action.name(), "sort");
    }

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::default();
        errors.add("name", "first");
        errors.add("name", "second");
        assert!(errors.has("name"));
        assert_eq!(errors.get("name").len(), 2);
        assert!(errors.get("email").is_empty());
    }
}
