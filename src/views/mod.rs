// Renderização server-side da tela de usuários (tera, autoescape em .html)

use serde::Serialize;
use tera::{Context, Tera};

use crate::models::{FieldErrors, Toast, UserTable, UsersScreen};
use crate::utils::AppError;

pub const SCREEN_ENDPOINT: &str = "/api/v1/users/screen";

/// Everything the screen template needs for one render
#[derive(Debug, Serialize)]
pub struct ScreenView<'a> {
    pub state: &'a UsersScreen,
    pub table: &'a UserTable,
    pub errors: &'a FieldErrors,
    pub toasts: &'a [Toast],
}

#[derive(Debug, Clone)]
pub struct ScreenRenderer {
    tera: Tera,
    debounce_ms: u64,
}

impl ScreenRenderer {
    pub fn new(debounce_ms: u64) -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", include_str!("../../templates/layout.html")),
            ("users/index.html", include_str!("../../templates/users/index.html")),
            ("users/form_fields.html", include_str!("../../templates/users/form_fields.html")),
        ])?;
        Ok(Self { tera, debounce_ms })
    }

    fn context(&self, view: &ScreenView<'_>) -> Result<Context, AppError> {
        let mut context = Context::from_serialize(view)?;
        let state_json = serde_json::to_string(view.state)
            .map_err(|e| AppError::Template(format!("Failed to encode screen state: {}", e)))?;
        context.insert("state_json", &state_json);
        context.insert("debounce_ms", &self.debounce_ms);
        context.insert("endpoint", SCREEN_ENDPOINT);
        Ok(context)
    }

    /// Component markup only, swapped in place by the page script
    pub fn render_component(&self, view: &ScreenView<'_>) -> Result<String, AppError> {
        Ok(self.tera.render("users/index.html", &self.context(view)?)?)
    }

    /// Full HTML document around the component
    pub fn render_page(&self, view: &ScreenView<'_>) -> Result<String, AppError> {
        let mut context = self.context(view)?;
        context.insert("title", "Users");
        Ok(self.tera.render("layout.html", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{user_headers, FieldErrors, UserRow};
    use chrono::NaiveDate;

    fn table(rows: Vec<UserRow>) -> UserTable {
        UserTable {
            rows,
            headers: user_headers(),
        }
    }

    fn row(id: u64, name: &str) -> UserRow {
        UserRow {
            id,
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            bod: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            birthday: "01 January".to_string(),
            age: 36,
        }
    }

    #[test]
    fn test_component_lists_rows_and_headers() {
        let renderer = ScreenRenderer::new(250).unwrap();
        let state = UsersScreen::default();
        let table = table(vec![row(1, "Alice"), row(2, "Bob")]);
        let errors = FieldErrors::default();

        let html = renderer
            .render_component(&ScreenView { state: &state, table: &table, errors: &errors, toasts: &[] })
            .unwrap();

        assert!(html.contains("Alice"));
        assert!(html.contains("Bob"));
        assert!(html.contains("E-mail"));
        assert!(html.contains(r#"data-action="delete" data-user-id="2""#));
        assert!(html.contains(r#"data-debounce="250""#));
        assert!(!html.contains("Add New User"));
        assert!(!html.contains("No users found."));
    }

    #[test]
    fn test_names_are_escaped() {
        let renderer = ScreenRenderer::new(250).unwrap();
        let state = UsersScreen::default();
        let table = table(vec![row(1, "<script>alert(1)</script>")]);
        let errors = FieldErrors::default();

        let html = renderer
            .render_component(&ScreenView { state: &state, table: &table, errors: &errors, toasts: &[] })
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_overlays_errors_and_toasts() {
        let renderer = ScreenRenderer::new(250).unwrap();
        let mut state = UsersScreen {
            add_modal: true,
            drawer: true,
            ..Default::default()
        };
        state.form.name = "Al".into();
        let table = table(vec![]);
        let mut errors = FieldErrors::default();
        errors.add("name", "The name field must be at least 3 characters.");
        let toasts = vec![Toast::success("Filters cleared.")];

        let html = renderer
            .render_component(&ScreenView { state: &state, table: &table, errors: &errors, toasts: &toasts })
            .unwrap();

        assert!(html.contains("Add New User"));
        assert!(!html.contains("Edit User"));
        assert!(html.contains(r#"data-model="form.name" value="Al""#));
        assert!(html.contains("The name field must be at least 3 characters."));
        assert!(html.contains("Filters"));
        assert!(html.contains("alert-success"));
        assert!(html.contains("No users found."));
    }

    #[test]
    fn test_page_wraps_component() {
        let renderer = ScreenRenderer::new(400).unwrap();
        let mut state = UsersScreen::default();
        state.edit_modal = true;
        state.form.user_id = Some(5);
        let table = table(vec![row(5, "Eve")]);
        let errors = FieldErrors::default();

        let html = renderer
            .render_page(&ScreenView { state: &state, table: &table, errors: &errors, toasts: &[] })
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Users</title>"));
        assert!(html.contains("Edit User"));
        assert!(html.contains(r#"data-model="form.userId" value="5""#));
        // tera escapa "/" dentro de atributos
        assert!(html.contains("data-endpoint=\"&#x2F;api&#x2F;v1&#x2F;users&#x2F;screen\""));
    }
}
