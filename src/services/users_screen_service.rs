// ==================== USERS SCREEN ====================
// Ações da tela de usuários: listar, buscar, ordenar, criar, editar, remover, limpar filtros

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::{
    database::UserRepository,
    models::{FieldErrors, NewUser, ScreenAction, SortBy, Toast, User, UserChanges, UserTable, UsersScreen},
    services::{listing_service, password_service::PlaceholderPassword},
    utils::{remember_token, AppError},
};

/// What an action produced besides the new state
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ActionOutcome {
    pub success: bool,
    pub toasts: Vec<Toast>,
    pub errors: FieldErrors,
}

impl ActionOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            toasts: Vec::new(),
            errors: FieldErrors::default(),
        }
    }

    fn with_toast(toast: Toast) -> Self {
        Self {
            toasts: vec![toast],
            ..Self::ok()
        }
    }
}

#[derive(Clone)]
pub struct UsersScreenService {
    repo: Arc<dyn UserRepository>,
    password: Arc<PlaceholderPassword>,
}

impl UsersScreenService {
    pub fn new(repo: Arc<dyn UserRepository>, password: Arc<PlaceholderPassword>) -> Self {
        Self { repo, password }
    }

    /// Filtered and sorted `{ rows, headers }` for the current state
    pub async fn table(&self, state: &UsersScreen, today: NaiveDate) -> Result<UserTable, AppError> {
        let all = self.repo.list_all().await?;
        Ok(listing_service::derive_view(state, all, today))
    }

    pub async fn user_count(&self) -> Result<usize, AppError> {
        self.repo.count().await
    }

    /// Applies one action to the snapshot. Validation and not-found failures
    /// are folded into the outcome; storage failures propagate.
    pub async fn dispatch(&self, state: &mut UsersScreen, action: ScreenAction) -> Result<ActionOutcome, AppError> {
        log::debug!("🎬 users screen action: {}", action.name());

        let result = match action {
            ScreenAction::Render => Ok(ActionOutcome::ok()),
            ScreenAction::Search { search } => {
                state.search = search;
                Ok(ActionOutcome::ok())
            }
            ScreenAction::Sort { column, direction } => {
                state.sort_by = match direction {
                    Some(direction) => SortBy { column, direction },
                    // clique no cabeçalho: mesma coluna inverte, outra coluna começa asc
                    None if state.sort_by.column == column => SortBy {
                        column,
                        direction: state.sort_by.direction.toggled(),
                    },
                    None => SortBy { column, direction: Default::default() },
                };
                Ok(ActionOutcome::ok())
            }
            ScreenAction::OpenAdd => {
                self.open_add(state);
                Ok(ActionOutcome::ok())
            }
            ScreenAction::CloseAdd => {
                state.add_modal = false;
                state.form = Default::default();
                Ok(ActionOutcome::ok())
            }
            ScreenAction::CloseEdit => {
                state.edit_modal = false;
                state.form = Default::default();
                Ok(ActionOutcome::ok())
            }
            ScreenAction::OpenDrawer => {
                state.drawer = true;
                Ok(ActionOutcome::ok())
            }
            ScreenAction::CloseDrawer => {
                state.drawer = false;
                Ok(ActionOutcome::ok())
            }
            ScreenAction::Save => self.save(state).await.map(|_| ActionOutcome::ok()),
            ScreenAction::Edit { user_id } => self.edit(state, user_id).await.map(|_| ActionOutcome::ok()),
            ScreenAction::Update => self.update(state).await.map(|_| ActionOutcome::ok()),
            ScreenAction::Delete { user_id } => self
                .delete(user_id)
                .await
                .map(|toast| toast.map(ActionOutcome::with_toast).unwrap_or_else(ActionOutcome::ok)),
            ScreenAction::Clear => Ok(ActionOutcome::with_toast(self.clear(state))),
        };

        match result {
            Ok(outcome) => Ok(outcome),
            Err(AppError::Validation(errors)) => {
                log::debug!("⚠️ Validation failed: {}", errors.summary());
                Ok(ActionOutcome {
                    success: false,
                    toasts: Vec::new(),
                    errors,
                })
            }
            Err(AppError::NotFound(what)) => {
                log::warn!("⚠️ {} not found", what);
                Ok(ActionOutcome {
                    success: false,
                    toasts: vec![Toast::warning(format!("{} not found.", what))],
                    errors: FieldErrors::default(),
                })
            }
            Err(e) => Err(e),
        }
    }

    pub fn open_add(&self, state: &mut UsersScreen) {
        state.form = Default::default();
        state.edit_modal = false;
        state.add_modal = true;
    }

    /// Resets everything and confirms with a toast
    pub fn clear(&self, state: &mut UsersScreen) -> Toast {
        state.reset();
        log::info!("🧹 Users screen filters cleared");
        Toast::success("Filters cleared.")
    }

    /// Removes the user. `None` when there was nothing to remove.
    pub async fn delete(&self, user_id: u64) -> Result<Option<Toast>, AppError> {
        match self.repo.delete(user_id).await? {
            Some(user) => {
                log::info!("🗑️  User #{} ({}) deleted", user.id, user.name);
                Ok(Some(Toast::warning(format!("Will delete #{}", user.name))))
            }
            None => {
                log::debug!("User #{} already gone, nothing to delete", user_id);
                Ok(None)
            }
        }
    }

    pub async fn save(&self, state: &mut UsersScreen) -> Result<User, AppError> {
        let valid = state.form.validate().map_err(AppError::Validation)?;

        let user = self
            .repo
            .create(NewUser {
                name: valid.name,
                email: valid.email,
                bod: valid.bod,
                email_verified_at: Some(Utc::now()),
                password: self.password.hash().await?,
                remember_token: remember_token(),
            })
            .await?;

        log::info!("✅ User #{} created: {}", user.id, user.email);
        state.reset();
        Ok(user)
    }

    /// Copies the record into the shared form buffer
    pub fn fill_form(&self, state: &mut UsersScreen, user: &User) {
        state.form.user_id = Some(user.id);
        state.form.name = user.name.clone();
        state.form.email = user.email.clone();
        state.form.bod = user.bod.format("%Y-%m-%d").to_string();
    }

    pub async fn edit(&self, state: &mut UsersScreen, user_id: u64) -> Result<User, AppError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User #{}", user_id)))?;

        self.fill_form(state, &user);
        state.add_modal = false;
        state.edit_modal = true;
        Ok(user)
    }

    pub async fn update(&self, state: &mut UsersScreen) -> Result<User, AppError> {
        let (user_id, valid) = state.form.validate_update().map_err(AppError::Validation)?;

        let user = self
            .repo
            .update(
                user_id,
                UserChanges {
                    name: valid.name,
                    email: valid.email,
                    bod: valid.bod,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User #{}", user_id)))?;

        log::info!("✏️  User #{} updated", user.id);
        state.reset();
        Ok(user)
    }
}
