use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    models::{FieldErrors, ScreenAction, SortBy, SortColumn, SortDirection, Toast, UserTable, UsersScreen},
    services::UsersScreenService,
    utils::AppError,
    views::{ScreenRenderer, ScreenView},
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UsersQuery {
    pub search: Option<String>,
    pub column: Option<SortColumn>,
    pub direction: Option<SortDirection>,
}

impl UsersQuery {
    fn into_state(self) -> UsersScreen {
        let defaults = SortBy::default();
        UsersScreen {
            search: self.search.unwrap_or_default(),
            sort_by: SortBy {
                column: self.column.unwrap_or(defaults.column),
                direction: self.direction.unwrap_or(defaults.direction),
            },
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ScreenRequest {
    #[serde(default)]
    pub state: UsersScreen,
    pub action: ScreenAction,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ScreenResponse {
    pub success: bool,
    pub state: UsersScreen,
    pub table: UserTable,
    pub errors: FieldErrors,
    pub toasts: Vec<Toast>,
    pub html: String,
}

fn internal_error(context: &str, e: AppError) -> HttpResponse {
    log::error!("❌ {}: {}", context, e);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "success": false,
        "error": e.to_string()
    }))
}

/// GET /users - Página completa da tela de usuários
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(UsersQuery),
    responses(
        (status = 200, description = "Users screen HTML page", body = String, content_type = "text/html")
    )
)]
pub async fn users_page(
    service: web::Data<UsersScreenService>,
    renderer: web::Data<ScreenRenderer>,
    query: web::Query<UsersQuery>,
) -> HttpResponse {
    let state = query.into_inner().into_state();
    log::info!("📄 GET /users - search: {:?}", state.search);

    let table = match service.table(&state, Utc::now().date_naive()).await {
        Ok(table) => table,
        Err(e) => return internal_error("Error loading users", e),
    };

    let errors = FieldErrors::default();
    let view = ScreenView {
        state: &state,
        table: &table,
        errors: &errors,
        toasts: &[],
    };

    match renderer.render_page(&view) {
        Ok(html) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html),
        Err(e) => internal_error("Error rendering users page", e),
    }
}

/// GET /api/v1/users - Data provider `{ rows, headers }`
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    params(UsersQuery),
    responses(
        (status = 200, description = "Filtered and sorted users", body = UserTable)
    )
)]
pub async fn list_users(
    service: web::Data<UsersScreenService>,
    query: web::Query<UsersQuery>,
) -> HttpResponse {
    let state = query.into_inner().into_state();

    log::info!(
        "📋 GET /api/v1/users - search: {:?}, sort: {} {:?}",
        state.search,
        state.sort_by.column.as_str(),
        state.sort_by.direction
    );

    match service.table(&state, Utc::now().date_naive()).await {
        Ok(table) => {
            log::info!("✅ Listed {} users", table.rows.len());
            HttpResponse::Ok().json(table)
        }
        Err(e) => internal_error("Error listing users", e),
    }
}

/// POST /api/v1/users/screen - Aplica uma ação ao snapshot da tela e re-renderiza
#[utoipa::path(
    post,
    path = "/api/v1/users/screen",
    tag = "Users",
    request_body = ScreenRequest,
    responses(
        (status = 200, description = "Action applied", body = ScreenResponse),
        (status = 422, description = "Form validation failed", body = ScreenResponse),
        (status = 500, description = "Storage or rendering failure")
    )
)]
pub async fn dispatch_action(
    service: web::Data<UsersScreenService>,
    renderer: web::Data<ScreenRenderer>,
    request: web::Json<ScreenRequest>,
) -> HttpResponse {
    let ScreenRequest { mut state, action } = request.into_inner();
    let action_name = action.name();

    log::info!("🎬 POST /api/v1/users/screen - action: {}", action_name);

    let outcome = match service.dispatch(&mut state, action).await {
        Ok(outcome) => outcome,
        Err(e) => return internal_error(&format!("Error running action {}", action_name), e),
    };

    let table = match service.table(&state, Utc::now().date_naive()).await {
        Ok(table) => table,
        Err(e) => return internal_error("Error loading users", e),
    };

    let view = ScreenView {
        state: &state,
        table: &table,
        errors: &outcome.errors,
        toasts: &outcome.toasts,
    };

    let html = match renderer.render_component(&view) {
        Ok(html) => html,
        Err(e) => return internal_error("Error rendering users screen", e),
    };

    let validation_failed = !outcome.errors.is_empty();
    if outcome.success {
        log::info!("✅ Action {} done", action_name);
    } else {
        log::warn!("⚠️ Action {} rejected", action_name);
    }

    let response = ScreenResponse {
        success: outcome.success,
        state,
        table,
        errors: outcome.errors,
        toasts: outcome.toasts,
        html,
    };

    if validation_failed {
        HttpResponse::UnprocessableEntity().json(response)
    } else {
        HttpResponse::Ok().json(response)
    }
}
