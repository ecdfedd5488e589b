use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Admin API",
        version = "1.0.0",
        description = "Admin screen for User records. \n\n**Screen model:** the client posts its current screen snapshot plus one action to `/api/v1/users/screen` and receives the updated snapshot, the table data, field errors, toasts and the re-rendered markup.\n\n**Features:**\n- Case-insensitive name search\n- Single-column sorting\n- Create, edit and delete with field validation\n- Read-only `{ rows, headers }` data provider",
        contact(
            name = "Users Admin Team",
            email = "support@users-admin.local"
        )
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Users
        crate::api::users::users_page,
        crate::api::users::list_users,
        crate::api::users::dispatch_action,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::users::ScreenRequest,
            crate::api::users::ScreenResponse,
            crate::models::UsersScreen,
            crate::models::UserForm,
            crate::models::ScreenAction,
            crate::models::SortBy,
            crate::models::SortColumn,
            crate::models::SortDirection,
            crate::models::UserTable,
            crate::models::UserRow,
            crate::models::TableHeader,
            crate::models::Toast,
            crate::models::ToastKind,
            crate::models::FieldErrors,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "Users", description = "Users admin screen: HTML page, data provider and action dispatch."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/users"));
        assert!(doc.paths.paths.contains_key("/api/v1/users/screen"));
        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
