pub mod health;
pub mod swagger;
pub mod users;

use actix_web::web;

/// Users screen routes: HTML page, data provider and action dispatch
pub fn configure_users(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(users::users_page))
        .service(
            web::scope("/api/v1/users")
                .route("", web::get().to(users::list_users))
                .route("/screen", web::post().to(users::dispatch_action)),
        );
}
