pub mod listing_service;
pub mod password_service;
pub mod users_screen_service;
pub mod validation;

pub use password_service::*;
pub use users_screen_service::*;
