pub mod user;
pub mod table;
pub mod screen;
pub mod toast;

pub use user::*;
pub use table::*;
pub use screen::*;
pub use toast::*;
