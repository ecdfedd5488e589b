// Utility functions
pub mod error;
pub mod token;

pub use error::*;
pub use token::*;
