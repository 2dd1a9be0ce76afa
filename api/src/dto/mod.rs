pub mod auth;
pub mod error;

pub use auth::LoginForm;
pub use error::{ErrorResponse, ErrorResponseExt};
