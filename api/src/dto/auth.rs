use serde::Deserialize;
use validator::Validate;

/// Login form posted to `POST /login`
///
/// The password is accepted but only checked by whichever credential
/// verifier the server was started with.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[serde(default)]
    pub password: String,
}
