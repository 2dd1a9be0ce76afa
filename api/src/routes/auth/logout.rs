use actix_web::{http::header, web, HttpResponse};

use crate::middleware::session::LOGIN_PATH;

use super::cookie::removal_cookie;
use super::AppState;

/// Handler for POST /logout
///
/// Clears the session cookie on the client. The token itself stays valid
/// until it expires.
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, LOGIN_PATH))
        .cookie(removal_cookie(&state.cookie))
        .finish()
}
