use actix_web::{http::header, web, HttpResponse};
use validator::Validate;

use crate::dto::LoginForm;
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::cookie::session_cookie;
use super::AppState;

const HOME_PATH: &str = "/home";

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Login</title></head>
<body>
<form method="post" action="/login">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password"></label>
<button type="submit">Log in</button>
</form>
</body>
</html>
"#;

/// Handler for GET /login
pub async fn login_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(LOGIN_PAGE)
}

/// Handler for POST /login
///
/// Accepts an urlencoded `username`/`password` form, issues a session token
/// and stores it in the session cookie.
///
/// # Response
///
/// ## Success (302 Found)
/// `Location: /home` with a `Set-Cookie` carrying the token
///
/// ## Errors
/// - 400 Bad Request: Invalid form fields
/// - 401 Unauthorized: Credentials rejected
/// - 500 Internal Server Error: Token signing failure
pub async fn login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return handle_validation_errors(&errors);
    }

    let issued = match state.auth_service.login(&form.username, &form.password) {
        Ok(issued) => issued,
        Err(error) => return handle_domain_error(&error),
    };

    match session_cookie(&state.cookie, &issued) {
        Ok(cookie) => HttpResponse::Found()
            .insert_header((header::LOCATION, HOME_PATH))
            .cookie(cookie)
            .finish(),
        Err(error) => handle_domain_error(&error),
    }
}
