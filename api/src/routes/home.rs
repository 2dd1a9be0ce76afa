use actix_web::{http::header::ContentType, HttpResponse};

use crate::middleware::session::SessionContext;

/// Handler for GET /home, reachable only through `SessionAuth`
pub async fn home(session: SessionContext) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Welcome, {}!", session.username))
}
