//! Mapping of domain errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use ts_core::errors::{AuthError, DomainError, TokenError};
use ts_shared::errors::error_codes;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.as_str())
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Auth(AuthError::InvalidCredentials) => {
            log::info!("Rejected login: {}", error);
            ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid username or password")
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Token(TokenError::Expired) => {
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Session expired, please log in again")
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Token(TokenError::InvalidSignature | TokenError::Malformed) => {
            ErrorResponse::new(error_codes::TOKEN_INVALID, "Invalid session token")
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Token(TokenError::MissingClaim { claim }) => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, format!("Missing {}", claim))
                .add_detail("field", claim)
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Token(TokenError::SigningFailure) | DomainError::Internal { .. } => {
            log::error!("Internal error: {:?}", error);
            internal_error()
        }
    }
}

/// Handle request validation failures
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request")
        .add_detail("fields", fields)
        .to_response(StatusCode::BAD_REQUEST)
}

/// Generic 500 response that reveals nothing about the cause
pub fn internal_error() -> HttpResponse {
    ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        .to_response(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (DomainError::from(AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED),
            (DomainError::from(TokenError::Expired), StatusCode::UNAUTHORIZED),
            (DomainError::from(TokenError::Malformed), StatusCode::UNAUTHORIZED),
            (DomainError::from(TokenError::InvalidSignature), StatusCode::UNAUTHORIZED),
            (
                DomainError::from(TokenError::MissingClaim {
                    claim: "username".to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ),
            (DomainError::from(TokenError::SigningFailure), StatusCode::INTERNAL_SERVER_ERROR),
            (
                DomainError::Internal {
                    message: "boom".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(handle_domain_error(&error).status(), status, "{:?}", error);
        }
    }
}
