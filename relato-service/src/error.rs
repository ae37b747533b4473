/// Error types for relato-service
///
/// Every domain error is mapped to an HTTP status in exactly one place
/// (`ResponseError` below); handlers and services only produce `AppError`.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for relato-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Login with unknown email or wrong password
    #[error("Credenciais inválidas.")]
    InvalidCredentials,

    /// Password rejected by the strength policy
    #[error("A senha deve ter no mínimo 8 caracteres, com letras maiúsculas, minúsculas, números e símbolos.")]
    WeakPassword,

    /// estado/cidade did not resolve against the IBGE directory
    #[error("{0}")]
    InvalidLocation(String),

    /// No Authorization header on a protected route
    #[error("Token não informado")]
    MissingToken,

    /// Bearer token failed signature or expiry validation
    #[error("Token inválido")]
    InvalidToken,

    /// Authenticated, but not the owner/author of the resource
    #[error("{0}")]
    Forbidden(String),

    /// Entity absent
    #[error("{0}")]
    NotFound(String),

    /// Registration with an email that is already taken
    #[error("O email já está em uso.")]
    EmailTaken,

    /// IBGE directory unreachable or returned an error
    #[error("Erro ao consultar o serviço de localidades.")]
    Upstream(String),

    /// Database operation failed
    #[error("Erro interno no banco de dados.")]
    Database(String),

    /// Uncaught internal error
    #[error("Erro interno no servidor.")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::InvalidCredentials
            | AppError::WeakPassword
            | AppError::InvalidLocation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::Upstream(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", err);
        AppError::Database(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("IBGE request error: {}", err);
        AppError::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidLocation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Upstream("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn auth_error_messages_match_contract() {
        assert_eq!(AppError::MissingToken.to_string(), "Token não informado");
        assert_eq!(AppError::InvalidToken.to_string(), "Token inválido");
    }
}
