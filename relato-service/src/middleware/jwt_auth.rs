/// Bearer-token authentication.
///
/// `AuthUser` is an actix extractor: protected handlers take it as an
/// argument and receive the verified identity from the token. Public
/// handlers simply do not ask for it. Extraction failures are the only
/// source of 401 responses in the service.
use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;
use crate::security::jwt;

/// Identity carried by a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub nome: String,
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extrair_usuario(req))
    }
}

fn extrair_usuario(req: &HttpRequest) -> Result<AuthUser, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or(AppError::InvalidToken)?;

    let token_data = jwt::validar_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        AppError::InvalidToken
    })?;

    let id = Uuid::parse_str(&token_data.claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(AuthUser {
        id,
        email: token_data.claims.email,
        nome: token_data.claims.nome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn init_test_secret() {
        // Several test modules share the process; the first call wins and
        // they all use the same secret.
        let _ = jwt::inicializar_segredo("segredo-de-teste");
    }

    #[test]
    fn sem_header_retorna_token_ausente() {
        init_test_secret();

        let req = TestRequest::default().to_http_request();
        let err = extrair_usuario(&req).unwrap_err();
        assert!(matches!(err, AppError::MissingToken));
    }

    #[test]
    fn header_sem_bearer_retorna_token_invalido() {
        init_test_secret();

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic abc123"))
            .to_http_request();
        let err = extrair_usuario(&req).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn token_adulterado_retorna_token_invalido() {
        init_test_secret();

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer nao.e.jwt"))
            .to_http_request();
        let err = extrair_usuario(&req).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn token_valido_extrai_identidade() {
        init_test_secret();

        let id = Uuid::new_v4();
        let token = jwt::gerar_token(id, "ana@example.com", "Ana").expect("generate token");
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_http_request();

        let usuario = extrair_usuario(&req).expect("extract user");
        assert_eq!(usuario.id, id);
        assert_eq!(usuario.email, "ana@example.com");
        assert_eq!(usuario.nome, "Ana");
    }
}
