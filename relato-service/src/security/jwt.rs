/// Bearer-token issue and verification.
///
/// Tokens are HS256-signed JWTs carrying the user's id, email and display
/// name, with a fixed 24-hour expiry. The signing secret is installed once at
/// startup and immutable thereafter; every protected route verifies against
/// the same secret.
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TOKEN_EXPIRY_HOURS: i64 = 24;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims: standard fields plus the user's identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Email address
    pub email: String,
    /// Display name
    pub nome: String,
}

/// Thread-safe global storage for the signing secret.
///
/// OnceCell ensures thread-safe initialization without runtime locks.
static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Install the signing secret.
///
/// Must be called during application startup before any token operation.
/// Can only be called once; subsequent calls return an error.
pub fn inicializar_segredo(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(anyhow!("JWT secret must not be empty"));
    }

    JWT_ENCODING_KEY
        .set(EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| anyhow!("JWT encoding key already initialized"))?;

    JWT_DECODING_KEY
        .set(DecodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

fn get_encoding_key() -> Result<&'static EncodingKey> {
    JWT_ENCODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT secret not initialized. Call inicializar_segredo() during startup.")
    })
}

fn get_decoding_key() -> Result<&'static DecodingKey> {
    JWT_DECODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT secret not initialized. Call inicializar_segredo() during startup.")
    })
}

/// Issue a token for an authenticated user.
///
/// The token embeds the user's id, email and display name and expires after
/// 24 hours. No server-side state is created.
pub fn gerar_token(user_id: Uuid, email: &str, nome: &str) -> Result<String> {
    let now = Utc::now();
    let expiry = now + Duration::hours(TOKEN_EXPIRY_HOURS);

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expiry.timestamp(),
        email: email.to_string(),
        nome: nome.to_string(),
    };

    let encoding_key = get_encoding_key()?;
    encode(&Header::new(JWT_ALGORITHM), &claims, encoding_key)
        .map_err(|e| anyhow!("Failed to generate token: {e}"))
}

/// Validate and decode a bearer token.
///
/// Verifies the HS256 signature and the expiry; there is no revocation list,
/// so a validly signed, unexpired token is always accepted.
pub fn validar_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = get_decoding_key()?;

    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = true;

    decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test_secret() {
        // Several test modules share the process; the first call wins and
        // they all use the same secret.
        let _ = inicializar_segredo("segredo-de-teste");
    }

    #[test]
    fn test_gerar_token() {
        init_test_secret();

        let user_id = Uuid::new_v4();
        let token = gerar_token(user_id, "ana@example.com", "Ana");

        assert!(token.is_ok());
        let token_str = token.unwrap();
        assert_eq!(token_str.matches('.').count(), 2); // JWT has 3 parts
    }

    #[test]
    fn test_validar_token_valido() {
        init_test_secret();

        let user_id = Uuid::new_v4();
        let token = gerar_token(user_id, "ana@example.com", "Ana").expect("generate token");

        let token_data = validar_token(&token).expect("validate token");
        assert_eq!(token_data.claims.sub, user_id.to_string());
        assert_eq!(token_data.claims.email, "ana@example.com");
        assert_eq!(token_data.claims.nome, "Ana");
    }

    #[test]
    fn test_validar_token_invalido() {
        init_test_secret();

        assert!(validar_token("token.qualquer.coisa").is_err());
    }

    #[test]
    fn test_validar_token_adulterado() {
        init_test_secret();

        let user_id = Uuid::new_v4();
        let token = gerar_token(user_id, "ana@example.com", "Ana").expect("generate token");

        let adulterado = token.replace('a', "b");
        assert!(validar_token(&adulterado).is_err());
    }

    #[test]
    fn test_expira_em_24_horas() {
        init_test_secret();

        let token = gerar_token(Uuid::new_v4(), "ana@example.com", "Ana").expect("generate token");
        let claims = validar_token(&token).unwrap().claims;

        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_HOURS * 3600);
    }
}
