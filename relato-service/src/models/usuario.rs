use chrono::{DateTime, Utc};
/// User model and auth request DTOs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Database row. Never serialized directly: responses go through
/// [`UsuarioPublico`], which carries no password hash.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub email: String,
    pub nome: String,
    pub senha_hash: String,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

/// Public view of a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UsuarioPublico {
    pub id: Uuid,
    pub email: String,
    pub nome: String,
}

impl From<Usuario> for UsuarioPublico {
    fn from(usuario: Usuario) -> Self {
        UsuarioPublico {
            id: usuario.id,
            email: usuario.email,
            nome: usuario.nome,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegistroRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub nome: String,

    #[validate(length(min = 1))]
    pub senha: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub senha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registro_exige_email_valido() {
        let req = RegistroRequest {
            email: "nao-e-email".into(),
            nome: "Ana".into(),
            senha: "Senha123!".into(),
        };
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn registro_exige_campos_preenchidos() {
        let req = RegistroRequest {
            email: "ana@example.com".into(),
            nome: "".into(),
            senha: "Senha123!".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn usuario_publico_nao_carrega_senha() {
        let publico = UsuarioPublico {
            id: Uuid::new_v4(),
            email: "ana@example.com".into(),
            nome: "Ana".into(),
        };
        let json = serde_json::to_value(&publico).unwrap();
        assert!(json.get("senha").is_none());
        assert!(json.get("senhaHash").is_none());
        assert!(json.get("senha_hash").is_none());
    }
}
