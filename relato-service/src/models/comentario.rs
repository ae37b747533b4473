/// Comment models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database row for a comment
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comentario {
    pub id: Uuid,
    pub postagem_id: Uuid,
    pub usuario_id: Uuid,
    pub conteudo: String,
    pub criado_em: DateTime<Utc>,
}

/// Comment joined with its author's display name
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComentarioComAutor {
    pub id: Uuid,
    pub postagem_id: Uuid,
    pub usuario_id: Uuid,
    pub conteudo: String,
    pub criado_em: DateTime<Utc>,
    pub usuario_nome: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NovoComentarioRequest {
    pub conteudo: String,

    #[serde(rename = "postagemId")]
    pub postagem_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comentario_serializa_em_camel_case() {
        let comentario = ComentarioComAutor {
            id: Uuid::new_v4(),
            postagem_id: Uuid::new_v4(),
            usuario_id: Uuid::new_v4(),
            conteudo: "Também passei por isso.".into(),
            criado_em: Utc::now(),
            usuario_nome: "Ana".into(),
        };
        let json = serde_json::to_value(&comentario).unwrap();
        assert!(json.get("usuarioNome").is_some());
        assert!(json.get("postagemId").is_some());
        assert!(json.get("usuario_nome").is_none());
    }
}
