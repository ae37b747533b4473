/// Citizen report models.
///
/// Wire format preserves the original API: camelCase Portuguese field names,
/// with state/city display names denormalized into read responses.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Database row for a report
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Postagem {
    pub id: Uuid,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: String,
    pub foto: String,
    pub estado_id: i32,
    pub cidade_id: i32,
    pub usuario_id: Uuid,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

/// Report enriched with resolved state/city names for listings
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostagemComNomes {
    pub id: Uuid,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: String,
    pub foto: String,
    pub estado_id: i32,
    pub cidade_id: i32,
    pub usuario_id: Uuid,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub estado_nome: String,
    pub cidade_nome: String,
}

impl PostagemComNomes {
    pub fn new(postagem: Postagem, estado_nome: String, cidade_nome: String) -> Self {
        PostagemComNomes {
            id: postagem.id,
            titulo: postagem.titulo,
            descricao: postagem.descricao,
            localizacao: postagem.localizacao,
            foto: postagem.foto,
            estado_id: postagem.estado_id,
            cidade_id: postagem.cidade_id,
            usuario_id: postagem.usuario_id,
            criado_em: postagem.criado_em,
            atualizado_em: postagem.atualizado_em,
            estado_nome,
            cidade_nome,
        }
    }
}

/// Report detail view: enriched names plus the author's identity
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostagemDetalhe {
    pub id: Uuid,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: String,
    pub foto: String,
    pub estado_id: i32,
    pub cidade_id: i32,
    pub usuario_id: Uuid,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub estado_nome: String,
    pub cidade_nome: String,
    pub usuario_nome: String,
    pub usuario_email: String,
}

/// Row for the detail query (report joined with its author)
#[derive(Debug, Clone, FromRow)]
pub struct PostagemAutorRow {
    pub id: Uuid,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: String,
    pub foto: String,
    pub estado_id: i32,
    pub cidade_id: i32,
    pub usuario_id: Uuid,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
    pub usuario_nome: String,
    pub usuario_email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NovaPostagemRequest {
    #[validate(length(min = 1))]
    pub titulo: String,

    #[validate(length(min = 1))]
    pub descricao: String,

    #[validate(length(min = 1))]
    pub localizacao: String,

    #[validate(url)]
    pub foto: String,

    #[serde(rename = "estadoId")]
    pub estado_id: i32,

    #[serde(rename = "cidadeId")]
    pub cidade_id: i32,
}

/// Mutable fields only; geography is immutable after creation.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct AtualizaPostagemRequest {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub localizacao: Option<String>,

    #[validate(url)]
    pub foto: Option<String>,
}

/// Query-string filter for listings
#[derive(Debug, Default, Deserialize)]
pub struct PostagemFiltro {
    #[serde(rename = "estadoId")]
    pub estado_id: Option<i32>,

    #[serde(rename = "cidadeId")]
    pub cidade_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nova_postagem_rejeita_foto_invalida() {
        let req = NovaPostagemRequest {
            titulo: "Buraco na rua".into(),
            descricao: "Cratera na esquina".into(),
            localizacao: "Rua das Flores, 100".into(),
            foto: "nao-e-url".into(),
            estado_id: 25,
            cidade_id: 3550308,
        };
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("foto"));
    }

    #[test]
    fn nova_postagem_aceita_payload_valido() {
        let req: NovaPostagemRequest = serde_json::from_value(serde_json::json!({
            "titulo": "Buraco na rua",
            "descricao": "Cratera na esquina",
            "localizacao": "Rua das Flores, 100",
            "foto": "https://example.com/foto.jpg",
            "estadoId": 25,
            "cidadeId": 3550308
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.estado_id, 25);
    }

    #[test]
    fn postagem_serializa_em_camel_case() {
        let postagem = Postagem {
            id: Uuid::new_v4(),
            titulo: "t".into(),
            descricao: "d".into(),
            localizacao: "l".into(),
            foto: "https://example.com/f.jpg".into(),
            estado_id: 25,
            cidade_id: 1234,
            usuario_id: Uuid::new_v4(),
            criado_em: Utc::now(),
            atualizado_em: Utc::now(),
        };
        let json = serde_json::to_value(&postagem).unwrap();
        assert!(json.get("estadoId").is_some());
        assert!(json.get("cidadeId").is_some());
        assert!(json.get("criadoEm").is_some());
        assert!(json.get("estado_id").is_none());
    }

    #[test]
    fn filtro_aceita_parametros_parciais() {
        let filtro: PostagemFiltro = serde_json::from_value(serde_json::json!({
            "estadoId": 25
        }))
        .unwrap();
        assert_eq!(filtro.estado_id, Some(25));
        assert_eq!(filtro.cidade_id, None);
    }
}
