/// Report service: creation with geography validation, geography-enriched
/// reads, and owner-only mutation.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::postagem_repo;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{
    AtualizaPostagemRequest, NovaPostagemRequest, Postagem, PostagemComNomes, PostagemDetalhe,
    PostagemFiltro,
};
use crate::services::ibge::IbgeClient;

/// Placeholder shown when the directory cannot name a stored estado_id
const ESTADO_NAO_ENCONTRADO: &str = "Estado não encontrado";
/// Placeholder shown when the directory cannot name a stored cidade_id
const CIDADE_NAO_ENCONTRADA: &str = "Cidade não encontrada";

pub struct PostagemService {
    pool: PgPool,
    ibge: IbgeClient,
}

impl PostagemService {
    pub fn new(pool: PgPool, ibge: IbgeClient) -> Self {
        Self { pool, ibge }
    }

    /// Create a report after round-tripping its geography through the
    /// directory. A miss on either lookup rejects the request; a directory
    /// outage fails it.
    pub async fn criar(&self, usuario_id: Uuid, req: &NovaPostagemRequest) -> Result<Postagem> {
        let estados = self.ibge.listar_estados().await?;
        if !estados.iter().any(|estado| estado.id == req.estado_id) {
            return Err(AppError::InvalidLocation("Estado não encontrado.".to_string()));
        }

        let cidades = self.ibge.listar_cidades(&req.estado_id.to_string()).await?;
        if !cidades.iter().any(|cidade| cidade.id == req.cidade_id) {
            return Err(AppError::InvalidLocation(
                "Cidade não encontrada no estado selecionado.".to_string(),
            ));
        }

        let postagem = postagem_repo::criar(
            &self.pool,
            usuario_id,
            &req.titulo,
            &req.descricao,
            &req.localizacao,
            &req.foto,
            req.estado_id,
            req.cidade_id,
        )
        .await?;

        metrics::POSTAGENS_CRIADAS.inc();

        Ok(postagem)
    }

    /// List reports, newest first, with resolved geography names
    pub async fn listar(&self, filtro: &PostagemFiltro) -> Result<Vec<PostagemComNomes>> {
        let postagens = postagem_repo::listar(&self.pool, filtro).await?;
        self.enriquecer_todas(postagens).await
    }

    /// List the requester's own reports, newest first
    pub async fn listar_do_usuario(&self, usuario_id: Uuid) -> Result<Vec<PostagemComNomes>> {
        let postagens = postagem_repo::listar_por_usuario(&self.pool, usuario_id).await?;
        self.enriquecer_todas(postagens).await
    }

    /// Fetch one report with geography names and author identity
    pub async fn obter(&self, id: Uuid) -> Result<PostagemDetalhe> {
        let row = postagem_repo::buscar_com_autor(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Postagem não encontrada.".to_string()))?;

        let estado_nome = self
            .ibge
            .nome_do_estado(row.estado_id)
            .await
            .unwrap_or_else(|| ESTADO_NAO_ENCONTRADO.to_string());
        let cidade_nome = self
            .ibge
            .nome_da_cidade(row.estado_id, row.cidade_id)
            .await
            .unwrap_or_else(|| CIDADE_NAO_ENCONTRADA.to_string());

        Ok(PostagemDetalhe {
            id: row.id,
            titulo: row.titulo,
            descricao: row.descricao,
            localizacao: row.localizacao,
            foto: row.foto,
            estado_id: row.estado_id,
            cidade_id: row.cidade_id,
            usuario_id: row.usuario_id,
            criado_em: row.criado_em,
            atualizado_em: row.atualizado_em,
            estado_nome,
            cidade_nome,
            usuario_nome: row.usuario_nome,
            usuario_email: row.usuario_email,
        })
    }

    /// Update a report's mutable fields. Only the owner may update.
    pub async fn atualizar(
        &self,
        id: Uuid,
        solicitante: Uuid,
        campos: &AtualizaPostagemRequest,
    ) -> Result<Postagem> {
        let existente = postagem_repo::buscar_por_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Postagem não encontrada.".to_string()))?;

        if existente.usuario_id != solicitante {
            return Err(AppError::Forbidden(
                "Você não tem permissão para editar esta postagem.".to_string(),
            ));
        }

        postagem_repo::atualizar(&self.pool, id, campos)
            .await?
            .ok_or_else(|| AppError::NotFound("Postagem não encontrada.".to_string()))
    }

    /// Delete a report. Only the owner may delete. Returns the removed row.
    pub async fn deletar(&self, id: Uuid, solicitante: Uuid) -> Result<Postagem> {
        let existente = postagem_repo::buscar_por_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Postagem não encontrada.".to_string()))?;

        if existente.usuario_id != solicitante {
            return Err(AppError::Forbidden(
                "Você não tem permissão para excluir esta postagem.".to_string(),
            ));
        }

        postagem_repo::deletar(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Postagem não encontrada.".to_string()))
    }

    // Resolves names one report at a time, in order. Misses degrade to the
    // placeholder text instead of failing the listing.
    async fn enriquecer_todas(&self, postagens: Vec<Postagem>) -> Result<Vec<PostagemComNomes>> {
        let mut enriquecidas = Vec::with_capacity(postagens.len());

        for postagem in postagens {
            let estado_nome = self
                .ibge
                .nome_do_estado(postagem.estado_id)
                .await
                .unwrap_or_else(|| ESTADO_NAO_ENCONTRADO.to_string());
            let cidade_nome = self
                .ibge
                .nome_da_cidade(postagem.estado_id, postagem.cidade_id)
                .await
                .unwrap_or_else(|| CIDADE_NAO_ENCONTRADA.to_string());

            enriquecidas.push(PostagemComNomes::new(postagem, estado_nome, cidade_nome));
        }

        Ok(enriquecidas)
    }
}
