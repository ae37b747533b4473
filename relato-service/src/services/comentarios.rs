/// Comment service: content validation, creation, listing and author-only
/// deletion.
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{comentario_repo, postagem_repo};
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::ComentarioComAutor;

const TAMANHO_MAXIMO: usize = 300;

pub struct ComentarioService {
    pool: PgPool,
}

impl ComentarioService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment on an existing report
    pub async fn criar(
        &self,
        usuario_id: Uuid,
        postagem_id: Uuid,
        conteudo: &str,
    ) -> Result<ComentarioComAutor> {
        validar_conteudo(conteudo)?;

        if postagem_repo::buscar_por_id(&self.pool, postagem_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Postagem não encontrada.".to_string()));
        }

        let comentario =
            comentario_repo::criar(&self.pool, postagem_id, usuario_id, conteudo).await?;

        metrics::COMENTARIOS_CRIADOS.inc();

        Ok(comentario)
    }

    /// List a report's comments in insertion order
    pub async fn listar(&self, postagem_id: Uuid) -> Result<Vec<ComentarioComAutor>> {
        Ok(comentario_repo::listar_por_postagem(&self.pool, postagem_id).await?)
    }

    /// Delete a comment. Only its author may delete it.
    pub async fn deletar(&self, comentario_id: Uuid, solicitante: Uuid) -> Result<()> {
        let comentario = comentario_repo::buscar_por_id(&self.pool, comentario_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comentário não encontrado.".to_string()))?;

        if comentario.usuario_id != solicitante {
            return Err(AppError::Forbidden(
                "Você não tem permissão para excluir este comentário.".to_string(),
            ));
        }

        comentario_repo::deletar(&self.pool, comentario_id).await?;

        Ok(())
    }
}

/// Content must be non-blank and at most 300 characters (character count,
/// not bytes).
fn validar_conteudo(conteudo: &str) -> Result<()> {
    if conteudo.trim().is_empty() {
        return Err(AppError::Validation(
            "O comentário não pode ser vazio.".to_string(),
        ));
    }

    if conteudo.chars().count() > TAMANHO_MAXIMO {
        return Err(AppError::Validation(
            "O comentário não pode exceder 300 caracteres.".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conteudo_vazio_rejeitado() {
        assert!(validar_conteudo("").is_err());
        assert!(validar_conteudo("   ").is_err());
    }

    #[test]
    fn conteudo_no_limite_aceito() {
        let exato = "a".repeat(300);
        assert!(validar_conteudo(&exato).is_ok());
    }

    #[test]
    fn conteudo_acima_do_limite_rejeitado() {
        let longo = "a".repeat(301);
        assert!(validar_conteudo(&longo).is_err());
    }

    #[test]
    fn limite_conta_caracteres_nao_bytes() {
        // 300 chars multibyte (ã = 2 bytes em UTF-8) ainda dentro do limite
        let acentuado = "ã".repeat(300);
        assert!(validar_conteudo(&acentuado).is_ok());
    }
}
