use crate::models::{Comentario, ComentarioComAutor};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment on a report, returning it joined with the author's
/// display name so the response needs no second query.
pub async fn criar(
    pool: &PgPool,
    postagem_id: Uuid,
    usuario_id: Uuid,
    conteudo: &str,
) -> Result<ComentarioComAutor, sqlx::Error> {
    let comentario = sqlx::query_as::<_, ComentarioComAutor>(
        r#"
        WITH inserido AS (
            INSERT INTO comentarios (postagem_id, usuario_id, conteudo)
            VALUES ($1, $2, $3)
            RETURNING id, postagem_id, usuario_id, conteudo, criado_em
        )
        SELECT i.id, i.postagem_id, i.usuario_id, i.conteudo, i.criado_em,
               u.nome AS usuario_nome
        FROM inserido i
        JOIN usuarios u ON u.id = i.usuario_id
        "#,
    )
    .bind(postagem_id)
    .bind(usuario_id)
    .bind(conteudo)
    .fetch_one(pool)
    .await?;

    Ok(comentario)
}

/// List a report's comments in insertion order
pub async fn listar_por_postagem(
    pool: &PgPool,
    postagem_id: Uuid,
) -> Result<Vec<ComentarioComAutor>, sqlx::Error> {
    let comentarios = sqlx::query_as::<_, ComentarioComAutor>(
        r#"
        SELECT c.id, c.postagem_id, c.usuario_id, c.conteudo, c.criado_em,
               u.nome AS usuario_nome
        FROM comentarios c
        JOIN usuarios u ON u.id = c.usuario_id
        WHERE c.postagem_id = $1
        ORDER BY c.criado_em ASC, c.id ASC
        "#,
    )
    .bind(postagem_id)
    .fetch_all(pool)
    .await?;

    Ok(comentarios)
}

/// Find a single comment by ID
pub async fn buscar_por_id(pool: &PgPool, id: Uuid) -> Result<Option<Comentario>, sqlx::Error> {
    let comentario = sqlx::query_as::<_, Comentario>(
        "SELECT id, postagem_id, usuario_id, conteudo, criado_em FROM comentarios WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(comentario)
}

/// Delete a comment
pub async fn deletar(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM comentarios WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
