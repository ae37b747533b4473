use crate::models::postagem::PostagemAutorRow;
use crate::models::{AtualizaPostagemRequest, Postagem, PostagemFiltro};
use sqlx::PgPool;
use uuid::Uuid;

const COLUNAS: &str = "id, titulo, descricao, localizacao, foto, estado_id, cidade_id, \
                       usuario_id, criado_em, atualizado_em";

/// Create a new report tied to its author
pub async fn criar(
    pool: &PgPool,
    usuario_id: Uuid,
    titulo: &str,
    descricao: &str,
    localizacao: &str,
    foto: &str,
    estado_id: i32,
    cidade_id: i32,
) -> Result<Postagem, sqlx::Error> {
    let postagem = sqlx::query_as::<_, Postagem>(&format!(
        r#"
        INSERT INTO postagens (titulo, descricao, localizacao, foto, estado_id, cidade_id, usuario_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {COLUNAS}
        "#,
    ))
    .bind(titulo)
    .bind(descricao)
    .bind(localizacao)
    .bind(foto)
    .bind(estado_id)
    .bind(cidade_id)
    .bind(usuario_id)
    .fetch_one(pool)
    .await?;

    Ok(postagem)
}

/// Find a report by ID
pub async fn buscar_por_id(pool: &PgPool, id: Uuid) -> Result<Option<Postagem>, sqlx::Error> {
    let postagem = sqlx::query_as::<_, Postagem>(&format!(
        "SELECT {COLUNAS} FROM postagens WHERE id = $1",
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(postagem)
}

/// Find a report by ID joined with its author
pub async fn buscar_com_autor(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<PostagemAutorRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, PostagemAutorRow>(
        r#"
        SELECT p.id, p.titulo, p.descricao, p.localizacao, p.foto, p.estado_id, p.cidade_id,
               p.usuario_id, p.criado_em, p.atualizado_em,
               u.nome AS usuario_nome, u.email AS usuario_email
        FROM postagens p
        JOIN usuarios u ON u.id = p.usuario_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// List reports, newest first. Each supplied filter restricts by equality.
pub async fn listar(pool: &PgPool, filtro: &PostagemFiltro) -> Result<Vec<Postagem>, sqlx::Error> {
    let postagens = sqlx::query_as::<_, Postagem>(&format!(
        r#"
        SELECT {COLUNAS}
        FROM postagens
        WHERE ($1::integer IS NULL OR estado_id = $1)
          AND ($2::integer IS NULL OR cidade_id = $2)
        ORDER BY criado_em DESC
        "#,
    ))
    .bind(filtro.estado_id)
    .bind(filtro.cidade_id)
    .fetch_all(pool)
    .await?;

    Ok(postagens)
}

/// List all reports owned by a user, newest first
pub async fn listar_por_usuario(
    pool: &PgPool,
    usuario_id: Uuid,
) -> Result<Vec<Postagem>, sqlx::Error> {
    let postagens = sqlx::query_as::<_, Postagem>(&format!(
        r#"
        SELECT {COLUNAS}
        FROM postagens
        WHERE usuario_id = $1
        ORDER BY criado_em DESC
        "#,
    ))
    .bind(usuario_id)
    .fetch_all(pool)
    .await?;

    Ok(postagens)
}

/// Update the mutable fields of a report; absent fields keep their values.
/// Geography columns are never touched here.
pub async fn atualizar(
    pool: &PgPool,
    id: Uuid,
    campos: &AtualizaPostagemRequest,
) -> Result<Option<Postagem>, sqlx::Error> {
    let postagem = sqlx::query_as::<_, Postagem>(&format!(
        r#"
        UPDATE postagens
        SET titulo      = COALESCE($1, titulo),
            descricao   = COALESCE($2, descricao),
            localizacao = COALESCE($3, localizacao),
            foto        = COALESCE($4, foto),
            atualizado_em = now()
        WHERE id = $5
        RETURNING {COLUNAS}
        "#,
    ))
    .bind(campos.titulo.as_deref())
    .bind(campos.descricao.as_deref())
    .bind(campos.localizacao.as_deref())
    .bind(campos.foto.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(postagem)
}

/// Delete a report, returning the removed row
pub async fn deletar(pool: &PgPool, id: Uuid) -> Result<Option<Postagem>, sqlx::Error> {
    let postagem = sqlx::query_as::<_, Postagem>(&format!(
        r#"
        DELETE FROM postagens
        WHERE id = $1
        RETURNING {COLUNAS}
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(postagem)
}
