/// User database operations
use crate::models::{Usuario, UsuarioPublico};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new user
pub async fn criar(
    pool: &PgPool,
    email: &str,
    nome: &str,
    senha_hash: &str,
) -> Result<Usuario, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        INSERT INTO usuarios (email, nome, senha_hash)
        VALUES ($1, $2, $3)
        RETURNING id, email, nome, senha_hash, criado_em, atualizado_em
        "#,
    )
    .bind(email)
    .bind(nome)
    .bind(senha_hash)
    .fetch_one(pool)
    .await?;

    Ok(usuario)
}

/// Find user by email
pub async fn buscar_por_email(pool: &PgPool, email: &str) -> Result<Option<Usuario>, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, email, nome, senha_hash, criado_em, atualizado_em FROM usuarios WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(usuario)
}

/// Find user by ID
pub async fn buscar_por_id(pool: &PgPool, id: Uuid) -> Result<Option<Usuario>, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, email, nome, senha_hash, criado_em, atualizado_em FROM usuarios WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(usuario)
}

/// Check if email is already registered
pub async fn email_existe(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let existe =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM usuarios WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;

    Ok(existe)
}

/// List all users (public fields only)
pub async fn listar(pool: &PgPool) -> Result<Vec<UsuarioPublico>, sqlx::Error> {
    let usuarios = sqlx::query_as::<_, UsuarioPublico>(
        "SELECT id, email, nome FROM usuarios ORDER BY criado_em ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(usuarios)
}

/// Delete a user, returning the removed row.
/// Owned posts and comments are removed by ON DELETE CASCADE.
pub async fn deletar(pool: &PgPool, id: Uuid) -> Result<Option<Usuario>, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        DELETE FROM usuarios
        WHERE id = $1
        RETURNING id, email, nome, senha_hash, criado_em, atualizado_em
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(usuario)
}
