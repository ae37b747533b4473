/// Comment handlers
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::models::{ComentarioComAutor, NovoComentarioRequest};
use crate::services::ComentarioService;

#[derive(Debug, Serialize, ToSchema)]
pub struct RemocaoComentarioResponse {
    pub message: String,
}

/// List a report's comments in insertion order
#[utoipa::path(
    get,
    path = "/comentarios/{postagem_id}",
    tag = "comentarios",
    params(("postagem_id" = Uuid, Path, description = "Id da postagem")),
    responses(
        (status = 200, description = "Comentários da postagem", body = [ComentarioComAutor])
    )
)]
pub async fn listar(
    pool: web::Data<PgPool>,
    postagem_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = ComentarioService::new((**pool).clone());
    let comentarios = service.listar(*postagem_id).await?;

    Ok(HttpResponse::Ok().json(comentarios))
}

/// Comment on an existing report
#[utoipa::path(
    post,
    path = "/comentarios",
    tag = "comentarios",
    security(("bearer_auth" = [])),
    request_body = NovoComentarioRequest,
    responses(
        (status = 201, description = "Comentário criado", body = ComentarioComAutor),
        (status = 400, description = "Conteúdo vazio ou acima de 300 caracteres"),
        (status = 401, description = "Não autenticado"),
        (status = 404, description = "Postagem não encontrada")
    )
)]
pub async fn criar(
    pool: web::Data<PgPool>,
    auth: AuthUser,
    payload: web::Json<NovoComentarioRequest>,
) -> Result<HttpResponse> {
    let service = ComentarioService::new((**pool).clone());
    let comentario = service
        .criar(auth.id, payload.postagem_id, &payload.conteudo)
        .await?;

    Ok(HttpResponse::Created().json(comentario))
}

/// Delete a comment (author only)
#[utoipa::path(
    delete,
    path = "/comentarios/{id}",
    tag = "comentarios",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Id do comentário")),
    responses(
        (status = 200, description = "Comentário removido", body = RemocaoComentarioResponse),
        (status = 401, description = "Não autenticado"),
        (status = 403, description = "Não é o autor do comentário"),
        (status = 404, description = "Comentário não encontrado")
    )
)]
pub async fn deletar(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
    auth: AuthUser,
) -> Result<HttpResponse> {
    let service = ComentarioService::new((**pool).clone());
    service.deletar(*id, auth.id).await?;

    Ok(HttpResponse::Ok().json(RemocaoComentarioResponse {
        message: "Comentário excluído com sucesso.".to_string(),
    }))
}
