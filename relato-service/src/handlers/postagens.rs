/// Report handlers
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{
    AtualizaPostagemRequest, NovaPostagemRequest, PostagemComNomes, PostagemDetalhe,
    PostagemFiltro,
};
use crate::services::{IbgeClient, PostagemService};

fn service(pool: &web::Data<PgPool>, ibge: &web::Data<IbgeClient>) -> PostagemService {
    PostagemService::new((***pool).clone(), (***ibge).clone())
}

// The request DTOs validate the photo URL; any other field error means a
// blank required field.
fn mapear_erro_validacao(e: validator::ValidationErrors) -> AppError {
    if e.field_errors().contains_key("foto") {
        AppError::Validation("A URL da foto não é válida.".to_string())
    } else {
        AppError::Validation("Todos os campos são obrigatórios.".to_string())
    }
}

/// List reports, optionally filtered by state/city
#[utoipa::path(
    get,
    path = "/postagens",
    tag = "postagens",
    params(
        ("estadoId" = Option<i32>, Query, description = "Filtra por estado"),
        ("cidadeId" = Option<i32>, Query, description = "Filtra por cidade")
    ),
    responses(
        (status = 200, description = "Postagens mais recentes primeiro", body = [PostagemComNomes])
    )
)]
pub async fn listar(
    pool: web::Data<PgPool>,
    ibge: web::Data<IbgeClient>,
    filtro: web::Query<PostagemFiltro>,
) -> Result<HttpResponse> {
    let postagens = service(&pool, &ibge).listar(&filtro).await?;

    Ok(HttpResponse::Ok().json(postagens))
}

/// List the authenticated user's own reports
#[utoipa::path(
    get,
    path = "/postagens/minhas",
    tag = "postagens",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Postagens do usuário", body = [PostagemComNomes]),
        (status = 401, description = "Não autenticado")
    )
)]
pub async fn minhas(
    pool: web::Data<PgPool>,
    ibge: web::Data<IbgeClient>,
    auth: AuthUser,
) -> Result<HttpResponse> {
    let postagens = service(&pool, &ibge).listar_do_usuario(auth.id).await?;

    Ok(HttpResponse::Ok().json(postagens))
}

/// Fetch one report
#[utoipa::path(
    get,
    path = "/postagens/{id}",
    tag = "postagens",
    params(("id" = Uuid, Path, description = "Id da postagem")),
    responses(
        (status = 200, description = "Postagem", body = PostagemDetalhe),
        (status = 404, description = "Postagem não encontrada")
    )
)]
pub async fn obter(
    pool: web::Data<PgPool>,
    ibge: web::Data<IbgeClient>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let postagem = service(&pool, &ibge).obter(*id).await?;

    Ok(HttpResponse::Ok().json(postagem))
}

/// Create a report
#[utoipa::path(
    post,
    path = "/postagens",
    tag = "postagens",
    security(("bearer_auth" = [])),
    request_body = NovaPostagemRequest,
    responses(
        (status = 201, description = "Postagem criada"),
        (status = 400, description = "Campos inválidos ou localidade inexistente"),
        (status = 401, description = "Não autenticado")
    )
)]
pub async fn criar(
    pool: web::Data<PgPool>,
    ibge: web::Data<IbgeClient>,
    auth: AuthUser,
    payload: web::Json<NovaPostagemRequest>,
) -> Result<HttpResponse> {
    payload.validate().map_err(mapear_erro_validacao)?;

    let postagem = service(&pool, &ibge).criar(auth.id, &payload).await?;

    Ok(HttpResponse::Created().json(postagem))
}

/// Update a report's mutable fields (owner only)
#[utoipa::path(
    put,
    path = "/postagens/{id}",
    tag = "postagens",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Id da postagem")),
    request_body = AtualizaPostagemRequest,
    responses(
        (status = 200, description = "Postagem atualizada"),
        (status = 401, description = "Não autenticado"),
        (status = 403, description = "Não é o dono da postagem"),
        (status = 404, description = "Postagem não encontrada")
    )
)]
pub async fn atualizar(
    pool: web::Data<PgPool>,
    ibge: web::Data<IbgeClient>,
    id: web::Path<Uuid>,
    auth: AuthUser,
    payload: web::Json<AtualizaPostagemRequest>,
) -> Result<HttpResponse> {
    payload.validate().map_err(mapear_erro_validacao)?;

    let postagem = service(&pool, &ibge)
        .atualizar(*id, auth.id, &payload)
        .await?;

    Ok(HttpResponse::Ok().json(postagem))
}

/// Delete a report (owner only); echoes the removed report
#[utoipa::path(
    delete,
    path = "/postagens/{id}",
    tag = "postagens",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Id da postagem")),
    responses(
        (status = 200, description = "Postagem removida"),
        (status = 401, description = "Não autenticado"),
        (status = 403, description = "Não é o dono da postagem"),
        (status = 404, description = "Postagem não encontrada")
    )
)]
pub async fn deletar(
    pool: web::Data<PgPool>,
    ibge: web::Data<IbgeClient>,
    id: web::Path<Uuid>,
    auth: AuthUser,
) -> Result<HttpResponse> {
    let postagem = service(&pool, &ibge).deletar(*id, auth.id).await?;

    Ok(HttpResponse::Ok().json(postagem))
}
