/// User handlers: registration, login and user administration
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::usuario_repo;
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{LoginRequest, RegistroRequest, UsuarioPublico};
use crate::security::{jwt, password};

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistroResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: UsuarioPublico,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemocaoUsuarioResponse {
    pub message: String,
    pub usuario: UsuarioPublico,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/usuarios/register",
    tag = "usuarios",
    request_body = RegistroRequest,
    responses(
        (status = 201, description = "Usuário registrado", body = RegistroResponse),
        (status = 400, description = "Campos ausentes ou senha fraca"),
        (status = 409, description = "Email já em uso")
    )
)]
pub async fn registrar(
    pool: web::Data<PgPool>,
    payload: web::Json<RegistroRequest>,
) -> Result<HttpResponse> {
    let req = RegistroRequest {
        email: payload.email.trim().to_string(),
        nome: payload.nome.trim().to_string(),
        senha: payload.senha.clone(),
    };

    if let Err(e) = req.validate() {
        let fields = e.field_errors();
        if fields.contains_key("email") {
            return Err(AppError::Validation("Email inválido.".to_string()));
        }
        return Err(AppError::Validation(
            "Todos os campos são obrigatórios.".to_string(),
        ));
    }

    if usuario_repo::email_existe(&pool, &req.email).await? {
        return Err(AppError::EmailTaken);
    }

    let senha_hash = password::hash_password(&req.senha)?;

    usuario_repo::criar(&pool, &req.email, &req.nome, &senha_hash).await?;

    Ok(HttpResponse::Created().json(RegistroResponse {
        message: "Usuário registrado com sucesso.".to_string(),
    }))
}

/// Authenticate and issue a bearer token
#[utoipa::path(
    post,
    path = "/usuarios/login",
    tag = "usuarios",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Autenticado", body = LoginResponse),
        (status = 400, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    pool: web::Data<PgPool>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let email = payload.email.trim();

    let usuario = usuario_repo::buscar_por_email(&pool, email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    password::verify_password(&payload.senha, &usuario.senha_hash)?;

    let token = jwt::gerar_token(usuario.id, &usuario.email, &usuario.nome)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        usuario: usuario.into(),
    }))
}

/// List all users
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Lista de usuários", body = [UsuarioPublico]),
        (status = 401, description = "Não autenticado")
    )
)]
pub async fn listar(pool: web::Data<PgPool>, _auth: AuthUser) -> Result<HttpResponse> {
    let usuarios = usuario_repo::listar(&pool).await?;

    Ok(HttpResponse::Ok().json(usuarios))
}

/// Fetch one user by id
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Id do usuário")),
    responses(
        (status = 200, description = "Usuário", body = UsuarioPublico),
        (status = 401, description = "Não autenticado"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn obter(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
    _auth: AuthUser,
) -> Result<HttpResponse> {
    let usuario = usuario_repo::buscar_por_id(&pool, *id)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado.".to_string()))?;

    Ok(HttpResponse::Ok().json(UsuarioPublico::from(usuario)))
}

/// Delete a user. Owned posts and comments go with it.
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "usuarios",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Id do usuário")),
    responses(
        (status = 200, description = "Usuário removido", body = RemocaoUsuarioResponse),
        (status = 401, description = "Não autenticado"),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn deletar(
    pool: web::Data<PgPool>,
    id: web::Path<Uuid>,
    _auth: AuthUser,
) -> Result<HttpResponse> {
    let usuario = usuario_repo::deletar(&pool, *id)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado.".to_string()))?;

    Ok(HttpResponse::Ok().json(RemocaoUsuarioResponse {
        message: "Usuário deletado com sucesso.".to_string(),
        usuario: usuario.into(),
    }))
}
