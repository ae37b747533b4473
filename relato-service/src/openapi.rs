/// OpenAPI documentation for the Relato Cidadão API
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Relato Cidadão API",
        version = "1.0.0",
        description = "API de relatos de problemas de infraestrutura urbana: cadastro e autenticação de usuários, postagens com localidade (estado/cidade via IBGE) e comentários.",
        license(name = "MIT")
    ),
    paths(
        handlers::usuarios::registrar,
        handlers::usuarios::login,
        handlers::usuarios::listar,
        handlers::usuarios::obter,
        handlers::usuarios::deletar,
        handlers::estados::listar,
        handlers::estados::listar_cidades,
        handlers::postagens::listar,
        handlers::postagens::minhas,
        handlers::postagens::obter,
        handlers::postagens::criar,
        handlers::postagens::atualizar,
        handlers::postagens::deletar,
        handlers::comentarios::listar,
        handlers::comentarios::criar,
        handlers::comentarios::deletar,
    ),
    components(schemas(
        models::usuario::RegistroRequest,
        models::usuario::LoginRequest,
        models::usuario::UsuarioPublico,
        models::postagem::Postagem,
        models::postagem::PostagemComNomes,
        models::postagem::PostagemDetalhe,
        models::postagem::NovaPostagemRequest,
        models::postagem::AtualizaPostagemRequest,
        models::comentario::Comentario,
        models::comentario::ComentarioComAutor,
        models::comentario::NovoComentarioRequest,
        services::ibge::Estado,
        services::ibge::Cidade,
        handlers::usuarios::RegistroResponse,
        handlers::usuarios::LoginResponse,
        handlers::usuarios::RemocaoUsuarioResponse,
        handlers::comentarios::RemocaoComentarioResponse,
    )),
    tags(
        (name = "usuarios", description = "Cadastro, autenticação e administração de usuários"),
        (name = "estados", description = "Estados e cidades, via diretório de localidades do IBGE"),
        (name = "postagens", description = "Relatos de problemas de infraestrutura"),
        (name = "comentarios", description = "Comentários em postagens"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token emitido em POST /usuarios/login"))
                        .build(),
                ),
            )
        }
    }
}
