/// Resource route tree, shared by the binary and the integration tests
use actix_web::web;

use crate::handlers::{comentarios, estados, postagens, usuarios};

pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/usuarios")
            .route("/register", web::post().to(usuarios::registrar))
            .route("/login", web::post().to(usuarios::login))
            .route("", web::get().to(usuarios::listar))
            .route("/{id}", web::get().to(usuarios::obter))
            .route("/{id}", web::delete().to(usuarios::deletar)),
    )
    .service(
        web::scope("/estados")
            .route("", web::get().to(estados::listar))
            .route("/{chave}/cidades", web::get().to(estados::listar_cidades)),
    )
    .service(
        web::scope("/postagens")
            // literal route first so it is not captured by /{id}
            .route("/minhas", web::get().to(postagens::minhas))
            .route("", web::get().to(postagens::listar))
            .route("", web::post().to(postagens::criar))
            .route("/{id}", web::get().to(postagens::obter))
            .route("/{id}", web::put().to(postagens::atualizar))
            .route("/{id}", web::delete().to(postagens::deletar)),
    )
    .service(
        web::scope("/comentarios")
            .route("", web::post().to(comentarios::criar))
            .route("/{postagem_id}", web::get().to(comentarios::listar))
            .route("/{id}", web::delete().to(comentarios::deletar)),
    );
}
