/// State/city reference data handlers, proxied from the IBGE directory
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::services::{Cidade, Estado, IbgeClient};

/// List all Brazilian states
#[utoipa::path(
    get,
    path = "/estados",
    tag = "estados",
    responses(
        (status = 200, description = "Estados", body = [Estado]),
        (status = 500, description = "Diretório de localidades indisponível")
    )
)]
pub async fn listar(ibge: web::Data<IbgeClient>) -> Result<HttpResponse> {
    let estados = ibge.listar_estados().await?;

    Ok(HttpResponse::Ok().json(estados))
}

/// List the municipalities of a state, addressed by numeric id or sigla
#[utoipa::path(
    get,
    path = "/estados/{chave}/cidades",
    tag = "estados",
    params(("chave" = String, Path, description = "Id numérico ou sigla do estado")),
    responses(
        (status = 200, description = "Cidades do estado", body = [Cidade]),
        (status = 500, description = "Diretório de localidades indisponível")
    )
)]
pub async fn listar_cidades(
    ibge: web::Data<IbgeClient>,
    chave: web::Path<String>,
) -> Result<HttpResponse> {
    let cidades = ibge.listar_cidades(&chave).await?;

    Ok(HttpResponse::Ok().json(cidades))
}
