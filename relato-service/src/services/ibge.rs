/// IBGE localities gateway
///
/// Facade over the public IBGE directory of states and municipalities
/// (`/estados`, `/estados/{chave}/municipios`). Reference data is never
/// persisted: listings proxy the directory, and name resolution does a full
/// fetch plus linear search per call.
///
/// Name resolution degrades to `None` on any upstream failure or miss; the
/// caller substitutes a placeholder. Listing operations surface upstream
/// failures as errors.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::IbgeConfig;
use crate::error::Result;
use crate::metrics;

/// A Brazilian state as delivered by the directory.
/// Unknown upstream fields (region nesting etc.) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Estado {
    pub id: i32,
    pub nome: String,
    pub sigla: String,
}

/// A municipality of a state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Cidade {
    pub id: i32,
    pub nome: String,
}

#[derive(Clone)]
pub struct IbgeClient {
    http: reqwest::Client,
    base_url: String,
}

impl IbgeClient {
    pub fn new(config: &IbgeConfig) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List all states
    pub async fn listar_estados(&self) -> Result<Vec<Estado>> {
        let url = format!("{}/estados", self.base_url);

        let estados = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                metrics::IBGE_FALHAS.inc();
                e
            })?
            .json::<Vec<Estado>>()
            .await
            .map_err(|e| {
                metrics::IBGE_FALHAS.inc();
                e
            })?;

        Ok(estados)
    }

    /// List the municipalities of a state.
    ///
    /// `chave` may be the numeric state id or the two-letter abbreviation;
    /// the directory accepts both in the same path segment.
    pub async fn listar_cidades(&self, chave: &str) -> Result<Vec<Cidade>> {
        let url = format!("{}/estados/{}/municipios", self.base_url, chave);

        let cidades = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                metrics::IBGE_FALHAS.inc();
                e
            })?
            .json::<Vec<Cidade>>()
            .await
            .map_err(|e| {
                metrics::IBGE_FALHAS.inc();
                e
            })?;

        Ok(cidades)
    }

    /// Resolve a state's display name; `None` on miss or upstream failure.
    pub async fn nome_do_estado(&self, estado_id: i32) -> Option<String> {
        match self.listar_estados().await {
            Ok(estados) => estados
                .into_iter()
                .find(|estado| estado.id == estado_id)
                .map(|estado| estado.nome),
            Err(err) => {
                tracing::warn!(estado_id, "Falha ao resolver nome do estado: {}", err);
                None
            }
        }
    }

    /// Resolve a municipality's display name within a state;
    /// `None` on miss or upstream failure.
    pub async fn nome_da_cidade(&self, estado_id: i32, cidade_id: i32) -> Option<String> {
        match self.listar_cidades(&estado_id.to_string()).await {
            Ok(cidades) => cidades
                .into_iter()
                .find(|cidade| cidade.id == cidade_id)
                .map(|cidade| cidade.nome),
            Err(err) => {
                tracing::warn!(
                    estado_id,
                    cidade_id,
                    "Falha ao resolver nome da cidade: {}",
                    err
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Payload shaped like the real directory response, including the nested
    // region data this service does not consume.
    const ESTADOS_JSON: &str = r#"[
        {"id": 35, "sigla": "SP", "nome": "São Paulo",
         "regiao": {"id": 3, "sigla": "SE", "nome": "Sudeste"}},
        {"id": 33, "sigla": "RJ", "nome": "Rio de Janeiro",
         "regiao": {"id": 3, "sigla": "SE", "nome": "Sudeste"}}
    ]"#;

    const MUNICIPIOS_JSON: &str = r#"[
        {"id": 3550308, "nome": "São Paulo",
         "microrregiao": {"id": 35061, "nome": "São Paulo"}},
        {"id": 3509502, "nome": "Campinas",
         "microrregiao": {"id": 35032, "nome": "Campinas"}}
    ]"#;

    #[test]
    fn estados_toleram_campos_extras() {
        let estados: Vec<Estado> = serde_json::from_str(ESTADOS_JSON).unwrap();
        assert_eq!(estados.len(), 2);
        assert_eq!(estados[0].id, 35);
        assert_eq!(estados[0].sigla, "SP");
        assert_eq!(estados[1].nome, "Rio de Janeiro");
    }

    #[test]
    fn municipios_toleram_campos_extras() {
        let cidades: Vec<Cidade> = serde_json::from_str(MUNICIPIOS_JSON).unwrap();
        assert_eq!(cidades.len(), 2);
        assert_eq!(cidades[1].id, 3509502);
        assert_eq!(cidades[1].nome, "Campinas");
    }

    #[test]
    fn base_url_sem_barra_final() {
        let client = IbgeClient::new(&IbgeConfig {
            base_url: "https://servicodados.ibge.gov.br/api/v1/localidades/".into(),
            timeout_ms: 1000,
        })
        .unwrap();
        assert_eq!(
            client.base_url,
            "https://servicodados.ibge.gov.br/api/v1/localidades"
        );
    }
}
