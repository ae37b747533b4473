//! Prometheus metrics for relato-service.
//!
//! Counters live in the default registry; `/metrics` renders them in text
//! format.

use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

pub static POSTAGENS_CRIADAS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "relato_postagens_criadas_total",
        "Total de postagens criadas"
    )
    .expect("register relato_postagens_criadas_total")
});

pub static COMENTARIOS_CRIADOS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "relato_comentarios_criados_total",
        "Total de comentários criados"
    )
    .expect("register relato_comentarios_criados_total")
});

pub static IBGE_FALHAS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "relato_ibge_falhas_total",
        "Total de falhas ao consultar a API de localidades do IBGE"
    )
    .expect("register relato_ibge_falhas_total")
});

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
