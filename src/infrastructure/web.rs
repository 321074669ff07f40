use actix_cors::Cors;
use actix_web::http::header;

use crate::settings::AppConfig;

/// CORS policy from configuration. Wildcard origins only survive
/// `AppConfig::validate` outside production.
pub fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
