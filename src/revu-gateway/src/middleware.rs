//! Request-level middleware configuration.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// CORS configuration for the browser editor origin.
///
/// Permits the methods and headers the editor uses (`Authorization` is
/// reserved for later use). Includes Access-Control-Max-Age so browsers
/// cache preflight responses.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let max_age = std::time::Duration::from_secs(86400);

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION];

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers)
            .max_age(max_age)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(headers)
            .max_age(max_age)
    }
}
