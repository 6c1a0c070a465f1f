use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::TRACE_ID_HEADER;

const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Keep http(s) origins, drop blanks and the literal "null".
fn effective_origins(configured: &[String]) -> Vec<String> {
    let valid: Vec<String> = configured
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if valid.is_empty() {
        DEV_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        valid
    }
}

/// Build CORS middleware from the configured origin list, falling back to
/// localhost when none is usable.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static(TRACE_ID_HEADER),
            header::LOCATION,
        ])
        .max_age(3600);

    for origin in effective_origins(allowed_origins) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::effective_origins;

    #[test]
    fn filters_invalid_origins() {
        let configured = vec![
            " https://app.example.com ".to_string(),
            "null".to_string(),
            "ftp://files.example.com".to_string(),
        ];
        assert_eq!(effective_origins(&configured), ["https://app.example.com"]);
    }

    #[test]
    fn falls_back_to_localhost() {
        assert_eq!(effective_origins(&[]).len(), 2);
    }
}
