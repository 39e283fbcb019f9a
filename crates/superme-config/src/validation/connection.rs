//! Validation for the base URL, endpoint paths, and request defaults.

use crate::schema::ClientConfig;

pub(crate) fn validate_base_url(errors: &mut Vec<String>, config: &ClientConfig) {
    let url = config.trimmed_base_url();
    if url.is_empty() {
        errors.push("base_url is empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!("base_url = {url:?} must start with http:// or https://"));
    }
}

pub(crate) fn validate_endpoints(errors: &mut Vec<String>, config: &ClientConfig) {
    let endpoints = &config.endpoints;
    for (name, path) in [
        ("endpoints.login", &endpoints.login),
        ("endpoints.chat_completions", &endpoints.chat_completions),
        ("endpoints.mcp", &endpoints.mcp),
    ] {
        if !path.starts_with('/') {
            errors.push(format!("{name} = {path:?} must start with '/'"));
        }
    }
}

pub(crate) fn validate_request(errors: &mut Vec<String>, config: &ClientConfig) {
    if config.model.trim().is_empty() {
        errors.push("model is empty".into());
    }
    if config.max_tokens == 0 {
        errors.push("max_tokens must be greater than 0".into());
    }
}
