//! # Validation Utilities
//!
//! Form input validation helpers. These return user-facing messages.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that a URL uses the http or https scheme and has a host part.
pub fn validate_http_url(url: &str, field_name: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    match rest {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        _ => Err(format!("{} must be an http(s) URL", field_name)),
    }
}

/// Validate maximum length in bytes.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Result<(), String> {
    if value.len() > max {
        Err(format!("{} must be at most {} bytes", field_name, max))
    } else {
        Ok(())
    }
}
