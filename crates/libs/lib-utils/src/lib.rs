//! # Utilities Library
//!
//! Shared utility functions for base64 encoding, environment variables, and form validation.

pub mod b64;
pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use b64::{b64_encode, b64_decode};
pub use envs::{get_env, get_env_or, get_env_parse};
pub use validation::{validate_not_empty, validate_http_url, validate_max_length};
