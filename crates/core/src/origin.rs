//! Cross-origin allow-list check.

use crate::error::CoreError;

/// Origins accepted when no `CORS_ORIGINS` override is configured.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:8080",
    "http://localhost:1234",
    "https://movies.com",
    "https://midu.dev",
];

/// Static allow-list of browser origins permitted to call the API.
///
/// Requests without an `Origin` header (same-origin or non-browser callers)
/// are always allowed. Matching is exact.
#[derive(Debug, Clone)]
pub struct OriginGuard {
    allowed: Vec<String>,
}

impl OriginGuard {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(o) => self.allowed.iter().any(|a| a == o),
        }
    }

    pub fn check(&self, origin: Option<&str>) -> Result<(), CoreError> {
        if self.is_allowed(origin) {
            Ok(())
        } else {
            Err(CoreError::OriginNotAllowed(
                origin.unwrap_or_default().to_string(),
            ))
        }
    }
}

impl Default for OriginGuard {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS.iter().copied())
    }
}
