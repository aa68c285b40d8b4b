//! Base-URL configuration, injected into the client at construction.
//!
//! The surrounding application decides which environment it runs in (or
//! supplies an explicit base URL) and hands the result to
//! [`ApiClient::new`](crate::ApiClient::new). The client itself never reads
//! the process environment.

/// Base URL used by production builds, where the backend sits behind the
/// same origin's reverse proxy.
pub const PRODUCTION_BASE_URL: &str = "/api";

/// Base URL used by every non-production environment.
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:8000";

/// Runtime environment the surrounding application was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

/// Immutable base configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a configuration with an explicit base URL.
    ///
    /// A trailing `/` is trimmed so endpoint paths join deterministically.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create the default configuration for an environment: `/api` in
    /// production, the local development server otherwise.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Production => Self::new(PRODUCTION_BASE_URL),
            Environment::Development => Self::new(DEVELOPMENT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_url_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn production_maps_to_proxy_prefix() {
        let config = ApiConfig::for_environment(Environment::Production);
        assert_eq!(config.base_url(), "/api");
    }

    #[test]
    fn default_is_development() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000");
    }
}
