//! Client configuration with build-time defaults and optional runtime overrides.
//! Static deployments can re-point the API without rebuilding by supplying
//! overrides (the web app reads them from `window.CONSULTA_CONFIG`).
//! Configuration values are public; do not store secrets here.

use crate::{Error, Locale};
use std::time::Duration;
use url::Url;

/// API prefix used when no base URL is configured (same-origin deployments).
pub const DEFAULT_API_BASE_URL: &str = "/api/v1";
/// Default request timeout applied by native transports.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub locale: Locale,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            locale: Locale::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Loads defaults from `CONSULTA_API_BASE_URL` / `CONSULTA_LOCALE` captured at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        let api_base_url = option_env!("CONSULTA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let locale = option_env!("CONSULTA_LOCALE").map_or_else(Locale::default, Locale::from_tag);

        Self {
            api_base_url: api_base_url.to_string(),
            locale,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Applies runtime overrides; blank values never replace configured ones.
    #[must_use]
    pub fn with_overrides(mut self, overrides: RuntimeOverrides) -> Self {
        if let Some(value) = overrides.api_base_url.as_deref().and_then(normalize_runtime_value) {
            self.api_base_url = value;
        }
        if let Some(value) = overrides.locale.as_deref().and_then(normalize_runtime_value) {
            self.locale = Locale::from_tag(&value);
        }
        self
    }

    /// Rejects base URLs that are neither absolute http(s) URLs nor same-origin paths.
    ///
    /// # Errors
    /// Returns `Error::Config` when the base URL cannot be used.
    pub fn validate(&self) -> Result<(), Error> {
        let base = self.api_base_url.trim();
        if base.is_empty() || base.starts_with('/') {
            return Ok(());
        }

        let url = Url::parse(base)
            .map_err(|err| Error::Config(format!("Invalid API base URL: {err}")))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(Error::Config(format!(
                "Unsupported API base URL scheme: {scheme}"
            ))),
        }
    }

    /// Joins the configured base URL and an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Values supplied at runtime by the hosting page or the CLI environment.
#[derive(Clone, Debug, Default)]
pub struct RuntimeOverrides {
    pub api_base_url: Option<String>,
    pub locale: Option<String>,
}

/// Trims a runtime value and treats empty strings as absent.
#[must_use]
pub fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.consulta.dev "),
            Some("https://api.consulta.dev".to_string())
        );
    }

    #[test]
    fn overrides_ignore_blank_values() {
        let config = ClientConfig::new("https://api.default/api/v1").with_overrides(
            RuntimeOverrides {
                api_base_url: Some("  ".to_string()),
                locale: Some(String::new()),
            },
        );

        assert_eq!(config.api_base_url, "https://api.default/api/v1");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn overrides_replace_when_present() {
        let config = ClientConfig::new("https://api.default/api/v1").with_overrides(
            RuntimeOverrides {
                api_base_url: Some(" https://api.override/api/v1 ".to_string()),
                locale: Some("es-MX".to_string()),
            },
        );

        assert_eq!(config.api_base_url, "https://api.override/api/v1");
        assert_eq!(config.locale, Locale::Es);
    }

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let config = ClientConfig::new("https://api.consulta.dev/api/v1/");
        assert_eq!(
            config.endpoint("/cms/pages"),
            "https://api.consulta.dev/api/v1/cms/pages"
        );
        assert_eq!(
            config.endpoint("use-cases"),
            "https://api.consulta.dev/api/v1/use-cases"
        );

        let same_origin = ClientConfig::new("");
        assert_eq!(same_origin.endpoint("/orders"), "/orders");
    }

    #[test]
    fn validate_accepts_paths_and_http_urls() {
        assert!(ClientConfig::new("/api/v1").validate().is_ok());
        assert!(ClientConfig::new("").validate().is_ok());
        assert!(ClientConfig::new("https://api.consulta.dev").validate().is_ok());
        assert!(matches!(
            ClientConfig::new("ftp://files.consulta.dev").validate(),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("not a url").validate(),
            Err(Error::Config(_))
        ));
    }
}
