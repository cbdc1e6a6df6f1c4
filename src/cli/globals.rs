use consulta_client::{
    ApiClient, ClientConfig, Locale, MemoryTokenStore, TokenPair, TokenStore,
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Arguments shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub token: Option<SecretString>,
    pub locale: Locale,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            token: None,
            locale: Locale::default(),
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }

    /// Builds an API client. A `--token` is used as the access token; there is
    /// no refresh token, so a rejected token ends the session.
    ///
    /// # Errors
    /// Returns `Error::Config` when the API URL is unusable.
    pub fn client(&self) -> Result<ApiClient, consulta_client::Error> {
        let store = match &self.token {
            Some(token) => MemoryTokenStore::with_tokens(TokenPair::new(token.expose_secret(), "")),
            None => MemoryTokenStore::new(),
        };
        let store: Arc<dyn TokenStore> = Arc::new(store);
        let config = ClientConfig::new(self.api_url.clone()).with_locale(self.locale);
        ApiClient::new(config, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new("https://api.consulta.dev/api/v1".to_string());
        assert_eq!(args.api_url, "https://api.consulta.dev/api/v1");
        assert!(args.token.is_none());
        assert_eq!(args.locale, Locale::En);
    }

    #[test]
    fn test_client_with_token_has_session() {
        let mut args = GlobalArgs::new("https://api.consulta.dev/api/v1".to_string());
        args.set_token(SecretString::from("access"));
        let client = args.client().unwrap();
        assert!(client.has_session());
    }

    #[test]
    fn test_client_rejects_bad_scheme() {
        let args = GlobalArgs::new("ftp://api.consulta.dev".to_string());
        assert!(args.client().is_err());
    }
}
