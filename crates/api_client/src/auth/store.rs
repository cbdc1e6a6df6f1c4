//! Token persistence. The browser stores the pair in `localStorage`; native
//! callers and tests keep it in memory.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Access/refresh bearer tokens. `Debug` output is redacted by `secrecy`.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "WireTokens")]
pub struct TokenPair {
    pub access_token: SecretString,
    pub refresh_token: SecretString,
}

#[derive(Serialize, Deserialize)]
struct WireTokens {
    access_token: String,
    refresh_token: String,
}

impl From<WireTokens> for TokenPair {
    fn from(wire: WireTokens) -> Self {
        Self::new(wire.access_token, wire.refresh_token)
    }
}

impl TokenPair {
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            refresh_token: SecretString::from(refresh_token.into()),
        }
    }

    /// Serialized form used by persistent stores. Callers must not log it.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        let wire = WireTokens {
            access_token: self.access_token.expose_secret().to_string(),
            refresh_token: self.refresh_token.expose_secret().to_string(),
        };
        serde_json::to_string(&wire).unwrap_or_default()
    }

    #[must_use]
    pub fn from_storage_string(value: &str) -> Option<Self> {
        let wire = serde_json::from_str::<WireTokens>(value).ok()?;
        if wire.access_token.is_empty() {
            return None;
        }
        Some(wire.into())
    }
}

/// Persistence seam for the bearer tokens used by [`crate::ApiClient`].
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<TokenPair>;
    fn save(&self, tokens: &TokenPair);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<TokenPair> {
        self.tokens.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, tokens: &TokenPair) {
        if let Ok(mut guard) = self.tokens.lock() {
            *guard = Some(tokens.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.tokens.lock() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_string_round_trips_and_rejects_garbage() {
        let pair = TokenPair::new("access-1", "refresh-1");
        let restored = TokenPair::from_storage_string(&pair.to_storage_string());
        assert_eq!(
            restored.map(|p| p.refresh_token.expose_secret().to_string()),
            Some("refresh-1".to_string())
        );
        assert!(TokenPair::from_storage_string("not json").is_none());
        assert!(
            TokenPair::from_storage_string(r#"{"access_token":"","refresh_token":"r"}"#).is_none()
        );
    }

    #[test]
    fn debug_output_is_redacted() {
        let pair = TokenPair::new("super-secret-access", "super-secret-refresh");
        let debug = format!("{pair:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn memory_store_save_and_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());
        store.save(&TokenPair::new("a", "r"));
        assert_eq!(
            store.load().map(|p| p.access_token.expose_secret().to_string()),
            Some("a".to_string())
        );
        store.clear();
        assert!(store.load().is_none());
    }
}
