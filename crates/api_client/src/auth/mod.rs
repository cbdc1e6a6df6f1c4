//! Login, registration and session hydration on top of [`ApiClient`].
//! Passwords and tokens travel in request bodies only and are never logged.

mod claims;
mod store;

pub use claims::Claims;
pub use store::{MemoryTokenStore, TokenPair, TokenStore};

use crate::{
    forms::{check_password, FieldErrors, Validate},
    resources::users::User,
    ApiClient, Error,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.email("email", &self.email);
        errors.require("password", &self.password);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing)]
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.email("email", &self.email);
        check_password(&mut errors, &self.password, Some(&self.password_confirmation));
        if let Some(name) = &self.full_name {
            errors.max_len("full_name", name, 120);
        }
        errors.into_result()
    }
}

/// Login/registration response: a token pair plus the signed-in user.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: User,
}

impl ApiClient {
    /// Signs in and persists the returned token pair.
    ///
    /// # Errors
    /// Returns `Error::Validation` for incomplete input, `Error::Unauthorized`
    /// for rejected credentials, or transport errors.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, Error> {
        request.validate()?;
        let response: AuthResponse = self.post_public("/auth/login", request).await?;
        self.token_store().save(&response.tokens);
        debug!(user_id = %response.user.id, "signed in");
        Ok(response.user)
    }

    /// Creates a customer account and signs it in.
    ///
    /// # Errors
    /// Returns `Error::Validation` for invalid input or the backend's error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, Error> {
        request.validate()?;
        let response: AuthResponse = self.post_public("/auth/register", request).await?;
        self.token_store().save(&response.tokens);
        debug!(user_id = %response.user.id, "registered");
        Ok(response.user)
    }

    /// Revokes the refresh token server-side (best effort) and always clears local tokens.
    pub async fn logout(&self) {
        if let Some(tokens) = self.token_store().load() {
            let body = json!({ "refresh_token": tokens.refresh_token.expose_secret() });
            if let Err(err) = self.post_no_content("/auth/logout", &body).await {
                debug!("server-side logout failed: {err}");
            }
        }
        self.token_store().clear();
    }

    /// Hydrates the signed-in user. Returns `None` without tokens or when the
    /// session can no longer be refreshed.
    ///
    /// # Errors
    /// Returns transport or non-401 HTTP errors.
    pub async fn current_user(&self) -> Result<Option<User>, Error> {
        if !self.has_session() {
            return Ok(None);
        }
        match self.get::<User>("/auth/me").await {
            Ok(user) => Ok(Some(user)),
            Err(Error::Unauthorized) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Claims of the stored access token, if any.
    #[must_use]
    pub fn claims(&self) -> Option<Claims> {
        let tokens = self.token_store().load()?;
        Claims::decode(tokens.access_token.expose_secret())
    }

    /// Claims of the stored access token, unless it expired at `now_secs`.
    #[must_use]
    pub fn unexpired_claims(&self, now_secs: u64) -> Option<Claims> {
        self.claims().filter(|claims| !claims.is_expired_at(now_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_confirmation_is_checked_but_not_sent() -> Result<(), serde_json::Error> {
        let request = RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "correct-horse".to_string(),
            password_confirmation: "correct-horse".to_string(),
            full_name: None,
        };
        assert!(request.validate().is_ok());

        let json = serde_json::to_value(&request)?;
        assert!(json.get("password_confirmation").is_none());
        assert!(json.get("full_name").is_none());
        Ok(())
    }

    #[test]
    fn expired_access_token_yields_no_claims() -> Result<(), Error> {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use crate::ClientConfig;
        use std::sync::Arc;

        let jwt = format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(r#"{"sub":"42","role":"admin","exp":1700000000}"#)
        );
        let store = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new(jwt, "r")));
        let client = ApiClient::new(ClientConfig::new("https://consulta.dev/api/v1"), store)?;

        assert!(client.claims().is_some());
        assert_eq!(
            client.unexpired_claims(1_699_999_999).map(|c| c.sub),
            Some("42".to_string())
        );
        assert!(client.unexpired_claims(1_700_000_000).is_none());
        Ok(())
    }

    #[test]
    fn login_requires_email_and_password() {
        let request = LoginRequest {
            email: "nope".to_string(),
            password: " ".to_string(),
        };
        let Err(errors) = request.validate() else {
            panic!("expected validation errors");
        };
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
    }
}
