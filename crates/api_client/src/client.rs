//! HTTP plumbing shared by every endpoint group: URL building, bearer
//! attachment, refresh-on-401 and response/error decoding.

use crate::{
    auth::{TokenPair, TokenStore},
    config::ClientConfig,
    error::{self, Error},
    i18n::Locale,
};
use reqwest::{Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info_span, warn, Instrument};

const REFRESH_PATH: &str = "/auth/refresh";

/// Cheaply clonable API client. Clones share the HTTP connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    config: ClientConfig,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
    // Serializes refreshes so concurrent 401s share one refresh round-trip.
    refresh_lock: tokio::sync::Mutex<()>,
}

/// Whether a request carries the stored bearer token.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Access {
    Authenticated,
    Public,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl ApiClient {
    /// # Errors
    /// Returns `Error::Config` if the base URL is unusable or the HTTP client cannot be built.
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, Error> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                http,
                tokens,
                refresh_lock: tokio::sync::Mutex::new(()),
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.inner.config.locale
    }

    #[must_use]
    pub fn token_store(&self) -> &dyn TokenStore {
        self.inner.tokens.as_ref()
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.inner.tokens.load().is_some()
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.get_with_query(path, &[]).await
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, Error> {
        let response = self
            .send(Method::GET, path, query, None, Access::Authenticated)
            .await?;
        read_json(response).await
    }

    /// Fetches JSON and maps `404` to `None`.
    ///
    /// # Errors
    /// Returns transport, non-404 HTTP or decoding errors.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, Error> {
        let response = self
            .send(Method::GET, path, &[], None, Access::Authenticated)
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        read_json(response).await.map(Some)
    }

    /// # Errors
    /// Returns serialization, transport, HTTP or decoding errors.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let body = encode(body)?;
        let response = self
            .send(Method::POST, path, &[], Some(&body), Access::Authenticated)
            .await?;
        read_json(response).await
    }

    /// Posts JSON and expects an empty (or ignored) response body.
    ///
    /// # Errors
    /// Returns serialization, transport or HTTP errors.
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), Error> {
        let body = encode(body)?;
        let response = self
            .send(Method::POST, path, &[], Some(&body), Access::Authenticated)
            .await?;
        read_empty(response).await
    }

    /// Posts JSON without the bearer token and without refresh handling.
    ///
    /// # Errors
    /// Returns serialization, transport, HTTP or decoding errors.
    pub async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let body = encode(body)?;
        let response = self
            .send(Method::POST, path, &[], Some(&body), Access::Public)
            .await?;
        read_json(response).await
    }

    /// # Errors
    /// Returns serialization, transport, HTTP or decoding errors.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let body = encode(body)?;
        let response = self
            .send(Method::PUT, path, &[], Some(&body), Access::Authenticated)
            .await?;
        read_json(response).await
    }

    /// # Errors
    /// Returns transport or HTTP errors.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let response = self
            .send(Method::DELETE, path, &[], None, Access::Authenticated)
            .await?;
        read_empty(response).await
    }

    /// Exchanges the stored refresh token for a new pair and persists it.
    ///
    /// # Errors
    /// Returns `Error::Unauthorized` when no (non-empty) refresh token is stored,
    /// otherwise the refresh endpoint's error.
    pub async fn refresh(&self) -> Result<TokenPair, Error> {
        let stored = self.inner.tokens.load().ok_or(Error::Unauthorized)?;
        if stored.refresh_token.expose_secret().is_empty() {
            return Err(Error::Unauthorized);
        }
        let _guard = self.inner.refresh_lock.lock().await;
        self.refresh_with(&stored.refresh_token).await
    }

    /// Sends a request; an authenticated `401` triggers one refresh and one retry.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        access: Access,
    ) -> Result<Response, Error> {
        let span = info_span!("api.request", http.method = %method, path = %path);

        async move {
            let stored = match access {
                Access::Authenticated => self.inner.tokens.load(),
                Access::Public => None,
            };
            let bearer = stored.as_ref().map(|tokens| &tokens.access_token);
            let response = self
                .dispatch(method.clone(), path, query, body, bearer)
                .await?;

            if response.status() != StatusCode::UNAUTHORIZED {
                return Ok(response);
            }
            let Some(stored) = stored else {
                return Ok(response);
            };

            // Access-token-only sessions (CLI `--token`) have nothing to refresh with.
            if stored.refresh_token.expose_secret().is_empty() {
                debug!("access token rejected and no refresh token stored");
                self.clear_if_current(&stored.access_token);
                return Err(Error::Unauthorized);
            }

            debug!("access token rejected, refreshing session");
            let refreshed = self.renew_session(&stored).await?;

            let retry = self
                .dispatch(method, path, query, body, Some(&refreshed.access_token))
                .await?;
            if retry.status() == StatusCode::UNAUTHORIZED {
                warn!("request still unauthorized after refresh");
                self.clear_if_current(&refreshed.access_token);
                return Err(Error::Unauthorized);
            }
            Ok(retry)
        }
        .instrument(span)
        .await
    }

    /// Returns a usable pair after `rejected` got a 401, refreshing at most once
    /// per rejected access token across concurrent requests.
    async fn renew_session(&self, rejected: &TokenPair) -> Result<TokenPair, Error> {
        let _guard = self.inner.refresh_lock.lock().await;

        let Some(current) = self.inner.tokens.load() else {
            return Err(Error::Unauthorized);
        };
        if current.access_token.expose_secret() != rejected.access_token.expose_secret() {
            debug!("session already refreshed by a concurrent request");
            return Ok(current);
        }

        match self.refresh_with(&rejected.refresh_token).await {
            Ok(tokens) => Ok(tokens),
            Err(err) => {
                warn!("session refresh failed: {err}");
                self.clear_if_current(&rejected.access_token);
                Err(Error::Unauthorized)
            }
        }
    }

    /// Clears the store only while it still holds `access_token`, so a failed
    /// request never discards a session another request just established.
    fn clear_if_current(&self, access_token: &SecretString) {
        let still_current = self.inner.tokens.load().is_some_and(|current| {
            current.access_token.expose_secret() == access_token.expose_secret()
        });
        if still_current {
            self.inner.tokens.clear();
        }
    }

    async fn refresh_with(&self, refresh_token: &SecretString) -> Result<TokenPair, Error> {
        let body = json!({ "refresh_token": refresh_token.expose_secret() });
        let response = self
            .dispatch(Method::POST, REFRESH_PATH, &[], Some(&body), None)
            .await?;
        let refreshed: RefreshResponse = read_json(response).await?;

        // Backends that do not rotate refresh tokens only return a new access token.
        let tokens = TokenPair::new(
            refreshed.access_token,
            refreshed
                .refresh_token
                .unwrap_or_else(|| refresh_token.expose_secret().to_string()),
        );
        self.inner.tokens.save(&tokens);
        Ok(tokens)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        bearer: Option<&SecretString>,
    ) -> Result<Response, Error> {
        let url = self.inner.config.endpoint(path);
        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::ACCEPT_LANGUAGE, self.locale().as_str());

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            request = request.timeout(self.inner.config.timeout);
        }

        request.send().await.map_err(map_request_error)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, Error> {
    serde_json::to_value(body)
        .map_err(|err| Error::Serialization(format!("Failed to encode request: {err}")))
}

/// Maps transport errors into user-facing variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        Error::Config(format!("Failed to build request: {err}"))
    } else {
        Error::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| Error::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(read_error(response).await)
    }
}

async fn read_empty(response: Response) -> Result<(), Error> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(read_error(response).await)
    }
}

async fn read_error(response: Response) -> Error {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return Error::Unauthorized;
    }
    let body = response.text().await.unwrap_or_default();
    error::from_status_and_body(status.as_u16(), &body)
}
