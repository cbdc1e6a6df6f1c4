//! API client construction for routes and features. Tokens persist in
//! `localStorage` so a reload keeps the session. One client is shared by the
//! whole app so concurrent `401`s coalesce into a single refresh.

use super::{config, errors::AppError};
use consulta_client::{ApiClient, TokenPair, TokenStore};
use std::{cell::RefCell, sync::Arc};

/// `localStorage` key holding the serialized token pair.
const TOKEN_STORAGE_KEY: &str = "consulta_session";

thread_local! {
    static CLIENT: RefCell<Option<ApiClient>> = const { RefCell::new(None) };
}

/// Returns the app-wide API client bound to the browser token store.
pub fn client() -> Result<ApiClient, AppError> {
    CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }
        let client = ApiClient::new(config::load(), Arc::new(LocalStorageTokenStore))?;
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}

/// Token store backed by `window.localStorage`. Storage failures (private mode,
/// disabled storage) degrade to an anonymous session.
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<TokenPair> {
        let value = Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        TokenPair::from_storage_string(&value)
    }

    fn save(&self, tokens: &TokenPair) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, &tokens.to_storage_string());
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
