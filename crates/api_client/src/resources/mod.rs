//! Typed endpoint groups. Entities mirror backend response shapes; drafts carry
//! only what a form submits and are validated before any request is sent.

pub mod analytics;
pub mod blog;
pub mod chat;
pub mod cms;
pub mod contact;
pub mod invoices;
pub mod orders;
pub mod use_cases;
pub mod users;

use crate::{
    forms::Validate,
    pagination::{PageRequest, Paginated},
    ApiClient, Error,
};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;

/// CRUD endpoints rooted at `path`: `GET path`, `GET path/{key}`, `POST path`,
/// `PUT path/{id}`, `DELETE path/{id}`.
pub struct Collection<'a, T, D> {
    client: &'a ApiClient,
    path: &'static str,
    _types: PhantomData<fn() -> (T, D)>,
}

impl<'a, T, D> Collection<'a, T, D>
where
    T: DeserializeOwned,
    D: Serialize + Validate,
{
    pub(crate) fn new(client: &'a ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _types: PhantomData,
        }
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn list(&self, page: &PageRequest) -> Result<Paginated<T>, Error> {
        self.list_filtered(page, &[]).await
    }

    /// Lists with extra query filters; blank filter values are dropped.
    ///
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn list_filtered(
        &self,
        page: &PageRequest,
        filters: &[(&str, &str)],
    ) -> Result<Paginated<T>, Error> {
        let mut query = page.to_query();
        query.extend(
            filters
                .iter()
                .filter(|(_, value)| !value.trim().is_empty())
                .map(|(name, value)| ((*name).to_string(), value.trim().to_string())),
        );
        self.client.get_with_query(self.path, &query).await
    }

    /// Fetches one item by slug or id.
    ///
    /// # Errors
    /// Returns `Error::Config` for a blank key, otherwise transport, HTTP or decoding errors.
    pub async fn get(&self, key: &str) -> Result<T, Error> {
        let path = self.item_path(key)?;
        self.client.get(&path).await
    }

    /// # Errors
    /// Returns `Error::Validation` for an invalid draft, otherwise the backend's error.
    pub async fn create(&self, draft: &D) -> Result<T, Error> {
        draft.validate()?;
        self.client.post(self.path, draft).await
    }

    /// # Errors
    /// Returns `Error::Validation` for an invalid draft, otherwise the backend's error.
    pub async fn update(&self, id: &str, draft: &D) -> Result<T, Error> {
        draft.validate()?;
        let path = self.item_path(id)?;
        self.client.put(&path, draft).await
    }

    /// # Errors
    /// Returns `Error::Config` for a blank id, otherwise transport or HTTP errors.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let path = self.item_path(id)?;
        self.client.delete(&path).await
    }

    fn item_path(&self, key: &str) -> Result<String, Error> {
        Ok(format!("{}/{}", self.path, path_segment(key)?))
    }
}

/// Percent-encodes a single path segment after trimming it.
pub(crate) fn path_segment(value: &str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("An identifier is required.".to_string()));
    }
    Ok(url::form_urlencoded::byte_serialize(trimmed.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_encodes_and_rejects_blank() {
        assert_eq!(path_segment(" seo-audit ").ok().as_deref(), Some("seo-audit"));
        assert_eq!(path_segment("a/b c").ok().as_deref(), Some("a%2Fb%20c"));
        assert!(matches!(path_segment("  "), Err(Error::Config(_))));
    }
}
