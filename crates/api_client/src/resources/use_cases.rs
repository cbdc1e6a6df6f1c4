//! Client success stories.

use super::Collection;
use crate::{
    forms::{FieldErrors, Validate},
    pagination::{PageRequest, Paginated},
    ApiClient, Error,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub results: String,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UseCaseDraft {
    pub slug: String,
    pub title: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub is_featured: bool,
}

impl From<&UseCase> for UseCaseDraft {
    fn from(use_case: &UseCase) -> Self {
        Self {
            slug: use_case.slug.clone(),
            title: use_case.title.clone(),
            industry: use_case.industry.clone(),
            challenge: use_case.challenge.clone(),
            solution: use_case.solution.clone(),
            results: use_case.results.clone(),
            is_featured: use_case.is_featured,
        }
    }
}

impl Validate for UseCaseDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.slug("slug", &self.slug);
        errors.require("title", &self.title);
        errors.require("industry", &self.industry);
        errors.require("challenge", &self.challenge);
        errors.require("solution", &self.solution);
        errors.require("results", &self.results);
        errors.into_result()
    }
}

impl ApiClient {
    #[must_use]
    pub fn use_cases(&self) -> Collection<'_, UseCase, UseCaseDraft> {
        Collection::new(self, "/use-cases")
    }

    /// Featured use cases for the home page.
    ///
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn featured_use_cases(&self, limit: u32) -> Result<Paginated<UseCase>, Error> {
        self.use_cases()
            .list_filtered(&PageRequest::new(1, limit), &[("featured", "true")])
            .await
    }
}
