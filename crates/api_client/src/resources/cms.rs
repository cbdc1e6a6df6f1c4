//! CMS pages and the service catalogue.

use super::Collection;
use crate::{
    forms::{FieldErrors, Validate},
    ApiClient,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CmsPage {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDraft {
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub is_published: bool,
}

impl From<&CmsPage> for PageDraft {
    fn from(page: &CmsPage) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            content: page.content.clone(),
            meta_description: page.meta_description.clone(),
            is_published: page.is_published,
        }
    }
}

impl Validate for PageDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.slug("slug", &self.slug);
        errors.require("title", &self.title);
        errors.max_len("title", &self.title, 200);
        errors.require("content", &self.content);
        if let Some(meta) = &self.meta_description {
            errors.max_len("meta_description", meta, 160);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_from: Option<f64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub slug: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_active: bool,
}

impl From<&Service> for ServiceDraft {
    fn from(service: &Service) -> Self {
        Self {
            slug: service.slug.clone(),
            name: service.name.clone(),
            summary: service.summary.clone(),
            description: service.description.clone(),
            price_from: service.price_from,
            icon: service.icon.clone(),
            is_active: service.is_active,
        }
    }
}

impl Validate for ServiceDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.slug("slug", &self.slug);
        errors.require("name", &self.name);
        errors.require("summary", &self.summary);
        errors.max_len("summary", &self.summary, 300);
        if let Some(price) = self.price_from {
            errors.check(
                "price_from",
                price.is_finite() && price >= 0.0,
                "Price must be zero or more.",
            );
        }
        errors.into_result()
    }
}

impl ApiClient {
    #[must_use]
    pub fn pages(&self) -> Collection<'_, CmsPage, PageDraft> {
        Collection::new(self, "/cms/pages")
    }

    #[must_use]
    pub fn services(&self) -> Collection<'_, Service, ServiceDraft> {
        Collection::new(self, "/services")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_draft_validation() {
        let draft = PageDraft {
            slug: "About Us".to_string(),
            title: String::new(),
            content: "Body".to_string(),
            meta_description: Some("m".repeat(161)),
            is_published: true,
        };
        let Err(errors) = draft.validate() else {
            panic!("expected errors");
        };
        assert!(errors.get("slug").is_some());
        assert!(errors.get("title").is_some());
        assert!(errors.get("meta_description").is_some());
        assert!(errors.get("content").is_none());
    }

    #[test]
    fn service_price_must_not_be_negative() {
        let draft = ServiceDraft {
            slug: "seo-audit".to_string(),
            name: "SEO audit".to_string(),
            summary: "Find what holds your rankings back.".to_string(),
            price_from: Some(-1.0),
            is_active: true,
            ..ServiceDraft::default()
        };
        let Err(errors) = draft.validate() else {
            panic!("expected errors");
        };
        assert_eq!(errors.get("price_from"), Some("Price must be zero or more."));

        let valid = ServiceDraft {
            price_from: Some(0.0),
            ..draft
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn service_defaults_missing_fields() -> Result<(), serde_json::Error> {
        let service: Service =
            serde_json::from_str(r#"{"id":"1","slug":"ppc","name":"Paid search"}"#)?;
        assert!(service.is_active);
        assert_eq!(service.price_from, None);
        assert_eq!(ServiceDraft::from(&service).name, "Paid search");
        Ok(())
    }
}
