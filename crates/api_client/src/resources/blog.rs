//! Blog posts and categories.

use super::Collection;
use crate::{
    forms::{FieldErrors, Validate},
    pagination::{PageRequest, Paginated},
    ApiClient, Error,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub const ALL: [Self; 3] = [Self::Draft, Self::Published, Self::Archived];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDraft {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub tags: Vec<String>,
    pub status: PostStatus,
}

impl From<&BlogPost> for BlogPostDraft {
    fn from(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            category_id: post.category_id.clone(),
            tags: post.tags.clone(),
            status: post.status,
        }
    }
}

impl Validate for BlogPostDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.slug("slug", &self.slug);
        errors.require("title", &self.title);
        errors.max_len("title", &self.title, 200);
        errors.max_len("excerpt", &self.excerpt, 500);
        errors.require("content", &self.content);
        errors.check(
            "tags",
            self.tags.iter().all(|tag| !tag.trim().is_empty()),
            "Tags cannot be blank.",
        );
        errors.into_result()
    }
}

/// Splits a comma separated tag field into trimmed, de-duplicated tags.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
        if !tags.iter().any(|existing| existing.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogCategoryDraft {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&BlogCategory> for BlogCategoryDraft {
    fn from(category: &BlogCategory) -> Self {
        Self {
            slug: category.slug.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

impl Validate for BlogCategoryDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.slug("slug", &self.slug);
        errors.require("name", &self.name);
        errors.max_len("name", &self.name, 80);
        errors.into_result()
    }
}

impl ApiClient {
    #[must_use]
    pub fn blog_posts(&self) -> Collection<'_, BlogPost, BlogPostDraft> {
        Collection::new(self, "/blog/posts")
    }

    #[must_use]
    pub fn blog_categories(&self) -> Collection<'_, BlogCategory, BlogCategoryDraft> {
        Collection::new(self, "/blog/categories")
    }

    /// Lists posts, optionally restricted to a category slug.
    ///
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn blog_posts_in_category(
        &self,
        page: &PageRequest,
        category: Option<&str>,
    ) -> Result<Paginated<BlogPost>, Error> {
        self.blog_posts()
            .list_filtered(page, &[("category", category.unwrap_or_default())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_trims_and_dedupes() {
        assert_eq!(
            parse_tags(" seo, Content ,, seo ,content,ads "),
            vec!["seo".to_string(), "Content".to_string(), "ads".to_string()]
        );
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn status_parses_wire_names() {
        assert_eq!(PostStatus::parse("published"), Some(PostStatus::Published));
        assert_eq!(PostStatus::parse("Published"), None);
    }

    #[test]
    fn post_draft_requires_content() {
        let draft = BlogPostDraft {
            slug: "launch".to_string(),
            title: "Launch".to_string(),
            ..BlogPostDraft::default()
        };
        let Err(errors) = draft.validate() else {
            panic!("expected errors");
        };
        assert_eq!(errors.len(), 1);
        assert!(errors.get("content").is_some());
    }
}
