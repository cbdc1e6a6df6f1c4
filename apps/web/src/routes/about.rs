//! CMS-backed static pages. The about page renders the `about` CMS entry.

use crate::app_lib::{client, AppError};
use crate::components::{LoadError, PageHeader, RichText, Spinner};
use consulta_client::resources::cms::CmsPage;
use leptos::prelude::*;

/// Loads a published CMS page by slug; a missing page is `None`.
pub(crate) async fn cms_page(slug: &str) -> Result<Option<CmsPage>, AppError> {
    match client()?.pages().get(slug).await {
        Ok(page) if page.is_published => Ok(Some(page)),
        Ok(_) => Ok(None),
        Err(err) if err.status() == Some(404) => Ok(None),
        Err(err) => Err(err),
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let page = LocalResource::new(|| async { cms_page("about").await });

    view! {
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match page.get() {
                Some(Ok(Some(page))) => {
                    view! {
                        <article class="max-w-3xl mx-auto">
                            <PageHeader
                                title=page.title.clone()
                                subtitle=page.meta_description.clone().unwrap_or_default()
                            />
                            <RichText body=page.content />
                        </article>
                    }
                        .into_any()
                }
                Some(Ok(None)) => {
                    view! {
                        <article class="max-w-3xl mx-auto">
                            <PageHeader title="About us" />
                            <p class="text-gray-600 dark:text-gray-300">
                                "We help companies plan, build and grow their digital products."
                            </p>
                        </article>
                    }
                        .into_any()
                }
                Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                None => view! { <Spinner centered=true /> }.into_any(),
            }}
        </Suspense>
    }
}
