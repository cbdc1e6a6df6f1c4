//! Public blog: paged post list with a category filter carried in the
//! `?category=` query, and post detail by slug.

use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, PageHeader, Pager, RichText, Spinner};
use crate::routes::paths;
use consulta_client::{content::format_date, resources::blog::PostStatus, PageRequest};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_params_map, use_query_map},
};

#[component]
pub fn BlogPage() -> impl IntoView {
    let query = use_query_map();
    let category = Memo::new(move |_| query.with(|q| q.get("category")).filter(|c| !c.is_empty()));
    let request = RwSignal::new(PageRequest::default());

    // A new category starts again from the first page.
    Effect::new(move |_| {
        category.track();
        if request.with_untracked(|r| r.page != 1) {
            request.update(|r| r.page = 1);
        }
    });

    let categories = LocalResource::new(|| async {
        client()?
            .blog_categories()
            .list(&PageRequest::new(1, 100))
            .await
    });
    let posts = LocalResource::new(move || {
        let request = request.get();
        let category = category.get();
        async move {
            client()?
                .blog_posts_in_category(&request, category.as_deref())
                .await
        }
    });
    let on_page = Callback::new(move |page: u32| request.update(|r| r.page = page));

    view! {
        <PageHeader title="Blog" subtitle="Notes on strategy, design and delivery." />
        <div class="flex flex-col gap-8 lg:flex-row">
            <div class="flex-1 min-w-0">
                <Suspense fallback=|| view! { <Spinner centered=true /> }>
                    {move || match posts.get() {
                        Some(Ok(page)) if page.items.is_empty() => {
                            view! { <p class="text-gray-500 dark:text-gray-400">"No posts found."</p> }
                                .into_any()
                        }
                        Some(Ok(page)) => {
                            let (current, total, label) = (page.page, page.total_pages(), page.range_label());
                            view! {
                                <div class="space-y-6">
                                    {page
                                        .items
                                        .into_iter()
                                        .filter(|post| post.status == PostStatus::Published)
                                        .map(|post| {
                                            let date = post.published_at.as_deref().map(format_date);
                                            view! {
                                                <A href=paths::blog_post(&post.slug) {..} class=Theme::CARD>
                                                    <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                                        {post.title}
                                                    </h2>
                                                    <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                        {date.unwrap_or_default()}
                                                        {post.author.map(|author| format!(" · {author}"))}
                                                    </p>
                                                    <p class="mt-3 text-sm text-gray-600 dark:text-gray-300">{post.excerpt}</p>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <Pager page=current total_pages=total label=label on_change=on_page />
                            }
                                .into_any()
                        }
                        Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                        None => view! { <Spinner centered=true /> }.into_any(),
                    }}
                </Suspense>
            </div>
            <aside class="lg:w-64">
                <h2 class="mb-3 text-sm font-semibold uppercase tracking-wider text-gray-500 dark:text-gray-400">
                    "Categories"
                </h2>
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        categories
                            .get()
                            .and_then(Result::ok)
                            .map(|page| {
                                view! {
                                    <ul class="space-y-2 text-sm">
                                        <li>
                                            <A href=paths::BLOG {..} class=Theme::LINK>"All posts"</A>
                                        </li>
                                        {page
                                            .items
                                            .into_iter()
                                            .map(|item| {
                                                let slug = item.slug.clone();
                                                let selected = move || category.get().as_deref() == Some(slug.as_str());
                                                view! {
                                                    <li>
                                                        <A
                                                            href=paths::blog_category(&item.slug)
                                                            {..}
                                                            class=Theme::LINK
                                                            class:font-semibold=selected
                                                        >
                                                            {item.name}
                                                        </A>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </aside>
        </div>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        async move { client()?.blog_posts().get(&slug).await }
    });

    view! {
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match post.get() {
                Some(Ok(post)) => {
                    let byline = [
                        post.author.clone(),
                        post.published_at.as_deref().map(format_date),
                    ]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" · ");
                    view! {
                        <article class="max-w-3xl mx-auto space-y-6">
                            <A href=paths::BLOG {..} class=Theme::LINK>"← All posts"</A>
                            <PageHeader title=post.title.clone() subtitle=byline />
                            <RichText body=post.content />
                            <div class="flex flex-wrap gap-2">
                                {post
                                    .tags
                                    .into_iter()
                                    .map(|tag| view! { <span class=Theme::BADGE>{tag}</span> })
                                    .collect_view()}
                            </div>
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
