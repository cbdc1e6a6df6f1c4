use crate::app_lib::{client, theme::Theme};
use crate::components::{Checkbox, LoadError, PageHeader, Pager, RichText, Spinner};
use crate::routes::paths;
use consulta_client::{content::excerpt, PageRequest};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};

#[component]
pub fn UseCasesPage() -> impl IntoView {
    let request = RwSignal::new(PageRequest::default());
    let featured_only = RwSignal::new(false);
    let use_cases = LocalResource::new(move || {
        let request = request.get();
        let featured = if featured_only.get() { "true" } else { "" };
        async move {
            client()?
                .use_cases()
                .list_filtered(&request, &[("featured", featured)])
                .await
        }
    });
    let on_page = Callback::new(move |page: u32| request.update(|r| r.page = page));

    Effect::new(move |previous: Option<bool>| {
        let current = featured_only.get();
        if previous.is_some_and(|previous| previous != current) {
            request.update(|r| r.page = 1);
        }
        current
    });

    view! {
        <PageHeader title="Use cases" subtitle="How clients put our work to use.">
            <Checkbox label="Featured only" name="featured" value=featured_only />
        </PageHeader>
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match use_cases.get() {
                Some(Ok(page)) if page.items.is_empty() => {
                    view! { <p class="text-gray-500 dark:text-gray-400">"No use cases yet."</p> }.into_any()
                }
                Some(Ok(page)) => {
                    let (current, total, label) = (page.page, page.total_pages(), page.range_label());
                    view! {
                        <div class="grid gap-6 md:grid-cols-2">
                            {page
                                .items
                                .into_iter()
                                .map(|case| {
                                    view! {
                                        <A href=paths::use_case_detail(&case.slug) {..} class=Theme::CARD>
                                            <div class="flex items-center gap-2">
                                                <span class=Theme::BADGE>{case.industry}</span>
                                                {case
                                                    .is_featured
                                                    .then(|| view! { <span class=Theme::BADGE>"Featured"</span> })}
                                            </div>
                                            <h2 class="mt-3 text-lg font-semibold text-gray-900 dark:text-white">
                                                {case.title}
                                            </h2>
                                            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                                {excerpt(&case.challenge, 180)}
                                            </p>
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
    }
}

#[component]
pub fn UseCaseDetailPage() -> impl IntoView {
    let params = use_params_map();
    let use_case = LocalResource::new(move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        async move { client()?.use_cases().get(&slug).await }
    });

    view! {
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match use_case.get() {
                Some(Ok(case)) => {
                    view! {
                        <article class="max-w-3xl mx-auto space-y-8">
                            <A href=paths::USE_CASES {..} class=Theme::LINK>"← All use cases"</A>
                            <PageHeader title=case.title.clone() subtitle=case.industry.clone() />
                            <section>
                                <h2 class="mb-2 text-xl font-semibold text-gray-900 dark:text-white">"Challenge"</h2>
                                <RichText body=case.challenge />
                            </section>
                            <section>
                                <h2 class="mb-2 text-xl font-semibold text-gray-900 dark:text-white">"Solution"</h2>
                                <RichText body=case.solution />
                            </section>
                            <section>
                                <h2 class="mb-2 text-xl font-semibold text-gray-900 dark:text-white">"Results"</h2>
                                <RichText body=case.results />
                            </section>
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
