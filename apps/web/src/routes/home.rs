use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, RichText, Spinner};
use crate::routes::{about::cms_page, paths};
use consulta_client::{content::excerpt, PageRequest};
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURED_COUNT: u32 = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let intro = LocalResource::new(|| async { cms_page("home").await });
    let services = LocalResource::new(|| async {
        client()?
            .services()
            .list(&PageRequest::new(1, FEATURED_COUNT))
            .await
    });
    let use_cases = LocalResource::new(|| async { client()?.featured_use_cases(FEATURED_COUNT).await });

    view! {
        <div class="space-y-16">
            <section class="text-center space-y-6 py-8">
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || match intro.get() {
                        Some(Ok(Some(page))) => {
                            view! {
                                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{page.title}</h1>
                                <div class="max-w-2xl mx-auto"><RichText body=page.content /></div>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                        _ => {
                            view! {
                                <h1 class="text-4xl font-bold text-gray-900 dark:text-white">
                                    "Strategy, design and engineering for growing teams"
                                </h1>
                            }
                                .into_any()
                        }
                    }}
                </Suspense>
                <div class="flex justify-center gap-4">
                    <A
                        href=paths::CONTACT
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                    >
                        "Talk to us"
                    </A>
                    <A href=paths::SERVICES {..} class=Theme::SECONDARY_BUTTON>
                        "Our services"
                    </A>
                </div>
            </section>

            <section>
                <h2 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">"Services"</h2>
                <Suspense fallback=|| view! { <Spinner centered=true /> }>
                    {move || match services.get() {
                        Some(Ok(page)) => {
                            view! {
                                <div class="grid gap-6 md:grid-cols-3">
                                    {page
                                        .items
                                        .into_iter()
                                        .map(|service| {
                                            view! {
                                                <A href=paths::service_detail(&service.slug) {..} class=Theme::CARD>
                                                    <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                                                        {service.name}
                                                    </h3>
                                                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                                        {excerpt(&service.summary, 140)}
                                                    </p>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                        None => view! { <Spinner centered=true /> }.into_any(),
                    }}
                </Suspense>
            </section>

            <section>
                <h2 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">"Featured use cases"</h2>
                <Suspense fallback=|| view! { <Spinner centered=true /> }>
                    {move || match use_cases.get() {
                        Some(Ok(page)) => {
                            view! {
                                <div class="grid gap-6 md:grid-cols-3">
                                    {page
                                        .items
                                        .into_iter()
                                        .map(|case| {
                                            view! {
                                                <A href=paths::use_case_detail(&case.slug) {..} class=Theme::CARD>
                                                    <span class=Theme::BADGE>{case.industry}</span>
                                                    <h3 class="mt-3 text-lg font-semibold text-gray-900 dark:text-white">
                                                        {case.title}
                                                    </h3>
                                                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                                        {excerpt(&case.results, 140)}
                                                    </p>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                        None => view! { <Spinner centered=true /> }.into_any(),
                    }}
                </Suspense>
            </section>
        </div>
    }
}
