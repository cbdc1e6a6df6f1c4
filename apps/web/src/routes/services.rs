use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, PageHeader, Pager, RichText, Spinner};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use consulta_client::{content::format_money, PageRequest};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let request = RwSignal::new(PageRequest::default());
    let services = LocalResource::new(move || {
        let request = request.get();
        async move { client()?.services().list(&request).await }
    });
    let on_page = Callback::new(move |page: u32| request.update(|r| r.page = page));

    view! {
        <PageHeader title="Services" subtitle="What we can do for your team." />
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match services.get() {
                Some(Ok(page)) if page.items.is_empty() => {
                    view! { <p class="text-gray-500 dark:text-gray-400">"No services published yet."</p> }
                        .into_any()
                }
                Some(Ok(page)) => {
                    let (current, total, label) = (page.page, page.total_pages(), page.range_label());
                    view! {
                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                            {page
                                .items
                                .into_iter()
                                .filter(|service| service.is_active)
                                .map(|service| {
                                    let price = service
                                        .price_from
                                        .map(|amount| format!("From {}", format_money(amount, "USD")));
                                    view! {
                                        <A href=paths::service_detail(&service.slug) {..} class=Theme::CARD>
                                            {service
                                                .icon
                                                .map(|icon| {
                                                    view! {
                                                        <span class="material-symbols-outlined text-3xl text-blue-600">
                                                            {icon}
                                                        </span>
                                                    }
                                                })}
                                            <h2 class="mt-2 text-lg font-semibold text-gray-900 dark:text-white">
                                                {service.name}
                                            </h2>
                                            <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">{service.summary}</p>
                                            {price.map(|price| view! { <p class="mt-3 text-sm font-medium">{price}</p> })}
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
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let auth = use_auth();
    let service = LocalResource::new(move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        async move { client()?.services().get(&slug).await }
    });

    view! {
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match service.get() {
                Some(Ok(service)) => {
                    let order_link = paths::order_service(&service.id);
                    view! {
                        <article class="max-w-3xl mx-auto space-y-6">
                            <A href=paths::SERVICES {..} class=Theme::LINK>"← All services"</A>
                            <PageHeader title=service.name.clone() subtitle=service.summary.clone() />
                            {service
                                .price_from
                                .map(|amount| {
                                    view! {
                                        <p class="text-lg font-medium text-gray-900 dark:text-white">
                                            {format!("From {}", format_money(amount, "USD"))}
                                        </p>
                                    }
                                })}
                            <RichText body=service.description />
                            <Show
                                when=move || auth.is_authenticated.get()
                                fallback=|| {
                                    view! {
                                        <A href=paths::LOGIN {..} class=Theme::SECONDARY_BUTTON>
                                            "Sign in to order this service"
                                        </A>
                                    }
                                }
                            >
                                <A
                                    href=order_link.clone()
                                    {..}
                                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                                >
                                    "Order this service"
                                </A>
                            </Show>
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
