//! Read-only traffic summary with a range selector, headline numbers, a daily
//! page-view bar chart and the most viewed pages.

use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, PageHeader, Spinner};
use consulta_client::resources::analytics::{AnalyticsRange, AnalyticsSummary};
use leptos::prelude::*;

#[component]
pub fn AdminAnalyticsPage() -> impl IntoView {
    let range = RwSignal::new(AnalyticsRange::default());
    let summary = LocalResource::new(move || {
        let range = range.get();
        async move { client()?.analytics_summary(range).await }
    });

    view! {
        <PageHeader title="Analytics">
            <div class="inline-flex rounded-lg border border-gray-200 dark:border-gray-700" role="group">
                {AnalyticsRange::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                class="px-4 py-2 text-sm font-medium first:rounded-l-lg last:rounded-r-lg"
                                class:bg-blue-700=move || range.get() == option
                                class:text-white=move || range.get() == option
                                class:text-gray-700=move || range.get() != option
                                class:dark:text-gray-300=move || range.get() != option
                                on:click=move |_| range.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </PageHeader>
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match summary.get() {
                Some(Ok(summary)) => view! { <SummaryView summary=summary /> }.into_any(),
                Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                None => view! { <Spinner centered=true /> }.into_any(),
            }}
        </Suspense>
    }
}

#[component]
fn SummaryView(summary: AnalyticsSummary) -> impl IntoView {
    let stats = [
        ("Visitors", summary.visitors.to_string()),
        ("Page views", summary.page_views.to_string()),
        ("Leads", summary.leads.to_string()),
        ("Conversion", summary.conversion_percent()),
    ];
    let bars = summary.daily_bar_heights();

    view! {
        <div class="space-y-8">
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {stats
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class=Theme::CARD>
                                <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
                                <p class="mt-2 text-3xl font-semibold text-gray-900 dark:text-white">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class=Theme::CARD>
                <h2 class="mb-4 text-lg font-semibold text-gray-900 dark:text-white">"Daily page views"</h2>
                {if bars.is_empty() {
                    view! { <p class="text-sm text-gray-500 dark:text-gray-400">"No traffic recorded."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="flex h-48 items-end gap-1">
                            {bars
                                .into_iter()
                                .map(|(date, height)| {
                                    view! {
                                        <div
                                            class="flex-1 rounded-t bg-blue-500 dark:bg-blue-400"
                                            style=format!("height: {}%", height.max(1))
                                            title=date
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>

            <div class=Theme::TABLE_WRAPPER>
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class=Theme::TH>"Page"</th>
                            <th scope="col" class=Theme::TH>"Views"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        {summary
                            .top_pages
                            .into_iter()
                            .map(|page| {
                                view! {
                                    <tr class=Theme::ROW>
                                        <td class=Theme::TD><code>{page.path}</code></td>
                                        <td class=Theme::TD>{page.views}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
