use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Previous/next pagination control. Pages are 1-based; `on_change` receives
/// the page to load.
#[component]
pub fn Pager(
    page: u32,
    total_pages: u32,
    #[prop(into)] label: String,
    on_change: Callback<u32>,
) -> impl IntoView {
    let has_previous = page > 1;
    let has_next = page < total_pages;

    view! {
        <nav class="mt-6 flex items-center justify-between" aria-label="Pagination">
            <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class=Theme::SECONDARY_BUTTON
                    disabled=!has_previous
                    on:click=move |_| on_change.run(page.saturating_sub(1).max(1))
                >
                    <span class="material-symbols-outlined text-base">"chevron_left"</span>
                    "Previous"
                </button>
                <span class="text-sm text-gray-700 dark:text-gray-300">
                    {format!("{page} / {}", total_pages.max(1))}
                </span>
                <button
                    type="button"
                    class=Theme::SECONDARY_BUTTON
                    disabled=!has_next
                    on:click=move |_| on_change.run(page + 1)
                >
                    "Next"
                    <span class="material-symbols-outlined text-base">"chevron_right"</span>
                </button>
            </div>
        </nav>
    }
}
