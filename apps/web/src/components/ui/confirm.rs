use crate::app_lib::theme::Theme;
use leptos::prelude::*;

/// Two-step delete control: the first click asks for confirmation, the second
/// runs `on_confirm`.
#[component]
pub fn ConfirmDelete(
    on_confirm: Callback<()>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let asking = RwSignal::new(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                view! {
                    <button
                        type="button"
                        class="text-red-600 hover:text-red-800 dark:text-red-400 dark:hover:text-red-300"
                        disabled=move || disabled.get()
                        on:click=move |_| asking.set(true)
                    >
                        "Delete"
                    </button>
                }
            }
        >
            <span class="inline-flex items-center gap-2">
                <span class="text-xs text-gray-500 dark:text-gray-400">"Delete permanently?"</span>
                <button
                    type="button"
                    class=Theme::DANGER_BUTTON
                    on:click=move |_| {
                        asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class=Theme::SECONDARY_BUTTON
                    on:click=move |_| asking.set(false)
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
