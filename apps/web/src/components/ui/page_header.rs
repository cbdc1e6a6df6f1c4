use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="mb-6 flex flex-wrap items-center justify-between gap-4">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
                {subtitle
                    .map(|text| {
                        view! { <p class="text-sm text-gray-500 dark:text-gray-400">{text}</p> }
                    })}
            </div>
            {children.map(|children| view! { <div class="flex items-center gap-2">{children()}</div> })}
        </div>
    }
}
