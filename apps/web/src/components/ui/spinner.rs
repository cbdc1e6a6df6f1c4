use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] centered: bool) -> impl IntoView {
    let wrapper = if centered {
        "flex justify-center items-center py-12"
    } else {
        "inline-flex"
    };

    view! {
        <div class=wrapper>
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label="Loading"
            ></div>
        </div>
    }
}
