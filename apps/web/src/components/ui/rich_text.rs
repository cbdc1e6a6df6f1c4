//! Server-provided bodies are rendered as escaped text paragraphs, never as raw HTML.

use crate::app_lib::theme::Theme;
use consulta_client::content::paragraphs;
use leptos::prelude::*;

#[component]
pub fn RichText(#[prop(into)] body: String) -> impl IntoView {
    view! {
        <div class=Theme::PROSE>
            {paragraphs(&body)
                .into_iter()
                .map(|paragraph| view! { <p class="whitespace-pre-line">{paragraph}</p> })
                .collect_view()}
        </div>
    }
}
