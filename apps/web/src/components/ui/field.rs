//! Form inputs bound to `RwSignal`s with inline field errors. Error messages
//! come from client-side validation or a server `422` mapped into
//! [`FieldErrors`].

use crate::app_lib::theme::Theme;
use consulta_client::FieldErrors;
use leptos::prelude::*;

fn field_error(errors: Signal<FieldErrors>, name: &'static str) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors.get(name).map(|message| {
                view! {
                    <p class="mt-1 text-sm text-red-600 dark:text-red-400">{message.to_string()}</p>
                }
            })
        })
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let invalid = move || errors.with(|errors| errors.get(name).is_some());

    view! {
        <div class="mb-5">
            <label class=Theme::LABEL for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type.unwrap_or("text")
                class=Theme::INPUT
                class:border-red-500=invalid
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or_default()
                aria-invalid=move || invalid().to_string()
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {field_error(errors, name)}
        </div>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let invalid = move || errors.with(|errors| errors.get(name).is_some());

    view! {
        <div class="mb-5">
            <label class=Theme::LABEL for=name>{label}</label>
            <textarea
                id=name
                name=name
                rows=rows.unwrap_or(4)
                class=Theme::INPUT
                class:border-red-500=invalid
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            ></textarea>
            {field_error(errors, name)}
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    /// `(value, label)` pairs.
    options: Vec<(String, String)>,
    #[prop(into)] errors: Signal<FieldErrors>,
) -> impl IntoView {
    view! {
        <div class="mb-5">
            <label class=Theme::LABEL for=name>{label}</label>
            <select
                id=name
                name=name
                class=Theme::INPUT
                prop:value=move || value.get()
                on:change=move |event| value.set(event_target_value(&event))
            >
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        let selected = option.clone();
                        view! {
                            <option value=option selected=move || value.get() == selected>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {field_error(errors, name)}
        </div>
    }
}

#[component]
pub fn Checkbox(label: &'static str, name: &'static str, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="mb-5 flex items-center gap-2">
            <input
                id=name
                name=name
                type="checkbox"
                class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500 dark:border-gray-600 dark:bg-gray-700"
                prop:checked=move || value.get()
                on:change=move |event| value.set(event_target_checked(&event))
            />
            <label class="text-sm font-medium text-gray-900 dark:text-white" for=name>
                {label}
            </label>
        </div>
    }
}
