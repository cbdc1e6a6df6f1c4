//! Floating chat widget for public pages. The conversation id survives reloads
//! through `sessionStorage`; the history itself is reloaded from the backend.

use crate::app_lib::{client, errors};
use consulta_client::{chat::MAX_MESSAGE_CHARS, ChatRole, ChatSession};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::use_location;

const SESSION_STORAGE_KEY: &str = "consulta_chat_session";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn stored_session_id() -> Option<String> {
    session_storage()?
        .get_item(SESSION_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|id| !id.trim().is_empty())
}

fn remember_session_id(id: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SESSION_STORAGE_KEY, id);
    }
}

/// Back office and dashboard pages do not show the widget.
fn is_public_path(pathname: &str) -> bool {
    !(pathname.starts_with("/admin") || pathname.starts_with("/dashboard"))
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let location = use_location();
    let open = RwSignal::new(false);
    let restored = stored_session_id();
    let session = RwSignal::new(
        restored
            .clone()
            .map_or_else(ChatSession::new, ChatSession::with_id),
    );
    let draft = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    remember_session_id(session.with_untracked(|s| s.session_id().to_string()).as_str());

    if let Some(id) = restored {
        spawn_local(async move {
            let Ok(api) = client() else { return };
            match api.chat_history(&id).await {
                Ok(history) => session.update(|s| s.restore(history)),
                Err(err) => tracing::debug!(error = %err, "chat history unavailable"),
            }
        });
    }

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        notice.set(None);
        let locale = errors::locale();
        let text = draft.get_untracked();

        let prepared = session
            .try_update(|s| s.prepare(&text, locale))
            .unwrap_or_else(|| Err(String::new()));
        let request = match prepared {
            Ok(request) => request,
            Err(message) => {
                notice.set(Some(message).filter(|m| !m.is_empty()));
                return;
            }
        };

        draft.set(String::new());
        pending.set(true);
        spawn_local(async move {
            let result = match client() {
                Ok(api) => api.send_chat_message(&request).await,
                Err(err) => Err(err),
            };
            session.update(|s| s.apply_reply(&result, locale));
            remember_session_id(session.with_untracked(|s| s.session_id().to_string()).as_str());
            pending.set(false);
        });
    };

    view! {
        <Show when=move || is_public_path(&location.pathname.get())>
            <div class="fixed bottom-4 right-4 z-50 flex flex-col items-end gap-2">
                <Show when=move || open.get()>
                    <div class="w-80 max-h-[28rem] flex flex-col rounded-xl border border-gray-200 bg-white shadow-lg dark:border-gray-700 dark:bg-gray-800">
                        <div class="flex items-center justify-between border-b border-gray-100 px-4 py-3 dark:border-gray-700">
                            <span class="text-sm font-semibold text-gray-900 dark:text-white">
                                "Chat with us"
                            </span>
                            <button
                                type="button"
                                class="material-symbols-outlined text-gray-400 hover:text-gray-900 dark:hover:text-white"
                                aria-label="Close chat"
                                on:click=move |_| open.set(false)
                            >
                                "close"
                            </button>
                        </div>
                        <ul class="flex-1 space-y-2 overflow-y-auto px-4 py-3">
                            {move || {
                                session
                                    .with(|s| s.messages().to_vec())
                                    .into_iter()
                                    .map(|message| {
                                        let class = match message.role {
                                            ChatRole::User => {
                                                "ml-8 rounded-lg bg-blue-600 px-3 py-2 text-sm text-white"
                                            }
                                            ChatRole::Assistant => {
                                                "mr-8 rounded-lg bg-gray-100 px-3 py-2 text-sm text-gray-900 dark:bg-gray-700 dark:text-gray-100"
                                            }
                                            ChatRole::System => {
                                                "text-center text-xs text-red-600 dark:text-red-400"
                                            }
                                        };
                                        view! { <li class=class>{message.content}</li> }
                                    })
                                    .collect_view()
                            }}
                            <Show when=move || pending.get()>
                                <li class="mr-8 text-xs text-gray-400 animate-pulse">"..."</li>
                            </Show>
                        </ul>
                        {move || {
                            notice
                                .get()
                                .map(|message| {
                                    view! {
                                        <p class="px-4 text-xs text-red-600 dark:text-red-400">
                                            {message}
                                        </p>
                                    }
                                })
                        }}
                        <form class="flex gap-2 border-t border-gray-100 p-3 dark:border-gray-700" on:submit=on_submit>
                            <input
                                type="text"
                                class="flex-1 rounded-lg border border-gray-300 bg-gray-50 p-2 text-sm dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                                placeholder="Type a message"
                                maxlength=MAX_MESSAGE_CHARS.to_string()
                                prop:value=move || draft.get()
                                on:input=move |event| draft.set(event_target_value(&event))
                            />
                            <button
                                type="submit"
                                class="material-symbols-outlined rounded-lg bg-blue-700 px-3 text-white hover:bg-blue-800 disabled:opacity-60"
                                aria-label="Send"
                                disabled=move || pending.get()
                            >
                                "send"
                            </button>
                        </form>
                    </div>
                </Show>
                <button
                    type="button"
                    class="flex h-14 w-14 items-center justify-center rounded-full bg-blue-700 text-white shadow-lg hover:bg-blue-800"
                    aria-label="Open chat"
                    on:click=move |_| open.update(|value| *value = !*value)
                >
                    <span class="material-symbols-outlined">"chat"</span>
                </button>
            </div>
        </Show>
    }
}
