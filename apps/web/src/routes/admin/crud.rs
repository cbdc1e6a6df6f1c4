//! Shared list + editor pattern for back office screens. Each screen owns its
//! form signals and table rows; this module owns paging, the editor lifecycle
//! and submit/delete feedback.

use crate::app_lib::{theme::Theme, AppError};
use crate::components::{Button, ConfirmDelete, Spinner};
use crate::features::forms::{FormFeedback, FormStatus};
use consulta_client::PageRequest;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use std::future::Future;

pub(crate) const ADMIN_PAGE_SIZE: u32 = 20;

#[derive(Clone, Copy)]
pub(crate) struct CrudState {
    pub request: RwSignal<PageRequest>,
    /// Bumped after every write so list resources refetch.
    pub version: RwSignal<u32>,
    /// `None`: editor closed. `Some(None)`: creating. `Some(Some(id))`: editing `id`.
    pub editing: RwSignal<Option<Option<String>>>,
    pub saving: RwSignal<bool>,
    pub form: FormFeedback,
    pub list: FormFeedback,
}

impl CrudState {
    pub fn new() -> Self {
        Self {
            request: RwSignal::new(PageRequest::new(1, ADMIN_PAGE_SIZE)),
            version: RwSignal::new(0),
            editing: RwSignal::new(None),
            saving: RwSignal::new(false),
            form: FormFeedback::new(),
            list: FormFeedback::new(),
        }
    }

    /// Tracks paging and writes; call inside a resource fetcher.
    pub fn track(&self) -> PageRequest {
        self.version.track();
        self.request.get()
    }

    pub fn page_callback(&self) -> Callback<u32> {
        let request = self.request;
        Callback::new(move |page: u32| request.update(|r| r.page = page))
    }

    pub fn search(&self, term: String) {
        self.request
            .update(|r| *r = PageRequest::new(1, r.per_page).with_search(&term));
    }

    pub fn open_new(&self) {
        self.form.reset();
        self.editing.set(Some(None));
    }

    pub fn open_edit(&self, id: String) {
        self.form.reset();
        self.editing.set(Some(Some(id)));
    }

    pub fn close(&self) {
        self.editing.set(None);
        self.form.reset();
    }

    /// Id of the entity being edited, `None` when creating.
    pub fn editing_id(&self) -> Option<String> {
        self.editing.get_untracked().flatten()
    }

    fn reload(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    /// Runs a create/update call; success closes the editor and reloads the list.
    pub fn submit<Fut>(&self, call: Fut)
    where
        Fut: Future<Output = Result<(), AppError>> + 'static,
    {
        let state = *self;
        state.saving.set(true);
        spawn_local(async move {
            let result = call.await;
            state.saving.set(false);
            match result {
                Ok(()) => {
                    state.close();
                    state.list.succeed("Saved.");
                    state.reload();
                }
                Err(err) => state.form.fail(err),
            }
        });
    }

    pub fn delete<Fut>(&self, call: Fut)
    where
        Fut: Future<Output = Result<(), AppError>> + 'static,
    {
        let state = *self;
        spawn_local(async move {
            match call.await {
                Ok(()) => {
                    state.list.succeed("Deleted.");
                    state.reload();
                }
                Err(err) => {
                    state.list.reset();
                    state.list.fail(err);
                }
            }
        });
    }
}

/// Header button opening an empty editor. `on_open` resets the screen's form signals.
#[component]
pub(crate) fn NewButton(state: CrudState, label: &'static str, on_open: Callback<()>) -> impl IntoView {
    view! {
        <Button on_click=Callback::new(move |()| {
            on_open.run(());
            state.open_new();
        })>
            <span class="material-symbols-outlined text-base">"add"</span>
            {label}
        </Button>
    }
}

/// Search box that resets paging to the first page.
#[component]
pub(crate) fn SearchBox(state: CrudState) -> impl IntoView {
    let term = RwSignal::new(String::new());
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        state.search(term.get_untracked());
    };

    view! {
        <form class="mb-4 flex gap-2" on:submit=on_submit>
            <input
                type="search"
                class=Theme::INPUT
                placeholder="Search"
                prop:value=move || term.get()
                on:input=move |event| term.set(event_target_value(&event))
            />
            <button type="submit" class=Theme::SECONDARY_BUTTON>"Search"</button>
        </form>
    }
}

/// Editor card shown while creating or editing. `on_submit` builds and sends the draft.
#[component]
pub(crate) fn EditorPanel(
    state: CrudState,
    noun: &'static str,
    on_submit: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = move || match state.editing.get() {
        Some(Some(_)) => format!("Edit {noun}"),
        _ => format!("New {noun}"),
    };

    view! {
        <Show when=move || state.editing.with(Option::is_some)>
            <form
                class=format!("{} mb-8", Theme::CARD)
                novalidate
                on:submit=move |event: SubmitEvent| {
                    event.prevent_default();
                    on_submit.run(());
                }
            >
                <h2 class="mb-4 text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                {children()}
                <div class="flex items-center gap-3">
                    <Button button_type="submit" disabled=state.saving>
                        "Save"
                    </Button>
                    <button type="button" class=Theme::SECONDARY_BUTTON on:click=move |_| state.close()>
                        "Cancel"
                    </button>
                    <Show when=move || state.saving.get()>
                        <Spinner />
                    </Show>
                </div>
                <FormStatus feedback=state.form />
            </form>
        </Show>
    }
}

/// Table shell with a header row; rows come from `children`.
#[component]
pub(crate) fn AdminTable(headers: &'static [&'static str], children: Children) -> impl IntoView {
    view! {
        <div class=Theme::TABLE_WRAPPER>
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        {headers
                            .iter()
                            .map(|header| view! { <th scope="col" class=Theme::TH>{*header}</th> })
                            .collect_view()}
                        <th scope="col" class=Theme::TH>
                            <span class="sr-only">"Actions"</span>
                        </th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">{children()}</tbody>
            </table>
        </div>
    }
}

/// Edit and delete controls for one table row.
#[component]
pub(crate) fn RowActions(on_edit: Callback<()>, on_delete: Callback<()>) -> impl IntoView {
    view! {
        <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
            <span class="inline-flex items-center gap-4">
                <button type="button" class=Theme::LINK on:click=move |_| on_edit.run(())>
                    "Edit"
                </button>
                <ConfirmDelete on_confirm=on_delete />
            </span>
        </td>
    }
}

/// Placeholder row spanning the table while loading or when empty.
#[component]
pub(crate) fn MessageRow(columns: usize, #[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <tr>
            <td colspan=(columns + 1).to_string() class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                {match message {
                    Some(message) => message.into_any(),
                    None => view! { <Spinner /> }.into_any(),
                }}
            </td>
        </tr>
    }
}
