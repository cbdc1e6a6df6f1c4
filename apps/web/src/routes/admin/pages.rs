use super::crud::{
    AdminTable, CrudState, EditorPanel, MessageRow, NewButton, RowActions, SearchBox,
};
use crate::app_lib::{client, theme::Theme};
use crate::components::{Checkbox, LoadError, PageHeader, Pager, TextArea, TextField};
use crate::features::forms::FormStatus;
use consulta_client::{
    content::format_date,
    forms::slugify,
    resources::cms::{CmsPage, PageDraft},
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct PageForm {
    slug: RwSignal<String>,
    title: RwSignal<String>,
    content: RwSignal<String>,
    meta_description: RwSignal<String>,
    is_published: RwSignal<bool>,
}

impl PageForm {
    fn new() -> Self {
        Self {
            slug: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            meta_description: RwSignal::new(String::new()),
            is_published: RwSignal::new(false),
        }
    }

    fn fill(&self, draft: PageDraft) {
        self.slug.set(draft.slug);
        self.title.set(draft.title);
        self.content.set(draft.content);
        self.meta_description.set(draft.meta_description.unwrap_or_default());
        self.is_published.set(draft.is_published);
    }

    /// Builds the draft; a blank slug is derived from the title.
    fn draft(&self) -> PageDraft {
        let title = self.title.get_untracked().trim().to_string();
        let slug = self.slug.get_untracked().trim().to_string();
        let meta = self.meta_description.get_untracked().trim().to_string();
        PageDraft {
            slug: if slug.is_empty() { slugify(&title) } else { slug },
            title,
            content: self.content.get_untracked(),
            meta_description: Some(meta).filter(|m| !m.is_empty()),
            is_published: self.is_published.get_untracked(),
        }
    }
}

const HEADERS: &[&str] = &["Title", "Slug", "Status", "Updated"];

#[component]
pub fn AdminPagesPage() -> impl IntoView {
    let state = CrudState::new();
    let form = PageForm::new();
    let pages = LocalResource::new(move || {
        let request = state.track();
        async move { client()?.pages().list(&request).await }
    });

    let on_submit = Callback::new(move |()| {
        let draft = form.draft();
        if !state.form.check(&draft) {
            return;
        }
        let id = state.editing_id();
        state.submit(async move {
            let api = client()?;
            match id {
                Some(id) => api.pages().update(&id, &draft).await.map(|_| ()),
                None => api.pages().create(&draft).await.map(|_| ()),
            }
        });
    });

    let row = move |page: CmsPage| {
        let id = page.id.clone();
        let draft = PageDraft::from(&page);
        let on_edit = Callback::new(move |()| {
            form.fill(draft.clone());
            state.open_edit(id.clone());
        });
        let id = page.id.clone();
        let on_delete = Callback::new(move |()| {
            let id = id.clone();
            state.delete(async move { client()?.pages().delete(&id).await });
        });
        view! {
            <tr class=Theme::ROW>
                <td class=Theme::TD>{page.title}</td>
                <td class=Theme::TD><code>{page.slug}</code></td>
                <td class=Theme::TD>
                    <span class=Theme::BADGE>
                        {if page.is_published { "Published" } else { "Draft" }}
                    </span>
                </td>
                <td class=Theme::TD>{page.updated_at.as_deref().map(format_date).unwrap_or_default()}</td>
                <RowActions on_edit=on_edit on_delete=on_delete />
            </tr>
        }
    };

    view! {
        <PageHeader title="Pages" subtitle="Content pages such as home and about.">
            <NewButton
                state=state
                label="New page"
                on_open=Callback::new(move |()| form.fill(PageDraft::default()))
            />
        </PageHeader>
        <FormStatus feedback=state.list />
        <EditorPanel state=state noun="page" on_submit=on_submit>
            <TextField label="Title" name="title" value=form.title errors=state.form.errors />
            <TextField
                label="Slug"
                name="slug"
                value=form.slug
                errors=state.form.errors
                placeholder="derived from the title when empty"
            />
            <TextField
                label="Meta description"
                name="meta_description"
                value=form.meta_description
                errors=state.form.errors
            />
            <TextArea label="Content" name="content" value=form.content errors=state.form.errors rows=12 />
            <Checkbox label="Published" name="is_published" value=form.is_published />
        </EditorPanel>
        <SearchBox state=state />
        <AdminTable headers=HEADERS>
            <Suspense fallback=|| view! { <MessageRow columns=HEADERS.len() /> }>
                {move || match pages.get() {
                    Some(Ok(list)) if list.items.is_empty() => {
                        view! { <MessageRow columns=HEADERS.len() message="No pages yet." /> }.into_any()
                    }
                    Some(Ok(list)) => list.items.into_iter().map(row).collect_view().into_any(),
                    Some(Err(err)) => {
                        view! {
                            <tr><td colspan="5" class="px-6 py-4"><LoadError error=err /></td></tr>
                        }
                            .into_any()
                    }
                    None => view! { <MessageRow columns=HEADERS.len() /> }.into_any(),
                }}
            </Suspense>
        </AdminTable>
        {move || {
            pages
                .get()
                .and_then(Result::ok)
                .map(|list| {
                    view! {
                        <Pager
                            page=list.page
                            total_pages=list.total_pages()
                            label=list.range_label()
                            on_change=state.page_callback()
                        />
                    }
                })
        }}
    }
}
