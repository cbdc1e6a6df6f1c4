use super::crud::{AdminTable, CrudState, EditorPanel, MessageRow, NewButton, RowActions};
use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, PageHeader, Pager, TextArea, TextField};
use crate::features::forms::FormStatus;
use consulta_client::{
    forms::slugify,
    resources::blog::{BlogCategory, BlogCategoryDraft},
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct CategoryForm {
    slug: RwSignal<String>,
    name: RwSignal<String>,
    description: RwSignal<String>,
}

impl CategoryForm {
    fn new() -> Self {
        Self {
            slug: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, draft: BlogCategoryDraft) {
        self.slug.set(draft.slug);
        self.name.set(draft.name);
        self.description.set(draft.description.unwrap_or_default());
    }

    fn draft(&self) -> BlogCategoryDraft {
        let name = self.name.get_untracked().trim().to_string();
        let slug = self.slug.get_untracked().trim().to_string();
        let description = self.description.get_untracked().trim().to_string();
        BlogCategoryDraft {
            slug: if slug.is_empty() { slugify(&name) } else { slug },
            name,
            description: Some(description).filter(|d| !d.is_empty()),
        }
    }
}

const HEADERS: &[&str] = &["Name", "Slug", "Description"];

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let state = CrudState::new();
    let form = CategoryForm::new();
    let categories = LocalResource::new(move || {
        let request = state.track();
        async move { client()?.blog_categories().list(&request).await }
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
                Some(id) => api.blog_categories().update(&id, &draft).await.map(|_| ()),
                None => api.blog_categories().create(&draft).await.map(|_| ()),
            }
        });
    });

    let row = move |category: BlogCategory| {
        let id = category.id.clone();
        let draft = BlogCategoryDraft::from(&category);
        let on_edit = Callback::new(move |()| {
            form.fill(draft.clone());
            state.open_edit(id.clone());
        });
        let id = category.id.clone();
        let on_delete = Callback::new(move |()| {
            let id = id.clone();
            state.delete(async move { client()?.blog_categories().delete(&id).await });
        });
        view! {
            <tr class=Theme::ROW>
                <td class=Theme::TD>{category.name}</td>
                <td class=Theme::TD><code>{category.slug}</code></td>
                <td class=Theme::TD>{category.description.unwrap_or_default()}</td>
                <RowActions on_edit=on_edit on_delete=on_delete />
            </tr>
        }
    };

    view! {
        <PageHeader title="Blog categories">
            <NewButton
                state=state
                label="New category"
                on_open=Callback::new(move |()| form.fill(BlogCategoryDraft::default()))
            />
        </PageHeader>
        <FormStatus feedback=state.list />
        <EditorPanel state=state noun="category" on_submit=on_submit>
            <TextField label="Name" name="name" value=form.name errors=state.form.errors />
            <TextField
                label="Slug"
                name="slug"
                value=form.slug
                errors=state.form.errors
                placeholder="derived from the name when empty"
            />
            <TextArea
                label="Description"
                name="description"
                value=form.description
                errors=state.form.errors
                rows=3
            />
        </EditorPanel>
        <AdminTable headers=HEADERS>
            <Suspense fallback=|| view! { <MessageRow columns=HEADERS.len() /> }>
                {move || match categories.get() {
                    Some(Ok(list)) if list.items.is_empty() => {
                        view! { <MessageRow columns=HEADERS.len() message="No categories yet." /> }
                            .into_any()
                    }
                    Some(Ok(list)) => list.items.into_iter().map(row).collect_view().into_any(),
                    Some(Err(err)) => {
                        view! {
                            <tr><td colspan="4" class="px-6 py-4"><LoadError error=err /></td></tr>
                        }
                            .into_any()
                    }
                    None => view! { <MessageRow columns=HEADERS.len() /> }.into_any(),
                }}
            </Suspense>
        </AdminTable>
        {move || {
            categories
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
