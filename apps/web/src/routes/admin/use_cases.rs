use super::crud::{
    AdminTable, CrudState, EditorPanel, MessageRow, NewButton, RowActions, SearchBox,
};
use crate::app_lib::{client, theme::Theme};
use crate::components::{Checkbox, LoadError, PageHeader, Pager, TextArea, TextField};
use crate::features::forms::FormStatus;
use consulta_client::{
    forms::slugify,
    resources::use_cases::{UseCase, UseCaseDraft},
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct UseCaseForm {
    slug: RwSignal<String>,
    title: RwSignal<String>,
    industry: RwSignal<String>,
    challenge: RwSignal<String>,
    solution: RwSignal<String>,
    results: RwSignal<String>,
    is_featured: RwSignal<bool>,
}

impl UseCaseForm {
    fn new() -> Self {
        Self {
            slug: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            industry: RwSignal::new(String::new()),
            challenge: RwSignal::new(String::new()),
            solution: RwSignal::new(String::new()),
            results: RwSignal::new(String::new()),
            is_featured: RwSignal::new(false),
        }
    }

    fn fill(&self, draft: UseCaseDraft) {
        self.slug.set(draft.slug);
        self.title.set(draft.title);
        self.industry.set(draft.industry);
        self.challenge.set(draft.challenge);
        self.solution.set(draft.solution);
        self.results.set(draft.results);
        self.is_featured.set(draft.is_featured);
    }

    fn draft(&self) -> UseCaseDraft {
        let title = self.title.get_untracked().trim().to_string();
        let slug = self.slug.get_untracked().trim().to_string();
        UseCaseDraft {
            slug: if slug.is_empty() { slugify(&title) } else { slug },
            title,
            industry: self.industry.get_untracked().trim().to_string(),
            challenge: self.challenge.get_untracked(),
            solution: self.solution.get_untracked(),
            results: self.results.get_untracked(),
            is_featured: self.is_featured.get_untracked(),
        }
    }
}

const HEADERS: &[&str] = &["Title", "Industry", "Featured"];

#[component]
pub fn AdminUseCasesPage() -> impl IntoView {
    let state = CrudState::new();
    let form = UseCaseForm::new();
    let use_cases = LocalResource::new(move || {
        let request = state.track();
        async move { client()?.use_cases().list(&request).await }
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
                Some(id) => api.use_cases().update(&id, &draft).await.map(|_| ()),
                None => api.use_cases().create(&draft).await.map(|_| ()),
            }
        });
    });

    let row = move |case: UseCase| {
        let id = case.id.clone();
        let draft = UseCaseDraft::from(&case);
        let on_edit = Callback::new(move |()| {
            form.fill(draft.clone());
            state.open_edit(id.clone());
        });
        let id = case.id.clone();
        let on_delete = Callback::new(move |()| {
            let id = id.clone();
            state.delete(async move { client()?.use_cases().delete(&id).await });
        });
        view! {
            <tr class=Theme::ROW>
                <td class=Theme::TD>{case.title}</td>
                <td class=Theme::TD>{case.industry}</td>
                <td class=Theme::TD>{if case.is_featured { "Yes" } else { "No" }}</td>
                <RowActions on_edit=on_edit on_delete=on_delete />
            </tr>
        }
    };

    view! {
        <PageHeader title="Use cases">
            <NewButton
                state=state
                label="New use case"
                on_open=Callback::new(move |()| form.fill(UseCaseDraft::default()))
            />
        </PageHeader>
        <FormStatus feedback=state.list />
        <EditorPanel state=state noun="use case" on_submit=on_submit>
            <TextField label="Title" name="title" value=form.title errors=state.form.errors />
            <TextField
                label="Slug"
                name="slug"
                value=form.slug
                errors=state.form.errors
                placeholder="derived from the title when empty"
            />
            <TextField label="Industry" name="industry" value=form.industry errors=state.form.errors />
            <TextArea label="Challenge" name="challenge" value=form.challenge errors=state.form.errors rows=5 />
            <TextArea label="Solution" name="solution" value=form.solution errors=state.form.errors rows=5 />
            <TextArea label="Results" name="results" value=form.results errors=state.form.errors rows=5 />
            <Checkbox label="Featured on the home page" name="is_featured" value=form.is_featured />
        </EditorPanel>
        <SearchBox state=state />
        <AdminTable headers=HEADERS>
            <Suspense fallback=|| view! { <MessageRow columns=HEADERS.len() /> }>
                {move || match use_cases.get() {
                    Some(Ok(list)) if list.items.is_empty() => {
                        view! { <MessageRow columns=HEADERS.len() message="No use cases yet." /> }
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
            use_cases
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
