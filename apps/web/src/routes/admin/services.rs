use super::crud::{
    AdminTable, CrudState, EditorPanel, MessageRow, NewButton, RowActions, SearchBox,
};
use crate::app_lib::{client, theme::Theme};
use crate::components::{Checkbox, LoadError, PageHeader, Pager, TextArea, TextField};
use crate::features::forms::FormStatus;
use consulta_client::{
    content::format_money,
    forms::slugify,
    resources::cms::{Service, ServiceDraft},
    FieldErrors,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct ServiceForm {
    slug: RwSignal<String>,
    name: RwSignal<String>,
    summary: RwSignal<String>,
    description: RwSignal<String>,
    price_from: RwSignal<String>,
    icon: RwSignal<String>,
    is_active: RwSignal<bool>,
}

impl ServiceForm {
    fn new() -> Self {
        Self {
            slug: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            summary: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price_from: RwSignal::new(String::new()),
            icon: RwSignal::new(String::new()),
            is_active: RwSignal::new(true),
        }
    }

    fn fill(&self, draft: ServiceDraft) {
        self.slug.set(draft.slug);
        self.name.set(draft.name);
        self.summary.set(draft.summary);
        self.description.set(draft.description);
        self.price_from
            .set(draft.price_from.map(|p| p.to_string()).unwrap_or_default());
        self.icon.set(draft.icon.unwrap_or_default());
        self.is_active.set(draft.is_active);
    }

    /// Builds the draft, or a field error when the price is not a number.
    fn draft(&self) -> Result<ServiceDraft, FieldErrors> {
        let name = self.name.get_untracked().trim().to_string();
        let slug = self.slug.get_untracked().trim().to_string();
        let price = self.price_from.get_untracked().trim().to_string();
        let icon = self.icon.get_untracked().trim().to_string();

        let price_from = if price.is_empty() {
            None
        } else {
            match price.parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    let mut errors = FieldErrors::default();
                    errors.insert("price_from", "Enter a number.");
                    return Err(errors);
                }
            }
        };

        Ok(ServiceDraft {
            slug: if slug.is_empty() { slugify(&name) } else { slug },
            name,
            summary: self.summary.get_untracked().trim().to_string(),
            description: self.description.get_untracked(),
            price_from,
            icon: Some(icon).filter(|i| !i.is_empty()),
            is_active: self.is_active.get_untracked(),
        })
    }
}

const HEADERS: &[&str] = &["Name", "Slug", "From", "Active"];

#[component]
pub fn AdminServicesPage() -> impl IntoView {
    let state = CrudState::new();
    let form = ServiceForm::new();
    let services = LocalResource::new(move || {
        let request = state.track();
        async move { client()?.services().list(&request).await }
    });

    let on_submit = Callback::new(move |()| {
        let draft = match form.draft() {
            Ok(draft) => draft,
            Err(errors) => {
                state.form.fail(errors.into());
                return;
            }
        };
        if !state.form.check(&draft) {
            return;
        }
        let id = state.editing_id();
        state.submit(async move {
            let api = client()?;
            match id {
                Some(id) => api.services().update(&id, &draft).await.map(|_| ()),
                None => api.services().create(&draft).await.map(|_| ()),
            }
        });
    });

    let row = move |service: Service| {
        let id = service.id.clone();
        let draft = ServiceDraft::from(&service);
        let on_edit = Callback::new(move |()| {
            form.fill(draft.clone());
            state.open_edit(id.clone());
        });
        let id = service.id.clone();
        let on_delete = Callback::new(move |()| {
            let id = id.clone();
            state.delete(async move { client()?.services().delete(&id).await });
        });
        view! {
            <tr class=Theme::ROW>
                <td class=Theme::TD>{service.name}</td>
                <td class=Theme::TD><code>{service.slug}</code></td>
                <td class=Theme::TD>
                    {service.price_from.map(|p| format_money(p, "USD")).unwrap_or_else(|| "-".to_string())}
                </td>
                <td class=Theme::TD>{if service.is_active { "Yes" } else { "No" }}</td>
                <RowActions on_edit=on_edit on_delete=on_delete />
            </tr>
        }
    };

    view! {
        <PageHeader title="Services" subtitle="Offerings listed on the public site.">
            <NewButton
                state=state
                label="New service"
                on_open=Callback::new(move |()| {
                    form.fill(ServiceDraft {
                        is_active: true,
                        ..ServiceDraft::default()
                    })
                })
            />
        </PageHeader>
        <FormStatus feedback=state.list />
        <EditorPanel state=state noun="service" on_submit=on_submit>
            <TextField label="Name" name="name" value=form.name errors=state.form.errors />
            <TextField
                label="Slug"
                name="slug"
                value=form.slug
                errors=state.form.errors
                placeholder="derived from the name when empty"
            />
            <TextField label="Summary" name="summary" value=form.summary errors=state.form.errors />
            <TextArea
                label="Description"
                name="description"
                value=form.description
                errors=state.form.errors
                rows=8
            />
            <TextField
                label="Price from (USD)"
                name="price_from"
                value=form.price_from
                errors=state.form.errors
                input_type="number"
            />
            <TextField
                label="Icon (Material Symbols name)"
                name="icon"
                value=form.icon
                errors=state.form.errors
            />
            <Checkbox label="Active" name="is_active" value=form.is_active />
        </EditorPanel>
        <SearchBox state=state />
        <AdminTable headers=HEADERS>
            <Suspense fallback=|| view! { <MessageRow columns=HEADERS.len() /> }>
                {move || match services.get() {
                    Some(Ok(list)) if list.items.is_empty() => {
                        view! { <MessageRow columns=HEADERS.len() message="No services yet." /> }
                            .into_any()
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
            services
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
