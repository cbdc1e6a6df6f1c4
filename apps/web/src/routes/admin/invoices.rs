use super::crud::{
    AdminTable, CrudState, EditorPanel, MessageRow, NewButton, RowActions, SearchBox,
};
use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, PageHeader, Pager, SelectField, TextField};
use crate::features::forms::FormStatus;
use consulta_client::{
    content::{format_date, format_money},
    resources::invoices::{Invoice, InvoiceDraft, InvoiceStatus},
    FieldErrors,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct InvoiceForm {
    order_id: RwSignal<String>,
    customer_email: RwSignal<String>,
    amount: RwSignal<String>,
    currency: RwSignal<String>,
    status: RwSignal<String>,
    due_at: RwSignal<String>,
}

impl InvoiceForm {
    fn new() -> Self {
        Self {
            order_id: RwSignal::new(String::new()),
            customer_email: RwSignal::new(String::new()),
            amount: RwSignal::new(String::new()),
            currency: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            due_at: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, draft: InvoiceDraft) {
        self.order_id.set(draft.order_id.unwrap_or_default());
        self.customer_email.set(draft.customer_email);
        self.amount.set(if draft.amount > 0.0 {
            draft.amount.to_string()
        } else {
            String::new()
        });
        self.currency.set(draft.currency);
        self.status.set(draft.status.as_str().to_string());
        self.due_at
            .set(draft.due_at.as_deref().map(format_date).unwrap_or_default());
    }

    fn draft(&self) -> Result<InvoiceDraft, FieldErrors> {
        let amount = self.amount.get_untracked().trim().to_string();
        let amount = amount.parse::<f64>().map_err(|_| {
            let mut errors = FieldErrors::default();
            errors.insert("amount", "Enter a number.");
            errors
        })?;
        let order_id = self.order_id.get_untracked().trim().to_string();
        let due_at = self.due_at.get_untracked().trim().to_string();

        Ok(InvoiceDraft {
            order_id: Some(order_id).filter(|o| !o.is_empty()),
            customer_email: self.customer_email.get_untracked().trim().to_string(),
            amount,
            currency: self.currency.get_untracked().trim().to_ascii_uppercase(),
            status: InvoiceStatus::parse(&self.status.get_untracked()).unwrap_or(InvoiceStatus::Draft),
            due_at: Some(due_at).filter(|d| !d.is_empty()),
        })
    }
}

/// Only http(s) and same-origin links are rendered.
fn is_safe_link(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')
}

const HEADERS: &[&str] = &["Number", "Customer", "Amount", "Status", "Issued", "Due", "PDF"];

#[component]
pub fn AdminInvoicesPage() -> impl IntoView {
    let state = CrudState::new();
    let form = InvoiceForm::new();
    let invoices = LocalResource::new(move || {
        let request = state.track();
        async move { client()?.invoices().list(&request).await }
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
                Some(id) => api.invoices().update(&id, &draft).await.map(|_| ()),
                None => api.invoices().create(&draft).await.map(|_| ()),
            }
        });
    });

    let row = move |invoice: Invoice| {
        let id = invoice.id.clone();
        let draft = InvoiceDraft::from(&invoice);
        let on_edit = Callback::new(move |()| {
            form.fill(draft.clone());
            state.open_edit(id.clone());
        });
        let id = invoice.id.clone();
        let on_delete = Callback::new(move |()| {
            let id = id.clone();
            state.delete(async move { client()?.invoices().delete(&id).await });
        });
        view! {
            <tr class=Theme::ROW>
                <td class=Theme::TD>{invoice.number}</td>
                <td class=Theme::TD>{invoice.customer_email}</td>
                <td class=Theme::TD>{format_money(invoice.amount, &invoice.currency)}</td>
                <td class=Theme::TD><span class=Theme::BADGE>{invoice.status.as_str()}</span></td>
                <td class=Theme::TD>{format_date(&invoice.issued_at)}</td>
                <td class=Theme::TD>{invoice.due_at.as_deref().map(format_date).unwrap_or_default()}</td>
                <td class=Theme::TD>
                    {invoice
                        .pdf_url
                        .filter(|url| is_safe_link(url))
                        .map(|url| {
                            view! {
                                <a href=url class=Theme::LINK target="_blank" rel="noopener">
                                    "Download"
                                </a>
                            }
                        })}
                </td>
                <RowActions on_edit=on_edit on_delete=on_delete />
            </tr>
        }
    };

    let status_options = InvoiceStatus::ALL
        .iter()
        .map(|status| (status.as_str().to_string(), status.as_str().to_string()))
        .collect::<Vec<_>>();

    view! {
        <PageHeader title="Invoices">
            <NewButton
                state=state
                label="New invoice"
                on_open=Callback::new(move |()| form.fill(InvoiceDraft::default()))
            />
        </PageHeader>
        <FormStatus feedback=state.list />
        <EditorPanel state=state noun="invoice" on_submit=on_submit>
            <TextField
                label="Customer email"
                name="customer_email"
                value=form.customer_email
                errors=state.form.errors
                input_type="email"
            />
            <TextField label="Order id" name="order_id" value=form.order_id errors=state.form.errors />
            <TextField
                label="Amount"
                name="amount"
                value=form.amount
                errors=state.form.errors
                input_type="number"
            />
            <TextField label="Currency" name="currency" value=form.currency errors=state.form.errors />
            <SelectField
                label="Status"
                name="status"
                value=form.status
                options=status_options.clone()
                errors=state.form.errors
            />
            <TextField
                label="Due date"
                name="due_at"
                value=form.due_at
                errors=state.form.errors
                input_type="date"
            />
        </EditorPanel>
        <SearchBox state=state />
        <AdminTable headers=HEADERS>
            <Suspense fallback=|| view! { <MessageRow columns=HEADERS.len() /> }>
                {move || match invoices.get() {
                    Some(Ok(list)) if list.items.is_empty() => {
                        view! { <MessageRow columns=HEADERS.len() message="No invoices yet." /> }
                            .into_any()
                    }
                    Some(Ok(list)) => list.items.into_iter().map(row).collect_view().into_any(),
                    Some(Err(err)) => {
                        view! {
                            <tr><td colspan="8" class="px-6 py-4"><LoadError error=err /></td></tr>
                        }
                            .into_any()
                    }
                    None => view! { <MessageRow columns=HEADERS.len() /> }.into_any(),
                }}
            </Suspense>
        </AdminTable>
        {move || {
            invoices
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
