use crate::app_lib::{client, theme::Theme};
use crate::components::{Button, LoadError, PageHeader, Pager, SelectField, Spinner, TextArea};
use crate::features::forms::{FormFeedback, FormStatus};
use crate::routes::paths;
use consulta_client::{
    content::{format_date, format_money},
    resources::orders::OrderDraft,
    PageRequest,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_params_map, use_query_map},
};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let query = use_query_map();
    let request = RwSignal::new(PageRequest::default());
    let version = RwSignal::new(0_u32);
    let orders = LocalResource::new(move || {
        let request = request.get();
        version.track();
        async move { client()?.orders(&request).await }
    });
    let on_page = Callback::new(move |page: u32| request.update(|r| r.page = page));

    view! {
        <PageHeader title="Orders" subtitle="Track the services you have ordered." />
        <PlaceOrderForm
            preselected=query.with_untracked(|q| q.get("service")).unwrap_or_default()
            on_placed=Callback::new(move |()| {
                request.update(|r| r.page = 1);
                version.update(|v| *v += 1);
            })
        />
        <div class=Theme::TABLE_WRAPPER>
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-900/50">
                    <tr>
                        <th scope="col" class=Theme::TH>"Service"</th>
                        <th scope="col" class=Theme::TH>"Status"</th>
                        <th scope="col" class=Theme::TH>"Total"</th>
                        <th scope="col" class=Theme::TH>"Placed"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    <Suspense fallback=|| view! { <tr><td colspan="4"><Spinner centered=true /></td></tr> }>
                        {move || match orders.get() {
                            Some(Ok(page)) if page.items.is_empty() => {
                                view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                            "You have not placed any orders yet."
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            }
                            Some(Ok(page)) => {
                                let (current, total, label) = (page.page, page.total_pages(), page.range_label());
                                view! {
                                    {page
                                        .items
                                        .into_iter()
                                        .map(|order| {
                                            view! {
                                                <tr class=Theme::ROW>
                                                    <td class=Theme::TD>
                                                        <A href=paths::order_detail(&order.id) {..} class=Theme::LINK>
                                                            {order.service_name.clone().unwrap_or_else(|| order.service_id.clone())}
                                                        </A>
                                                    </td>
                                                    <td class=Theme::TD>
                                                        <span class=Theme::BADGE>{order.status.label()}</span>
                                                    </td>
                                                    <td class=Theme::TD>{format_money(order.total, &order.currency)}</td>
                                                    <td class=Theme::TD>{format_date(&order.created_at)}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                    <tr>
                                        <td colspan="4" class="px-6 pb-4">
                                            <Pager page=current total_pages=total label=label on_change=on_page />
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            }
                            Some(Err(err)) => {
                                view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-4"><LoadError error=err /></td>
                                    </tr>
                                }
                                    .into_any()
                            }
                            None => view! { <tr><td colspan="4"><Spinner centered=true /></td></tr> }.into_any(),
                        }}
                    </Suspense>
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn PlaceOrderForm(preselected: String, on_placed: Callback<()>) -> impl IntoView {
    let service_id = RwSignal::new(preselected);
    let notes = RwSignal::new(String::new());
    let feedback = FormFeedback::new();
    let services = LocalResource::new(|| async {
        client()?
            .services()
            .list(&PageRequest::new(1, 100))
            .await
    });

    let place = Action::new_local(|draft: &OrderDraft| {
        let draft = draft.clone();
        async move { client()?.place_order(&draft).await }
    });

    Effect::new(move |_| {
        if let Some(result) = place.value().get() {
            match result {
                Ok(order) => {
                    notes.set(String::new());
                    feedback.succeed(format!(
                        "Order placed for {}.",
                        order.service_name.unwrap_or(order.service_id)
                    ));
                    on_placed.run(());
                }
                Err(err) => feedback.fail(err),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let note = notes.get_untracked().trim().to_string();
        let draft = OrderDraft {
            service_id: service_id.get_untracked(),
            notes: Some(note).filter(|n| !n.is_empty()),
        };
        if feedback.check(&draft) {
            place.dispatch(draft);
        }
    };

    view! {
        <form class=format!("{} mb-8", Theme::CARD) on:submit=on_submit>
            <h2 class="mb-4 text-lg font-semibold text-gray-900 dark:text-white">"Place an order"</h2>
            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    let mut options = vec![(String::new(), "Choose a service".to_string())];
                    match services.get() {
                        Some(Ok(page)) => {
                            options.extend(
                                page.items
                                    .into_iter()
                                    .filter(|s| s.is_active)
                                    .map(|s| (s.id, s.name)),
                            );
                        }
                        Some(Err(err)) => return view! { <LoadError error=err /> }.into_any(),
                        None => {}
                    }
                    view! {
                        <SelectField
                            label="Service"
                            name="service_id"
                            value=service_id
                            options=options
                            errors=feedback.errors
                        />
                    }
                        .into_any()
                }}
            </Suspense>
            <TextArea label="Notes" name="notes" value=notes errors=feedback.errors rows=3 />
            <Button button_type="submit" disabled=place.pending()>
                "Place order"
            </Button>
            <FormStatus feedback=feedback />
        </form>
    }
}

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let order = LocalResource::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        async move { client()?.order(&id).await }
    });

    view! {
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match order.get() {
                Some(Ok(order)) => {
                    let title = order.service_name.clone().unwrap_or_else(|| order.service_id.clone());
                    view! {
                        <A href=paths::DASHBOARD_ORDERS {..} class=Theme::LINK>"← All orders"</A>
                        <PageHeader title=title subtitle=format!("Order {}", order.id) />
                        <dl class=format!("{} grid gap-4 sm:grid-cols-2", Theme::CARD)>
                            <div>
                                <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">"Status"</dt>
                                <dd class="mt-1"><span class=Theme::BADGE>{order.status.label()}</span></dd>
                            </div>
                            <div>
                                <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">"Total"</dt>
                                <dd class="mt-1 text-gray-900 dark:text-white">
                                    {format_money(order.total, &order.currency)}
                                </dd>
                            </div>
                            <div>
                                <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">"Placed"</dt>
                                <dd class="mt-1 text-gray-900 dark:text-white">{format_date(&order.created_at)}</dd>
                            </div>
                            <div class="sm:col-span-2">
                                <dt class="text-sm font-medium text-gray-500 dark:text-gray-400">"Notes"</dt>
                                <dd class="mt-1 whitespace-pre-line text-gray-900 dark:text-white">
                                    {order.notes.unwrap_or_else(|| "-".to_string())}
                                </dd>
                            </div>
                        </dl>
                    }
                        .into_any()
                }
                Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                None => view! { <Spinner centered=true /> }.into_any(),
            }}
        </Suspense>
    }
}
