use crate::app_lib::client;
use crate::components::{Button, PageHeader, SelectField, Spinner, TextArea, TextField};
use crate::features::forms::{FormFeedback, FormStatus};
use consulta_client::{resources::contact::ContactRequest, PageRequest};
use leptos::{ev::SubmitEvent, prelude::*};

fn optional(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let interest = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let feedback = FormFeedback::new();

    let services = LocalResource::new(|| async {
        client()?
            .services()
            .list(&PageRequest::new(1, 100))
            .await
    });

    let submit = Action::new_local(|request: &ContactRequest| {
        let request = request.clone();
        async move { client()?.submit_contact(request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(()) => {
                    for field in [name, email, company, phone, interest, message] {
                        field.set(String::new());
                    }
                    feedback.succeed("Thanks! We will get back to you shortly.");
                }
                Err(err) => feedback.fail(err),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: optional(company.get_untracked()),
            phone: optional(phone.get_untracked()),
            service_interest: optional(interest.get_untracked()),
            message: message.get_untracked(),
        }
        .normalized();
        if feedback.check(&request) {
            submit.dispatch(request);
        }
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <PageHeader title="Contact us" subtitle="Tell us about your project." />
            <form on:submit=on_submit novalidate>
                <TextField label="Name" name="name" value=name errors=feedback.errors autocomplete="name" />
                <TextField
                    label="Email"
                    name="email"
                    value=email
                    errors=feedback.errors
                    input_type="email"
                    autocomplete="email"
                />
                <TextField label="Company" name="company" value=company errors=feedback.errors />
                <TextField label="Phone" name="phone" value=phone errors=feedback.errors input_type="tel" />
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        let mut options = vec![(String::new(), "Not sure yet".to_string())];
                        if let Some(Ok(page)) = services.get() {
                            options.extend(page.items.into_iter().map(|s| (s.name.clone(), s.name)));
                        }
                        view! {
                            <SelectField
                                label="Service of interest"
                                name="service_interest"
                                value=interest
                                options=options
                                errors=feedback.errors
                            />
                        }
                    }}
                </Suspense>
                <TextArea label="Message" name="message" value=message errors=feedback.errors rows=6 />
                <Button button_type="submit" disabled=submit.pending()>
                    "Send message"
                </Button>
                <FormStatus feedback=feedback />
            </form>
        </div>
    }
}
