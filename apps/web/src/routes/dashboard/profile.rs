use crate::app_lib::{client, theme::Theme};
use crate::components::{Button, LoadError, PageHeader, Spinner, TextField};
use crate::features::forms::{FormFeedback, FormStatus};
use consulta_client::resources::users::{Profile, ProfileUpdate};
use leptos::{ev::SubmitEvent, prelude::*};

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    Some(value).filter(|v| !v.is_empty())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = LocalResource::new(|| async { client()?.profile().await });

    view! {
        <PageHeader title="Profile" subtitle="Keep your contact details up to date." />
        <Suspense fallback=|| view! { <Spinner centered=true /> }>
            {move || match profile.get() {
                Some(Ok(profile)) => view! { <ProfileForm profile=profile /> }.into_any(),
                Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                None => view! { <Spinner centered=true /> }.into_any(),
            }}
        </Suspense>
    }
}

#[component]
fn ProfileForm(profile: Profile) -> impl IntoView {
    let full_name = RwSignal::new(profile.full_name.clone().unwrap_or_default());
    let company = RwSignal::new(profile.company.clone().unwrap_or_default());
    let phone = RwSignal::new(profile.phone.clone().unwrap_or_default());
    let feedback = FormFeedback::new();

    let save = Action::new_local(|update: &ProfileUpdate| {
        let update = update.clone();
        async move { client()?.update_profile(&update).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save.value().get() {
            match result {
                Ok(saved) => {
                    full_name.set(saved.full_name.unwrap_or_default());
                    company.set(saved.company.unwrap_or_default());
                    phone.set(saved.phone.unwrap_or_default());
                    feedback.succeed("Profile saved.");
                }
                Err(err) => feedback.fail(err),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let update = ProfileUpdate {
            full_name: optional(full_name.get_untracked()),
            company: optional(company.get_untracked()),
            phone: optional(phone.get_untracked()),
        };
        if feedback.check(&update) {
            save.dispatch(update);
        }
    };

    view! {
        <form class=format!("{} max-w-xl", Theme::CARD) on:submit=on_submit novalidate>
            <div class="mb-5">
                <span class=Theme::LABEL>"Email"</span>
                <p class="text-sm text-gray-700 dark:text-gray-300">{profile.email}</p>
            </div>
            <TextField label="Full name" name="full_name" value=full_name errors=feedback.errors autocomplete="name" />
            <TextField label="Company" name="company" value=company errors=feedback.errors autocomplete="organization" />
            <TextField label="Phone" name="phone" value=phone errors=feedback.errors input_type="tel" autocomplete="tel" />
            <Button button_type="submit" disabled=save.pending()>
                "Save changes"
            </Button>
            <FormStatus feedback=feedback />
        </form>
    }
}
