use crate::app_lib::client;
use crate::components::{Button, PageHeader, TextField};
use crate::features::auth::state::use_auth;
use crate::features::forms::{FormFeedback, FormStatus};
use crate::routes::paths;
use consulta_client::auth::RegisterRequest;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let feedback = FormFeedback::new();

    let register_action = Action::new_local(|request: &RegisterRequest| {
        let request = request.clone();
        async move { client()?.register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(user) => {
                    auth.set_user(user);
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(err) => feedback.fail(err),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let name = full_name.get_untracked().trim().to_string();
        let request = RegisterRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            password_confirmation: confirmation.get_untracked(),
            full_name: Some(name).filter(|n| !n.is_empty()),
        };
        if feedback.check(&request) {
            register_action.dispatch(request);
        }
    };

    view! {
        <div class="max-w-sm mx-auto">
            <PageHeader title="Create an account" />
            <form on:submit=on_submit novalidate>
                <TextField label="Full name" name="full_name" value=full_name errors=feedback.errors autocomplete="name" />
                <TextField
                    label="Email"
                    name="email"
                    value=email
                    errors=feedback.errors
                    input_type="email"
                    autocomplete="email"
                />
                <TextField
                    label="Password"
                    name="password"
                    value=password
                    errors=feedback.errors
                    input_type="password"
                    autocomplete="new-password"
                />
                <TextField
                    label="Confirm password"
                    name="password_confirmation"
                    value=confirmation
                    errors=feedback.errors
                    input_type="password"
                    autocomplete="new-password"
                />
                <Button button_type="submit" disabled=register_action.pending()>
                    "Register"
                </Button>
                <FormStatus feedback=feedback />
            </form>
            <p class="mt-6 text-sm text-gray-500 dark:text-gray-400">
                "Already registered? "
                <A href=paths::LOGIN {..} class="text-blue-600 hover:underline dark:text-blue-400">
                    "Sign in"
                </A>
            </p>
        </div>
    }
}
