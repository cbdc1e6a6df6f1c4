use crate::app_lib::client;
use crate::components::{Button, PageHeader, TextField};
use crate::features::auth::state::use_auth;
use crate::features::forms::{FormFeedback, FormStatus};
use crate::routes::paths;
use consulta_client::auth::LoginRequest;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let feedback = FormFeedback::new();

    let login_action = Action::new_local(|request: &LoginRequest| {
        let request = request.clone();
        async move { client()?.login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => {
                    let target = if user.is_admin() { paths::ADMIN } else { paths::DASHBOARD };
                    auth.set_user(user);
                    navigate(target, Default::default());
                }
                Err(err) if err.is_unauthorized() => {
                    // Rejected credentials, not a lost session.
                    password.set(String::new());
                    feedback.fail(consulta_client::Error::Http {
                        status: 401,
                        message: String::new(),
                    });
                }
                Err(err) => feedback.fail(err),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if feedback.check(&request) {
            login_action.dispatch(request);
        }
    };

    view! {
        <div class="max-w-sm mx-auto">
            <PageHeader title="Sign in" />
            <form on:submit=on_submit novalidate>
                <TextField
                    label="Your email"
                    name="email"
                    value=email
                    errors=feedback.errors
                    input_type="email"
                    autocomplete="email"
                    placeholder="name@company.com"
                />
                <TextField
                    label="Your password"
                    name="password"
                    value=password
                    errors=feedback.errors
                    input_type="password"
                    autocomplete="current-password"
                />
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                <FormStatus feedback=feedback />
            </form>
            <p class="mt-6 text-sm text-gray-500 dark:text-gray-400">
                "No account yet? "
                <A href=paths::REGISTER {..} class="text-blue-600 hover:underline dark:text-blue-400">
                    "Register"
                </A>
            </p>
        </div>
    }
}
