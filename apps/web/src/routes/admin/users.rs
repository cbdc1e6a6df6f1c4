//! User administration. Passwords are only sent when the admin types one; an
//! empty password field keeps the current password on update.

use super::crud::{
    AdminTable, CrudState, EditorPanel, MessageRow, NewButton, RowActions, SearchBox,
};
use crate::app_lib::{client, theme::Theme};
use crate::components::{Checkbox, LoadError, PageHeader, Pager, SelectField, TextField};
use crate::features::forms::FormStatus;
use consulta_client::{
    content::format_date,
    resources::users::{Role, User, UserDraft},
    FieldErrors,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct UserForm {
    email: RwSignal<String>,
    full_name: RwSignal<String>,
    role: RwSignal<String>,
    is_active: RwSignal<bool>,
    password: RwSignal<String>,
}

impl UserForm {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            full_name: RwSignal::new(String::new()),
            role: RwSignal::new(Role::Customer.as_str().to_string()),
            is_active: RwSignal::new(true),
            password: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, draft: UserDraft) {
        self.email.set(draft.email);
        self.full_name.set(draft.full_name.unwrap_or_default());
        self.role.set(draft.role.as_str().to_string());
        self.is_active.set(draft.is_active);
        self.password.set(String::new());
    }

    fn draft(&self) -> UserDraft {
        let full_name = self.full_name.get_untracked().trim().to_string();
        let password = self.password.get_untracked();
        UserDraft {
            email: self.email.get_untracked().trim().to_string(),
            full_name: Some(full_name).filter(|n| !n.is_empty()),
            role: Role::parse(&self.role.get_untracked()).unwrap_or_default(),
            is_active: self.is_active.get_untracked(),
            password: Some(password).filter(|p| !p.is_empty()),
        }
    }
}

const HEADERS: &[&str] = &["Email", "Name", "Role", "Active", "Joined"];

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let state = CrudState::new();
    let form = UserForm::new();
    let users = LocalResource::new(move || {
        let request = state.track();
        async move { client()?.users().list(&request).await }
    });

    let on_submit = Callback::new(move |()| {
        let draft = form.draft();
        let id = state.editing_id();
        // New accounts need an initial password.
        if id.is_none() && draft.password.is_none() {
            let mut errors = FieldErrors::default();
            errors.insert("password", "Set an initial password.");
            state.form.fail(errors.into());
            return;
        }
        if !state.form.check(&draft) {
            return;
        }
        state.submit(async move {
            let api = client()?;
            match id {
                Some(id) => api.users().update(&id, &draft).await.map(|_| ()),
                None => api.users().create(&draft).await.map(|_| ()),
            }
        });
    });

    let row = move |user: User| {
        let id = user.id.clone();
        let draft = UserDraft::from(&user);
        let on_edit = Callback::new(move |()| {
            form.fill(draft.clone());
            state.open_edit(id.clone());
        });
        let id = user.id.clone();
        let on_delete = Callback::new(move |()| {
            let id = id.clone();
            state.delete(async move { client()?.users().delete(&id).await });
        });
        let name = user.full_name.clone().unwrap_or_else(|| "-".to_string());
        view! {
            <tr class=Theme::ROW>
                <td class=Theme::TD>{user.email}</td>
                <td class=Theme::TD>{name}</td>
                <td class=Theme::TD><span class=Theme::BADGE>{user.role.as_str()}</span></td>
                <td class=Theme::TD>{if user.is_active { "Yes" } else { "No" }}</td>
                <td class=Theme::TD>{user.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                <RowActions on_edit=on_edit on_delete=on_delete />
            </tr>
        }
    };

    let role_options = [Role::Customer, Role::Admin]
        .iter()
        .map(|role| (role.as_str().to_string(), role.as_str().to_string()))
        .collect::<Vec<_>>();

    view! {
        <PageHeader title="Users" subtitle="Customer and administrator accounts.">
            <NewButton
                state=state
                label="New user"
                on_open=Callback::new(move |()| {
                    form.fill(UserDraft {
                        is_active: true,
                        ..UserDraft::default()
                    })
                })
            />
        </PageHeader>
        <FormStatus feedback=state.list />
        <EditorPanel state=state noun="user" on_submit=on_submit>
            <TextField label="Email" name="email" value=form.email errors=state.form.errors input_type="email" />
            <TextField label="Full name" name="full_name" value=form.full_name errors=state.form.errors />
            <SelectField
                label="Role"
                name="role"
                value=form.role
                options=role_options.clone()
                errors=state.form.errors
            />
            <TextField
                label="Password"
                name="password"
                value=form.password
                errors=state.form.errors
                input_type="password"
                autocomplete="new-password"
                placeholder="leave empty to keep the current password"
            />
            <Checkbox label="Active" name="is_active" value=form.is_active />
        </EditorPanel>
        <SearchBox state=state />
        <AdminTable headers=HEADERS>
            <Suspense fallback=|| view! { <MessageRow columns=HEADERS.len() /> }>
                {move || match users.get() {
                    Some(Ok(list)) if list.items.is_empty() => {
                        view! { <MessageRow columns=HEADERS.len() message="No users found." /> }
                            .into_any()
                    }
                    Some(Ok(list)) => list.items.into_iter().map(row).collect_view().into_any(),
                    Some(Err(err)) => {
                        view! {
                            <tr><td colspan="6" class="px-6 py-4"><LoadError error=err /></td></tr>
                        }
                            .into_any()
                    }
                    None => view! { <MessageRow columns=HEADERS.len() /> }.into_any(),
                }}
            </Suspense>
        </AdminTable>
        {move || {
            users
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
