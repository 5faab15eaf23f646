//! Account registration page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::translate;
use crate::net::types::{FormError, Role, SignupData};
use crate::pages::login::auth_error_message;
use crate::state::ui::UiState;
use crate::util::auth::AuthContext;

/// Build a signup request from raw form values.
///
/// # Errors
///
/// Blank fields, an unknown role, or a role that cannot self-register.
pub fn signup_form(name: &str, email: &str, password: &str, role: &str) -> Result<SignupData, FormError> {
    let role = role.parse::<Role>()?;
    SignupData::new(name, email, password, role)
}

/// Translation key for a role option.
#[must_use]
pub fn role_label_key(role: Role) -> String {
    format!("roles.{}", role.as_str())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let t = move |key: &str| translate(ui.get().language, key).to_owned();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::IntendedParent.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let data = match signup_form(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(data) => data,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let auth = auth.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth.signup(data).await {
                Ok(()) => navigate(&auth.take_destination(), NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    info.try_set(auth_error_message(&e));
                    busy.try_set(false);
                }
            }
        });
    };

    let role_options = move || {
        Role::SELF_SERVICE
            .into_iter()
            .map(|option| {
                view! {
                    <option value=option.as_str() selected=move || role.get() == option.as_str()>
                        {move || t(&role_label_key(option))}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || t("auth.signup_title")}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        {move || t("auth.name")}
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        {move || t("auth.email")}
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        {move || t("auth.password")}
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        {move || t("auth.role")}
                        <select class="auth-form__input" on:change=move |ev| role.set(event_target_value(&ev))>
                            {role_options}
                        </select>
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { t("auth.busy") } else { t("auth.signup_submit") }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message" role="alert">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    {move || t("auth.have_account")}
                    " "
                    <a href="/login">{move || t("nav.login")}</a>
                </p>
            </div>
        </div>
    }
}
