//! Email + password login page.
//!
//! On success the user goes back to the page a route guard bounced them
//! from, or home. A failed attempt leaves the session untouched.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::translate;
use crate::net::types::Credentials;
use crate::state::auth::AuthError;
use crate::state::ui::UiState;
use crate::util::auth::AuthContext;

/// User-facing text for a failed login or signup.
#[must_use]
pub fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::Rejected(reason) => reason.clone(),
        AuthError::Unavailable(_) => "The service is unavailable. Please try again shortly.".to_owned(),
        AuthError::Storage(_) => "Your session could not be saved on this device. Check that site storage is enabled.".to_owned(),
        AuthError::NotReady => "Still loading, please try again.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let t = move |key: &'static str| translate(ui.get().language, key).to_owned();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match Credentials::new(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
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
            match auth.login(credentials).await {
                Ok(()) => navigate(&auth.take_destination(), NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.try_set(auth_error_message(&e));
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || t("auth.login_title")}</h1>
                <form class="auth-form" on:submit=on_submit>
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
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { t("auth.busy") } else { t("auth.login_submit") }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__message" role="alert">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    {move || t("auth.no_account")}
                    " "
                    <a href="/signup">{move || t("nav.signup")}</a>
                </p>
            </div>
        </div>
    }
}
