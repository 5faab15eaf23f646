//! Site header: logo, primary navigation, language picker, session actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only auth-aware part is the right-hand action area. It renders
//! nothing while the session is being restored, login/signup links for
//! anonymous visitors, and a user menu with logout once signed in.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::language_switcher::LanguageSwitcher;
use crate::content::SITE;
use crate::i18n::translate;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::AuthContext;

/// Primary navigation: translation key and target path.
pub const NAV_ITEMS: [(&str, &str); 4] =
    [("nav.home", "/"), ("nav.about", "/about"), ("nav.pricing", "/pricing"), ("nav.contact", "/contact")];

/// Session-dependent header content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionActions {
    /// Session not restored yet; render nothing.
    Hidden,
    /// Login and signup links.
    Guest,
    /// User menu for the signed-in member.
    Member { name: String },
}

#[must_use]
pub fn session_actions(state: &AuthState) -> SessionActions {
    match state {
        AuthState::Initializing => SessionActions::Hidden,
        AuthState::Anonymous => SessionActions::Guest,
        AuthState::Authenticated(user) => SessionActions::Member { name: user.name.clone() },
    }
}

/// Whether `href` is the current page.
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let current = if trimmed.is_empty() { "/" } else { trimmed };
    current == href
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let t = move |key: &'static str| translate(ui.get().language, key).to_owned();
    let state = auth.state;
    let actions = Memo::new(move |_| session_actions(&state.get()));

    // Logout is requested from the menu and performed here, so the click
    // handlers only touch copyable signals.
    let logout_requested = RwSignal::new(false);
    Effect::new(move || {
        if !logout_requested.get() {
            return;
        }
        logout_requested.set(false);
        auth.logout();
        ui.update(UiState::close_menus);
        navigate("/", NavigateOptions::default());
    });

    let nav_links = move |mobile: bool| {
        let base = if mobile { "site-header__mobile-link" } else { "site-header__link" };
        NAV_ITEMS
            .into_iter()
            .map(|(key, href)| {
                let class = move || {
                    if is_active(&pathname.get(), href) { format!("{base} {base}--active") } else { base.to_owned() }
                };
                view! {
                    <a
                        href=href
                        class=class
                        aria-current=move || is_active(&pathname.get(), href).then_some("page")
                        on:click=move |_| ui.update(|s| s.menu_open = false)
                    >
                        {move || t(key)}
                    </a>
                }
            })
            .collect_view()
    };

    let welcome = move || {
        let name = state.with(|s| s.user().map(|user| user.name.clone()).unwrap_or_default());
        format!("{}, {name}", t("header.welcome"))
    };

    let session_area = move || match actions.get() {
        SessionActions::Hidden => ().into_any(),
        SessionActions::Guest => view! {
            <div class="site-header__guest">
                <a href="/login" class="site-header__login">{move || t("nav.login")}</a>
                <a href="/signup" class="site-header__signup">{move || t("nav.signup")}</a>
            </div>
        }
        .into_any(),
        SessionActions::Member { name } => view! {
            <div class="site-header__user">
                <button
                    class="site-header__user-button"
                    aria-label=move || t("header.user_menu")
                    aria-expanded=move || ui.get().user_menu_open.to_string()
                    on:click=move |_| ui.update(|s| s.user_menu_open = !s.user_menu_open)
                >
                    <span class="site-header__user-name">{name}</span>
                </button>
                <Show when=move || ui.get().user_menu_open>
                    <div class="site-header__user-menu">
                        <div class="site-header__welcome">{welcome}</div>
                        <button class="site-header__logout" on:click=move |_| logout_requested.set(true)>
                            {move || t("header.logout")}
                        </button>
                    </div>
                </Show>
            </div>
        }
        .into_any(),
    };

    view! {
        <header class="site-header">
            <div class="site-header__bar">
                <button
                    class="site-header__menu-toggle"
                    aria-label=move || t("header.menu")
                    aria-expanded=move || ui.get().menu_open.to_string()
                    on:click=move |_| ui.update(|s| s.menu_open = !s.menu_open)
                >
                    {move || if ui.get().menu_open { "✕" } else { "☰" }}
                </button>
                <a href="/" class="site-header__brand">
                    <span class="site-header__logo" aria-hidden="true">"◆"</span>
                    <span>{SITE.name}</span>
                </a>
                <nav class="site-header__nav">{nav_links(false)}</nav>
                <div class="site-header__actions">
                    <LanguageSwitcher/>
                    {session_area}
                </div>
            </div>
            <Show when=move || ui.get().menu_open>
                <nav class="site-header__mobile">{nav_links(true)}</nav>
            </Show>
        </header>
    }
}
