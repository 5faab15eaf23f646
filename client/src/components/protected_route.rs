//! Route guard for member-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a page and consults `AuthContext` on every state change. While the
//! persisted session is still being read it shows a spinner and nothing
//! else; it never redirects from `Initializing`, since that would bounce a
//! signed-in user to the login page on every full page load.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::i18n::translate;
use crate::state::ui::UiState;
use crate::util::auth::{AuthContext, GateDecision, NavigationRequest, gate_decision, install_unauth_redirect};

/// Full-height spinner shown while the session is restored.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <div class="loading-placeholder" role="status" aria-live="polite">
            <div class="loading-placeholder__spinner"></div>
            <span class="sr-only">{move || translate(ui.get().language, "auth.loading").to_owned()}</span>
        </div>
    }
}

/// Render `children` only for an authenticated user.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let location = use_location();
    let navigate = use_navigate();

    let requested = move || {
        NavigationRequest::new(
            location.pathname.get_untracked(),
            location.search.get_untracked(),
            location.hash.get_untracked(),
        )
    };
    install_unauth_redirect(auth.clone(), requested, navigate);

    let state = auth.state;
    let decision = Memo::new(move |_| gate_decision(&state.get()));

    move || match decision.get() {
        GateDecision::Loading => view! { <LoadingPlaceholder/> }.into_any(),
        GateDecision::Render => children().into_any(),
        GateDecision::Redirect => ().into_any(),
    }
}
