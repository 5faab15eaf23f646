//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header, protected_route::ProtectedRoute};
use crate::content::{LegalDoc, SITE, Vertical};
use crate::i18n::stored_language;
use crate::pages::{
    about::AboutPage, contact::ContactPage, explore::ExplorePage, home::HomePage, legal::LegalPage,
    login::LoginPage, not_found::NotFoundPage, pricing::PlanDetailPage, pricing::PricingPage,
    services::ServicePage, signup::SignupPage,
};
use crate::state::ui::UiState;
use crate::util::auth::{AuthContext, install_storage_sync};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts, restores the persisted session
/// once the page is interactive, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::browser();
    let ui = RwSignal::new(UiState::default());
    provide_context(auth.clone());
    provide_context(ui);

    // Effects only run in the browser, so SSR output always renders the
    // `Initializing` state and hydration sees the same markup.
    let restore = auth.clone();
    Effect::new(move || restore.restore());
    Effect::new(move || {
        if let Some(lang) = stored_language() {
            ui.update(|s| s.language = lang);
        }
    });
    install_storage_sync(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/surrogacy-site.css"/>
        <Title text=SITE.name/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("basic") view=|| view! { <PlanDetailPage slug="basic"/> }/>
                    <Route path=StaticSegment("pro") view=|| view! { <PlanDetailPage slug="pro"/> }/>
                    <Route path=StaticSegment("enterprise") view=|| view! { <PlanDetailPage slug="enterprise"/> }/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("privacy") view=|| view! { <LegalPage doc=LegalDoc::Privacy/> }/>
                    <Route path=StaticSegment("cookies") view=|| view! { <LegalPage doc=LegalDoc::Cookies/> }/>
                    <Route path=StaticSegment("terms") view=|| view! { <LegalPage doc=LegalDoc::Terms/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route
                        path=StaticSegment("explore")
                        view=|| view! { <ProtectedRoute><ExplorePage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("intendedparents")
                        view=|| view! { <ServicePage vertical=Vertical::IntendedParents/> }
                    />
                    <Route
                        path=StaticSegment("surrogates")
                        view=|| view! { <ServicePage vertical=Vertical::Surrogates/> }
                    />
                    <Route
                        path=StaticSegment("eggdonors")
                        view=|| view! { <ServicePage vertical=Vertical::EggDonors/> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
