//! Member-only directory of service areas with a free-text filter.

use leptos::prelude::*;

use crate::content::search_verticals;
use crate::util::auth::AuthContext;

#[component]
pub fn ExplorePage() -> impl IntoView {
    let state = expect_context::<AuthContext>().state;
    let query = RwSignal::new(String::new());
    let results = Memo::new(move |_| query.with(|q| search_verticals(q)));

    let greeting = move || {
        state.with(|state| state.user().map(|user| format!("Welcome back, {}", user.name)).unwrap_or_default())
    };

    view! {
        <div class="explore-page">
            <section class="page-hero">
                <h1>"Explore"</h1>
                <p>{greeting}</p>
                <input
                    class="explore-page__search"
                    type="search"
                    placeholder="Search surrogates, egg donors, intended parents..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </section>
            <div class="card-grid">
                <For each=move || results.get() key=|vertical| *vertical let:vertical>
                    <a class="card card--link" href=vertical.route()>
                        <h3>{vertical.title()}</h3>
                        <p>{vertical.description()}</p>
                        <div class="stats">
                            {vertical
                                .stats()
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <div class="stat">
                                            <span class="stat__value">{stat.value}</span>
                                            <span class="stat__label">{stat.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </a>
                </For>
            </div>
            <Show when=move || results.with(Vec::is_empty)>
                <p class="explore-page__empty">{move || format!("No results for \"{}\"", query.get().trim())}</p>
            </Show>
        </div>
    }
}
