//! Audience pages: intended parents, surrogates, egg donors.

use leptos::prelude::*;

use crate::content::Vertical;

#[component]
pub fn ServicePage(vertical: Vertical) -> impl IntoView {
    let stats = vertical
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
        .collect_view();

    let steps = vertical
        .steps()
        .iter()
        .enumerate()
        .map(|(i, (title, body))| {
            view! {
                <li class="step">
                    <span class="step__number">{i + 1}</span>
                    <h3>{*title}</h3>
                    <p>{*body}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="service-page">
            <section class="page-hero">
                <h1>{vertical.title()}</h1>
                <p>{vertical.description()}</p>
                <div class="stats">{stats}</div>
            </section>
            <section class="section">
                <h2>"How it works"</h2>
                <ol class="steps">{steps}</ol>
            </section>
            <section class="section section--cta">
                <a class="button button--primary" href="/signup">"Create an account"</a>
                <a class="button" href="/explore">"Explore profiles"</a>
            </section>
        </div>
    }
}
