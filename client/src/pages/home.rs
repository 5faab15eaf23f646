//! Landing page.

use leptos::prelude::*;

use crate::content::{PLANS, SITE, Vertical};

#[component]
pub fn HomePage() -> impl IntoView {
    let verticals = Vertical::ALL
        .into_iter()
        .map(|vertical| {
            view! {
                <a class="card card--link" href=vertical.route()>
                    <h3>{vertical.title()}</h3>
                    <p>{vertical.description()}</p>
                </a>
            }
        })
        .collect_view();

    let plans = PLANS
        .iter()
        .map(|plan| {
            let class = if plan.popular { "plan-teaser plan-teaser--popular" } else { "plan-teaser" };
            view! {
                <a class=class href=plan.route()>
                    <span class="plan-teaser__name">{plan.name}</span>
                    <span class="plan-teaser__price">{plan.price}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Building families with care"</h1>
                <p>{SITE.description}</p>
                <div class="hero__actions">
                    <a class="button button--primary" href="/signup">"Start your journey"</a>
                    <a class="button" href="/about">"Learn more"</a>
                </div>
            </section>
            <section class="section">
                <h2>"Who we help"</h2>
                <div class="card-grid">{verticals}</div>
            </section>
            <section class="section">
                <h2>"Support plans"</h2>
                <div class="plan-teasers">{plans}</div>
                <a class="button" href="/pricing">"Compare plans"</a>
            </section>
            <section class="section section--cta">
                <h2>"Talk to a coordinator"</h2>
                <p>"Every journey is different. Tell us about yours and we will map out the next steps together."</p>
                <a class="button button--primary" href="/contact">"Contact us"</a>
            </section>
        </div>
    }
}
