//! Plan overview and per-plan detail pages.

use leptos::prelude::*;

use crate::content::{ADD_ONS, PLANS, Plan, plan_by_slug};
use crate::pages::not_found::NotFoundPage;

fn feature_list(plan: &'static Plan) -> impl IntoView {
    view! {
        <ul class="plan-card__features">
            {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn PlanCard(plan: &'static Plan) -> impl IntoView {
    let class = if plan.popular { "plan-card plan-card--popular" } else { "plan-card" };
    view! {
        <div class=class>
            {plan.popular.then(|| view! { <span class="plan-card__badge">"Most popular"</span> })}
            <h2>{plan.name}</h2>
            <p class="plan-card__price">{plan.price}<span>" / month"</span></p>
            <p>{plan.description}</p>
            {feature_list(plan)}
            <a class="button button--primary" href=plan.route()>"View details"</a>
        </div>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <section class="page-hero">
                <h1>"Plans and pricing"</h1>
                <p>"Choose the level of support that fits your journey. Every plan can be combined with add-on services."</p>
            </section>
            <div class="plan-grid">
                {PLANS.iter().map(|plan| view! { <PlanCard plan=plan/> }).collect_view()}
            </div>
            <section class="section">
                <h2>"Add-on services"</h2>
                <div class="card-grid">
                    {ADD_ONS
                        .iter()
                        .map(|addon| {
                            view! {
                                <div class="card">
                                    <h3>{addon.name}</h3>
                                    <p class="card__price">{addon.price}</p>
                                    <p>{addon.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

/// Detail page for the plan with `slug`, or not-found.
#[component]
pub fn PlanDetailPage(slug: &'static str) -> impl IntoView {
    let Some(plan) = plan_by_slug(slug) else {
        return view! { <NotFoundPage/> }.into_any();
    };
    view! {
        <div class="plan-detail-page">
            <section class="page-hero">
                <h1>{plan.name}</h1>
                <p class="plan-card__price">{plan.price}<span>" / month"</span></p>
                <p>{plan.description}</p>
            </section>
            <section class="section">
                <h2>"What is included"</h2>
                {feature_list(plan)}
            </section>
            <div class="plan-detail-page__actions">
                <a class="button button--primary" href="/signup">"Get started"</a>
                <a class="button" href="/contact">"Ask a question"</a>
                <a class="button" href="/pricing">"All plans"</a>
            </div>
        </div>
    }
    .into_any()
}
