//! Agency background, values and team.

use leptos::prelude::*;

use crate::content::SITE;

const VALUES: [(&str, &str); 4] = [
    ("Compassion", "Every family and every surrogate is treated with warmth and respect."),
    ("Transparency", "Clear pricing, clear contracts and no surprises along the way."),
    ("Expertise", "Coordinators, lawyers and clinicians who have guided hundreds of journeys."),
    ("Support", "Counseling and check-ins for everyone involved, before and after birth."),
];

const TEAM: [(&str, &str); 3] = [
    ("Dr. Sarah Chen", "Medical Director"),
    ("Michael Torres", "Legal Counsel"),
    ("Emily Watson", "Lead Coordinator"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{format!("About {}", SITE.name)}</h1>
                <p>
                    "We connect intended parents with surrogates and egg donors, and stay alongside every party \
                     from the first consultation to the first weeks at home."
                </p>
            </section>
            <section class="section">
                <h2>"Our values"</h2>
                <div class="card-grid">
                    {VALUES
                        .into_iter()
                        .map(|(title, body)| view! { <div class="card"><h3>{title}</h3><p>{body}</p></div> })
                        .collect_view()}
                </div>
            </section>
            <section class="section">
                <h2>"Our team"</h2>
                <div class="card-grid">
                    {TEAM
                        .into_iter()
                        .map(|(name, role)| view! { <div class="card card--person"><h3>{name}</h3><p>{role}</p></div> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
