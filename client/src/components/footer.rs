//! Site footer: agency details, company and legal links.

use leptos::prelude::*;

use crate::content::{LegalDoc, SITE};
use crate::i18n::translate;
use crate::state::ui::UiState;

const COMPANY_LINKS: [(&str, &str); 4] =
    [("nav.about", "/about"), ("nav.pricing", "/pricing"), ("nav.explore", "/explore"), ("nav.contact", "/contact")];

#[component]
pub fn Footer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |key: &'static str| translate(ui.get().language, key).to_owned();

    let company = COMPANY_LINKS
        .into_iter()
        .map(|(key, href)| view! { <li><a href=href>{move || t(key)}</a></li> })
        .collect_view();

    let legal = [LegalDoc::Privacy, LegalDoc::Cookies, LegalDoc::Terms]
        .into_iter()
        .map(|doc| view! { <li><a href=doc.route()>{move || t(doc.label_key())}</a></li> })
        .collect_view();

    let social = SITE
        .social
        .iter()
        .map(|(label, href)| {
            view! { <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>{*label}</a> }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <section class="site-footer__about">
                    <h2>{SITE.name}</h2>
                    <p>{SITE.description}</p>
                    <div class="site-footer__social">{social}</div>
                </section>
                <section>
                    <h3>{move || t("footer.company")}</h3>
                    <ul>{company}</ul>
                </section>
                <section>
                    <h3>{move || t("footer.legal")}</h3>
                    <ul>{legal}</ul>
                </section>
                <section class="site-footer__contact">
                    <h3>{move || t("footer.contact")}</h3>
                    <p><a href=format!("mailto:{}", SITE.email)>{SITE.email}</a></p>
                    <p>{SITE.phone}</p>
                    <p>{SITE.address}</p>
                    <p>{SITE.hours}</p>
                </section>
            </div>
            <div class="site-footer__bottom">
                {move || format!("© {} {}", SITE.name, t("footer.rights"))}
            </div>
        </footer>
    }
}
