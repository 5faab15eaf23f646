//! Privacy, cookie and terms pages rendered from bundled markdown.

use leptos::prelude::*;

use crate::content::LegalDoc;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn LegalPage(doc: LegalDoc) -> impl IntoView {
    let html = render_markdown_html(doc.markdown());
    view! { <article class="legal-page markdown" inner_html=html></article> }
}
