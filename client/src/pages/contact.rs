//! Contact page: agency details plus an enquiry form.
//!
//! Submissions are validated and logged locally; there is no delivery
//! backend.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::content::SITE;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("enter a valid email address")]
    InvalidEmail,
}

/// Enquiry form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    ///
    /// The first blank required field, or a malformed email.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.starts_with('.') && domain.contains('.') && !value.contains(char::is_whitespace)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let info = RwSignal::new(None::<Result<(), ContactError>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        match current.validate() {
            Ok(()) => {
                leptos::logging::log!("contact enquiry from {}: {}", current.email.trim(), current.subject.trim());
                form.set(ContactForm::default());
                info.set(Some(Ok(())));
            }
            Err(e) => info.set(Some(Err(e))),
        }
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&ContactForm) -> &String, set: fn(&mut ContactForm, String)| {
        view! {
            <label class="contact-form__label">
                {label}
                <input
                    class="contact-form__input"
                    type=kind
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>"Get in touch"</h1>
                <p>"Questions about surrogacy, egg donation or our plans? Our coordinators reply within one business day."</p>
            </section>
            <div class="contact-page__grid">
                <aside class="contact-page__details">
                    <h2>"Contact details"</h2>
                    <p><a href=format!("mailto:{}", SITE.email)>{SITE.email}</a></p>
                    <p>{SITE.phone}</p>
                    <p>{SITE.address}</p>
                    <p>{SITE.hours}</p>
                </aside>
                <form class="contact-form" on:submit=on_submit>
                    {field("Name", "text", |f| &f.name, |f, v| f.name = v)}
                    {field("Email", "email", |f| &f.email, |f, v| f.email = v)}
                    {field("Phone", "tel", |f| &f.phone, |f, v| f.phone = v)}
                    {field("Subject", "text", |f| &f.subject, |f, v| f.subject = v)}
                    <label class="contact-form__label">
                        "Message"
                        <textarea
                            class="contact-form__input contact-form__input--message"
                            rows="6"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="contact-form__submit" type="submit">"Send message"</button>
                    {move || match info.get() {
                        Some(Ok(())) => view! {
                            <p class="contact-form__message contact-form__message--ok" role="status">
                                "Thank you. We will be in touch soon."
                            </p>
                        }
                        .into_any(),
                        Some(Err(e)) => view! {
                            <p class="contact-form__message" role="alert">{e.to_string()}</p>
                        }
                        .into_any(),
                        None => ().into_any(),
                    }}
                </form>
            </div>
        </div>
    }
}
