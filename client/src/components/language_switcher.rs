//! Header dropdown for the display language.

use leptos::prelude::*;

use crate::i18n::{Language, remember_language, translate};
use crate::state::ui::UiState;

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let choose = move |lang: Language| {
        ui.update(|s| s.select_language(lang));
        remember_language(lang);
    };

    let options = move || {
        Language::ALL
            .into_iter()
            .map(|lang| {
                let selected = move || ui.get().language == lang;
                view! {
                    <li>
                        <button
                            class=move || {
                                if selected() {
                                    "language-switcher__option language-switcher__option--active"
                                } else {
                                    "language-switcher__option"
                                }
                            }
                            aria-pressed=move || selected().to_string()
                            on:click=move |_| choose(lang)
                        >
                            <span aria-hidden="true">{lang.flag()}</span>
                            " "
                            {lang.native_name()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="language-switcher">
            <button
                class="language-switcher__toggle"
                aria-label=move || translate(ui.get().language, "header.language").to_owned()
                aria-expanded=move || ui.get().language_menu_open.to_string()
                on:click=move |_| ui.update(|s| s.language_menu_open = !s.language_menu_open)
            >
                {move || ui.get().language.flag()}
                " "
                {move || ui.get().language.code().to_uppercase()}
            </button>
            <Show when=move || ui.get().language_menu_open>
                <ul class="language-switcher__menu">{options}</ul>
            </Show>
        </div>
    }
}
