//! Full-page frame of the sign-in and sign-up pages.

#[cfg(test)]
#[path = "form_wrapper_test.rs"]
mod form_wrapper_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::auth::SIGN_IN_PATH;

pub const SIGN_UP_PATH: &str = "/inscription";

/// Index of the title word rendered in the accent color.
const HIGHLIGHTED_WORD: usize = 2;

/// Prompt and link pointing to the other authentication page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlternateRoute {
    pub prompt: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

#[must_use]
pub fn alternate_route(path: &str) -> AlternateRoute {
    if path.starts_with(SIGN_IN_PATH) {
        AlternateRoute { prompt: "Toujours pas sur MonMatos ?", label: "Inscrire mon groupe", href: SIGN_UP_PATH }
    } else {
        AlternateRoute { prompt: "Votre groupe est déjà inscrit ?", label: "Me connecter", href: SIGN_IN_PATH }
    }
}

/// Split a title into words, flagging the highlighted one.
#[must_use]
pub fn title_words(title: &str) -> Vec<(String, bool)> {
    title
        .split(' ')
        .enumerate()
        .map(|(index, word)| (word.to_owned(), index == HIGHLIGHTED_WORD))
        .collect()
}

/// Public landing page, fixed at build time through `MONMATOS_PUBLIC_URL`.
#[must_use]
pub fn public_url() -> &'static str {
    option_env!("MONMATOS_PUBLIC_URL").unwrap_or("/")
}

#[component]
pub fn FormWrapper(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let location = use_location();
    let alternate = Memo::new(move |_| alternate_route(&location.pathname.get()));

    view! {
        <div class="form-wrapper">
            <div class="form-wrapper__main">
                <a href="/" class="logo form-wrapper__logo">
                    "Mon"
                    <span class="logo__accent">"Matos"</span>
                </a>
                <h1 class="form-wrapper__title">
                    {title_words(&title)
                        .into_iter()
                        .map(|(word, highlighted)| {
                            view! {
                                <span class=if highlighted { "form-wrapper__accent" } else { "" }>{word}" "</span>
                            }
                        })
                        .collect_view()}
                </h1>
                {children()}
            </div>
            <div class="form-wrapper__footer">
                <div class="form-wrapper__alternate">
                    <p>{move || alternate.get().prompt}</p>
                    <a class="btn btn--black btn--xs" href=move || alternate.get().href>
                        {move || alternate.get().label}
                    </a>
                </div>
                <a href=public_url() class="form-wrapper__home">
                    "Revenir à l'accueil"
                </a>
            </div>
        </div>
    }
}
