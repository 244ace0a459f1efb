//! Second step of sign-in and sign-up: type the emailed access code.
//!
//! A successful verification sets the session cookie server-side; the page
//! then reloads on `/` so the whole app starts from the new session.

#[cfg(test)]
#[path = "access_code_form_test.rs"]
mod access_code_form_test;

use leptos::prelude::*;

const ACCESS_CODE_LEN: usize = 6;
const MISSING_FIELDS: &str = "Saisissez votre email et le code à 6 caractères.";

/// Access codes are case-insensitive; show them uppercase.
#[must_use]
pub fn normalize_code_input(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

/// Trim both fields and require a 6-character code.
///
/// # Errors
///
/// Returns the message to display when a field is missing or malformed.
pub fn validate_verify_code_input(email: &str, code: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let code = code.trim();
    if email.is_empty() || code.chars().count() != ACCESS_CODE_LEN {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), code.to_owned()))
}

#[component]
pub fn AccessCodeForm(email: RwSignal<String>, echoed_code: RwSignal<Option<String>>) -> impl IntoView {
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, code_value) = match validate_verify_code_input(&email.get(), &code.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Vérification du code ...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_email_login_code(&email_value, &code_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, code_value);
    };

    view! {
        <form class="sign-form" on:submit=on_verify>
            <input
                class="sign-input sign-input--code"
                type="text"
                maxlength=ACCESS_CODE_LEN.to_string()
                placeholder="ABC123"
                autocomplete="one-time-code"
                prop:value=move || code.get()
                on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
            />
            <button class="btn" type="submit" disabled=move || busy.get()>
                "Me connecter"
            </button>
        </form>
        <Show when=move || echoed_code.get().is_some()>
            <p class="sign-message sign-message--code">
                "Code : "
                <span>{move || echoed_code.get().unwrap_or_default()}</span>
            </p>
        </Show>
        <Show when=move || !info.get().is_empty()>
            <p class="sign-message">{move || info.get()}</p>
        </Show>
    }
}
