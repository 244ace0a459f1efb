//! Sign-in page (`/connexion`): email, then emailed access code.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::access_code_form::AccessCodeForm;
use crate::components::form_wrapper::FormWrapper;

pub(crate) const CODE_SENT_MESSAGE: &str = "Un code vous a été envoyé par email.";
const EMAIL_REQUIRED: &str = "Saisissez d'abord l'email de votre groupe.";

/// Trim the email and require a value.
///
/// # Errors
///
/// Returns the message to display when the email is blank.
pub fn validate_request_code_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    Ok(email.to_owned())
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let code_sent = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_request_code_input(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Envoi du code ...".to_owned());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_email_login_code(&email_value).await {
                Ok(code) => {
                    echoed_code.set(code);
                    code_sent.set(true);
                    info.set(CODE_SENT_MESSAGE.to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    view! {
        <Title text="Connexion | MonMatos"/>
        <FormWrapper title="Connectez votre groupe">
            <form class="sign-form" on:submit=on_request_code>
                <input
                    class="sign-input"
                    type="email"
                    placeholder="groupe@exemple.fr"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Recevoir un code"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="sign-message">{move || info.get()}</p>
            </Show>
            <Show when=move || code_sent.get()>
                <AccessCodeForm email=email echoed_code=echoed_code/>
            </Show>
        </FormWrapper>
    }
}
