//! Sign-up page (`/inscription`): register a group, then confirm with the
//! access code sent to its email.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use inventory::Movement;
use leptos::prelude::*;
use leptos_meta::Title;

use super::sign_in::CODE_SENT_MESSAGE;
use crate::components::access_code_form::AccessCodeForm;
use crate::components::form_wrapper::FormWrapper;

const FIELDS_REQUIRED: &str = "Renseignez le nom du groupe, son email et son mouvement.";

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub movement: Movement,
}

/// Trim the fields and resolve the movement code.
///
/// # Errors
///
/// Returns the message to display when a field is blank or the movement is unknown.
pub fn validate_sign_up_input(name: &str, email: &str, movement: &str) -> Result<SignUpInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let movement = movement.parse::<Movement>().map_err(|_| FIELDS_REQUIRED)?;
    if name.is_empty() || email.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    Ok(SignUpInput { name: name.to_owned(), email: email.to_owned(), movement })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let movement = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || registered.get() {
            return;
        }
        let input = match validate_sign_up_input(&name.get(), &email.get(), &movement.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Inscription en cours ...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_group(&input.name, &input.email, input.movement).await {
                Ok(code) => {
                    email.set(input.email);
                    echoed_code.set(code);
                    registered.set(true);
                    info.set(CODE_SENT_MESSAGE.to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
    };

    view! {
        <Title text="Inscription | MonMatos"/>
        <FormWrapper title="Inscrivez votre groupe">
            <form class="sign-form" on:submit=on_register>
                <input
                    class="sign-input"
                    type="text"
                    placeholder="Nom du groupe"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="sign-input"
                    type="email"
                    placeholder="groupe@exemple.fr"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <select class="sign-input" on:change=move |ev| movement.set(event_target_value(&ev))>
                    <option value="" selected=move || movement.get().is_empty()>
                        "Mouvement"
                    </option>
                    {Movement::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <option value=m.as_str() selected=move || movement.get() == m.as_str()>
                                    {m.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="btn" type="submit" disabled=move || busy.get() || registered.get()>
                    "Inscrire mon groupe"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="sign-message">{move || info.get()}</p>
            </Show>
            <Show when=move || registered.get()>
                <AccessCodeForm email=email echoed_code=echoed_code/>
            </Show>
        </FormWrapper>
    }
}
