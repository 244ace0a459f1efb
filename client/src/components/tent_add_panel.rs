//! "Add a tent" form shown inside the dashboard modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decisions live in `state::tent_form`; this component wires DOM events to
//! it and runs the create request. `Settlement::apply` decides what happens
//! once the request settles. A request whose form was cancelled meanwhile
//! never closes the modal, which may host a new form by then.

use inventory::{MAX_IDENTIFIER_LEN, Movement, TentState, TentType, Unit};
use leptos::prelude::*;
use leptos_meta::Title;

use super::tent_input::{
    TentInput, complete_options, complete_value, ground_sheet_options, ground_sheet_value, parse_complete,
    parse_ground_sheet, parse_size, size_options, state_options, type_options, unit_options,
};
use crate::state::tent_form::{LOADING_MESSAGE, TentForm};
use crate::state::tents::TentsState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;

#[component]
pub fn TentAddPanel(movement: Movement) -> impl IntoView {
    let tents = expect_context::<RwSignal<TentsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let form = RwSignal::new(TentForm::new(movement, tents.with_untracked(TentsState::identifiers)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(TentForm::begin_submit).flatten() else {
            return;
        };
        let loading_id = toasts
            .try_update(|t| t.push(ToastKind::Loading, LOADING_MESSAGE))
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::tent_form::Settlement;

            let result = crate::net::api::create_tent(&request).await;
            // The form is gone if the modal was cancelled meanwhile.
            let settlement = form
                .try_update(|f| f.settle(&result))
                .unwrap_or_else(|| Settlement::detached(&result));

            let toast_id = toasts
                .try_update(|t| tents.try_update(|ts| ui.try_update(|u| settlement.apply(t, loading_id, ts, u))))
                .flatten()
                .flatten();
            if let Some(id) = toast_id {
                super::toaster::dismiss_later(toasts, id, settlement.toast_kind);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, loading_id);
    };

    let status_class = move |base: &str| format!("{base} {}", form.with(TentForm::status).css_modifier());

    view! {
        <Title text="Ajouter une tente | MonMatos"/>
        <form class="tent-form" on:submit=on_submit>
            <div class=move || status_class("tent-form__ring")>
                <input
                    type="text"
                    autofocus
                    class="tent-form__identifier"
                    placeholder="XX"
                    maxlength=MAX_IDENTIFIER_LEN.to_string()
                    prop:value=move || form.with(|f| f.identifier().to_owned())
                    on:input=move |ev| form.update(|f| f.set_identifier(&event_target_value(&ev)))
                />
            </div>

            <div class=move || status_class("tent-form__hint")>
                <span>"Choisissez un identifiant de tente non attribué"</span>
            </div>

            <div class="tent-form__intro">
                <p class="tent-form__intro-title">"Informations"</p>
                <p>"Cliquez sur les éléments afin de les modifier"</p>
            </div>

            <div class="tent-form__fields">
                <TentInput
                    label="Attribué aux"
                    options=unit_options(movement.units())
                    value=Signal::derive(move || form.with(|f| f.unit.as_str().to_owned()))
                    on_change=Callback::new(move |v: String| {
                        if let Ok(unit) = v.parse::<Unit>() {
                            form.update(|f| f.unit = unit);
                        }
                    })
                />
                <TentInput
                    label="Taille"
                    options=size_options()
                    value=Signal::derive(move || form.with(|f| f.size.to_string()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(size) = parse_size(&v) {
                            form.update(|f| f.size = size);
                        }
                    })
                />
                <TentInput
                    label="État"
                    options=state_options()
                    value=Signal::derive(move || form.with(|f| f.state.as_str().to_owned()))
                    on_change=Callback::new(move |v: String| {
                        if let Ok(state) = v.parse::<TentState>() {
                            form.update(|f| f.state = state);
                        }
                    })
                />
                <TentInput
                    label="Complète ?"
                    options=complete_options()
                    value=Signal::derive(move || form.with(|f| complete_value(f.complete).to_owned()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.complete = parse_complete(&v)))
                />
                <TentInput
                    label="Type"
                    options=type_options()
                    value=Signal::derive(move || form.with(|f| f.tent_type.as_str().to_owned()))
                    on_change=Callback::new(move |v: String| {
                        if let Ok(tent_type) = v.parse::<TentType>() {
                            form.update(|f| f.tent_type = tent_type);
                        }
                    })
                />
                <TentInput
                    label="Tapis de sol"
                    options=ground_sheet_options()
                    value=Signal::derive(move || form.with(|f| ground_sheet_value(f.integrated).to_owned()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.integrated = parse_ground_sheet(&v)))
                />
            </div>

            <label class="tent-form__comments">
                <span class="tent-input__label">"Commentaires"</span>
                <textarea
                    rows="3"
                    prop:value=move || form.with(|f| f.comments.clone())
                    on:input=move |ev| form.update(|f| f.comments = event_target_value(&ev))
                ></textarea>
            </label>

            <div class="tent-form__actions">
                <button type="button" class="btn btn--white" on:click=move |_| ui.update(UiState::close)>
                    "Annuler"
                </button>
                <button type="submit" class="btn" disabled=move || !form.with(TentForm::can_submit)>
                    {move || form.with(TentForm::submit_label)}
                </button>
            </div>
        </form>
    }
}
