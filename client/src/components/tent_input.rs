//! Labelled select used for every tent attribute of the creation form.
//!
//! The option builders below are the only place mapping tent attributes to
//! `(value, label)` pairs; the form parses the selected value back with the
//! matching `parse_*` helper.

#[cfg(test)]
#[path = "tent_input_test.rs"]
mod tent_input_test;

use inventory::{TentSize, TentState, TentType, Unit};
use leptos::prelude::*;

const YES: &str = "OUI";
const NO: &str = "NON";
const INTEGRATED: &str = "INTÉGRÉ";
const NORMAL: &str = "NORMAL";

pub type SelectOption = (String, String);

#[component]
pub fn TentInput(
    #[prop(into)] label: String,
    options: Vec<SelectOption>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="tent-input">
            <span class="tent-input__label">{label}</span>
            <select class="tent-input__select" on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options
                    .into_iter()
                    .map(|(key, text)| {
                        let selected_key = key.clone();
                        view! {
                            <option value=key selected=move || value.get() == selected_key>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[must_use]
pub fn unit_options(units: &[Unit]) -> Vec<SelectOption> {
    units.iter().map(|u| (u.as_str().to_owned(), u.label().to_owned())).collect()
}

/// Only the supported capacities are offered.
#[must_use]
pub fn size_options() -> Vec<SelectOption> {
    TentSize::all().map(|s| (s.to_string(), s.label())).collect()
}

#[must_use]
pub fn state_options() -> Vec<SelectOption> {
    TentState::ALL.iter().map(|s| (s.as_str().to_owned(), s.label().to_owned())).collect()
}

#[must_use]
pub fn type_options() -> Vec<SelectOption> {
    TentType::ALL.iter().map(|t| (t.as_str().to_owned(), t.as_str().to_owned())).collect()
}

#[must_use]
pub fn complete_options() -> Vec<SelectOption> {
    [YES, NO].into_iter().map(|v| (v.to_owned(), v.to_owned())).collect()
}

#[must_use]
pub fn ground_sheet_options() -> Vec<SelectOption> {
    [INTEGRATED, NORMAL].into_iter().map(|v| (v.to_owned(), v.to_owned())).collect()
}

#[must_use]
pub fn complete_value(complete: bool) -> &'static str {
    if complete { YES } else { NO }
}

#[must_use]
pub fn parse_complete(value: &str) -> bool {
    value == YES
}

#[must_use]
pub fn ground_sheet_value(integrated: bool) -> &'static str {
    if integrated { INTEGRATED } else { NORMAL }
}

#[must_use]
pub fn parse_ground_sheet(value: &str) -> bool {
    value == INTEGRATED
}

#[must_use]
pub fn parse_size(value: &str) -> Option<TentSize> {
    value.parse::<i64>().ok().and_then(|n| TentSize::new(n).ok())
}
