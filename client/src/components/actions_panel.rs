//! Dashboard call-to-action block.

use leptos::prelude::*;

use crate::state::ui::{Modal, UiState};

#[component]
pub fn ActionsPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="panel panel--actions">
            <h2 class="panel__title">"Actions"</h2>
            <div class="panel__body">
                <button class="btn" on:click=move |_| ui.update(|u| u.open(Modal::AddTent))>
                    "Ajouter une tente"
                </button>
            </div>
        </section>
    }
}
