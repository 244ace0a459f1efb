//! Group dashboard: tent actions and inventory overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the tent collection
//! once the session is known and again after every invalidation, and hosts
//! the "add tent" modal.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::actions_panel::ActionsPanel;
use crate::components::modal::ModalFrame;
use crate::components::overview_panel::OverviewPanel;
use crate::components::tent_add_panel::TentAddPanel;
use crate::state::auth::AuthState;
use crate::state::overview::TentOverview;
use crate::state::tents::{LoadState, TentsState};
use crate::state::ui::{Modal, UiState};
use crate::util::auth::install_unauth_redirect;

/// Dashboard page. Redirects to the sign-in page without a session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tents = expect_context::<RwSignal<TentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_unauth_redirect(auth, use_navigate());

    let signed_in = Memo::new(move |_| auth.with(|a| a.group.is_some()));
    let generation = Memo::new(move |_| tents.with(|t| t.generation));

    // Fetch on mount and whenever the collection was invalidated.
    Effect::new(move || {
        let generation = generation.get();
        if !signed_in.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_tents().await;
            if let Err(e) = &result {
                log::warn!("tent fetch failed: {e}");
            }
            tents.update(|t| t.finish_fetch(generation, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    });

    let overview = Memo::new(move |_| {
        auth.with(AuthState::movement)
            .map(|movement| tents.with(|t| TentOverview::compute(movement, t.tents())))
            .unwrap_or_default()
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.resolve(None));
        });
    };

    let group_name = move || auth.with(|a| a.group_name().unwrap_or_default().to_owned());
    let loaded = move || tents.with(|t| matches!(t.load, LoadState::Loaded(_)));

    view! {
        <Title text="Mon Groupe | MonMatos"/>
        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class=move || {
                    if signed_in.get() { "dashboard__title is-visible" } else { "dashboard__title" }
                }>
                    <span>"Groupe "</span>
                    <span class="dashboard__group-name">{group_name}</span>
                </h1>
                <Show when=move || signed_in.get()>
                    <button class="btn btn--white btn--xs" on:click=on_logout>
                        "Déconnexion"
                    </button>
                </Show>
            </header>

            <Show when=move || tents.with(TentsState::is_loading)>
                <div class="dashboard__loading">
                    <span class="spinner" aria-label="Chargement"></span>
                </div>
            </Show>

            <Show when=move || tents.with(|t| t.error().is_some())>
                <div class="dashboard__error">
                    <p>{move || tents.with(|t| t.error().unwrap_or_default().to_owned())}</p>
                    <button class="btn" on:click=move |_| tents.update(TentsState::retry)>
                        "Réessayer"
                    </button>
                </div>
            </Show>

            <Show when=move || signed_in.get() && loaded()>
                <ActionsPanel/>
                <OverviewPanel overview=overview/>
            </Show>

            <Show when=move || ui.with(|u| u.is_open(Modal::AddTent))>
                {move || {
                    auth.with(AuthState::movement)
                        .map(|movement| {
                            view! {
                                <ModalFrame
                                    title="Ajouter une tente"
                                    on_close=Callback::new(move |()| ui.update(UiState::close))
                                >
                                    <TentAddPanel movement=movement/>
                                </ModalFrame>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
