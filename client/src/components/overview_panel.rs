//! Dashboard summary of the group's tents.

use leptos::prelude::*;

use crate::state::overview::TentOverview;

#[component]
pub fn OverviewPanel(#[prop(into)] overview: Signal<TentOverview>) -> impl IntoView {
    view! {
        <section class="panel panel--overview">
            <h2 class="panel__title">"Vue d'ensemble"</h2>
            <div class="overview__stats">
                <Stat label="Tentes" value=Signal::derive(move || overview.with(|o| o.total.to_string()))/>
                <Stat label="Places" value=Signal::derive(move || overview.with(|o| o.capacity.to_string()))/>
                <Stat label="Incomplètes" value=Signal::derive(move || overview.with(|o| o.incomplete.to_string()))/>
            </div>
            <div class="overview__groups">
                <div class="overview__group">
                    <h3>"Par état"</h3>
                    <ul>
                        {move || {
                            overview
                                .with(|o| o.by_state.clone())
                                .into_iter()
                                .map(|(state, count)| view! { <li>{state.label()}" : "{count}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
                <div class="overview__group">
                    <h3>"Par unité"</h3>
                    <ul>
                        {move || {
                            overview
                                .with(|o| o.by_unit.clone())
                                .into_iter()
                                .map(|(unit, count)| view! { <li>{unit.label()}" : "{count}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="overview__stat">
            <span class="overview__stat-value">{move || value.get()}</span>
            <span class="overview__stat-label">{label}</span>
        </div>
    }
}
