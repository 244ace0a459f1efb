//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_banner::SiteBanner;
use crate::components::toaster::Toaster;
use crate::pages::{dashboard::DashboardPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::{auth::AuthState, tents::TentsState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the session once in the
/// browser and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let tents = RwSignal::new(TentsState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(tents);
    provide_context(toasts);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let group = crate::net::api::fetch_current_group().await;
        auth.update(|a| a.resolve(group));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/monmatos-ui.css"/>
        <Title text="MonMatos"/>

        <SiteBanner/>
        <Router>
            <main class="app">
                <Routes fallback=|| "Page introuvable.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("connexion") view=SignInPage/>
                    <Route path=StaticSegment("inscription") view=SignUpPage/>
                </Routes>
            </main>
        </Router>
        <Toaster/>
    }
}
