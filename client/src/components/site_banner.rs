//! One-time "beta" banner at the top of every page.

use leptos::prelude::*;

use crate::state::banner::BannerVisibility;
use crate::util::ui_persistence::LocalStorage;

const LEARN_MORE_URL: &str = "https://www.youtube.com/watch?v=E4WlUXrJgy4";

#[component]
pub fn SiteBanner() -> impl IntoView {
    let visibility = RwSignal::new(BannerVisibility::Unknown);

    // Effects only run in the browser, after hydration.
    Effect::new(move || visibility.set(BannerVisibility::load(&LocalStorage)));

    let on_dismiss = move |_| visibility.set(BannerVisibility::dismiss(&LocalStorage));

    view! {
        <Show when=move || visibility.get().is_shown()>
            <div class="site-banner">
                <div class="site-banner__inner">
                    <div class="site-banner__text">
                        <strong>"MonMatos"</strong>
                        " est en version "
                        <strong>"beta"</strong>
                    </div>
                    <div class="site-banner__actions">
                        <button class="site-banner__link" on:click=on_dismiss>
                            "J'ai compris"
                        </button>
                        <a
                            class="site-banner__link site-banner__link--pulse"
                            href=LEARN_MORE_URL
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "En savoir plus"
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}
