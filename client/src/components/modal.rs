//! Centered dialog over a dimmed backdrop.

use leptos::prelude::*;

/// Closes on backdrop click and on Escape.
#[component]
pub fn ModalFrame(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 class="dialog__title">{title}</h2>
                {children()}
            </div>
        </div>
    }
}
