//! Toast stack rendered once at the application root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| (toast.id, toast.kind)
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.css_modifier())
                            role="status"
                            on:click=move |_| toasts.update(|t| t.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Remove a settled toast after its display time.
pub fn dismiss_later(toasts: RwSignal<ToastState>, id: u64, kind: ToastKind) {
    let Some(ttl_ms) = kind.ttl_ms() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, id, ttl_ms);
}
