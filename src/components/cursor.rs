//! Custom cursor: a dot that tracks the pointer and a trailing ring.
//! Desktop only; touch devices keep the native cursor.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Cursor() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let position = RwSignal::new((0.0f64, 0.0f64));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            if !ui.get_untracked().mobile {
                position.set((f64::from(ev.client_x()), f64::from(ev.client_y())));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || !ui.get().mobile>
            <div
                class="cursor-dot"
                style:left=move || format!("{}px", position.get().0)
                style:top=move || format!("{}px", position.get().1)
            ></div>
            <div
                class="cursor-ring"
                style:left=move || format!("{}px", position.get().0)
                style:top=move || format!("{}px", position.get().1)
            ></div>
        </Show>
    }
}
