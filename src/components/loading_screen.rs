//! Boot overlay with a simulated progress ramp.
//!
//! Progress climbs 2 points per 50ms tick while the status line cycles
//! every 600ms; once full, the overlay lingers 800ms before revealing the
//! page (it flips `UiState::loading_done`).

#[cfg(test)]
#[path = "loading_screen_test.rs"]
mod loading_screen_test;

use leptos::prelude::*;

use crate::config;
use crate::state::ui::UiState;
use crate::util::scatter::scatter_percent;

pub const LOADING_TEXTS: &[&str] = &[
    "Initializing",
    "Loading Assets",
    "Building Interface",
    "Almost Ready",
    "Finalizing",
];

pub const PROGRESS_TICK_MS: u32 = 50;
pub const PROGRESS_STEP: u8 = 2;
pub const TEXT_CYCLE_MS: u32 = 600;
pub const REVEAL_LINGER_MS: u32 = 800;

/// One progress tick, capped at 100.
pub fn advance_progress(progress: u8) -> u8 {
    progress.saturating_add(PROGRESS_STEP).min(100)
}

/// Next index into `LOADING_TEXTS`, wrapping.
pub fn next_text_index(index: usize) -> usize {
    (index + 1) % LOADING_TEXTS.len()
}

const DOT_COLORS: &[&str] = &["#00D9FF", "#A855F7", "#FF6B9D", "#FFD700", "#00FF88"];

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let progress = RwSignal::new(0u8);
    let text_index = RwSignal::new(0usize);

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::{Interval, Timeout};

        let text_interval = Interval::new(TEXT_CYCLE_MS, move || {
            text_index.update(|index| *index = next_text_index(*index));
        });

        // The progress interval cancels itself once the bar is full, then
        // lingers briefly before dismissing the overlay.
        let tick_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let tick_handle_inner = Rc::clone(&tick_handle);
        let tick = Interval::new(PROGRESS_TICK_MS, move || {
            let next = advance_progress(progress.get_untracked());
            progress.set(next);
            if next >= 100 {
                tick_handle_inner.borrow_mut().take();
                Timeout::new(REVEAL_LINGER_MS, move || {
                    ui.update(|state| state.loading_done = true);
                })
                .forget();
            }
        });
        *tick_handle.borrow_mut() = Some(tick);

        on_cleanup(move || {
            drop(text_interval);
            tick_handle.borrow_mut().take();
        });
    }

    let overlay_class = move || {
        if ui.get().loading_done {
            "loading-screen loading-screen--done"
        } else {
            "loading-screen"
        }
    };

    let orbs = (0..6u64)
        .map(|i| {
            let color = ["rgba(0, 217, 255, 0.4)", "rgba(255, 107, 157, 0.4)", "rgba(168, 85, 247, 0.4)"][i as usize % 3];
            view! {
                <div
                    class="loading-screen__orb"
                    style:background=format!("radial-gradient(circle, {color}, transparent 70%)")
                    style:left=scatter_percent(i.wrapping_mul(73) + 9)
                    style:top=scatter_percent(i.wrapping_mul(97) + 21)
                    style:animation-delay=format!("{:.1}s", 0.3 * i as f64)
                ></div>
            }
        })
        .collect_view();

    let dots = DOT_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| {
            view! {
                <div
                    class="loading-screen__dot"
                    style:background=*color
                    style:animation-delay=format!("{:.2}s", 0.15 * i as f64)
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class=overlay_class>
            <div class="loading-screen__grid"></div>
            {orbs}
            <div class="loading-screen__content">
                <div class="loading-screen__logo">{config::LOGO}</div>
                <p class="loading-screen__text">
                    {move || LOADING_TEXTS[text_index.get()]} "..."
                </p>
                <div class="loading-screen__bar">
                    <div
                        class="loading-screen__fill"
                        style:width=move || format!("{}%", progress.get())
                    ></div>
                </div>
                <p class="loading-screen__percent">{move || progress.get()} "%"</p>
                <div class="loading-screen__dots">{dots}</div>
                <p class="loading-screen__footer">"Crafting Excellence"</p>
            </div>
        </div>
    }
}
