//! Layered ambient backdrop rendered behind every section.
//!
//! Orbs, drifting particles, a grid, two spotlights, and a vignette. All
//! motion comes from CSS keyframes; the component only decides how many
//! layers to emit, thinning them out in low-power mode.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scatter::{scatter_percent, scatter_range};

const ORB_COLORS: &[&str] = &["#a855f7", "#ec4899", "#f59e0b", "#8b5cf6", "#58a6ff", "#00ff88"];

const FULL_ORBS: usize = 8;
const LOW_POWER_ORBS: usize = 3;
const FULL_PARTICLES: usize = 30;
const LOW_POWER_PARTICLES: usize = 10;

pub fn orb_count(low_power: bool) -> usize {
    if low_power { LOW_POWER_ORBS } else { FULL_ORBS }
}

pub fn particle_count(low_power: bool) -> usize {
    if low_power { LOW_POWER_PARTICLES } else { FULL_PARTICLES }
}

/// Fixed decorative backdrop for one section.
#[component]
pub fn AmbientBackdrop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let orbs = move || {
        (0..orb_count(ui.get().low_power))
            .map(|i| {
                let seed = i as u64;
                let color = ORB_COLORS[i % ORB_COLORS.len()];
                view! {
                    <div
                        class="backdrop__orb"
                        style:background=format!("radial-gradient(circle, {color}, transparent)")
                        style:left=scatter_percent(seed.wrapping_mul(31) + 5)
                        style:top=scatter_percent(seed.wrapping_mul(57) + 11)
                        style:animation-delay=format!("{:.1}s", 0.7 * i as f64)
                        style:animation-duration=format!("{:.1}s", 5.0 + 0.5 * i as f64)
                    ></div>
                }
            })
            .collect_view()
    };

    let particles = move || {
        (0..particle_count(ui.get().low_power))
            .map(|i| {
                let seed = i as u64;
                view! {
                    <div
                        class="backdrop__particle"
                        style:left=scatter_percent(seed.wrapping_mul(101) + 3)
                        style:top=scatter_percent(seed.wrapping_mul(131) + 17)
                        style:animation-delay=format!("{:.1}s", scatter_range(seed + 200, 0.0, 5.0))
                        style:animation-duration=format!("{:.1}s", scatter_range(seed + 300, 5.0, 10.0))
                    ></div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="backdrop">
            <div class="backdrop__base"></div>
            <div class="backdrop__mesh"></div>
            {orbs}
            {particles}
            <div class="backdrop__grid"></div>
            <div
                class="backdrop__spotlight"
                style:left="25%"
                style:top="0"
                style:background="radial-gradient(circle, #58a6ff, transparent 70%)"
            ></div>
            <div
                class="backdrop__spotlight"
                style:right="25%"
                style:bottom="0"
                style:background="radial-gradient(circle, #ec4899, transparent 70%)"
                style:animation-delay="2s"
                style:animation-duration="18s"
            ></div>
            <div class="backdrop__vignette"></div>
        </div>
    }
}
