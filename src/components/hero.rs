//! Landing section: greeting, name, rotating job title, CTAs.
//!
//! The job title cycles every four seconds through a fixed table of roles,
//! each paired with its own gradient and glow color. Decorative layers
//! (floating shapes, falling code, the animated grid) only render on
//! desktop; mobile keeps the text and a few static shapes.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::components::background::AmbientBackdrop;
use crate::state::ui::UiState;
use crate::util::scatter::{scatter_percent, scatter_range};
use crate::util::scroll::scroll_to_section;

pub const JOB_TITLES: &[&str] = &[
    "Full Stack Developer",
    "Mobile App Developer",
    "Frontend Specialist",
    "Backend Engineer",
    "Database Expert",
    "Video Editor",
    "Motion Designer",
    "Upwork Freelancer",
];

/// CSS gradient behind each job title, index-matched to `JOB_TITLES`.
pub const TITLE_GRADIENTS: &[&str] = &[
    "linear-gradient(90deg, #22d3ee, #3b82f6, #9333ea)",
    "linear-gradient(90deg, #ec4899, #ef4444, #eab308)",
    "linear-gradient(90deg, #4ade80, #06b6d4, #3b82f6)",
    "linear-gradient(90deg, #a855f7, #ec4899, #ef4444)",
    "linear-gradient(90deg, #facc15, #f97316, #ef4444)",
    "linear-gradient(90deg, #3b82f6, #a855f7, #ec4899)",
    "linear-gradient(90deg, #f97316, #ef4444, #ec4899)",
    "linear-gradient(90deg, #2dd4bf, #06b6d4, #3b82f6)",
];

/// Glow color for each job title, index-matched to `JOB_TITLES`.
pub const TITLE_GLOWS: &[&str] = &[
    "#58a6ff", "#ff6b9d", "#00ff88", "#a855f7", "#ffd700", "#8b5cf6", "#f97316", "#14b8a6",
];

pub const TITLE_ROTATE_MS: u32 = 4000;

pub fn next_title_index(index: usize) -> usize {
    (index + 1) % JOB_TITLES.len()
}

struct TechIcon {
    name: &'static str,
    symbol: &'static str,
    color: &'static str,
}

const TECH_ICONS: &[TechIcon] = &[
    TechIcon { name: "React", symbol: "⚛", color: "#61DAFB" },
    TechIcon { name: "Flutter", symbol: "📱", color: "#02569B" },
    TechIcon { name: "Next.js", symbol: "▲", color: "#FFFFFF" },
    TechIcon { name: "C#", symbol: "#", color: "#239120" },
    TechIcon { name: "Node.js", symbol: "🟢", color: "#339933" },
    TechIcon { name: "Database", symbol: "🗄", color: "#F29111" },
    TechIcon { name: "TypeScript", symbol: "📘", color: "#3178C6" },
    TechIcon { name: "API", symbol: "🔌", color: "#FF6B6B" },
];

const SHAPE_GLYPHS: &[&str] = &["◆", "●", "■", "▲", "★"];
const SHAPE_COLORS: &[&str] = &["#58a6ff", "#f78166", "#a5d6ff", "#ff6b9d", "#ffd700"];
const CODE_GLYPHS: &[&str] = &["{ }", "< />", "[ ]", "( )", "=>", "fn"];

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let title_index = RwSignal::new(0usize);

    #[cfg(feature = "csr")]
    {
        use gloo_timers::callback::Interval;

        let rotation = Interval::new(TITLE_ROTATE_MS, move || {
            title_index.update(|index| *index = next_title_index(*index));
        });
        on_cleanup(move || drop(rotation));
    }

    let shapes = move || {
        let mobile = ui.get().mobile;
        let count = if mobile { 3 } else { 12 };
        (0..count as u64)
            .map(|i| {
                let glyph = SHAPE_GLYPHS[i as usize % SHAPE_GLYPHS.len()];
                let color = SHAPE_COLORS[i as usize % SHAPE_COLORS.len()];
                view! {
                    <span
                        class=if mobile { "hero__shape hero__shape--static" } else { "hero__shape" }
                        style:left=scatter_percent(i.wrapping_mul(41) + 7)
                        style:top=scatter_percent(i.wrapping_mul(67) + 13)
                        style:color=color
                        style:animation-delay=format!("{:.1}s", 0.3 * i as f64)
                    >
                        {glyph}
                    </span>
                }
            })
            .collect_view()
    };

    let falling_code = move || {
        if ui.get().mobile {
            return None;
        }
        Some(
            (0..12u64)
                .map(|i| {
                    let glyph = CODE_GLYPHS[i as usize % CODE_GLYPHS.len()];
                    view! {
                        <span
                            class="hero__code"
                            style:left=scatter_percent(i.wrapping_mul(83) + 19)
                            style:animation-delay=format!(
                                "{:.1}s",
                                scatter_range(i + 400, 0.0, 5.0),
                            )
                            style:animation-duration=format!(
                                "{:.1}s",
                                scatter_range(i + 500, 8.0, 13.0),
                            )
                        >
                            {glyph}
                        </span>
                    }
                })
                .collect_view(),
        )
    };

    let tech_field = move || {
        if ui.get().mobile {
            return None;
        }
        Some(
            TECH_ICONS
                .iter()
                .enumerate()
                .map(|(index, icon)| {
                    view! {
                        <span
                            class="hero__tech-icon"
                            title=icon.name
                            style:left=format!("{}%", 10 + (index % 4) * 22)
                            style:top=format!("{}%", 20 + (index / 4) * 30)
                            style:animation-duration=format!("{:.1}s", 5.0 + 0.5 * index as f64)
                            style=("--glow", icon.color)
                        >
                            {icon.symbol}
                        </span>
                    }
                })
                .collect_view(),
        )
    };

    let title_style = move || {
        let index = title_index.get();
        format!(
            "background-image: {}; --glow: {}",
            TITLE_GRADIENTS[index], TITLE_GLOWS[index],
        )
    };

    view! {
        <section id="home" class="hero">
            <AmbientBackdrop />
            {shapes}
            {falling_code}
            <Show when=move || !ui.get().mobile>
                <div class="hero__grid"></div>
            </Show>
            <div class="hero__tech-field">{tech_field}</div>
            <div class="hero__content">
                <p class="hero__greeting">"✦ Hello, I'm ⚡"</p>
                <h1 class="hero__name gradient-text">"Abdilaziz Nasir"</h1>
                <div class="hero__title-row">
                    <span class="hero__title-prefix">"I'm a"</span>
                    <span class="hero__title" style=title_style>
                        {move || JOB_TITLES[title_index.get()]}
                    </span>
                </div>
                <p class="hero__description">
                    "Passionate about creating innovative digital solutions with expertise in "
                    "Flutter, Next.js, React.js, and ASP.NET. Let's build something amazing "
                    "together! 🚀"
                </p>
                <div class="hero__cta-row">
                    <button
                        class="hero__cta hero__cta--primary"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work →"
                    </button>
                    <button
                        class="hero__cta hero__cta--ghost"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>
                <button class="hero__scroll-hint" on:click=move |_| scroll_to_section("about")>
                    "Scroll to explore" <br /> "⌄"
                </button>
            </div>
        </section>
    }
}
