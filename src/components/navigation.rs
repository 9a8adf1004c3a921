//! Fixed top navigation with scroll-linked state.
//!
//! Tracks which section currently spans the viewport anchor line to
//! highlight the matching link, compresses the bar once the page scrolls,
//! and collapses the link row into a dropdown on mobile. A social rail and
//! a back-to-top button ride along on desktop.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::config;
use crate::state::ui::UiState;
use crate::util::scroll::{scroll_to_section, scroll_to_top};

/// One in-page navigation target: label, element id, accent color.
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
    pub color: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "home", color: "#00D9FF" },
    NavItem { label: "About", anchor: "about", color: "#FF6B9D" },
    NavItem { label: "Projects", anchor: "projects", color: "#FFD700" },
    NavItem { label: "Skills", anchor: "skills", color: "#00FF88" },
    NavItem { label: "Design", anchor: "design", color: "#A855F7" },
    NavItem { label: "Contact", anchor: "contact", color: "#FF6B6B" },
];

/// Scroll offset past which the bar switches to its compressed look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Viewport line (px from the top) a section must span to count as active.
pub const ANCHOR_LINE: f64 = 100.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Whether a section's bounding box spans the anchor line.
pub fn section_spans_anchor(top: f64, bottom: f64) -> bool {
    top <= ANCHOR_LINE && bottom >= ANCHOR_LINE
}

/// Pick the active anchor from measured section boxes, keeping the previous
/// choice when no section spans the anchor line (between sections, or past
/// the footer).
pub fn active_anchor(
    previous: &'static str,
    sections: impl Iterator<Item = (&'static str, f64, f64)>,
) -> &'static str {
    for (anchor, top, bottom) in sections {
        if section_spans_anchor(top, bottom) {
            return anchor;
        }
    }
    previous
}

#[cfg(feature = "csr")]
fn measure_sections() -> Vec<(&'static str, f64, f64)> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    NAV_ITEMS
        .iter()
        .filter_map(|item| {
            let rect = document.get_element_by_id(item.anchor)?.get_bounding_client_rect();
            Some((item.anchor, rect.top(), rect.bottom()))
        })
        .collect()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let scrolled = RwSignal::new(false);
    let active = RwSignal::new("home");
    let dropdown_open = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        use crate::util::scroll::scroll_y;

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scrolled.set(is_scrolled(scroll_y()));
            let current = active.get_untracked();
            active.set(active_anchor(current, measure_sections().into_iter()));
        });
        on_cleanup(move || handle.remove());
    }

    let go_to = move |anchor: &'static str| {
        dropdown_open.set(false);
        scroll_to_section(anchor);
    };

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let anchor = item.anchor;
            let color = item.color;
            view! {
                <button
                    class=move || {
                        if active.get() == anchor {
                            "nav__link nav__link--active"
                        } else {
                            "nav__link"
                        }
                    }
                    style=("--accent", color)
                    on:click=move |_| go_to(anchor)
                >
                    {item.label}
                </button>
            }
        })
        .collect_view();

    let dropdown_links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let anchor = item.anchor;
                let color = item.color;
                view! {
                    <button
                        class=move || {
                            if active.get() == anchor {
                                "nav__dropdown-link nav__dropdown-link--active"
                            } else {
                                "nav__dropdown-link"
                            }
                        }
                        style=("--accent", color)
                        on:click=move |_| go_to(anchor)
                    >
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="nav">
            <div class="nav__shell">
                <div class=move || {
                    if scrolled.get() { "nav__bar nav__bar--scrolled" } else { "nav__bar" }
                }>
                    <button class="nav__logo" on:click=move |_| go_to("home")>
                        {config::LOGO}
                    </button>
                    <nav class="nav__links">{links}</nav>
                    <button
                        class="nav__toggle"
                        on:click=move |_| dropdown_open.update(|open| *open = !*open)
                    >
                        {move || if dropdown_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || dropdown_open.get() && ui.get().mobile>
                    <div class="nav__dropdown">{dropdown_links()}</div>
                </Show>
            </div>
            <aside class="nav__social-rail">
                <a class="nav__social-link" href=config::GITHUB_URL target="_blank" rel="noopener">
                    "GH"
                </a>
                <a class="nav__social-link" href=config::LINKEDIN_URL target="_blank" rel="noopener">
                    "in"
                </a>
                <a class="nav__social-link" href=config::TWITTER_URL target="_blank" rel="noopener">
                    "X"
                </a>
                <a
                    class="nav__social-link"
                    href=format!("mailto:{}", config::CONTACT_EMAIL)
                >
                    "@"
                </a>
            </aside>
            <Show when=move || scrolled.get()>
                <button class="back-to-top" on:click=move |_| scroll_to_top()>
                    "↑"
                </button>
            </Show>
        </header>
    }
}
