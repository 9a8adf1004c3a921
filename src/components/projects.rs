//! Projects carousel: a continuously scrolling marquee of project cards.
//!
//! The track holds three copies of the project list and a CSS keyframe
//! slides it left by exactly one copy's width, so the loop restarts
//! seamlessly. Hover pauses it on desktop, touch on mobile.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::background::AmbientBackdrop;
use crate::config;
use crate::state::ui::UiState;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mobile,
    Web,
    Backend,
}

impl Category {
    pub fn badge(self) -> &'static str {
        match self {
            Category::Mobile => "📱 Mobile",
            Category::Web => "🌐 Web",
            Category::Backend => "⚙ Backend",
        }
    }
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: [&'static str; 4],
    pub category: Category,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Enterprise Housing Management System",
        description: "A comprehensive housing contract renewal and management system for \
                      Federal Housing Corporation with triple-credential authentication, \
                      payment integration, and document management.",
        technologies: ["Flutter", "ASP.NET Core", "SQL Server", "TeleBirr API"],
        category: Category::Mobile,
        featured: true,
    },
    Project {
        title: "AI-Powered Math Assistant",
        description: "An offline AI assistant providing instant math help with pattern \
                      matching, beautiful UI, and comprehensive coverage of trigonometry, \
                      calculus, and algebra.",
        technologies: ["Flutter", "Pattern Matching", "Offline AI", "Material Design"],
        category: Category::Mobile,
        featured: true,
    },
    Project {
        title: "E-Commerce Platform",
        description: "Modern e-commerce platform with real-time inventory management, \
                      payment processing, and advanced analytics dashboard.",
        technologies: ["Next.js", "React.js", "MongoDB", "Stripe API"],
        category: Category::Web,
        featured: false,
    },
    Project {
        title: "Task Management API",
        description: "RESTful API for task management with user authentication, real-time \
                      notifications, and comprehensive project tracking.",
        technologies: ["ASP.NET Core", "SQL Server", "SignalR", "JWT"],
        category: Category::Backend,
        featured: false,
    },
    Project {
        title: "Real Estate Dashboard",
        description: "Interactive dashboard for real estate management with property \
                      listings, analytics, and client management system.",
        technologies: ["React.js", "Node.js", "PostgreSQL", "Chart.js"],
        category: Category::Web,
        featured: false,
    },
    Project {
        title: "Inventory Management System",
        description: "Comprehensive inventory tracking system with barcode scanning, \
                      automated reordering, and detailed reporting.",
        technologies: ["Flutter", "Firebase", "Cloud Functions", "ML Kit"],
        category: Category::Mobile,
        featured: false,
    },
];

pub const CARD_WIDTH_MOBILE: f64 = 350.0;
pub const CARD_WIDTH_DESKTOP: f64 = 400.0;
pub const CARD_MARGIN: f64 = 32.0;
pub const LOOP_SECONDS_MOBILE: u32 = 30;
pub const LOOP_SECONDS_DESKTOP: u32 = 40;
pub const TRACK_COPIES: usize = 3;

/// Pixels the track must shift left for one seamless loop.
pub fn marquee_shift(mobile: bool) -> f64 {
    let width = if mobile { CARD_WIDTH_MOBILE } else { CARD_WIDTH_DESKTOP };
    -((width + CARD_MARGIN) * PROJECTS.len() as f64)
}

pub fn marquee_duration(mobile: bool) -> u32 {
    if mobile { LOOP_SECONDS_MOBILE } else { LOOP_SECONDS_DESKTOP }
}

fn project_card(project: &'static Project, mobile: bool) -> impl IntoView {
    let width = if mobile { CARD_WIDTH_MOBILE } else { CARD_WIDTH_DESKTOP };
    let techs = project
        .technologies
        .iter()
        .take(3)
        .map(|tech| view! { <span class="tag">{*tech}</span> })
        .collect_view();
    let overflow = project.technologies.len().saturating_sub(3);
    view! {
        <article class="project-card glass" style:width=format!("{width}px")>
            <div class="project-card__banner">
                <Show when=move || project.featured>
                    <span class="project-card__featured">"⭐ Featured"</span>
                </Show>
                <span class="project-card__category">{project.category.badge()}</span>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div>
                    {techs}
                    <Show when={move || overflow > 0}>
                        <span class="tag">"+" {overflow}</span>
                    </Show>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let paused = RwSignal::new(false);

    let track_style = move || {
        let mobile = ui.get().mobile;
        format!(
            "--marquee-shift: {}px; --marquee-duration: {}s",
            marquee_shift(mobile),
            marquee_duration(mobile),
        )
    };

    let cards = move || {
        let mobile = ui.get().mobile;
        (0..TRACK_COPIES)
            .flat_map(|_| PROJECTS.iter())
            .map(|project| project_card(project, mobile))
            .collect_view()
    };

    view! {
        <section id="projects" class="section">
            <AmbientBackdrop />
            <div class="section__inner">
                <h2 class="section__title">
                    "My " <span class="gradient-text">"Projects"</span>
                </h2>
                <p class="section__subtitle">
                    "A showcase of my recent work and personal projects that demonstrate my \
                     skills and passion for development"
                </p>
                <Show when=move || !ui.get().mobile>
                    <p class="section__subtitle">"✨ Hover to pause • Continuously scrolling"</p>
                </Show>
            </div>
            <div
                class="marquee"
                on:mouseenter=move |_| {
                    if !ui.get_untracked().mobile {
                        paused.set(true);
                    }
                }
                on:mouseleave=move |_| {
                    if !ui.get_untracked().mobile {
                        paused.set(false);
                    }
                }
                on:touchstart=move |_| {
                    if ui.get_untracked().mobile {
                        paused.set(true);
                    }
                }
                on:touchend=move |_| {
                    if ui.get_untracked().mobile {
                        paused.set(false);
                    }
                }
            >
                <div class="marquee__edge marquee__edge--left"></div>
                <div class="marquee__edge marquee__edge--right"></div>
                <div
                    class=move || {
                        if paused.get() {
                            "marquee__track marquee__track--paused"
                        } else {
                            "marquee__track"
                        }
                    }
                    style=track_style
                >
                    {cards}
                </div>
            </div>
            <div class="section__inner">
                <a
                    class="cta-button"
                    href=config::GITHUB_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View All Projects on GitHub"
                </a>
            </div>
        </section>
    }
}
