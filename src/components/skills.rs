//! Skills section: stats banner and circular proficiency gauges.
//!
//! Each gauge is an SVG ring whose stroke offset encodes the proficiency
//! level; the fill sweep itself is a CSS transition.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::components::background::AmbientBackdrop;
use crate::util::scroll::scroll_to_section;

pub struct Gauge {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub gauges: [Gauge; 5],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        icon: "🎨",
        gauges: [
            Gauge { name: "React.js", level: 88, color: "#61DAFB" },
            Gauge { name: "Next.js", level: 90, color: "#000000" },
            Gauge { name: "Flutter", level: 95, color: "#02569B" },
            Gauge { name: "TypeScript", level: 85, color: "#3178C6" },
            Gauge { name: "Tailwind CSS", level: 90, color: "#06B6D4" },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        icon: "⚙",
        gauges: [
            Gauge { name: "ASP.NET Core", level: 82, color: "#512BD4" },
            Gauge { name: "C#", level: 85, color: "#239120" },
            Gauge { name: "Node.js", level: 75, color: "#339933" },
            Gauge { name: "RESTful APIs", level: 88, color: "#FF6B35" },
            Gauge { name: "GraphQL", level: 70, color: "#E10098" },
        ],
    },
    SkillCategory {
        title: "Database & Cloud",
        icon: "☁",
        gauges: [
            Gauge { name: "SQL Server", level: 80, color: "#CC2927" },
            Gauge { name: "MongoDB", level: 78, color: "#47A248" },
            Gauge { name: "Firebase", level: 85, color: "#FFCA28" },
            Gauge { name: "Supabase", level: 80, color: "#3ECF8E" },
            Gauge { name: "PostgreSQL", level: 75, color: "#336791" },
        ],
    },
    SkillCategory {
        title: "Tools & Technologies",
        icon: "🛠",
        gauges: [
            Gauge { name: "Git & GitHub", level: 90, color: "#F05032" },
            Gauge { name: "Docker", level: 70, color: "#2496ED" },
            Gauge { name: "VS Code", level: 95, color: "#007ACC" },
            Gauge { name: "Figma", level: 75, color: "#F24E1E" },
            Gauge { name: "Postman", level: 85, color: "#FF6C37" },
        ],
    },
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Years of Experience", value: "3+", icon: "📅" },
    Stat { label: "Projects Completed", value: "25+", icon: "🚀" },
    Stat { label: "Technologies Mastered", value: "15+", icon: "💻" },
    Stat { label: "Happy Clients", value: "10+", icon: "😊" },
];

pub const GAUGE_RADIUS: f64 = 45.0;

pub fn gauge_circumference() -> f64 {
    2.0 * PI * GAUGE_RADIUS
}

/// Stroke offset leaving `level` percent of the ring drawn.
pub fn gauge_offset(level: u8) -> f64 {
    let circumference = gauge_circumference();
    circumference - (f64::from(level) / 100.0) * circumference
}

fn gauge_view(gauge: &'static Gauge) -> impl IntoView {
    let circumference = gauge_circumference();
    view! {
        <div class="gauge">
            <div class="gauge__dial">
                <svg class="gauge__svg" viewBox="0 0 100 100">
                    <circle
                        cx="50"
                        cy="50"
                        r=GAUGE_RADIUS
                        stroke="#374151"
                        stroke-width="8"
                        fill="transparent"
                    ></circle>
                    <circle
                        cx="50"
                        cy="50"
                        r=GAUGE_RADIUS
                        stroke=gauge.color
                        stroke-width="8"
                        fill="transparent"
                        stroke-linecap="round"
                        stroke-dasharray=circumference
                        stroke-dashoffset=gauge_offset(gauge.level)
                    ></circle>
                </svg>
                <span class="gauge__value">{gauge.level} "%"</span>
            </div>
            <h4 class="gauge__name">{gauge.name}</h4>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let stats = STATS
        .iter()
        .map(|stat| {
            view! {
                <div>
                    <div>{stat.icon}</div>
                    <div class="stats-banner__value gradient-text">{stat.value}</div>
                    <div class="stats-banner__label">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    let categories = SKILL_CATEGORIES
        .iter()
        .map(|category| {
            let gauges = category.gauges.iter().map(gauge_view).collect_view();
            view! {
                <div class="skill-category glass">
                    <h3 class="skill-category__header">
                        {category.icon} " " {category.title}
                    </h3>
                    <div class="skill-category__grid">{gauges}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="section">
            <AmbientBackdrop />
            <div class="section__inner">
                <h2 class="section__title">
                    "Technical " <span class="gradient-text">"Skills"</span>
                </h2>
                <p class="section__subtitle">
                    "A comprehensive overview of my technical expertise and proficiency levels \
                     across various technologies"
                </p>
                <div class="stats-banner glass">{stats}</div>
                {categories}
                <p class="section__subtitle">
                    "Interested in working together? Let's discuss your project!"
                </p>
                <button class="cta-button" on:click=move |_| scroll_to_section("contact")>
                    "Start a Conversation"
                </button>
            </div>
        </section>
    }
}
