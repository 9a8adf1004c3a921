//! About section: journey story, experience cards, skill bars.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::background::AmbientBackdrop;

/// Named proficiency shown as a horizontal bar.
pub struct SkillBar {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub const SKILL_BARS: &[SkillBar] = &[
    SkillBar { name: "Flutter", level: 95, color: "#02569B" },
    SkillBar { name: "Next.js", level: 90, color: "#000000" },
    SkillBar { name: "React.js", level: 88, color: "#61DAFB" },
    SkillBar { name: "C#", level: 85, color: "#239120" },
    SkillBar { name: "ASP.NET", level: 82, color: "#512BD4" },
    SkillBar { name: "Supabase", level: 80, color: "#3ECF8E" },
    SkillBar { name: "Firebase", level: 85, color: "#FFCA28" },
    SkillBar { name: "MongoDB", level: 78, color: "#47A248" },
    SkillBar { name: "SQL Server", level: 80, color: "#CC2927" },
];

pub struct Experience {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 3],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        icon: "📱",
        title: "Mobile Development",
        description: "Specialized in Flutter development, creating cross-platform mobile \
                      applications with beautiful UIs and seamless performance.",
        highlights: ["Cross-platform apps", "Native performance", "Custom animations"],
    },
    Experience {
        icon: "🌐",
        title: "Web Development",
        description: "Full-stack web development using modern frameworks like Next.js, \
                      React.js, and ASP.NET for scalable applications.",
        highlights: ["Responsive design", "SEO optimization", "Performance tuning"],
    },
    Experience {
        icon: "🗄",
        title: "Database Design",
        description: "Expert in designing and optimizing databases using SQL Server, \
                      MongoDB, and cloud solutions like Supabase.",
        highlights: ["Schema design", "Query optimization", "Data modeling"],
    },
    Experience {
        icon: "⌨",
        title: "Backend Systems",
        description: "Building robust backend systems with ASP.NET Core, implementing \
                      secure APIs and microservices architecture.",
        highlights: ["RESTful APIs", "Microservices", "Security implementation"],
    },
];

const JOURNEY: &[&str] = &[
    "I'm a passionate full-stack developer with expertise in modern web and mobile \
     technologies. My journey began with a curiosity about how digital products work, \
     which evolved into a deep love for creating innovative solutions that make a real \
     impact.",
    "With extensive experience in Flutter for mobile development, Next.js and React.js \
     for web applications, and ASP.NET for robust backend systems, I bring a \
     comprehensive approach to every project.",
    "I believe in writing clean, maintainable code and creating user experiences that \
     are not just functional, but delightful. When I'm not coding, you'll find me \
     exploring new technologies and contributing to open-source projects.",
];

#[component]
pub fn About() -> impl IntoView {
    let experience_cards = EXPERIENCES
        .iter()
        .map(|experience| {
            let tags = experience
                .highlights
                .iter()
                .map(|highlight| view! { <span class="tag">{*highlight}</span> })
                .collect_view();
            view! {
                <div class="experience-card glass">
                    <h4 class="experience-card__title">
                        {experience.icon} " " {experience.title}
                    </h4>
                    <p class="experience-card__description">{experience.description}</p>
                    <div>{tags}</div>
                </div>
            }
        })
        .collect_view();

    let skill_bars = SKILL_BARS
        .iter()
        .map(|skill| {
            view! {
                <div class="skill-bar">
                    <div class="skill-bar__header">
                        <span class="skill-bar__name">{skill.name}</span>
                        <span class="skill-bar__level">{skill.level} "%"</span>
                    </div>
                    <div class="skill-bar__track">
                        <div
                            class="skill-bar__fill"
                            style:width=format!("{}%", skill.level)
                            style:background=skill.color
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let journey = JOURNEY
        .iter()
        .map(|paragraph| view! { <p>{*paragraph}</p> })
        .collect_view();

    view! {
        <section id="about" class="section">
            <AmbientBackdrop />
            <div class="section__inner">
                <h2 class="section__title">"About " <span class="gradient-text">"Me"</span></h2>
                <p class="section__subtitle">
                    "Passionate developer with a love for creating innovative solutions and \
                     beautiful user experiences"
                </p>
                <div class="story-card glass">
                    <h3>"♥ My Journey"</h3>
                    {journey}
                </div>
                <h3 class="section__title">
                    "What I " <span class="gradient-text">"Do"</span>
                </h3>
                <div class="card-grid">{experience_cards}</div>
                <h3 class="section__title">
                    "Technical " <span class="gradient-text">"Skills"</span>
                </h3>
                <div class="card-grid">{skill_bars}</div>
            </div>
        </section>
    }
}
