//! Design and creativity section: video showcase, design portfolio,
//! services, and editing expertise bars.
//!
//! Like counts on portfolio cards start from a deterministic per-card
//! seed instead of a random draw, so the rendered page is stable.

#[cfg(test)]
#[path = "design_test.rs"]
mod design_test;

use leptos::prelude::*;

use crate::util::scatter::scatter01;
use crate::util::scroll::scroll_to_section;

pub struct Video {
    pub src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VIDEOS: &[Video] = &[
    Video {
        src: "/Image/video/fruite_build.mp4",
        title: "Fruit Build Animation",
        description: "Dynamic 3D fruit building animation",
    },
    Video {
        src: "/Image/video/Intros.mp4",
        title: "Creative Intros",
        description: "Stunning intro animations",
    },
    Video {
        src: "/Image/video/Neon_Motion_graphics.mp4",
        title: "Neon Motion Graphics",
        description: "Futuristic neon motion design",
    },
];

pub struct Design {
    pub src: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

pub const DESIGNS: &[Design] = &[
    Design { src: "/Image/design/1.jpeg", title: "Video Thumbnail Design", category: "Thumbnail" },
    Design { src: "/Image/design/2.jpeg", title: "Creative Video Design", category: "Graphics" },
    Design { src: "/Image/design/azi.png", title: "Brand Video Design", category: "Branding" },
    Design {
        src: "/Image/design/New Design (1).png",
        title: "Modern Video Layout",
        category: "Layout",
    },
    Design { src: "/Image/design/thumbnail.png", title: "YouTube Thumbnail", category: "Thumbnail" },
    Design { src: "/Image/design/UI.png", title: "Video UI Design", category: "Interface" },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: [&'static str; 4],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Video Editing",
        description: "Professional video editing for YouTube, social media, and corporate \
                      content",
        icon: "🎬",
        features: ["Color Correction", "Audio Mixing", "Transitions", "Effects"],
    },
    Service {
        title: "Motion Graphics",
        description: "Eye-catching animations and motion design for brands and content \
                      creators",
        icon: "🎞",
        features: ["2D Animation", "3D Elements", "Logo Animation", "Kinetic Typography"],
    },
    Service {
        title: "Post Production",
        description: "Complete post-production services from raw footage to final delivery",
        icon: "✂",
        features: ["Sound Design", "VFX", "Color Grading", "Final Mastering"],
    },
];

pub struct EditingSkill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub const EDITING_SKILLS: &[EditingSkill] = &[
    EditingSkill { name: "Adobe Premiere Pro", level: 95, color: "#9999FF" },
    EditingSkill { name: "After Effects", level: 90, color: "#9999FF" },
    EditingSkill { name: "DaVinci Resolve", level: 85, color: "#FF6B6B" },
    EditingSkill { name: "Final Cut Pro", level: 80, color: "#A8DADC" },
    EditingSkill { name: "Motion Graphics", level: 92, color: "#F78166" },
    EditingSkill { name: "Color Grading", level: 88, color: "#58A6FF" },
];

/// Starting like count for a portfolio card, in 20..=119.
pub fn seeded_likes(seed: u64) -> u32 {
    20 + (scatter01(seed) * 100.0) as u32
}

fn video_card(video: &'static Video) -> impl IntoView {
    view! {
        <article class="video-card glass">
            <div class="video-card__frame">
                <video src=video.src loop=true muted=true playsinline=true></video>
                <span class="video-card__play">"▶"</span>
            </div>
            <div class="video-card__body">
                <h3>{video.title}</h3>
                <p>{video.description}</p>
            </div>
        </article>
    }
}

fn design_card(index: usize, design: &'static Design) -> impl IntoView {
    let likes = RwSignal::new(seeded_likes(index as u64));
    let liked = RwSignal::new(false);
    let toggle_like = move |_| {
        let was_liked = liked.get_untracked();
        liked.set(!was_liked);
        likes.update(|count| {
            if was_liked {
                *count -= 1;
            } else {
                *count += 1;
            }
        });
    };
    view! {
        <article class="design-card glass">
            <div class="design-card__image">
                <img src=design.src alt=design.title />
            </div>
            <div class="design-card__body">
                <div class="design-card__meta">
                    <span class="design-card__category">{design.category}</span>
                    <button
                        class=move || {
                            if liked.get() {
                                "design-card__likes design-card__likes--liked"
                            } else {
                                "design-card__likes"
                            }
                        }
                        on:click=toggle_like
                    >
                        "♥ " {move || likes.get()}
                    </button>
                </div>
                <h3>{design.title}</h3>
            </div>
        </article>
    }
}

#[component]
pub fn DesignCreativity() -> impl IntoView {
    let videos = VIDEOS.iter().map(video_card).collect_view();

    let designs = DESIGNS
        .iter()
        .enumerate()
        .map(|(index, design)| design_card(index, design))
        .collect_view();

    let services = SERVICES
        .iter()
        .map(|service| {
            let features = service
                .features
                .iter()
                .map(|feature| {
                    view! { <div class="service-card__feature">"✔ " {*feature}</div> }
                })
                .collect_view();
            view! {
                <article class="service-card glass">
                    <div>{service.icon}</div>
                    <h4>{service.title}</h4>
                    <p>{service.description}</p>
                    {features}
                </article>
            }
        })
        .collect_view();

    let expertise = EDITING_SKILLS
        .iter()
        .map(|skill| {
            view! {
                <div class="skill-bar">
                    <div class="skill-bar__header">
                        <span class="skill-bar__name">{skill.name}</span>
                        <span class="skill-bar__level" style:color=skill.color>
                            {skill.level} "%"
                        </span>
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

    view! {
        <section id="design" class="section">
            <div class="section__inner">
                <h2 class="section__title design__heading">
                    "Video Editing & Motion Graphics"
                </h2>
                <p class="section__subtitle">
                    "Professional video editing services transforming raw footage into \
                     compelling stories. Specializing in motion graphics, color grading, and \
                     post-production excellence."
                </p>
                <div class="card-grid">{videos}</div>
                <h3 class="section__title design__heading">"Video Editing Portfolio"</h3>
                <p class="section__subtitle">
                    "Thumbnails, graphics, and visual designs created for video projects"
                </p>
                <div class="card-grid">{designs}</div>
                <h3 class="section__title design__heading">"Services Offered"</h3>
                <div class="card-grid">{services}</div>
                <h3 class="section__title design__heading">"Technical Expertise"</h3>
                <div class="card-grid glass-strong">{expertise}</div>
                <div class="design__cta">
                    <button class="cta-button" on:click=move |_| scroll_to_section("contact")>
                        "🚀 Let's Create Something Amazing ✨"
                    </button>
                </div>
            </div>
        </section>
    }
}
