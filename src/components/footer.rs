//! Page footer: brand blurb, quick links, contact details, credit line.

use leptos::prelude::*;

use crate::config;
use crate::util::scroll::scroll_to_section;

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("About", "about"),
    ("Projects", "projects"),
    ("Skills", "skills"),
    ("Contact", "contact"),
];

fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        2026
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let quick_links = QUICK_LINKS
        .iter()
        .map(|(label, anchor)| {
            view! {
                <li>
                    <button class="footer__link" on:click=move |_| scroll_to_section(anchor)>
                        "→ " {*label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__grid">
                    <div>
                        <h3 class="footer__brand gradient-text">{config::OWNER_NAME}</h3>
                        <p class="footer__blurb">
                            "Full Stack Developer passionate about creating innovative solutions \
                             and beautiful user experiences."
                        </p>
                        <div class="social-row">
                            <a
                                class="social-row__link"
                                href=config::GITHUB_URL
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "GitHub"
                            </a>
                            <a
                                class="social-row__link"
                                href=config::LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "LinkedIn"
                            </a>
                            <a
                                class="social-row__link"
                                href=config::TWITTER_URL
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Twitter"
                            </a>
                            <a
                                class="social-row__link"
                                href=format!("mailto:{}", config::CONTACT_EMAIL)
                            >
                                "Email"
                            </a>
                        </div>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Quick Links"</h4>
                        <ul>{quick_links}</ul>
                    </div>
                    <div>
                        <h4 class="footer__heading">"Get In Touch"</h4>
                        <ul>
                            <li>
                                <a
                                    class="footer__link"
                                    href=format!("mailto:{}", config::CONTACT_EMAIL)
                                >
                                    "✉ " {config::CONTACT_EMAIL}
                                </a>
                            </li>
                            <li>"📍 " {config::CONTACT_LOCATION}</li>
                            <li>"📱 " {config::CONTACT_PHONE}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer__divider"></div>
                <div class="footer__bottom">
                    <p>
                        "© " {current_year()} " " {config::OWNER_NAME}
                        ". Made with ♥ and lots of ☕"
                    </p>
                    <p>"Built with Rust • Leptos • WebAssembly"</p>
                </div>
            </div>
            <div class="footer__wave">
                <div class="footer__wave-glint"></div>
            </div>
        </footer>
    }
}
