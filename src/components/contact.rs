//! Contact section: info cards, social links, and the submission form.
//!
//! The form hands its state to [`ContactController`]; this component only
//! wires DOM events to it and renders the phase. Failures surface through
//! a blocking alert with the controller's rendered message.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::background::AmbientBackdrop;
use crate::config;
use crate::state::contact::{ContactController, SubmitPhase};
use crate::util::scatter::{scatter_percent, scatter_range};

struct ContactInfo {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "✉",
        label: "Email",
        value: config::CONTACT_EMAIL,
        href: "mailto:harolife31@gmail.com",
    },
    ContactInfo {
        icon: "📞",
        label: "Phone",
        value: config::CONTACT_PHONE,
        href: "tel:+251902271650",
    },
    ContactInfo {
        icon: "📍",
        label: "Location",
        value: config::CONTACT_LOCATION,
        href: "#",
    },
];

struct SocialLink {
    name: &'static str,
    url: &'static str,
    color: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", url: config::GITHUB_URL, color: "#333" },
    SocialLink { name: "LinkedIn", url: config::LINKEDIN_URL, color: "#0077B5" },
    SocialLink { name: "Twitter", url: config::TWITTER_URL, color: "#1DA1F2" },
    SocialLink { name: "Upwork", url: config::UPWORK_URL, color: "#14A800" },
];

/// Text input with a floating label. The label rides on CSS
/// `:placeholder-shown`, so the placeholder must stay a single space.
#[component]
fn FormField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = false)] multiline: bool,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let label_view = move || {
        view! {
            <label class="form-field__label">
                {label} <span class="form-field__required">" *"</span>
            </label>
        }
    };
    view! {
        <div class="form-field">
            {if multiline {
                view! {
                    <textarea
                        class="form-field__input form-field__input--multiline"
                        placeholder=" "
                        rows="4"
                        required
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    ></textarea>
                    {label_view()}
                }
                    .into_any()
            } else {
                view! {
                    <input
                        class="form-field__input"
                        type=input_type
                        placeholder=" "
                        required
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                    {label_view()}
                }
                    .into_any()
            }}
        </div>
    }
}

#[cfg(feature = "csr")]
fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let controller = ContactController::new();

    // Cancels the timed success reset if this section unmounts mid-wait.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !controller.can_submit() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            use crate::net::emailjs::{BrowserDelay, EmailJsClient};

            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                if let Err(message) =
                    controller.submit(&EmailJsClient, &BrowserDelay, &alive).await
                {
                    show_alert(&message);
                }
            });
        }
    };

    let field = |get: fn(&crate::state::contact::ContactForm) -> &String,
                 set: fn(&mut crate::state::contact::ContactForm, String)| {
        let value = Signal::derive(move || controller.form.with(|form| get(form).clone()));
        let on_input =
            Callback::new(move |text: String| controller.form.update(|form| set(form, text)));
        (value, on_input)
    };
    let (name_value, name_input) = field(|form| &form.name, |form, text| form.name = text);
    let (email_value, email_input) = field(|form| &form.email, |form, text| form.email = text);
    let (subject_value, subject_input) =
        field(|form| &form.subject, |form, text| form.subject = text);
    let (message_value, message_input) =
        field(|form| &form.message, |form, text| form.message = text);

    let info_cards = CONTACT_INFO
        .iter()
        .map(|info| {
            view! {
                <a class="contact-card glass" href=info.href>
                    <span>{info.icon}</span>
                    <div>
                        <h3 class="contact-card__label">{info.label}</h3>
                        <p class="contact-card__value">{info.value}</p>
                    </div>
                </a>
            }
        })
        .collect_view();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            view! {
                <a
                    class="social-row__link"
                    href=social.url
                    target="_blank"
                    rel="noopener noreferrer"
                    style=("--accent", social.color)
                >
                    {social.name}
                </a>
            }
        })
        .collect_view();

    let particles = (0..20u64)
        .map(|i| {
            view! {
                <div
                    class="contact__particle"
                    style:left=scatter_percent(i.wrapping_mul(37) + 29)
                    style:top=scatter_percent(i.wrapping_mul(53) + 43)
                    style:animation-delay=format!("{:.1}s", scatter_range(i + 600, 0.0, 2.0))
                    style:animation-duration=format!("{:.1}s", scatter_range(i + 700, 2.0, 5.0))
                ></div>
            }
        })
        .collect_view();

    let button_class = move || match controller.phase.get() {
        SubmitPhase::Idle => "submit-button",
        SubmitPhase::Submitting => "submit-button submit-button--submitting",
        SubmitPhase::Submitted => "submit-button submit-button--submitted",
    };

    view! {
        <section id="contact" class="section">
            <AmbientBackdrop />
            {particles}
            <div class="section__inner">
                <h2 class="section__title">
                    "Get In " <span class="gradient-text">"Touch"</span>
                </h2>
                <p class="section__subtitle">
                    "Ready to bring your ideas to life? Let's discuss your project and create \
                     something amazing together!"
                </p>
                <div class="contact-form__grid">
                    <div>
                        <h3>"Let's Start a Conversation"</h3>
                        <p>
                            "I'm always excited to work on new projects and collaborate with \
                             amazing people. Whether you have a specific project in mind or just \
                             want to chat about technology, feel free to reach out!"
                        </p>
                        {info_cards}
                        <h4>"Follow Me"</h4>
                        <div class="social-row">{socials}</div>
                    </div>
                    <form class="contact-form glass-strong" on:submit=on_submit>
                        <h3>"Send Me a Message"</h3>
                        <FormField label="Your Name" value=name_value on_input=name_input />
                        <FormField
                            label="Email Address"
                            input_type="email"
                            value=email_value
                            on_input=email_input
                        />
                        <FormField label="Subject" value=subject_value on_input=subject_input />
                        <FormField
                            label="Your Message"
                            multiline=true
                            value=message_value
                            on_input=message_input
                        />
                        <button
                            type="submit"
                            class=button_class
                            disabled=move || controller.phase.get() != SubmitPhase::Idle
                        >
                            <Show when=move || {
                                controller.phase.get() == SubmitPhase::Submitting
                            }>
                                <span class="submit-button__spinner"></span>
                            </Show>
                            {move || controller.phase.get().label()}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
