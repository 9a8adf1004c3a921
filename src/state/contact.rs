//! Contact form state and submission controller.
//!
//! The controller owns the four field values and the phase machine
//! `idle -> submitting -> {submitted -> idle (timed), idle (on error)}`.
//! It never retries on its own, and the submit affordance is a no-op
//! anywhere but a completed form in the idle phase.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config;
use crate::net::email::{self, Delay, EmailClient, SendRequest};

/// Where the form currently is in the submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    /// Transient: auto-expires back to `Idle` after the display delay.
    Submitted,
}

impl SubmitPhase {
    /// Label shown on the submit button.
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Submitting => "Sending...",
            SubmitPhase::Submitted => "Message Sent!",
        }
    }
}

/// The four user-entered fields. All required; whitespace-only counts as
/// empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// True once every required field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.subject.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Snapshot the form into a provider payload. Field values are copied
    /// verbatim; `reply_to` mirrors the sender's email.
    pub fn to_request(&self) -> SendRequest {
        SendRequest {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            to_name: config::MAIL_TO_NAME.to_owned(),
            reply_to: self.email.clone(),
        }
    }
}

/// Reactive handle on the contact form, created by the contact section and
/// threaded into its inputs and submit handler.
#[derive(Clone, Copy)]
pub struct ContactController {
    pub form: RwSignal<ContactForm>,
    pub phase: RwSignal<SubmitPhase>,
}

impl ContactController {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContactForm::default()),
            phase: RwSignal::new(SubmitPhase::Idle),
        }
    }

    /// The submit affordance is live only for a complete form at rest.
    /// Also the re-entry guard: a second submit while one is in flight
    /// (or while the success state is displayed) does nothing.
    pub fn can_submit(&self) -> bool {
        self.phase.get_untracked() == SubmitPhase::Idle
            && self.form.get_untracked().is_complete()
    }

    /// Run one submission attempt against the injected client and timer.
    ///
    /// On success the phase passes through `Submitted`, holds for
    /// `SUCCESS_RESET_DELAY`, then resets to `Idle` with the fields
    /// cleared. On failure the phase reverts to `Idle`, the fields are
    /// kept, and the user-facing message is returned. `alive` cancels the
    /// delayed reset when the owning component is torn down mid-wait.
    ///
    /// # Errors
    ///
    /// The rendered failure message, ready to show the user.
    pub async fn submit<C: EmailClient, D: Delay>(
        &self,
        client: &C,
        delay: &D,
        alive: &AtomicBool,
    ) -> Result<(), String> {
        if !self.can_submit() {
            return Ok(());
        }
        self.phase.set(SubmitPhase::Submitting);
        let request = self.form.get_untracked().to_request();

        match email::deliver(client, delay, &request).await {
            Ok(()) => {
                if !alive.load(Ordering::Relaxed) {
                    return Ok(());
                }
                self.phase.set(SubmitPhase::Submitted);
                delay.sleep(email::SUCCESS_RESET_DELAY).await;
                if alive.load(Ordering::Relaxed) {
                    self.phase.set(SubmitPhase::Idle);
                    self.form.set(ContactForm::default());
                }
                Ok(())
            }
            Err(error) => {
                if alive.load(Ordering::Relaxed) {
                    self.phase.set(SubmitPhase::Idle);
                }
                Err(email::failure_message(&error))
            }
        }
    }
}

impl Default for ContactController {
    fn default() -> Self {
        Self::new()
    }
}
