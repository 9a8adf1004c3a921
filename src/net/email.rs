//! Email delivery flow for the contact form.
//!
//! The provider is injected through the `EmailClient` trait so the flow can
//! run against a fake in native tests; the browser build plugs in
//! `net::emailjs::EmailJsClient`. Timers go through the `Delay` trait for
//! the same reason.
//!
//! ERROR HANDLING
//! ==============
//! Every failure funnels into `SendError` and is rendered for the user by
//! `failure_message`; nothing here panics or propagates past the submission
//! boundary. A readiness timeout is kept distinct from a provider rejection
//! so the log can tell them apart, but the user-facing message treats them
//! the same (a timeout just has no provider text to show).

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::time::Duration;

use serde::Serialize;

use crate::config;

/// Interval between readiness probes of the email client.
pub const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Number of post-check sleeps before the readiness wait gives up.
/// Together with the interval this bounds the wait at 5 seconds.
pub const READY_POLL_ATTEMPTS: u32 = 50;

/// How long the "Message Sent!" state is displayed before the form resets.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(3);

/// One outbound send, parameterized by the template fields the provider
/// expects. `reply_to` always mirrors `from_email`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

/// Why a submission attempt failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendError {
    /// The email client never became ready within the bounded wait.
    Unavailable,
    /// The provider rejected the send (or the call failed in transit --
    /// the two are indistinguishable here). Both fields are optional
    /// because the provider does not always supply them.
    Rejected {
        text: Option<String>,
        status: Option<u16>,
    },
}

/// An email-relay provider. `is_ready` reports whether the underlying
/// client can accept a send yet; `send` performs exactly one attempt.
pub trait EmailClient {
    fn is_ready(&self) -> bool;
    async fn send(&self, request: &SendRequest) -> Result<(), SendError>;
}

/// Timer source. Injected so tests can observe requested sleeps instead of
/// actually waiting.
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}

/// Wait for the client to report ready, polling at `READY_POLL_INTERVAL`
/// up to `READY_POLL_ATTEMPTS` sleeps. Returns false if the bound elapses.
pub async fn await_ready<C: EmailClient, D: Delay>(client: &C, delay: &D) -> bool {
    if client.is_ready() {
        return true;
    }
    for _ in 0..READY_POLL_ATTEMPTS {
        delay.sleep(READY_POLL_INTERVAL).await;
        if client.is_ready() {
            return true;
        }
    }
    false
}

/// Run one delivery attempt: bounded readiness wait, then a single send.
///
/// # Errors
///
/// `SendError::Unavailable` if the client never became ready,
/// `SendError::Rejected` if the provider turned the send down.
pub async fn deliver<C: EmailClient, D: Delay>(
    client: &C,
    delay: &D,
    request: &SendRequest,
) -> Result<(), SendError> {
    log::info!("starting contact submission from {}", request.from_email);
    if !await_ready(client, delay).await {
        log::warn!("email client not ready after bounded wait");
        return Err(SendError::Unavailable);
    }
    log::debug!(
        "email client ready, sending via service {} / template {}",
        config::EMAILJS_SERVICE_ID,
        config::EMAILJS_TEMPLATE_ID
    );
    match client.send(request).await {
        Ok(()) => {
            log::info!("contact email sent");
            Ok(())
        }
        Err(error) => {
            log::error!("contact email failed: {error:?}");
            Err(error)
        }
    }
}

/// Render a failure for the user: fixed prefix, the provider's text when it
/// supplied a non-empty one, and the direct-contact fallback address.
pub fn failure_message(error: &SendError) -> String {
    let mut message = String::from("Failed to send message. ");
    if let SendError::Rejected {
        text: Some(text), ..
    } = error
    {
        if !text.is_empty() {
            message.push_str(&format!("Error: {text}. "));
        }
    }
    message.push_str(&format!(
        "Please try emailing directly at {}",
        config::FALLBACK_EMAIL
    ));
    message
}

/// Scriptable fakes shared by the email-flow and controller tests.
#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use super::{Delay, EmailClient, SendError, SendRequest};

    /// Fake provider: becomes ready after a configurable number of probes
    /// and records every send it receives.
    pub struct FakeEmailClient {
        ready_after_checks: Cell<u32>,
        pub sends: RefCell<Vec<SendRequest>>,
        pub response: RefCell<Result<(), SendError>>,
    }

    impl FakeEmailClient {
        pub fn ready() -> Self {
            Self::ready_after(0)
        }

        /// Ready only once `is_ready` has been called `checks` times.
        pub fn ready_after(checks: u32) -> Self {
            Self {
                ready_after_checks: Cell::new(checks),
                sends: RefCell::new(Vec::new()),
                response: RefCell::new(Ok(())),
            }
        }

        pub fn never_ready() -> Self {
            Self::ready_after(u32::MAX)
        }

        pub fn rejecting(text: Option<&str>, status: Option<u16>) -> Self {
            let client = Self::ready();
            *client.response.borrow_mut() = Err(SendError::Rejected {
                text: text.map(str::to_owned),
                status,
            });
            client
        }
    }

    impl EmailClient for FakeEmailClient {
        fn is_ready(&self) -> bool {
            let remaining = self.ready_after_checks.get();
            if remaining == 0 {
                return true;
            }
            if remaining != u32::MAX {
                self.ready_after_checks.set(remaining - 1);
            }
            false
        }

        async fn send(&self, request: &SendRequest) -> Result<(), SendError> {
            self.sends.borrow_mut().push(request.clone());
            self.response.borrow().clone()
        }
    }

    /// Fake timer: returns immediately and records every requested sleep.
    #[derive(Default)]
    pub struct FakeDelay {
        pub sleeps: RefCell<Vec<Duration>>,
    }

    impl Delay for FakeDelay {
        async fn sleep(&self, duration: Duration) {
            self.sleeps.borrow_mut().push(duration);
        }
    }
}
