use super::*;

use futures::executor::block_on;

use crate::net::email::fakes::{FakeDelay, FakeEmailClient};
use crate::net::email::{READY_POLL_ATTEMPTS, SUCCESS_RESET_DELAY, SendError};

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Let's talk".to_owned(),
    }
}

fn filled_controller() -> ContactController {
    let controller = ContactController::new();
    controller.form.set(filled_form());
    controller
}

// =============================================================
// Form completeness
// =============================================================

#[test]
fn empty_form_is_incomplete() {
    assert!(!ContactForm::default().is_complete());
}

#[test]
fn form_is_incomplete_while_any_field_is_empty() {
    for field in ["name", "email", "subject", "message"] {
        let mut form = filled_form();
        match field {
            "name" => form.name.clear(),
            "email" => form.email.clear(),
            "subject" => form.subject.clear(),
            _ => form.message.clear(),
        }
        assert!(!form.is_complete(), "{field} empty should be incomplete");
    }
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let mut form = filled_form();
    form.subject = "   ".to_owned();
    assert!(!form.is_complete());
}

#[test]
fn filled_form_is_complete() {
    assert!(filled_form().is_complete());
}

// =============================================================
// Payload snapshot
// =============================================================

#[test]
fn request_copies_fields_verbatim_and_mirrors_reply_to() {
    let request = filled_form().to_request();
    assert_eq!(request.from_name, "Jane Doe");
    assert_eq!(request.from_email, "jane@example.com");
    assert_eq!(request.subject, "Hi");
    assert_eq!(request.message, "Let's talk");
    assert_eq!(request.to_name, crate::config::MAIL_TO_NAME);
    assert_eq!(request.reply_to, "jane@example.com");
}

// =============================================================
// Phase machine
// =============================================================

#[test]
fn phase_labels_match_button_copy() {
    assert_eq!(SubmitPhase::Idle.label(), "Send Message");
    assert_eq!(SubmitPhase::Submitting.label(), "Sending...");
    assert_eq!(SubmitPhase::Submitted.label(), "Message Sent!");
}

#[test]
fn cannot_submit_with_incomplete_form() {
    let controller = ContactController::new();
    assert!(!controller.can_submit());
}

#[test]
fn can_submit_once_all_fields_are_filled() {
    let controller = filled_controller();
    assert!(controller.can_submit());
}

#[test]
fn cannot_submit_while_submitting_or_submitted() {
    let controller = filled_controller();
    controller.phase.set(SubmitPhase::Submitting);
    assert!(!controller.can_submit());
    controller.phase.set(SubmitPhase::Submitted);
    assert!(!controller.can_submit());
}

// =============================================================
// Submission flow
// =============================================================

#[test]
fn successful_submit_resets_to_idle_with_cleared_fields() {
    let controller = filled_controller();
    let client = FakeEmailClient::ready();
    let delay = FakeDelay::default();
    let alive = AtomicBool::new(true);

    let result = block_on(controller.submit(&client, &delay, &alive));
    assert_eq!(result, Ok(()));
    assert_eq!(client.sends.borrow().len(), 1);
    assert_eq!(client.sends.borrow()[0].from_name, "Jane Doe");
    assert_eq!(client.sends.borrow()[0].reply_to, "jane@example.com");
    assert_eq!(controller.phase.get_untracked(), SubmitPhase::Idle);
    assert_eq!(controller.form.get_untracked(), ContactForm::default());
    // The success display hold is the last requested sleep.
    assert_eq!(delay.sleeps.borrow().last(), Some(&SUCCESS_RESET_DELAY));
}

#[test]
fn readiness_timeout_reverts_to_idle_and_keeps_fields() {
    let controller = filled_controller();
    let client = FakeEmailClient::never_ready();
    let delay = FakeDelay::default();
    let alive = AtomicBool::new(true);

    let result = block_on(controller.submit(&client, &delay, &alive));
    let message = result.unwrap_err();
    assert!(message.contains(crate::config::FALLBACK_EMAIL));
    assert!(client.sends.borrow().is_empty());
    // Full polling budget was spent before giving up.
    assert_eq!(delay.sleeps.borrow().len(), READY_POLL_ATTEMPTS as usize);
    assert_eq!(controller.phase.get_untracked(), SubmitPhase::Idle);
    assert_eq!(controller.form.get_untracked(), filled_form());
}

#[test]
fn provider_rejection_surfaces_text_and_keeps_fields() {
    let controller = filled_controller();
    let client = FakeEmailClient::rejecting(Some("Invalid template"), Some(400));
    let delay = FakeDelay::default();
    let alive = AtomicBool::new(true);

    let message = block_on(controller.submit(&client, &delay, &alive)).unwrap_err();
    assert!(message.contains("Invalid template"));
    assert!(message.contains(crate::config::FALLBACK_EMAIL));
    assert_eq!(controller.phase.get_untracked(), SubmitPhase::Idle);
    assert_eq!(controller.form.get_untracked(), filled_form());
}

#[test]
fn submit_is_a_noop_while_already_submitting() {
    let controller = filled_controller();
    controller.phase.set(SubmitPhase::Submitting);
    let client = FakeEmailClient::ready();
    let delay = FakeDelay::default();
    let alive = AtomicBool::new(true);

    let result = block_on(controller.submit(&client, &delay, &alive));
    assert_eq!(result, Ok(()));
    assert!(client.sends.borrow().is_empty());
    assert_eq!(controller.phase.get_untracked(), SubmitPhase::Submitting);
}

#[test]
fn teardown_cancels_the_delayed_reset() {
    let controller = filled_controller();
    let client = FakeEmailClient::ready();
    let delay = FakeDelay::default();
    // Torn down before the submission resolves: no stale mutations.
    let alive = AtomicBool::new(false);

    let result = block_on(controller.submit(&client, &delay, &alive));
    assert_eq!(result, Ok(()));
    assert_eq!(client.sends.borrow().len(), 1);
    assert_eq!(controller.phase.get_untracked(), SubmitPhase::Submitting);
    assert_eq!(controller.form.get_untracked(), filled_form());
}

#[test]
fn end_to_end_jane_doe_scenario() {
    let controller = ContactController::new();
    controller.form.update(|form| form.name = "Jane Doe".to_owned());
    controller.form.update(|form| form.email = "jane@example.com".to_owned());
    controller.form.update(|form| form.subject = "Hi".to_owned());
    controller.form.update(|form| form.message = "Let's talk".to_owned());
    assert!(controller.can_submit());

    let client = FakeEmailClient::ready();
    let delay = FakeDelay::default();
    let alive = AtomicBool::new(true);
    assert_eq!(block_on(controller.submit(&client, &delay, &alive)), Ok(()));

    let sends = client.sends.borrow();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].from_name, "Jane Doe");
    assert_eq!(sends[0].from_email, "jane@example.com");
    assert_eq!(sends[0].subject, "Hi");
    assert_eq!(sends[0].message, "Let's talk");
    assert_eq!(sends[0].reply_to, "jane@example.com");
    assert_eq!(controller.phase.get_untracked(), SubmitPhase::Idle);
    assert!(!controller.form.get_untracked().is_complete());
}
