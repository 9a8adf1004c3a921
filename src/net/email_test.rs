use super::fakes::{FakeDelay, FakeEmailClient};
use super::*;

use futures::executor::block_on;

fn request() -> SendRequest {
    SendRequest {
        from_name: "Jane Doe".to_owned(),
        from_email: "jane@example.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Let's talk".to_owned(),
        to_name: config::MAIL_TO_NAME.to_owned(),
        reply_to: "jane@example.com".to_owned(),
    }
}

// =============================================================
// Readiness wait
// =============================================================

#[test]
fn ready_client_needs_no_sleeps() {
    let client = FakeEmailClient::ready();
    let delay = FakeDelay::default();
    assert!(block_on(await_ready(&client, &delay)));
    assert!(delay.sleeps.borrow().is_empty());
}

#[test]
fn late_client_is_polled_until_ready() {
    let client = FakeEmailClient::ready_after(3);
    let delay = FakeDelay::default();
    assert!(block_on(await_ready(&client, &delay)));
    assert_eq!(delay.sleeps.borrow().len(), 3);
    assert!(delay.sleeps.borrow().iter().all(|d| *d == READY_POLL_INTERVAL));
}

#[test]
fn readiness_wait_gives_up_after_fifty_polls() {
    let client = FakeEmailClient::never_ready();
    let delay = FakeDelay::default();
    assert!(!block_on(await_ready(&client, &delay)));
    assert_eq!(delay.sleeps.borrow().len(), READY_POLL_ATTEMPTS as usize);
}

// =============================================================
// Delivery
// =============================================================

#[test]
fn deliver_sends_exactly_once_with_verbatim_fields() {
    let client = FakeEmailClient::ready();
    let delay = FakeDelay::default();
    let result = block_on(deliver(&client, &delay, &request()));
    assert_eq!(result, Ok(()));

    let sends = client.sends.borrow();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].from_name, "Jane Doe");
    assert_eq!(sends[0].from_email, "jane@example.com");
    assert_eq!(sends[0].subject, "Hi");
    assert_eq!(sends[0].message, "Let's talk");
    assert_eq!(sends[0].reply_to, sends[0].from_email);
}

#[test]
fn deliver_fails_without_sending_when_client_never_ready() {
    let client = FakeEmailClient::never_ready();
    let delay = FakeDelay::default();
    let result = block_on(deliver(&client, &delay, &request()));
    assert_eq!(result, Err(SendError::Unavailable));
    assert!(client.sends.borrow().is_empty());
}

#[test]
fn deliver_surfaces_provider_rejection() {
    let client = FakeEmailClient::rejecting(Some("Invalid template"), Some(400));
    let delay = FakeDelay::default();
    let result = block_on(deliver(&client, &delay, &request()));
    assert_eq!(
        result,
        Err(SendError::Rejected {
            text: Some("Invalid template".to_owned()),
            status: Some(400),
        })
    );
    assert_eq!(client.sends.borrow().len(), 1);
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn failure_message_includes_provider_text_and_fallback() {
    let message = failure_message(&SendError::Rejected {
        text: Some("Invalid template".to_owned()),
        status: Some(400),
    });
    assert!(message.starts_with("Failed to send message. "));
    assert!(message.contains("Error: Invalid template. "));
    assert!(message.contains(config::FALLBACK_EMAIL));
}

#[test]
fn failure_message_for_timeout_has_no_error_segment() {
    let message = failure_message(&SendError::Unavailable);
    assert_eq!(
        message,
        format!(
            "Failed to send message. Please try emailing directly at {}",
            config::FALLBACK_EMAIL
        )
    );
}

#[test]
fn failure_message_skips_empty_provider_text() {
    let message = failure_message(&SendError::Rejected {
        text: Some(String::new()),
        status: None,
    });
    assert!(!message.contains("Error:"));
    assert!(message.contains(config::FALLBACK_EMAIL));
}

#[test]
fn failure_message_skips_absent_provider_text() {
    let message = failure_message(&SendError::Rejected {
        text: None,
        status: Some(503),
    });
    assert!(!message.contains("Error:"));
}

// =============================================================
// Payload serialization
// =============================================================

#[test]
fn send_request_serializes_template_field_names() {
    let json = serde_json::to_value(request()).unwrap();
    assert_eq!(json["from_name"], "Jane Doe");
    assert_eq!(json["from_email"], "jane@example.com");
    assert_eq!(json["subject"], "Hi");
    assert_eq!(json["message"], "Let's talk");
    assert_eq!(json["to_name"], config::MAIL_TO_NAME);
    assert_eq!(json["reply_to"], "jane@example.com");
}
