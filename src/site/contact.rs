//! Contact form - field state, focus cycling and submission.
//!
//! Submission is fire-and-forget: a background thread POSTs the JSON
//! payload to the form relay and publishes the outcome through an
//! atomic; the event loop syncs the atomic into the status signal each
//! tick (signals stay on the UI thread). No retry, no backoff - a failed
//! send just shows the error state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread;

use crossterm::event::{KeyCode, KeyEvent};
use serde::Serialize;
use spark_signals::{Signal, signal};

use crate::error::SiteError;

/// The form relay endpoint.
const CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/azurem.ux@gmail.com";

// =============================================================================
// STATE
// =============================================================================

/// Which part of the form holds focus. `None` leaves keys to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    None,
    Name,
    Email,
    Message,
    Send,
}

/// External submission state, rendered by plain conditional text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Error,
}

const STATUS_IDLE: u8 = 0;
const STATUS_SENDING: u8 = 1;
const STATUS_SENT: u8 = 2;
const STATUS_ERROR: u8 = 3;

thread_local! {
    static NAME: Signal<String> = signal(String::new());
    static EMAIL: Signal<String> = signal(String::new());
    static MESSAGE: Signal<String> = signal(String::new());
    static FOCUS: Signal<Field> = signal(Field::None);
    static STATUS: Signal<SubmitStatus> = signal(SubmitStatus::Idle);

    /// Written by the submission thread, read by `sync_status`.
    static STATUS_ATOMIC: Arc<AtomicU8> = Arc::new(AtomicU8::new(STATUS_IDLE));
}

pub fn focus() -> Signal<Field> {
    FOCUS.with(|s| s.clone())
}

pub fn status() -> Signal<SubmitStatus> {
    STATUS.with(|s| s.clone())
}

pub fn field_signal(field: Field) -> Signal<String> {
    match field {
        Field::Email => EMAIL.with(|s| s.clone()),
        Field::Message => MESSAGE.with(|s| s.clone()),
        _ => NAME.with(|s| s.clone()),
    }
}

// =============================================================================
// KEYS
// =============================================================================

fn cycle(field: Field, reverse: bool) -> Field {
    let order = [Field::Name, Field::Email, Field::Message, Field::Send];
    let at = order.iter().position(|f| *f == field).unwrap_or(0);
    let next = if reverse {
        (at + order.len() - 1) % order.len()
    } else {
        (at + 1) % order.len()
    };
    order[next]
}

/// Handle a key while the contact page is active.
///
/// Returns true when consumed. With no field focused only Tab is
/// consumed (entering the form); everything else falls through to page
/// navigation and scrolling.
pub fn handle_key(key: &KeyEvent) -> bool {
    let focused = FOCUS.with(|s| s.get());

    if focused == Field::None {
        if key.code == KeyCode::Tab {
            FOCUS.with(|s| s.set(Field::Name));
            return true;
        }
        return false;
    }

    match key.code {
        KeyCode::Tab => {
            FOCUS.with(|s| s.set(cycle(focused, false)));
            true
        }
        KeyCode::BackTab => {
            FOCUS.with(|s| s.set(cycle(focused, true)));
            true
        }
        KeyCode::Esc => {
            FOCUS.with(|s| s.set(Field::None));
            true
        }
        KeyCode::Enter if focused == Field::Send => {
            submit();
            true
        }
        KeyCode::Char(ch) if focused != Field::Send => {
            let field = field_signal(focused);
            let mut value = field.get();
            value.push(ch);
            field.set(value);
            true
        }
        KeyCode::Backspace if focused != Field::Send => {
            let field = field_signal(focused);
            let mut value = field.get();
            value.pop();
            field.set(value);
            true
        }
        // Swallow editing keys we don't support; let scroll keys through.
        KeyCode::Enter => true,
        _ => false,
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

#[derive(Debug, Serialize, PartialEq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Snapshot the current field values into a payload.
pub fn payload() -> ContactPayload {
    ContactPayload {
        name: NAME.with(|s| s.get()),
        email: EMAIL.with(|s| s.get()),
        message: MESSAGE.with(|s| s.get()),
    }
}

/// Kick off a submission. A no-op while one is already in flight.
pub fn submit() {
    if STATUS.with(|s| s.get()) == SubmitStatus::Sending {
        return;
    }
    STATUS.with(|s| s.set(SubmitStatus::Sending));
    let atomic = STATUS_ATOMIC.with(|a| a.clone());
    atomic.store(STATUS_SENDING, Ordering::SeqCst);

    let body = payload();
    tracing::info!("contact submission started");

    thread::spawn(move || {
        match post_payload(&body) {
            Ok(()) => atomic.store(STATUS_SENT, Ordering::SeqCst),
            Err(error) => {
                tracing::warn!(%error, "contact submission failed");
                atomic.store(STATUS_ERROR, Ordering::SeqCst);
            }
        }
    });
}

fn post_payload(body: &ContactPayload) -> Result<(), SiteError> {
    let client = reqwest::blocking::Client::new();
    client
        .post(CONTACT_ENDPOINT)
        .json(body)
        .send()?
        .error_for_status()?;
    Ok(())
}

/// Sync the submission thread's outcome into the status signal. Called
/// by the event loop each tick; the signal change re-renders the form.
pub fn sync_status() {
    let raw = STATUS_ATOMIC.with(|a| a.load(Ordering::SeqCst));
    let mapped = match raw {
        STATUS_SENDING => SubmitStatus::Sending,
        STATUS_SENT => SubmitStatus::Sent,
        STATUS_ERROR => SubmitStatus::Error,
        _ => SubmitStatus::Idle,
    };
    STATUS.with(|s| {
        if s.get() != mapped {
            s.set(mapped);
            if mapped == SubmitStatus::Sent {
                // Clear the form on success, as the relay flow does.
                NAME.with(|f| f.set(String::new()));
                EMAIL.with(|f| f.set(String::new()));
                MESSAGE.with(|f| f.set(String::new()));
                tracing::info!("contact submission sent");
            }
        }
    });
}

/// Reset all form state (for testing).
pub fn reset_form() {
    NAME.with(|s| s.set(String::new()));
    EMAIL.with(|s| s.set(String::new()));
    MESSAGE.with(|s| s.set(String::new()));
    FOCUS.with(|s| s.set(Field::None));
    STATUS.with(|s| s.set(SubmitStatus::Idle));
    STATUS_ATOMIC.with(|a| a.store(STATUS_IDLE, Ordering::SeqCst));
}

// =============================================================================
// TESTS
// =============================================================================
