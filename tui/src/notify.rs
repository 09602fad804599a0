//! Desktop Notifications
//!
//! Mirrors period-end alerts to the desktop so a finished countdown is
//! noticed even when the terminal is buried. Fire-and-forget: failures
//! are logged and never interrupt the session.

use notify_rust::Notification;

/// Send a desktop notification, logging on failure.
pub fn send_desktop(summary: &str, body: &str) {
    if let Err(e) = Notification::new()
        .summary(summary)
        .body(body)
        .timeout(0) // No auto-dismiss
        .show()
    {
        tracing::warn!("failed to send desktop notification: {e}");
    }
}
