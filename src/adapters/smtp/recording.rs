//! Recording mail transport for tests.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::settings::EmailNotifications;
use crate::ports::{MailError, MailTransport, OutgoingEmail};

/// Mail transport that records outgoing email instead of delivering it.
///
/// Counts every [`MailTransport::send`] call; in failing mode the call
/// still counts but returns a delivery error without recording the
/// email.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct RecordingMailTransport {
    sent: RwLock<Vec<OutgoingEmail>>,
    attempts: RwLock<usize>,
    fail: bool,
}

impl RecordingMailTransport {
    /// Creates a transport that accepts every send.
    pub fn new() -> Self {
        Self {
            sent: RwLock::new(Vec::new()),
            attempts: RwLock::new(0),
            fail: false,
        }
    }

    /// Creates a transport that rejects every send with a delivery
    /// error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    // === Test Helpers ===

    /// Returns the emails accepted so far.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent
            .read()
            .expect("RecordingMailTransport: lock poisoned")
            .clone()
    }

    /// Returns how many sends were attempted, including rejected ones.
    pub fn attempts(&self) -> usize {
        *self
            .attempts
            .read()
            .expect("RecordingMailTransport: lock poisoned")
    }
}

impl Default for RecordingMailTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn send(
        &self,
        email: &OutgoingEmail,
        _smtp: &EmailNotifications,
    ) -> Result<(), MailError> {
        *self
            .attempts
            .write()
            .expect("RecordingMailTransport: lock poisoned") += 1;

        if self.fail {
            return Err(MailError::delivery("recording transport is set to fail"));
        }

        self.sent
            .write()
            .expect("RecordingMailTransport: lock poisoned")
            .push(email.clone());
        Ok(())
    }
}
