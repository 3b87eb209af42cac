//! In-process session provider. Implements SessionPort.
//!
//! Starts in the loading state until `resolve` is called. Sign-out can be
//! slowed down or made to fail to exercise the header's redirect ordering.

use crate::domain::{DomainError, SessionSnapshot, UserIdentity};
use crate::ports::SessionPort;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

pub struct InMemorySession {
    state: watch::Sender<SessionSnapshot>,
    sign_out_delay: Duration,
    fail_sign_out: bool,
}

impl InMemorySession {
    /// New provider in the loading state.
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionSnapshot::pending());
        Self {
            state,
            sign_out_delay: Duration::ZERO,
            fail_sign_out: false,
        }
    }

    /// Simulated provider round-trip on sign-out.
    pub fn with_sign_out_delay(mut self, delay: Duration) -> Self {
        self.sign_out_delay = delay;
        self
    }

    /// Make every sign-out fail without clearing the session.
    pub fn failing_sign_out(mut self) -> Self {
        self.fail_sign_out = true;
        self
    }

    /// Finish identity resolution. `None` means signed out.
    pub fn resolve(&self, identity: Option<UserIdentity>) {
        debug!(signed_in = identity.is_some(), "session resolved");
        self.state.send_replace(SessionSnapshot::resolved(identity));
    }

    /// Observe snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }
}

impl Default for InMemorySession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SessionPort for InMemorySession {
    async fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    async fn sign_out(&self) -> Result<(), DomainError> {
        if !self.sign_out_delay.is_zero() {
            tokio::time::sleep(self.sign_out_delay).await;
        }
        if self.fail_sign_out {
            return Err(DomainError::Session("provider rejected sign-out".into()));
        }
        self.state.send_replace(SessionSnapshot::resolved(None));
        info!("session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_loading_until_resolved() {
        let session = InMemorySession::new();
        assert!(session.snapshot().await.loading);

        session.resolve(Some(UserIdentity::with_email("a@b.com")));
        let snap = session.snapshot().await;
        assert!(!snap.loading);
        assert_eq!(snap.identity.unwrap().email, "a@b.com");
    }

    #[tokio::test]
    async fn test_sign_out_waits_then_clears() {
        let session = InMemorySession::new().with_sign_out_delay(Duration::from_millis(20));
        session.resolve(Some(UserIdentity::with_email("a@b.com")));
        let mut rx = session.subscribe();

        let started = Instant::now();
        session.sign_out().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SessionSnapshot::resolved(None));
    }

    #[tokio::test]
    async fn test_failing_sign_out_keeps_identity() {
        let session = InMemorySession::new().failing_sign_out();
        session.resolve(Some(UserIdentity::with_email("a@b.com")));
        assert!(session.sign_out().await.is_err());
        assert!(session.snapshot().await.identity.is_some());
    }
}
