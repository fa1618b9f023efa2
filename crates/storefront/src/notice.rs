//! Transient user-facing notifications.
//!
//! A [`NoticeSlot`] shows at most one message at a time. Each message is
//! visible for [`NOTICE_TTL`] from the moment it was posted; posting again
//! replaces the current message and restarts the window. Expiry is computed
//! from the tokio clock, so tests can pause and advance time.

use std::time::Duration;

use tokio::time::Instant;

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// A posted message and when it was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    posted_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Holds the currently visible notice, if any.
#[derive(Debug, Clone)]
pub struct NoticeSlot {
    current: Option<Notice>,
    ttl: Duration,
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSlot {
    /// An empty slot using [`NOTICE_TTL`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_ttl(NOTICE_TTL)
    }

    /// An empty slot with a custom lifetime.
    #[must_use]
    pub const fn with_ttl(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Show `message`, replacing whatever was shown before.
    pub fn post(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "Notice posted");
        self.current = Some(Notice {
            message,
            posted_at: Instant::now(),
        });
    }

    /// The visible message, or `None` once it has expired.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.active().map(Notice::message)
    }

    /// The visible notice, or `None` once it has expired.
    #[must_use]
    pub fn active(&self) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|notice| Instant::now() < notice.posted_at + self.ttl)
    }

    /// When the current notice stops being visible.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.current
            .as_ref()
            .map(|notice| notice.posted_at + self.ttl)
    }

    /// Drop the stored notice if it has expired.
    pub fn clear_expired(&mut self) {
        if self.current.is_some() && self.active().is_none() {
            self.current = None;
        }
    }

    /// Wait until the current notice expires, then clear it.
    ///
    /// Returns immediately when nothing is shown.
    pub async fn expired(&mut self) {
        if let Some(deadline) = self.expires_at() {
            tokio::time::sleep_until(deadline).await;
            self.clear_expired();
        }
    }
}
