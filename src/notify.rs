use std::time::{Duration, Instant};

use crate::util::ident::fresh_id;

/// How long a notice stays visible after publication
pub const DISPLAY_TTL: Duration = Duration::from_millis(3000);

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Lowercase name as used in JSON output
    pub fn name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// A short-lived user-facing message
#[derive(Debug, Clone)]
pub struct Notice {
    /// Opaque identifier, unique per queue
    pub id: String,
    pub severity: Severity,
    pub text: String,
    /// Instant past which the notice is no longer shown
    expires_at: Instant,
}

/// Queue of pending notices. One instance exists per running planner and
/// consumers receive it through constructor injection.
///
/// Expiry is a recorded deadline: `active` prunes entries past theirs before
/// returning, so a notice disappears after its display window whether or not
/// anything rendered it.
#[derive(Debug)]
pub struct NoticeQueue {
    entries: Vec<Notice>,
    ttl: Duration,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::with_ttl(DISPLAY_TTL)
    }

    /// Queue with a custom display window (shortened under test)
    pub fn with_ttl(ttl: Duration) -> Self {
        NoticeQueue {
            entries: Vec::new(),
            ttl,
        }
    }

    /// Append a notice; it expires `ttl` from now
    pub fn publish(&mut self, severity: Severity, text: impl Into<String>) {
        self.entries.push(Notice {
            id: fresh_id(),
            severity,
            text: text.into(),
            expires_at: Instant::now() + self.ttl,
        });
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.publish(Severity::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.publish(Severity::Error, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.publish(Severity::Info, text);
    }

    /// Prune expired notices and return the live ones, oldest first
    pub fn active(&mut self) -> &[Notice] {
        let now = Instant::now();
        self.entries.retain(|n| now < n.expires_at);
        &self.entries
    }

    /// Take every queued notice, expired or not. One-shot consumers (a CLI
    /// invocation) render with this so nothing is dropped unseen.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.entries)
    }
}
