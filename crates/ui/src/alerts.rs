//! Alert notifications
//!
//! A single "current notification" slot. Raising an alert replaces whatever
//! is showing, so the latest alert always wins. Each alert carries a
//! sequence id and an expiry; expiring by id only clears the slot if that
//! same alert is still in it.

use catdesk_client::CategoryRequest;
use chrono::{DateTime, TimeDelta, Utc};

pub use catdesk_core::NAME_REQUIRED;

/// Success copy for a completed mutation
pub fn success_message(request: &CategoryRequest) -> &'static str {
    match request {
        CategoryRequest::Create(_) => "Category saved",
        CategoryRequest::Update(..) => "Category edited",
        CategoryRequest::Delete(_) => "Category deleted",
    }
}

// ============================================================================
// Alert
// ============================================================================

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
}

impl AlertKind {
    /// Icon shown in the toast
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "✅",
            AlertKind::Error => "❌",
            AlertKind::Warning => "⚠️",
        }
    }

    /// CSS modifier class for the toast
    pub fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "toast-success",
            AlertKind::Error => "toast-error",
            AlertKind::Warning => "toast-warning",
        }
    }
}

/// A raised notification
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Sequence number, increasing per slot
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
    /// Form field the warning refers to
    pub field: Option<String>,
    pub raised_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The pending expiry of the current alert.
///
/// Only a new alert changes this value; edits elsewhere in the state leave
/// it equal, so a timer keyed on it is armed once per alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTimer {
    pub id: u64,
    pub expires_at: DateTime<Utc>,
}

impl ExpiryTimer {
    /// Time left before expiry, zero once expired
    pub fn remaining(&self, now: DateTime<Utc>) -> std::time::Duration {
        (self.expires_at - now).to_std().unwrap_or_default()
    }
}

// ============================================================================
// Alert Slot
// ============================================================================

/// Holds at most one alert at a time
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSlot {
    current: Option<Alert>,
    next_id: u64,
    ttl: TimeDelta,
}

impl Default for AlertSlot {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 1,
            ttl: TimeDelta::milliseconds(3000),
        }
    }
}

impl AlertSlot {
    /// Create an empty slot with the default lifetime
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how long new alerts stay visible
    pub fn set_ttl_ms(&mut self, ttl_ms: u64) {
        let ms = i64::try_from(ttl_ms).unwrap_or(i64::MAX);
        self.ttl = TimeDelta::try_milliseconds(ms).unwrap_or(TimeDelta::MAX);
    }

    /// Lifetime applied to new alerts
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// The alert currently showing
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Expiry of the alert currently showing
    pub fn timer(&self) -> Option<ExpiryTimer> {
        self.current.as_ref().map(|a| ExpiryTimer {
            id: a.id,
            expires_at: a.expires_at,
        })
    }

    /// Raise a success alert
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.raise(AlertKind::Success, message, None)
    }

    /// Raise an error alert
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.raise(AlertKind::Error, message, None)
    }

    /// Raise a warning, optionally pointing at a form field
    pub fn warning(&mut self, message: impl Into<String>, field: Option<&str>) -> u64 {
        self.raise(AlertKind::Warning, message, field.map(str::to_string))
    }

    /// Raise an alert now
    pub fn raise(
        &mut self,
        kind: AlertKind,
        message: impl Into<String>,
        field: Option<String>,
    ) -> u64 {
        self.raise_at(kind, message, field, Utc::now())
    }

    /// Raise an alert at a given instant, replacing the current one
    pub fn raise_at(
        &mut self,
        kind: AlertKind,
        message: impl Into<String>,
        field: Option<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.current = Some(Alert {
            id,
            kind,
            message: message.into(),
            field,
            raised_at: now,
            expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        id
    }

    /// Clear the slot if it still holds alert `id`
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|a| a.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Dismiss whatever is showing
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
