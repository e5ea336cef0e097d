//! Chat messages.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::contact::ContactId;

/// Unique message identifier, allocated by the session store.
pub type MessageId = u64;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The signed-in user.
    User,
    /// The contact on the other end.
    Contact,
}

/// A message that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    /// Message text.
    pub content: String,
    /// Author.
    pub sender: Sender,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl NewMessage {
    /// A message from the user, stamped now.
    pub fn from_user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::User,
            timestamp: now_millis(),
        }
    }

    /// A message from the contact, stamped now.
    pub fn from_contact(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::Contact,
            timestamp: now_millis(),
        }
    }
}

/// A stored chat message.
///
/// Messages are never mutated or deleted once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier.
    pub id: MessageId,
    /// Session this message belongs to.
    pub contact_id: ContactId,
    /// Message text.
    pub content: String,
    /// Author.
    pub sender: Sender,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl Message {
    /// Whether the signed-in user wrote this message.
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Local time of day the message was sent, as `HH:MM:SS`.
    pub fn clock_time(&self) -> String {
        format_clock(self.timestamp)
    }
}

/// Current unix time in milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Formats a unix millisecond timestamp as local `HH:MM:SS`.
pub fn format_clock(timestamp_ms: u64) -> String {
    format_clock_in(timestamp_ms, &Local)
}

/// Formats a unix millisecond timestamp as `HH:MM:SS` in `tz`.
///
/// Timestamps chrono cannot represent render as `--:--:--`.
pub fn format_clock_in<Tz>(timestamp_ms: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|utc| utc.with_timezone(tz).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}
