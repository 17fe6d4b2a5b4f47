// ABOUTME: Operating-hours gate and emergency keyword scan guarding the chat feature
// ABOUTME: Time windows are evaluated in an IANA timezone; unparseable settings follow a configured fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Chat gating policies
//!
//! Both policies are independent of intent classification. The caller decides
//! the order; the HTTP layer runs the emergency scan first, then the gate, then
//! the dispatcher.

use chrono::{DateTime, Days, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Behaviour when the configured window cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursFallback {
    /// Treat the chat as always available
    #[default]
    AlwaysOpen,
    /// Treat the chat as never available
    AlwaysClosed,
}

impl HoursFallback {
    /// Parse a configuration value (`open` or `closed`)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "open" | "always_open" => Some(Self::AlwaysOpen),
            "closed" | "always_closed" => Some(Self::AlwaysClosed),
            _ => None,
        }
    }

    /// Convert to configuration string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlwaysOpen => "open",
            Self::AlwaysClosed => "closed",
        }
    }
}

/// Raw operating-hours configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingHoursSettings {
    /// Opening time, "HH:MM"
    pub start_time: String,
    /// Closing time, "HH:MM" (inclusive)
    pub end_time: String,
    /// IANA timezone name
    pub timezone: String,
    /// Policy when any of the above fails to parse
    pub fallback: HoursFallback,
    /// Text shown outside the window
    pub out_of_hours_message: String,
}

impl Default for OperatingHoursSettings {
    fn default() -> Self {
        Self {
            start_time: "08:00".to_owned(),
            end_time: "16:00".to_owned(),
            timezone: "Asia/Jakarta".to_owned(),
            fallback: HoursFallback::AlwaysOpen,
            out_of_hours_message: "Maaf, layanan chat hanya tersedia pukul 08:00 - 16:00 WIB."
                .to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    start: NaiveTime,
    end: NaiveTime,
    tz: Tz,
}

impl Window {
    fn contains(&self, now: DateTime<Utc>) -> bool {
        let local = now.with_timezone(&self.tz).time();
        if self.end < self.start {
            local >= self.start || local <= self.end
        } else {
            local >= self.start && local <= self.end
        }
    }

    fn next_opening(&self, now: DateTime<Utc>) -> Option<DateTime<Tz>> {
        let local = now.with_timezone(&self.tz);
        let mut date = local.date_naive();
        if local.time() > self.start {
            date = date.checked_add_days(Days::new(1))?;
        }
        self.tz.from_local_datetime(&date.and_time(self.start)).earliest()
    }
}

/// Snapshot of the gate for status endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateStatus {
    /// Whether chat is available now
    pub is_open: bool,
    /// Configured opening time
    pub start_time: String,
    /// Configured closing time
    pub end_time: String,
    /// Configured timezone
    pub timezone: String,
    /// Seconds until the next opening, zero when open
    pub seconds_until_open: i64,
}

/// Decides whether chat is available at a given instant
#[derive(Debug, Clone)]
pub struct OperatingHoursGate {
    settings: OperatingHoursSettings,
    window: Option<Window>,
}

impl OperatingHoursGate {
    /// Build a gate, applying the fallback policy if the settings do not parse
    #[must_use]
    pub fn new(settings: OperatingHoursSettings) -> Self {
        let start = NaiveTime::parse_from_str(settings.start_time.trim(), "%H:%M");
        let end = NaiveTime::parse_from_str(settings.end_time.trim(), "%H:%M");
        let tz = settings.timezone.trim().parse::<Tz>();

        let window = match (start, end, tz) {
            (Ok(start), Ok(end), Ok(tz)) => Some(Window { start, end, tz }),
            (start, end, tz) => {
                warn!(
                    start_time = %settings.start_time,
                    end_time = %settings.end_time,
                    timezone = %settings.timezone,
                    start_valid = start.is_ok(),
                    end_valid = end.is_ok(),
                    timezone_valid = tz.is_ok(),
                    fallback = settings.fallback.as_str(),
                    "Invalid chat operating hours, applying fallback policy"
                );
                None
            }
        };

        Self { settings, window }
    }

    /// Whether chat is open at `now`
    #[must_use]
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.window.map_or(
            self.settings.fallback == HoursFallback::AlwaysOpen,
            |window| window.contains(now),
        )
    }

    /// Whether chat is open right now
    #[must_use]
    pub fn is_open_now(&self) -> bool {
        self.is_open_at(Utc::now())
    }

    /// Next opening instant after `now`, if the window is known
    #[must_use]
    pub fn next_opening(&self, now: DateTime<Utc>) -> Option<DateTime<Tz>> {
        self.window.and_then(|window| window.next_opening(now))
    }

    /// Time until chat opens; zero when open or when no opening can be computed
    #[must_use]
    pub fn time_until_open(&self, now: DateTime<Utc>) -> Duration {
        if self.is_open_at(now) {
            return Duration::zero();
        }
        self.next_opening(now)
            .map_or_else(Duration::zero, |next| next.with_timezone(&Utc) - now)
    }

    /// Out-of-hours text including the next opening time when known
    #[must_use]
    pub fn out_of_hours_message(&self, now: DateTime<Utc>) -> String {
        match self.next_opening(now) {
            Some(next) => format!(
                "{}\n\nLayanan akan tersedia kembali pada {} ({}).",
                self.settings.out_of_hours_message,
                next.format("%d/%m/%Y %H:%M"),
                next.timezone().name()
            ),
            None => self.settings.out_of_hours_message.clone(),
        }
    }

    /// Status snapshot at `now`
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> GateStatus {
        GateStatus {
            is_open: self.is_open_at(now),
            start_time: self.settings.start_time.clone(),
            end_time: self.settings.end_time.clone(),
            timezone: self.settings.timezone.clone(),
            seconds_until_open: self.time_until_open(now).num_seconds(),
        }
    }
}

/// Case-insensitive substring scan for emergency phrases
#[derive(Debug, Clone)]
pub struct EmergencyKeywordScanner {
    keywords: Vec<String>,
    message: String,
}

impl EmergencyKeywordScanner {
    /// Build a scanner; blank keywords are ignored
    #[must_use]
    pub fn new(keywords: &[String], message: impl Into<String>) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            message: message.into(),
        }
    }

    /// First configured keyword found in `text`
    #[must_use]
    pub fn scan(&self, text: &str) -> Option<&str> {
        if text.trim().is_empty() {
            return None;
        }
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| lowered.contains(keyword.as_str()))
            .map(String::as_str)
    }

    /// Message returned when an emergency phrase is detected
    #[must_use]
    pub fn emergency_message(&self) -> &str {
        &self.message
    }
}
