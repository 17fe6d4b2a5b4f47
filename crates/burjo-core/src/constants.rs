// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Validation limits, service defaults, and network ports for the Burjo backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Constants module
//!
//! Constants are grouped into logical domains rather than kept in one flat list.

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service identity used in logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const BURJO_SERVER: &str = "burjo-server";
}

/// Health condition input limits
pub mod health_limits {
    /// Maximum length of the chronic-disease free text
    pub const MAX_CHRONIC_DISEASES_LEN: usize = 500;
    /// Maximum length of the physical-complaint free text
    pub const MAX_PHYSICAL_COMPLAINTS_LEN: usize = 500;
    /// Upper bound for daily activity minutes (eight hours)
    pub const MAX_DAILY_ACTIVITY_MINUTES: u32 = 480;
    /// Below this many daily minutes activity counts as low
    pub const LOW_ACTIVITY_THRESHOLD_MINUTES: u32 = 30;
}

/// Health profile input limits
pub mod profile_limits {
    /// Maximum length of a full name
    pub const MAX_FULL_NAME_LEN: usize = 200;
    /// Maximum length of free-text medical history
    pub const MAX_MEDICAL_HISTORY_LEN: usize = 1000;
    /// Maximum length of gender and fitness level labels
    pub const MAX_LABEL_LEN: usize = 50;
    /// Accepted age range in years
    pub const AGE_RANGE: (u32, u32) = (1, 150);
    /// Accepted height range in centimeters
    pub const HEIGHT_CM_RANGE: (f64, f64) = (50.0, 300.0);
    /// Accepted weight range in kilograms
    pub const WEIGHT_KG_RANGE: (f64, f64) = (20.0, 500.0);
}

/// Mood logging limits
pub mod mood_limits {
    /// Maximum length of a mood note
    pub const MAX_NOTES_LEN: usize = 500;
}

/// Weekly schedule limits
pub mod schedule_limits {
    /// Maximum length of an exercise name in a schedule item
    pub const MAX_EXERCISE_NAME_LEN: usize = 100;
    /// Accepted duration range in minutes
    pub const DURATION_MINUTES_RANGE: (u32, u32) = (1, 480);
}

/// Exercise catalog limits
pub mod exercise_limits {
    /// Maximum length of an exercise name
    pub const MAX_NAME_LEN: usize = 100;
    /// Maximum length of an exercise description
    pub const MAX_DESCRIPTION_LEN: usize = 1000;
}

/// Chat limits
pub mod chat_limits {
    /// Maximum length of an incoming chat message
    pub const MAX_MESSAGE_LEN: usize = 1000;
    /// Maximum number of recommendation names quoted in a chat reply
    pub const MAX_RECOMMENDATIONS_IN_REPLY: usize = 5;
}

/// Authentication limits and defaults
pub mod auth {
    /// Minimum password length accepted at registration
    pub const MIN_PASSWORD_LEN: usize = 6;
    /// Maximum email length
    pub const MAX_EMAIL_LEN: usize = 254;
    /// Default JWT lifetime in hours
    pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
}
