// ABOUTME: User account model
// ABOUTME: Email identity plus bcrypt password hash
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: Uuid,
    /// Lowercased email address
    pub email: String,
    /// Optional display name
    pub display_name: Option<String>,
    /// Bcrypt hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
    /// Last successful login
    pub last_active: DateTime<Utc>,
}
