// ABOUTME: Weekly exercise schedule items and day grouping
// ABOUTME: Groups a user's items by weekday, Monday first, with Indonesian day names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Day of the week, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Senin
    Monday,
    /// Selasa
    Tuesday,
    /// Rabu
    Wednesday,
    /// Kamis
    Thursday,
    /// Jumat
    Friday,
    /// Sabtu
    Saturday,
    /// Minggu
    Sunday,
}

impl DayOfWeek {
    /// Monday through Sunday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Indonesian day name
    #[must_use]
    pub const fn local_name(&self) -> &'static str {
        match self {
            Self::Monday => "Senin",
            Self::Tuesday => "Selasa",
            Self::Wednesday => "Rabu",
            Self::Thursday => "Kamis",
            Self::Friday => "Jumat",
            Self::Saturday => "Sabtu",
            Self::Sunday => "Minggu",
        }
    }

    /// Parse from database string representation
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for unknown values
    pub fn parse(s: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| AppError::invalid_input(format!("Unknown day of week: {s}")))
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

/// A planned exercise on a given weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Item identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Exercise name as chosen by the user
    pub exercise_name: String,
    /// Planned weekday
    pub day_of_week: DayOfWeek,
    /// Planned duration in minutes (1-480)
    pub duration_minutes: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Items planned for one weekday
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Weekday
    pub day_of_week: DayOfWeek,
    /// Indonesian day name
    pub day_name: String,
    /// Items planned for the day
    pub items: Vec<ScheduleItem>,
    /// Sum of item durations
    pub total_minutes: u32,
}

/// Group items into days, Monday first, skipping empty days
#[must_use]
pub fn group_by_day(items: Vec<ScheduleItem>) -> Vec<DaySchedule> {
    DayOfWeek::ALL
        .into_iter()
        .filter_map(|day| {
            let day_items: Vec<ScheduleItem> = items
                .iter()
                .filter(|item| item.day_of_week == day)
                .cloned()
                .collect();
            if day_items.is_empty() {
                return None;
            }
            Some(DaySchedule {
                day_of_week: day,
                day_name: day.local_name().to_owned(),
                total_minutes: day_items.iter().map(|i| i.duration_minutes).sum(),
                items: day_items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(day: DayOfWeek, minutes: u32) -> ScheduleItem {
        ScheduleItem {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            exercise_name: "Jalan Kaki".to_owned(),
            day_of_week: day,
            duration_minutes: minutes,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_day_orders_monday_first() {
        let grouped = group_by_day(vec![
            item(DayOfWeek::Friday, 20),
            item(DayOfWeek::Monday, 30),
            item(DayOfWeek::Friday, 15),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].day_name, "Senin");
        assert_eq!(grouped[1].day_of_week, DayOfWeek::Friday);
        assert_eq!(grouped[1].items.len(), 2);
        assert_eq!(grouped[1].total_minutes, 35);
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(DayOfWeek::parse("Sunday").unwrap(), DayOfWeek::Sunday);
        assert!(DayOfWeek::parse("someday").is_err());
    }
}
