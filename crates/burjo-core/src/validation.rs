// ABOUTME: Boundary validation helpers for request payloads
// ABOUTME: Length and range checks that fail with structured AppError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use crate::errors::{AppError, AppResult, ErrorCode};
use std::fmt::Display;

/// Reject strings longer than `max` characters
///
/// # Errors
///
/// Returns `INVALID_INPUT` when the value is too long
pub fn max_len(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::invalid_input(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Reject optional strings longer than `max` characters
///
/// # Errors
///
/// Returns `INVALID_INPUT` when the value is present and too long
pub fn max_len_opt(field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    value.map_or(Ok(()), |v| max_len(field, v, max))
}

/// Reject blank strings
///
/// # Errors
///
/// Returns `MISSING_REQUIRED_FIELD` when the value is empty after trimming
pub fn required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        ));
    }
    Ok(())
}

/// Reject values outside the inclusive range `[min, max]`
///
/// # Errors
///
/// Returns `VALUE_OUT_OF_RANGE` when the value falls outside the range
pub fn in_range<T>(field: &str, value: T, (min, max): (T, T)) -> AppResult<()>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(AppError::out_of_range(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Minimal structural email check
///
/// # Errors
///
/// Returns `INVALID_INPUT` when the address has no local part or no dotted domain
pub fn email(value: &str) -> AppResult<()> {
    let valid = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    });
    if !valid {
        return Err(AppError::invalid_input("email format is invalid"));
    }
    Ok(())
}
