// ABOUTME: Core types and constants for the Burjo fitness backend
// ABOUTME: Foundation crate with error handling, domain models, and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

#![deny(unsafe_code)]

//! # Burjo Core
//!
//! Foundation crate providing shared types and constants for the Burjo fitness
//! backend. Both the decision engines in `burjo-intelligence` and the HTTP
//! server depend on it, so it is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Risk categories, health data, exercises, mood logs, schedules
//! - **constants**: Validation limits and service defaults
//! - **validation**: Boundary checks shared by request handlers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`RiskCategory`, `HealthCondition`, `MoodLog`, etc.)
pub mod models;

/// Boundary validation helpers producing `ValidationFailure` errors
pub mod validation;
