// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides the CORS layer and the per-request tracing span factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

/// CORS configuration
pub mod cors;
/// Request tracing spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::make_request_span;
