// ABOUTME: Error types for the HTTP server
// ABOUTME: Re-exports the shared AppError so handlers and managers use one error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! # Error Handling
//!
//! All fallible server code returns [`AppResult`]. [`AppError`] renders itself
//! as a JSON body of the form `{"error": {"code": ..., "message": ...}}` with
//! the status code derived from its [`ErrorCode`].

pub use burjo_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
