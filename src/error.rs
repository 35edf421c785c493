/*
 * Copyright (C) 2025 Jakub Žitník
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body returned to the caller for every forwarding failure.
pub const INTERNAL_ERROR_BODY: &str = "internal server error";

/// Anything that stops an upstream response from being relayed.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("upstream error response has no message field")]
    MissingMessage,
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        tracing::error!("Forwarding failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}
