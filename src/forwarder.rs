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
    body::Body,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::{error::ForwardError, state::AppState, utils};

/// Upstream error text that gets replaced with [`PROJECT_NOT_FOUND_MESSAGE`].
pub const PROJECT_NOT_FOUND: &str = "project not found";

pub const PROJECT_NOT_FOUND_MESSAGE: &str =
    "failed to connect to your project, please check if the api had been set properly.";

/// An upstream response ready to be relayed to the caller.
#[derive(Debug)]
pub struct ProxiedResponse {
    pub status: StatusCode,
    pub content_type: HeaderValue,
    pub body: String,
}

impl IntoResponse for ProxiedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, self.content_type);
        response
    }
}

/// Sends one request to the product API and prepares its response for the caller.
///
/// `id` selects `/products/{id}` instead of the collection. `expected` is the
/// status the operation treats as success; any other status is checked for
/// the "project not found" error.
pub async fn forward(
    state: &AppState,
    method: Method,
    id: Option<&str>,
    body: Option<&Value>,
    expected: StatusCode,
) -> Result<ProxiedResponse, ForwardError> {
    let target_url = match id {
        Some(id) => state.target.item(id),
        None => state.target.collection().to_string(),
    };
    tracing::info!("Proxying: {} -> {}", method, state.target.redact(&target_url));

    let mut request_builder = state.client.request(method, &target_url);
    if let Some(body) = body {
        // Sets `Content-Type: application/json`.
        request_builder = request_builder.json(body);
    }

    let resp = request_builder.send().await?;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(json_content_type);
    let text = resp.text().await?;

    match rewritten_body(status, expected, &text)? {
        Some(body) => {
            tracing::warn!("Upstream reported a missing project ({})", status);
            Ok(ProxiedResponse {
                status,
                content_type: json_content_type(),
                body,
            })
        }
        None => Ok(ProxiedResponse {
            status,
            content_type,
            body: text,
        }),
    }
}

/// Returns the replacement body when the upstream failed with "project not found".
///
/// Only the first JSON value of the body is read; an empty body is allowed on
/// success. An error response must carry a `message` field.
fn rewritten_body(
    status: StatusCode,
    expected: StatusCode,
    body: &str,
) -> Result<Option<String>, ForwardError> {
    let root = serde_json::Deserializer::from_str(body)
        .into_iter::<Value>()
        .next()
        .transpose()?;

    if status == expected {
        return Ok(None);
    }

    let message = root
        .as_ref()
        .and_then(|root| root.get("message"))
        .ok_or(ForwardError::MissingMessage)?;
    if utils::message_text(message).contains(PROJECT_NOT_FOUND) {
        return Ok(Some(
            json!({ "message": PROJECT_NOT_FOUND_MESSAGE }).to_string(),
        ));
    }

    Ok(None)
}

fn json_content_type() -> HeaderValue {
    HeaderValue::from_static("application/json")
}
