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

use crate::{
    error::ForwardError,
    forwarder::{self, ProxiedResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode},
};
use serde_json::Value;

type ProxyResult = Result<ProxiedResponse, ForwardError>;

pub async fn home() -> &'static str {
    "Hello World"
}

/// `GET /products`
pub async fn list_products(State(state): State<AppState>) -> ProxyResult {
    forwarder::forward(&state, Method::GET, None, None, StatusCode::OK).await
}

/// `GET /products/{id}`
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> ProxyResult {
    forwarder::forward(&state, Method::GET, Some(&id), None, StatusCode::OK).await
}

/// `PATCH /products/{id}`
///
/// Despite the name this updates an existing product upstream.
pub async fn create_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(product): Json<Value>,
) -> ProxyResult {
    forwarder::forward(
        &state,
        Method::PATCH,
        Some(&id),
        Some(&product),
        StatusCode::CREATED,
    )
    .await
}

/// `POST /products`
///
/// Despite the name this creates a new product upstream.
pub async fn update_product(
    State(state): State<AppState>,
    Json(product): Json<Value>,
) -> ProxyResult {
    forwarder::forward(
        &state,
        Method::POST,
        None,
        Some(&product),
        StatusCode::CREATED,
    )
    .await
}

/// `DELETE /products/{id}`
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> ProxyResult {
    forwarder::forward(&state, Method::DELETE, Some(&id), None, StatusCode::OK).await
}
