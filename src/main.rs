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

mod config;
mod error;
mod forwarder;
mod handlers;
mod state;
mod utils;

use axum::{
    Router,
    routing::{any, get},
};
use reqwest::Client;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    // Redirects are relayed to the caller, never followed.
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.upstream_timeout)
        .build()
        .expect("Failed to build reqwest client");

    let state = AppState::new(client, config.target());
    tracing::info!(
        "Forwarding to {}",
        state.target.redact(state.target.collection())
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Proxy listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

/// Routes the product endpoints to their upstream forwarders.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::home))
        .route(
            "/products",
            get(handlers::list_products).post(handlers::update_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .patch(handlers::create_product)
                .delete(handlers::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
