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

use std::{env, time::Duration};

use crate::utils;

/// Base URL of the product-catalog API when `UPSTREAM_BASE_URL` is not set.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.stagingv3.microgen.id/query/api/v1";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Proxy Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// The port to listen on.
    pub port: u16,
    /// Project key inserted into every upstream URL.
    /// Empty when `API_KEY` is missing, which leaves an empty path segment.
    pub api_key: String,
    /// Upstream base URL without a trailing slash.
    pub upstream_base_url: String,
    /// Fixed timeout applied to every outbound call.
    pub upstream_timeout: Duration,
}

impl Config {
    /// # Environment Variables
    /// * `API_KEY` - Upstream project key (required, the server still starts without it).
    /// * `PORT` - Port to listen on (default: 8080).
    /// * `UPSTREAM_BASE_URL` - Product API base URL (default: [`DEFAULT_UPSTREAM_BASE_URL`]).
    /// * `UPSTREAM_TIMEOUT_SECS` - Outbound request timeout (default: 30).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("api key is required.");
        }

        let upstream_base_url = lookup("UPSTREAM_BASE_URL")
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));

        Self {
            port,
            api_key,
            upstream_base_url,
            upstream_timeout,
        }
    }

    /// Builds the upstream target this configuration points at.
    pub fn target(&self) -> UpstreamTarget {
        UpstreamTarget::new(&self.upstream_base_url, &self.api_key)
    }
}

/// The `/products` resource on the upstream, resolved once at startup.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    products_url: String,
    api_key: String,
}

impl UpstreamTarget {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            products_url: format!("{}/{}/products", base_url, api_key),
            api_key: api_key.to_string(),
        }
    }

    /// URL of the product collection.
    pub fn collection(&self) -> &str {
        &self.products_url
    }

    /// URL of a single product. The id is appended as given.
    pub fn item(&self, id: &str) -> String {
        format!("{}/{}", self.products_url, id)
    }

    /// Returns `url` with the API key masked, for logging.
    pub fn redact(&self, url: &str) -> String {
        utils::mask_api_key(url, &self.api_key)
    }
}
