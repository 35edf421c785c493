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

use serde_json::Value;

/// Replaces the `/{api_key}/` path segment of an upstream URL with `/***/`.
///
/// An empty key is left alone, there is nothing to hide.
pub fn mask_api_key(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return url.to_string();
    }
    url.replacen(&format!("/{}/", api_key), "/***/", 1)
}

/// Reads a JSON value as text.
///
/// Strings are taken as-is. Objects and arrays have no text and read as `""`.
/// Other scalars use their JSON rendering (`null` becomes `"null"`).
pub fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn masks_only_the_key_segment() {
        assert_eq!(
            mask_api_key("https://host/v1/key/products/key", "key"),
            "https://host/v1/***/products/key"
        );
    }

    #[test]
    fn empty_key_is_not_masked() {
        assert_eq!(
            mask_api_key("https://host/v1//products", ""),
            "https://host/v1//products"
        );
    }

    #[test]
    fn message_text_handles_non_strings() {
        assert_eq!(message_text(&json!("project not found")), "project not found");
        assert_eq!(message_text(&json!(404)), "404");
        assert_eq!(message_text(&Value::Null), "null");
    }

    #[test]
    fn message_text_of_containers_is_empty() {
        assert_eq!(message_text(&json!({"detail": "project not found"})), "");
        assert_eq!(message_text(&json!(["project not found"])), "");
    }
}
