//! Per-bot configuration documents.
//!
//! A bot's config is a flat JSON object stored at `{bot_dir}/config.json`.
//! It always starts life as `{"bot_token": ..., "prefix": "!"}` and grows
//! through shallow-merge patches; nothing in the engine ever interprets the
//! keys beyond that.

use serde_json::{Map, Value};

/// Command prefix written into every new bot's config.
pub const DEFAULT_PREFIX: &str = "!";

/// Build the default configuration document for a new bot.
pub fn default_config(token: &str) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert("bot_token".to_string(), Value::String(token.to_string()));
    doc.insert("prefix".to_string(), Value::String(DEFAULT_PREFIX.to_string()));
    doc
}

/// Shallow-merge `patch` into `current`: patch keys overwrite same-named
/// keys, keys absent from the patch are preserved. Values are replaced
/// wholesale -- nested objects are NOT merged recursively.
pub fn shallow_merge(current: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        current.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_default_config_shape() {
        let doc = default_config("secret-token");
        assert_eq!(doc["bot_token"], json!("secret-token"));
        assert_eq!(doc["prefix"], json!("!"));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_merge_overwrites_and_preserves() {
        let mut current = map(json!({"bot_token": "t", "prefix": "!"}));
        shallow_merge(&mut current, map(json!({"prefix": "?"})));
        assert_eq!(current["prefix"], json!("?"));
        assert_eq!(current["bot_token"], json!("t"));
    }

    #[test]
    fn test_merge_accumulates_new_keys() {
        let mut current = map(json!({"bot_token": "t", "prefix": "!"}));
        shallow_merge(&mut current, map(json!({"prefix": "?"})));
        shallow_merge(&mut current, map(json!({"extra": "v"})));
        assert_eq!(
            Value::Object(current),
            json!({"bot_token": "t", "prefix": "?", "extra": "v"})
        );
    }

    #[test]
    fn test_merge_replaces_nested_values_wholesale() {
        let mut current = map(json!({"opts": {"a": 1, "b": 2}}));
        shallow_merge(&mut current, map(json!({"opts": {"c": 3}})));
        // No deep merge: the whole nested object is replaced.
        assert_eq!(current["opts"], json!({"c": 3}));
    }

    #[test]
    fn test_merge_empty_patch_is_identity() {
        let mut current = map(json!({"bot_token": "t"}));
        shallow_merge(&mut current, Map::new());
        assert_eq!(Value::Object(current), json!({"bot_token": "t"}));
    }
}
