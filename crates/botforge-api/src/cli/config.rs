//! Config CLI commands.

use anyhow::Result;
use console::style;
use serde_json::{Map, Value};

use crate::state::AppState;

/// Parse `key=value` pairs into a flat JSON patch object.
///
/// Values are parsed as JSON when possible (`42`, `true`, `{"a":1}`) and
/// fall back to plain strings otherwise.
fn parse_pairs(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut patch = Map::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{pair}'"))?;
        if key.is_empty() {
            anyhow::bail!("expected key=value, got '{pair}'");
        }
        let value = serde_json::from_str(value)
            .unwrap_or_else(|_| Value::String(value.to_string()));
        patch.insert(key.to_string(), value);
    }
    Ok(patch)
}

/// Shallow-merge key=value pairs into a bot's config document.
pub async fn set_config(state: &AppState, bot: &str, pairs: &[String], json: bool) -> Result<()> {
    let patch = parse_pairs(pairs)?;
    let merged = state.config_store.update(bot, patch).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&Value::Object(merged))?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Config for bot '{}' updated.",
        style("✓").green().bold(),
        style(bot).cyan()
    );
    for line in serde_json::to_string_pretty(&Value::Object(merged))?.lines() {
        println!("    {line}");
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_pairs_json_and_string_values() {
        let patch = parse_pairs(&[
            "prefix=?".to_string(),
            "retries=3".to_string(),
            "debug=true".to_string(),
        ])
        .unwrap();
        assert_eq!(patch["prefix"], json!("?"));
        assert_eq!(patch["retries"], json!(3));
        assert_eq!(patch["debug"], json!(true));
    }

    #[test]
    fn test_parse_pairs_rejects_missing_separator() {
        assert!(parse_pairs(&["oops".to_string()]).is_err());
        assert!(parse_pairs(&["=value".to_string()]).is_err());
    }

    #[test]
    fn test_parse_pairs_value_may_contain_equals() {
        let patch = parse_pairs(&["url=https://x.dev/?a=b".to_string()]).unwrap();
        assert_eq!(patch["url"], json!("https://x.dev/?a=b"));
    }
}
