//! One-shot read of the remote ticket source.

use crate::config::Config;
use crate::data::{BoardData, Ticket, User, UNKNOWN_PRIORITY};
use crate::integrations::HTTP_CLIENT;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

/// Fetch tickets and users from the configured source.
///
/// Reads `source.file` when set, otherwise GETs `source.url`.
pub async fn fetch_board(config: &Config) -> Result<BoardData> {
    let payload = match &config.source.file {
        Some(path) => read_payload(path)?,
        None => fetch_payload(&config.source.url, config.source.timeout_secs).await?,
    };
    Ok(parse_board(&payload))
}

async fn fetch_payload(url: &str, timeout_secs: u64) -> Result<Value> {
    tracing::debug!("Fetching board from {}", url);

    let response = HTTP_CLIENT
        .get(url)
        .timeout(Duration::from_secs(timeout_secs))
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("{} returned HTTP {}", url, status);
    }

    response
        .json()
        .await
        .with_context(|| format!("Failed to decode response from {}", url))
}

fn read_payload(path: &Path) -> Result<Value> {
    tracing::debug!("Reading board from {}", path.display());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read board from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse board from {}", path.display()))
}

/// Parse a `{ tickets, users }` payload, skipping entries that cannot be
/// identified and defaulting everything else.
pub fn parse_board(payload: &Value) -> BoardData {
    let tickets = payload["tickets"]
        .as_array()
        .map(|nodes| nodes.iter().filter_map(parse_ticket).collect())
        .unwrap_or_default();

    let users = payload["users"]
        .as_array()
        .map(|nodes| nodes.iter().filter_map(parse_user).collect())
        .unwrap_or_default();

    BoardData { tickets, users }
}

pub fn parse_ticket(node: &Value) -> Option<Ticket> {
    let Some(id) = node["id"].as_str() else {
        tracing::debug!("Skipping ticket without id: {}", node);
        return None;
    };

    let tag = node["tag"]
        .as_array()
        .map(|tags| {
            tags.iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Some(Ticket {
        id: id.to_string(),
        title: string_field(node, "title"),
        priority: parse_priority(&node["priority"]),
        status: string_field(node, "status"),
        user_id: string_field(node, "userId"),
        tag,
    })
}

pub fn parse_user(node: &Value) -> Option<User> {
    let id = node["id"].as_str()?;
    Some(User {
        id: id.to_string(),
        name: string_field(node, "name"),
    })
}

fn string_field(node: &Value, key: &str) -> String {
    node[key].as_str().unwrap_or_default().to_string()
}

/// Whole numbers or numeric strings. A missing priority is "No priority";
/// anything else maps to [`UNKNOWN_PRIORITY`] so it groups as unknown.
fn parse_priority(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(whole_number))
            .unwrap_or(UNKNOWN_PRIORITY),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
                .unwrap_or(UNKNOWN_PRIORITY)
        }
        _ => UNKNOWN_PRIORITY,
    }
}

fn whole_number(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then(|| f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_accepts_numeric_strings() {
        assert_eq!(parse_priority(&json!(3)), 3);
        assert_eq!(parse_priority(&json!("4")), 4);
        assert_eq!(parse_priority(&json!(3.0)), 3);
        assert_eq!(parse_priority(&json!(" 2 ")), 2);
        assert_eq!(parse_priority(&Value::Null), 0);
    }

    #[test]
    fn test_non_integer_priority_is_unknown() {
        assert_eq!(parse_priority(&json!("urgent")), UNKNOWN_PRIORITY);
        assert_eq!(parse_priority(&json!(2.5)), UNKNOWN_PRIORITY);
        assert_eq!(parse_priority(&json!("1.5")), UNKNOWN_PRIORITY);
        assert_eq!(parse_priority(&json!(true)), UNKNOWN_PRIORITY);
        assert_eq!(parse_priority(&json!([3])), UNKNOWN_PRIORITY);
    }

    #[test]
    fn test_out_of_range_priority_is_kept() {
        let ticket = parse_ticket(&json!({"id": "CAM-9", "priority": 7})).unwrap();
        assert_eq!(ticket.priority, 7);
    }

    #[test]
    fn test_user_without_id_is_skipped() {
        assert!(parse_user(&json!({"name": "Ghost"})).is_none());
        assert_eq!(parse_user(&json!({"id": "usr-1"})).unwrap().name, "");
    }

    #[tokio::test]
    async fn test_fetch_board_reads_configured_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        std::fs::write(
            &path,
            json!({
                "tickets": [{"id": "CAM-1", "title": "t", "priority": 1, "status": "Todo", "userId": "usr-1", "tag": []}],
                "users": [{"id": "usr-1", "name": "Anoop"}]
            })
            .to_string(),
        )
        .unwrap();

        let mut config = Config::default();
        config.source.file = Some(path);

        let board = fetch_board(&config).await.unwrap();
        assert_eq!(board.tickets.len(), 1);
        assert_eq!(board.users[0].name, "Anoop");
    }

    #[tokio::test]
    async fn test_fetch_board_missing_file_is_error() {
        let mut config = Config::default();
        config.source.file = Some("/nonexistent/ticketboard/board.json".into());
        assert!(fetch_board(&config).await.is_err());
    }
}
