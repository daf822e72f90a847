//! Core board data: tickets, users, and the grouping/ordering pipeline.

pub mod board;
pub mod grouping;
pub mod sorting;
pub mod store;
pub mod view;

pub use board::columns;
pub use grouping::{group, Bucket};
pub use sorting::{compare_titles, order};
pub use store::{InvalidDraft, TicketStore};
pub use view::ViewState;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix for locally synthesized ticket ids (`CAM-<n>`)
pub const TICKET_ID_PREFIX: &str = "CAM-";

/// Tag given to every ticket created through the add-ticket path
pub const DEFAULT_TAG: &str = "Feature Request";

/// Bucket label for tickets whose assignee cannot be resolved
pub const UNKNOWN_USER_LABEL: &str = "Unknown User";

/// Bucket label for priorities outside 0-4
pub const UNKNOWN_PRIORITY_LABEL: &str = "Unknown Priority";
/// Stand-in for remote priorities that are not whole numbers
pub const UNKNOWN_PRIORITY: i64 = -1;

/// Statuses offered when creating a ticket locally
pub const LOCAL_STATUSES: [&str; 3] = ["Todo", "In progress", "Backlog"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub priority: i64,
    pub status: String,
    pub user_id: String,
    pub tag: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Result of the one-shot remote read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// Unvalidated add-ticket input, as collected by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    pub title: String,
    /// Raw priority string, parsed on append
    pub priority: String,
    pub status: String,
    pub user_id: String,
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            priority: "1".to_string(),
            status: LOCAL_STATUSES[0].to_string(),
            user_id: String::new(),
        }
    }
}

/// Human-readable name for a priority value, if it is in the 0-4 table.
pub fn priority_name(priority: i64) -> Option<&'static str> {
    match priority {
        4 => Some("Urgent"),
        3 => Some("High"),
        2 => Some("Medium"),
        1 => Some("Low"),
        0 => Some("No priority"),
        _ => None,
    }
}

/// Priority label used for grouping, with a stable fallback.
pub fn priority_label(priority: i64) -> &'static str {
    priority_name(priority).unwrap_or(UNKNOWN_PRIORITY_LABEL)
}

/// Priorities in the order the add-ticket form offers them
pub const PRIORITY_CHOICES: [i64; 5] = [4, 3, 2, 1, 0];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized key: {0:?}")]
pub struct UnknownKey(pub String);

/// Discriminator used to partition tickets into buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupKey {
    /// Stored preference value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::User => "user",
            Self::Priority => "priority",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::User => "User",
            Self::Priority => "Priority",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Status, Self::User, Self::Priority].into_iter()
    }
}

impl FromStr for GroupKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "user" => Ok(Self::User),
            "priority" => Ok(Self::Priority),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparator used to order tickets within a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Priority,
    Title,
}

impl SortKey {
    /// Stored preference value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::Title => "Title",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Priority, Self::Title].into_iter()
    }
}

impl FromStr for SortKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels() {
        assert_eq!(priority_label(4), "Urgent");
        assert_eq!(priority_label(0), "No priority");
        assert_eq!(priority_label(7), UNKNOWN_PRIORITY_LABEL);
        assert_eq!(priority_label(UNKNOWN_PRIORITY), UNKNOWN_PRIORITY_LABEL);
    }

    #[test]
    fn test_keys_parse_their_stored_form() {
        for key in GroupKey::all() {
            assert_eq!(key.as_str().parse::<GroupKey>(), Ok(key));
        }
        for key in SortKey::all() {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("Status".parse::<GroupKey>().is_err());
        assert!("".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_unknown_key_message() {
        let err = "assignee".parse::<GroupKey>().unwrap_err();
        assert_eq!(err, UnknownKey("assignee".to_string()));
        assert_eq!(err.to_string(), "unrecognized key: \"assignee\"");
    }

    #[test]
    fn test_ticket_uses_wire_field_names() {
        let ticket = Ticket {
            id: "CAM-1".to_string(),
            title: "t".to_string(),
            priority: 2,
            status: "Todo".to_string(),
            user_id: "usr-1".to_string(),
            tag: vec![DEFAULT_TAG.to_string()],
        };
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["userId"], "usr-1");
    }
}
