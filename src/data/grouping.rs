//! Partition tickets into labelled buckets.

use super::{priority_label, GroupKey, Ticket, User, UNKNOWN_USER_LABEL};
use serde::Serialize;
use std::collections::HashMap;

/// A named group of tickets sharing a grouping key's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<'a> {
    pub label: String,
    pub tickets: Vec<&'a Ticket>,
}

/// Group tickets by the given key.
///
/// Buckets come out in first-appearance order and tickets keep their input
/// order. Only non-empty buckets are produced.
pub fn group<'a>(tickets: &'a [Ticket], users: &[User], key: GroupKey) -> Vec<Bucket<'a>> {
    // First user with a given id wins
    let mut names: HashMap<&str, &str> = HashMap::with_capacity(users.len());
    for user in users {
        names.entry(user.id.as_str()).or_insert(user.name.as_str());
    }

    let mut buckets: Vec<Bucket<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for ticket in tickets {
        let label = bucket_label(ticket, &names, key);
        match index.get(label) {
            Some(&pos) => buckets[pos].tickets.push(ticket),
            None => {
                index.insert(label.to_string(), buckets.len());
                buckets.push(Bucket {
                    label: label.to_string(),
                    tickets: vec![ticket],
                });
            }
        }
    }

    buckets
}

fn bucket_label<'t>(ticket: &'t Ticket, names: &HashMap<&str, &'t str>, key: GroupKey) -> &'t str {
    match key {
        GroupKey::Status => &ticket.status,
        GroupKey::User => match names.get(ticket.user_id.as_str()) {
            Some(name) if !name.is_empty() => *name,
            _ => UNKNOWN_USER_LABEL,
        },
        GroupKey::Priority => priority_label(ticket.priority),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UNKNOWN_PRIORITY_LABEL;

    fn make_ticket(id: &str, priority: i64, status: &str, user_id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: format!("Ticket {}", id),
            priority,
            status: status.to_string(),
            user_id: user_id.to_string(),
            tag: Vec::new(),
        }
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn labels(buckets: &[Bucket<'_>]) -> Vec<String> {
        buckets.iter().map(|b| b.label.clone()).collect()
    }

    #[test]
    fn test_status_labels_are_verbatim() {
        let tickets = vec![
            make_ticket("1", 0, "Todo", ""),
            make_ticket("2", 0, "todo", ""),
            make_ticket("3", 0, "Todo", ""),
        ];
        let buckets = group(&tickets, &[], GroupKey::Status);
        assert_eq!(labels(&buckets), vec!["Todo", "todo"]);
        assert_eq!(buckets[0].tickets.len(), 2);
    }

    #[test]
    fn test_user_labels_resolve_names() {
        let users = vec![user("usr-1", "Anoop"), user("usr-2", "")];
        let tickets = vec![
            make_ticket("1", 0, "Todo", "usr-1"),
            make_ticket("2", 0, "Todo", "usr-2"),
            make_ticket("3", 0, "Todo", ""),
        ];
        let buckets = group(&tickets, &users, GroupKey::User);
        assert_eq!(labels(&buckets), vec!["Anoop", UNKNOWN_USER_LABEL]);
        assert_eq!(buckets[1].tickets.len(), 2);
    }

    #[test]
    fn test_first_user_with_id_wins() {
        let users = vec![user("usr-1", "First"), user("usr-1", "Second")];
        let tickets = vec![make_ticket("1", 0, "Todo", "usr-1")];
        let buckets = group(&tickets, &users, GroupKey::User);
        assert_eq!(labels(&buckets), vec!["First"]);
    }

    #[test]
    fn test_priority_fallback_bucket() {
        let tickets = vec![
            make_ticket("1", 9, "Todo", ""),
            make_ticket("2", 4, "Todo", ""),
            make_ticket("3", -3, "Todo", ""),
        ];
        let buckets = group(&tickets, &[], GroupKey::Priority);
        assert_eq!(labels(&buckets), vec![UNKNOWN_PRIORITY_LABEL, "Urgent"]);
        assert_eq!(buckets[0].tickets.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_no_buckets() {
        for key in GroupKey::all() {
            assert!(group(&[], &[], key).is_empty());
        }
    }
}
