//! Test utilities and fixtures for ticketboard tests
#![allow(dead_code)]

use serde_json::{json, Value};
use ticketboard::data::{Ticket, User};

pub fn ticket(id: &str, priority: i64, status: &str) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: format!("Ticket {}", id),
        priority,
        status: status.to_string(),
        user_id: String::new(),
        tag: vec!["Feature Request".to_string()],
    }
}

pub fn ticket_for(id: &str, priority: i64, user_id: &str) -> Ticket {
    Ticket {
        user_id: user_id.to_string(),
        ..ticket(id, priority, "Todo")
    }
}

pub fn titled(id: &str, title: &str, priority: i64) -> Ticket {
    Ticket {
        title: title.to_string(),
        ..ticket(id, priority, "Todo")
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn ids(tickets: &[&Ticket]) -> Vec<String> {
    tickets.iter().map(|t| t.id.clone()).collect()
}

/// A payload shaped like the remote endpoint's response
pub fn board_json() -> Value {
    json!({
        "tickets": [
            {
                "id": "CAM-1",
                "title": "Update User Profile Page UI",
                "tag": ["Feature request"],
                "userId": "usr-1",
                "status": "Todo",
                "priority": 4
            },
            {
                "id": "CAM-2",
                "title": "Add Multi-Language Support",
                "tag": ["Feature Request"],
                "userId": "usr-2",
                "status": "In progress",
                "priority": 3
            },
            {
                "id": "CAM-3",
                "title": "Optimize Database Queries for Performance",
                "tag": ["Feature Request"],
                "userId": "usr-2",
                "status": "In progress",
                "priority": 1
            }
        ],
        "users": [
            { "id": "usr-1", "name": "Anoop sharma", "available": false },
            { "id": "usr-2", "name": "Yogesh", "available": true }
        ]
    })
}
