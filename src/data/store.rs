//! Working set of tickets and users for the current session.

use super::{Ticket, TicketDraft, User, DEFAULT_TAG, TICKET_ID_PREFIX};
use std::collections::HashSet;

/// Why a draft was refused by [`TicketStore::append`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDraft {
    #[error("priority {0:?} is not a number")]
    NonNumericPriority(String),
    #[error("priority {0} is outside 0-4")]
    PriorityOutOfRange(i64),
    #[error("status must not be empty")]
    MissingStatus,
}

#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    users: Vec<User>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full contents with a fresh remote read.
    ///
    /// Tickets repeating an earlier id are dropped so ids stay unique.
    pub fn load(&mut self, tickets: Vec<Ticket>, users: Vec<User>) {
        let mut seen = HashSet::new();
        let total = tickets.len();
        self.tickets = tickets
            .into_iter()
            .filter(|t| {
                let fresh = seen.insert(t.id.clone());
                if !fresh {
                    tracing::warn!("Dropping ticket with duplicate id {}", t.id);
                }
                fresh
            })
            .collect();
        self.users = users;
        tracing::info!(
            "Loaded {} tickets ({} received) and {} users",
            self.tickets.len(),
            total,
            self.users.len()
        );
    }

    /// Validate a draft and append it as a new ticket.
    ///
    /// The store is untouched when the draft is rejected.
    pub fn append(&mut self, draft: TicketDraft) -> Result<Ticket, InvalidDraft> {
        let priority = parse_priority(&draft.priority)?;
        if draft.status.trim().is_empty() {
            return Err(InvalidDraft::MissingStatus);
        }

        let ticket = Ticket {
            id: self.next_id(),
            title: draft.title,
            priority,
            status: draft.status,
            user_id: draft.user_id,
            tag: vec![DEFAULT_TAG.to_string()],
        };
        tracing::debug!("Appending ticket {}", ticket.id);
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.tickets.iter().any(|t| t.id == id)
    }

    /// `CAM-<count + 1>`, advanced past any id already present.
    fn next_id(&self) -> String {
        let mut n = self.tickets.len() + 1;
        loop {
            let id = format!("{}{}", TICKET_ID_PREFIX, n);
            if !self.contains_id(&id) {
                return id;
            }
            n += 1;
        }
    }
}

fn parse_priority(raw: &str) -> Result<i64, InvalidDraft> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| InvalidDraft::NonNumericPriority(raw.to_string()))?;
    if !(0..=4).contains(&value) {
        return Err(InvalidDraft::PriorityOutOfRange(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ticket(id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: format!("Ticket {}", id),
            priority: 1,
            status: "Todo".to_string(),
            user_id: String::new(),
            tag: Vec::new(),
        }
    }

    fn draft(priority: &str) -> TicketDraft {
        TicketDraft {
            title: "Fix bug".to_string(),
            priority: priority.to_string(),
            status: "Backlog".to_string(),
            user_id: "usr-1".to_string(),
        }
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut store = TicketStore::new();
        store.load(vec![make_ticket("CAM-1")], vec![]);
        store.load(vec![make_ticket("A"), make_ticket("B")], vec![]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].id, "A");
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let mut store = TicketStore::new();
        let mut second = make_ticket("CAM-1");
        second.title = "second".to_string();
        store.load(vec![make_ticket("CAM-1"), second, make_ticket("CAM-2")], vec![]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].title, "Ticket CAM-1");
    }

    #[test]
    fn test_append_trims_priority() {
        let mut store = TicketStore::new();
        let ticket = store.append(draft(" 2 ")).unwrap();
        assert_eq!(ticket.priority, 2);
        assert_eq!(ticket.id, "CAM-1");
    }

    #[test]
    fn test_append_rejects_out_of_range_priority() {
        let mut store = TicketStore::new();
        assert_eq!(
            store.append(draft("5")),
            Err(InvalidDraft::PriorityOutOfRange(5))
        );
        assert_eq!(
            store.append(draft("-1")),
            Err(InvalidDraft::PriorityOutOfRange(-1))
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_rejects_blank_status() {
        let mut store = TicketStore::new();
        let mut d = draft("1");
        d.status = "  ".to_string();
        assert_eq!(store.append(d), Err(InvalidDraft::MissingStatus));
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_keeps_status_verbatim() {
        let mut store = TicketStore::new();
        let mut d = draft("1");
        d.status = "Todo ".to_string();
        assert_eq!(store.append(d).unwrap().status, "Todo ");
        assert_eq!(store.all()[0].status, "Todo ");
    }

    #[test]
    fn test_append_skips_taken_ids() {
        let mut store = TicketStore::new();
        store.load(vec![make_ticket("CAM-2"), make_ticket("X")], vec![]);

        // count + 1 = 3 is free
        assert_eq!(store.append(draft("1")).unwrap().id, "CAM-3");

        let mut store = TicketStore::new();
        store.load(vec![make_ticket("CAM-2")], vec![]);
        // CAM-2 is taken, so the next free number is used
        assert_eq!(store.append(draft("1")).unwrap().id, "CAM-3");
    }
}
