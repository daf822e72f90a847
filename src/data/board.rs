//! The column pipeline: grouping followed by per-bucket ordering.

use super::{group, order, Bucket, TicketStore, ViewState};

/// Run the full pipeline: group by the selected key, then order each bucket.
pub fn columns<'a>(store: &'a TicketStore, view: &ViewState) -> Vec<Bucket<'a>> {
    let sort_by = view.sort_by();
    group(store.all(), store.users(), view.group_by())
        .into_iter()
        .map(|bucket| Bucket {
            tickets: order(&bucket.tickets, sort_by),
            label: bucket.label,
        })
        .collect()
}
