//! Ordering of tickets within a bucket.
//!
//! Both orderings go through `slice::sort_by`, which is stable, so tickets
//! with equal keys keep their relative input order.

use super::{SortKey, Ticket};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Return the tickets ordered by `key` as a new sequence.
///
/// - `Priority`: highest priority first
/// - `Title`: ascending by [`compare_titles`]
pub fn order<'a>(tickets: &[&'a Ticket], key: SortKey) -> Vec<&'a Ticket> {
    let mut ordered = tickets.to_vec();
    match key {
        SortKey::Priority => {
            ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
        SortKey::Title => {
            ordered.sort_by(|a, b| compare_titles(&a.title, &b.title));
        }
    }
    ordered
}

/// Locale-style title comparison.
///
/// Base letters first, ignoring accents and case, so "Éclair" sits with the
/// E's. Ties are broken by accents, then lowercase before uppercase at the
/// first differing character, then raw string order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| case_mask(a).cmp(case_mask(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// 0 for lowercase characters, 1 for everything else
fn case_mask(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| u8::from(!c.is_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ticket(id: &str, title: &str, priority: i64) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            priority,
            status: "Todo".to_string(),
            user_id: String::new(),
            tag: Vec::new(),
        }
    }

    fn ids(tickets: &[&Ticket]) -> Vec<String> {
        tickets.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_sort_by_priority_descending() {
        let t1 = make_ticket("1", "a", 1);
        let t2 = make_ticket("2", "b", 4);
        let t3 = make_ticket("3", "c", 2);

        let sorted = order(&[&t1, &t2, &t3], SortKey::Priority);

        // Urgent comes before Medium comes before Low
        assert_eq!(ids(&sorted), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_priority_ties_keep_input_order() {
        let t1 = make_ticket("1", "a", 3);
        let t2 = make_ticket("2", "b", 3);
        let t3 = make_ticket("3", "c", 4);

        let sorted = order(&[&t1, &t2, &t3], SortKey::Priority);
        assert_eq!(ids(&sorted), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let t1 = make_ticket("1", "banana", 0);
        let t2 = make_ticket("2", "Apple", 0);
        let t3 = make_ticket("3", "cherry", 0);

        let sorted = order(&[&t1, &t2, &t3], SortKey::Title);
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_input_slice_is_untouched() {
        let t1 = make_ticket("1", "b", 0);
        let t2 = make_ticket("2", "a", 4);
        let input = vec![&t1, &t2];

        let _ = order(&input, SortKey::Title);
        let _ = order(&input, SortKey::Priority);
        assert_eq!(ids(&input), vec!["1", "2"]);
    }

    #[test]
    fn test_compare_titles_case_tiebreak() {
        assert_eq!(compare_titles("a", "A"), Ordering::Less);
        assert_eq!(compare_titles("A", "a"), Ordering::Greater);
        assert_eq!(compare_titles("abc", "abc"), Ordering::Equal);
        assert_eq!(compare_titles("", "a"), Ordering::Less);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_accented_titles_sort_with_base_letter() {
        let t1 = make_ticket("1", "Zebra", 0);
        let t2 = make_ticket("2", "Éclair", 0);
        let t3 = make_ticket("3", "apple", 0);
        let t4 = make_ticket("4", "ébauche", 0);

        let sorted = order(&[&t1, &t2, &t3, &t4], SortKey::Title);
        assert_eq!(ids(&sorted), vec!["3", "4", "2", "1"]);
    }

    #[test]
    fn test_accent_breaks_ties_after_base_letters() {
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("résumé", "resumes"), Ordering::Less);
        // Precomposed and decomposed forms differ only in raw bytes
        assert_ne!(compare_titles("\u{e9}", "e\u{301}"), Ordering::Equal);
        assert_eq!(compare_titles("\u{e9}", "\u{e9}"), Ordering::Equal);
    }
}
