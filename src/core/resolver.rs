//! Turns a raw backend slot payload into the rendered time selector.
//!
//! The one non-obvious rule lives here: the same payload shape means opposite
//! things depending on the requested date. For today or past dates the backend
//! reports the slots that are taken; for strictly future dates it reports the
//! slots that are available.

use crate::domain::model::{RenderedOption, SLOT_CATALOG};
use std::collections::HashSet;

pub const LABEL_FREE: &str = "Liber";
pub const LABEL_TAKEN: &str = "Ocupat";

/// Lexical comparison is sound because both strings are fixed-width
/// `YYYY-MM-DD`.
pub fn is_today_or_past(date: &str, today: &str) -> bool {
    date <= today
}

/// Current local calendar date as a fixed-width ISO string.
pub fn today_local() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Maps `(date, selected services, slot payload)` to the full option list in
/// catalog order. An empty date or empty selection is an incomplete form, not
/// an error: no options are produced.
pub fn resolve_options(
    date: &str,
    today: &str,
    selected_ids: &[String],
    slots: &[String],
) -> Vec<RenderedOption> {
    if date.is_empty() || selected_ids.is_empty() {
        return Vec::new();
    }

    let reported: HashSet<&str> = slots.iter().map(String::as_str).collect();
    let taken_semantics = is_today_or_past(date, today);

    SLOT_CATALOG
        .iter()
        .map(|&hour| {
            let listed = reported.contains(hour);
            let selectable = if taken_semantics { !listed } else { listed };
            let state = if selectable { LABEL_FREE } else { LABEL_TAKEN };
            RenderedOption {
                id: hour.to_string(),
                label: format!("{} ({})", hour, state),
                selectable,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Vec<String> {
        vec!["tire-change".to_string()]
    }

    fn slots(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_past_date_payload_is_taken_set() {
        let options = resolve_options(
            "2020-01-01",
            "2024-06-01",
            &selection(),
            &slots(&["08:00", "12:30"]),
        );

        assert_eq!(options.len(), SLOT_CATALOG.len());
        for option in &options {
            if option.id == "08:00" || option.id == "12:30" {
                assert!(!option.selectable);
                assert_eq!(option.label, format!("{} (Ocupat)", option.id));
            } else {
                assert!(option.selectable);
                assert_eq!(option.label, format!("{} (Liber)", option.id));
            }
        }
    }

    #[test]
    fn test_today_uses_taken_semantics() {
        // Boundary: date == today flips to taken semantics, not available.
        let options = resolve_options("2024-06-01", "2024-06-01", &selection(), &slots(&["08:00"]));

        let first = &options[0];
        assert_eq!(first.id, "08:00");
        assert!(!first.selectable);
        assert_eq!(first.label, "08:00 (Ocupat)");
        assert!(options[1..].iter().all(|o| o.selectable));
    }

    #[test]
    fn test_future_date_payload_is_available_set() {
        let options = resolve_options(
            "2099-01-01",
            "2024-06-01",
            &selection(),
            &slots(&["09:00", "09:30"]),
        );

        for option in &options {
            if option.id == "09:00" || option.id == "09:30" {
                assert!(option.selectable);
                assert_eq!(option.label, format!("{} (Liber)", option.id));
            } else {
                assert!(!option.selectable);
            }
        }
    }

    #[test]
    fn test_output_follows_catalog_order_not_payload_order() {
        let options = resolve_options(
            "2099-01-01",
            "2024-06-01",
            &selection(),
            &slots(&["17:30", "08:00", "12:00"]),
        );

        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, SLOT_CATALOG.to_vec());
    }

    #[test]
    fn test_payload_entries_outside_catalog_are_ignored() {
        let options = resolve_options(
            "2020-01-01",
            "2024-06-01",
            &selection(),
            &slots(&["07:15", "23:00"]),
        );

        assert_eq!(options.len(), SLOT_CATALOG.len());
        assert!(options.iter().all(|o| o.selectable));
    }

    #[test]
    fn test_empty_date_or_selection_yields_no_options() {
        assert!(resolve_options("", "2024-06-01", &selection(), &slots(&["08:00"])).is_empty());
        assert!(resolve_options("2024-06-02", "2024-06-01", &[], &slots(&["08:00"])).is_empty());
    }

    #[test]
    fn test_resolver_is_idempotent() {
        let payload = slots(&["10:00", "10:30"]);
        let first = resolve_options("2099-01-01", "2024-06-01", &selection(), &payload);
        let second = resolve_options("2099-01-01", "2024-06-01", &selection(), &payload);
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_today_or_past_predicate() {
        assert!(is_today_or_past("2024-06-01", "2024-06-01"));
        assert!(is_today_or_past("2024-05-31", "2024-06-01"));
        assert!(!is_today_or_past("2024-06-02", "2024-06-01"));
    }
}
