// Host-side tests for generated page content.

use portfolio_core::content::{footer_text, NAV_TARGETS, REVEAL_SECTIONS, WORK_HISTORY};

#[test]
fn footer_uses_given_year() {
    assert_eq!(footer_text(2025), "© 2025 Athiban");
}

#[test]
fn work_history_entries_are_complete() {
    assert_eq!(WORK_HISTORY.len(), 2);
    assert_eq!(WORK_HISTORY[0].company, "Mydbops");
    for entry in &WORK_HISTORY {
        assert!(!entry.role.is_empty());
        assert!(!entry.period.is_empty());
        assert!(!entry.description.is_empty());
        assert_eq!(entry.tags.len(), 5);
    }
}

#[test]
fn navigation_targets_revealed_sections() {
    for (button, section) in NAV_TARGETS {
        assert!(button.starts_with("nav-"));
        assert!(REVEAL_SECTIONS.contains(&section));
    }
}
