//! Integration tests for the warning sink.

use tessera_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_warn_once_records_and_clears() {
    assert!(!has_warned("Test", "first message"));

    warn_once("Test", "first message");
    assert!(has_warned("Test", "first message"));
    assert!(!has_warned("Other", "first message"));

    // Repeating the same warning is harmless.
    warn_once("Test", "first message");
    assert!(has_warned("Test", "first message"));

    clear_warnings();
    assert!(!has_warned("Test", "first message"));
}
