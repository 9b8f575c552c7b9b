//! History arena tests

use ttycmd::history::{History, HISTORY_SIZE};

#[test]
fn test_empty_history() {
    let mut history = History::new();
    assert!(history.older().is_none());
    assert!(history.newer().is_none());
}

#[test]
fn test_push_and_recall_walk() {
    let mut history = History::new();

    history.push("help");
    history.push("show wpm");

    // Walk back
    assert_eq!(history.older(), Some("show wpm"));
    assert_eq!(history.older(), Some("help"));
    assert_eq!(history.older(), Some("help")); // stays at oldest

    // Walk forward
    assert_eq!(history.newer(), Some("show wpm"));
    assert_eq!(history.newer(), Some("")); // fresh line
    assert_eq!(history.newer(), None); // not browsing anymore
}

#[test]
fn test_up_down_round_trip_restores_fresh_line() {
    let mut history = History::new();
    history.push("led on");

    assert_eq!(history.older(), Some("led on"));
    assert_eq!(history.newer(), Some(""));

    // Round trip again from the parked state
    assert_eq!(history.older(), Some("led on"));
    assert_eq!(history.newer(), Some(""));
}

#[test]
fn test_longer_walk_is_reversible() {
    let mut history = History::new();
    history.push("one");
    history.push("two");
    history.push("three");

    assert_eq!(history.older(), Some("three"));
    assert_eq!(history.older(), Some("two"));
    assert_eq!(history.newer(), Some("three"));
    assert_eq!(history.newer(), Some(""));
    assert_eq!(history.older(), Some("three"));
}

#[test]
fn test_push_resets_browse_cursor() {
    let mut history = History::new();

    history.push("cmd1");
    history.push("cmd2");
    history.older();

    history.push("cmd3");

    // Recall starts from the newest again
    assert_eq!(history.older(), Some("cmd3"));
}

#[test]
fn test_eviction_preserves_whole_recent_entries() {
    let mut history = History::new();

    // Each entry occupies exactly 100 arena bytes (99 + delimiter),
    // so ten fill the arena completely.
    let lines: Vec<String> = (0..11).map(|i| format!("{:02}{}", i, "a".repeat(97))).collect();
    for line in &lines {
        history.push(line);
    }

    // The eleventh push evicted exactly the oldest entry. The ten newest
    // survive verbatim, oldest-first eviction leaves no partial entry.
    for i in (1..11).rev() {
        assert_eq!(history.older(), Some(lines[i].as_str()));
    }
    assert_eq!(history.older(), Some(lines[1].as_str())); // oldest, entry 0 is gone
}

#[test]
fn test_eviction_of_multiple_small_entries() {
    let mut history = History::new();

    // 200 five-byte entries (4 + delimiter) fill the arena
    for i in 0..200 {
        history.push(&format!("c{:03}", i));
    }
    // A large entry forces many evictions at once
    let big = "b".repeat(499);
    history.push(&big);

    assert_eq!(history.older(), Some(big.as_str()));
    // The newest surviving small entry is intact
    assert_eq!(history.older(), Some("c199"));
}

#[test]
fn test_empty_line_never_stored() {
    let mut history = History::new();
    history.push("");
    assert!(history.is_empty());
    assert!(history.older().is_none());
}

#[test]
fn test_oversized_line_not_stored() {
    let mut history = History::new();
    let huge = "x".repeat(HISTORY_SIZE);
    history.push(&huge);
    assert!(history.is_empty());
}

#[test]
fn test_newer_without_browsing_is_noop() {
    let mut history = History::new();
    history.push("help");
    assert_eq!(history.newer(), None);
}
