//! Line buffer tests

use ttycmd::line_buffer::{LineBuffer, LINE_SIZE};

#[test]
fn test_push_then_backspace_returns_to_empty() {
    let mut line = LineBuffer::new();

    for i in 0..LINE_SIZE - 1 {
        assert!(line.push(b'a' + (i % 26) as u8));
    }
    for _ in 0..LINE_SIZE - 1 {
        line.backspace();
    }

    assert!(line.is_empty());
    assert_eq!(line.as_str(), "");
}

#[test]
fn test_push_rejected_at_capacity() {
    let mut line = LineBuffer::new();

    for _ in 0..LINE_SIZE - 1 {
        assert!(line.push(b'x'));
    }

    assert!(line.is_full());
    assert!(!line.push(b'x'));
    assert_eq!(line.len(), LINE_SIZE - 1);
}

#[test]
fn test_backspace_on_empty_is_noop() {
    let mut line = LineBuffer::new();
    line.backspace();
    assert!(line.is_empty());
}

#[test]
fn test_set_replaces_contents() {
    let mut line = LineBuffer::new();

    line.push(b'a');
    line.push(b'b');
    line.set("help led");

    assert_eq!(line.as_str(), "help led");
    assert_eq!(line.len(), 8);
}

#[test]
fn test_set_truncates_to_capacity() {
    let mut line = LineBuffer::new();
    let long = "x".repeat(LINE_SIZE + 10);

    line.set(&long);

    assert_eq!(line.len(), LINE_SIZE - 1);
    assert!(line.is_full());
}

#[test]
fn test_clear() {
    let mut line = LineBuffer::new();
    line.set("help");
    line.clear();
    assert!(line.is_empty());
}
