//! Command history in a contiguous byte arena
//!
//! Stored entries are concatenated in chronological order, each followed by
//! a `0` delimiter. A single arena avoids per-entry allocation; eviction is
//! always in units of whole entries so offsets stay valid.

use heapless::Vec;

/// History arena capacity in bytes, delimiters included.
pub const HISTORY_SIZE: usize = 1000;

/// Bounded command history with a browse cursor.
///
/// The cursor is the start offset of the recalled entry; `None` means the
/// user is editing a fresh line, not recalling history.
pub struct History {
    arena: Vec<u8, HISTORY_SIZE>,
    cursor: Option<usize>,
}

impl History {
    /// Create empty history
    pub const fn new() -> Self {
        Self {
            arena: Vec::new(),
            cursor: None,
        }
    }

    /// Append a submitted line and leave browse mode.
    ///
    /// Oldest whole entries are evicted until the new one fits. Empty lines
    /// are never stored (an empty recall is the fresh-line signal), and a
    /// line that cannot fit even an empty arena is dropped.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;

        let need = line.len() + 1;
        if line.is_empty() || need > HISTORY_SIZE {
            return;
        }

        if self.arena.len() + need > HISTORY_SIZE {
            let mut evicted = 0;
            while self.arena.len() - evicted + need > HISTORY_SIZE {
                evicted += self.entry_len(evicted) + 1;
            }
            log::trace!("history: evicting {} bytes", evicted);
            let kept = self.arena.len() - evicted;
            self.arena.copy_within(evicted.., 0);
            self.arena.truncate(kept);
        }

        // room was made above, neither push can fail
        let _ = self.arena.extend_from_slice(line.as_bytes());
        let _ = self.arena.push(0);
    }

    /// Recall the previous (older) entry.
    ///
    /// Starts at the newest entry when not browsing; stays on the oldest
    /// once reached.
    pub fn older(&mut self) -> Option<&str> {
        if self.arena.is_empty() {
            return None;
        }

        let start = match self.cursor {
            None => self.start_of_last(),
            Some(0) => 0,
            Some(cur) => self.start_before(cur - 1),
        };

        self.cursor = Some(start);
        Some(self.entry_at(start))
    }

    /// Recall the next (newer) entry.
    ///
    /// Stepping past the newest entry returns `Some("")` - the fresh-line
    /// signal - and leaves browse mode. Not browsing is a no-op.
    pub fn newer(&mut self) -> Option<&str> {
        let cur = self.cursor?;

        let next = cur + self.entry_len(cur) + 1;
        if next >= self.arena.len() {
            self.cursor = None;
            return Some("");
        }

        self.cursor = Some(next);
        Some(self.entry_at(next))
    }

    /// Check if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Length of the entry starting at `start`, delimiter excluded.
    fn entry_len(&self, start: usize) -> usize {
        self.arena[start..]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.arena.len() - start)
    }

    /// Start offset of the entry whose delimiter sits at `delim`.
    fn start_before(&self, delim: usize) -> usize {
        self.arena[..delim]
            .iter()
            .rposition(|&b| b == 0)
            .map(|p| p + 1)
            .unwrap_or(0)
    }

    /// Start offset of the newest entry.
    fn start_of_last(&self) -> usize {
        self.start_before(self.arena.len() - 1)
    }

    fn entry_at(&self, start: usize) -> &str {
        let len = self.entry_len(start);
        core::str::from_utf8(&self.arena[start..start + len]).unwrap_or("")
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
