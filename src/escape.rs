//! ANSI cursor-key escape sequence detector
//!
//! Minimal three-state machine recognizing `ESC [ A/B/C/D`. Any other CSI
//! sequence collapses back to idle without side effects. Pure decoder - no
//! buffers, no I/O.

/// Detector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    /// Ordinary input
    None,
    /// Got ESC
    Start,
    /// Got ESC [
    Code,
}

/// Cursor key decoded from a completed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKey {
    Up,
    Down,
    Right,
    Left,
}

/// Classification of one fed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ordinary input, process normally
    Pass,
    /// Swallowed as part of a sequence
    Consumed,
    /// Sequence completed
    Key(CursorKey),
}

/// Escape sequence detector.
#[derive(Debug)]
pub struct EscapeDetector {
    state: EscapeState,
}

impl EscapeDetector {
    /// Create a detector in the idle state.
    pub const fn new() -> Self {
        Self {
            state: EscapeState::None,
        }
    }

    /// Feed one byte.
    ///
    /// ESC always re-arms the detector, so `ESC ESC` stays armed without
    /// triggering anything. A non-`[` byte after ESC aborts the sequence
    /// and is handed back as ordinary input.
    pub fn feed(&mut self, byte: u8) -> Outcome {
        if byte == 0x1B {
            self.state = EscapeState::Start;
            return Outcome::Consumed;
        }

        match self.state {
            EscapeState::None => Outcome::Pass,
            EscapeState::Start => {
                if byte == b'[' {
                    self.state = EscapeState::Code;
                    Outcome::Consumed
                } else {
                    self.state = EscapeState::None;
                    Outcome::Pass
                }
            }
            EscapeState::Code => {
                self.state = EscapeState::None;
                match byte {
                    b'A' => Outcome::Key(CursorKey::Up),
                    b'B' => Outcome::Key(CursorKey::Down),
                    b'C' => Outcome::Key(CursorKey::Right),
                    b'D' => Outcome::Key(CursorKey::Left),
                    _ => Outcome::Consumed,
                }
            }
        }
    }

    /// True while a sequence is in flight.
    pub fn in_sequence(&self) -> bool {
        self.state != EscapeState::None
    }
}

impl Default for EscapeDetector {
    fn default() -> Self {
        Self::new()
    }
}
