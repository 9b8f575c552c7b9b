//! Command line tokenization
//!
//! Non-destructive: tokens are borrowed subslices of the submitted line.

use heapless::Vec;

/// Maximum number of argument tokens kept per line.
pub const MAX_TOKENS: usize = 10;

/// A submitted line split into command name and arguments.
#[derive(Debug)]
pub struct ParsedLine<'a> {
    /// The command-name segment (everything before the first space)
    pub command: &'a str,
    args: Vec<&'a str, MAX_TOKENS>,
}

impl<'a> ParsedLine<'a> {
    /// Get argument by index (0-based)
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied()
    }

    /// All argument tokens
    pub fn args(&self) -> &[&'a str] {
        &self.args
    }

    /// Number of argument tokens
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }
}

/// Split a line at the first space, then the remainder on single spaces.
///
/// Consecutive spaces produce empty tokens; a line without a space has no
/// arguments at all. Tokens past [`MAX_TOKENS`] are dropped.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let (command, rest) = match line.find(' ') {
        Some(pos) => (&line[..pos], Some(&line[pos + 1..])),
        None => (line, None),
    };

    let mut args = Vec::new();
    if let Some(rest) = rest {
        for token in rest.split(' ') {
            if args.push(token).is_err() {
                break;
            }
        }
    }

    ParsedLine { command, args }
}
