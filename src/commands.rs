//! Command table and dispatcher

use core::fmt::Write;

use crate::error::ConsoleError;
use crate::parser::ParsedLine;
use crate::port::ConsoleOutput;

/// Command table capacity, the built-in `help` included.
pub const MAX_COMMANDS: usize = 20;

/// A registered command handler.
///
/// Blanket-implemented for closures, so any capturing `FnMut` with the
/// matching signature registers directly.
pub trait Command {
    /// Run with the argument tokens of the submitted line.
    fn run(&mut self, args: &[&str], out: &mut dyn Write) -> Result<(), ConsoleError>;
}

impl<F> Command for F
where
    F: FnMut(&[&str], &mut dyn Write) -> Result<(), ConsoleError>,
{
    fn run(&mut self, args: &[&str], out: &mut dyn Write) -> Result<(), ConsoleError> {
        self(args, out)
    }
}

enum Handler<'a> {
    /// The built-in help, which iterates the table it lives in
    Help,
    Host(&'a mut dyn Command),
}

/// One registered command.
pub struct CommandEntry<'a> {
    name: &'a str,
    description: &'a str,
    handler: Handler<'a>,
}

impl CommandEntry<'_> {
    /// Registered name
    pub fn name(&self) -> &str {
        self.name
    }

    /// Registered description
    pub fn description(&self) -> &str {
        self.description
    }
}

/// Insertion-ordered command registry with exact-match dispatch.
pub struct CommandTable<'a> {
    entries: heapless::Vec<CommandEntry<'a>, MAX_COMMANDS>,
}

impl<'a> CommandTable<'a> {
    /// Create a table with the built-in `help` in slot 0.
    pub fn new() -> Self {
        let mut entries = heapless::Vec::new();
        // cannot fail on an empty table
        let _ = entries.push(CommandEntry {
            name: "help",
            description: "Prints help.\n\r",
            handler: Handler::Help,
        });
        Self { entries }
    }

    /// Register a command.
    ///
    /// Fails only when the table is full. Duplicate names are not rejected;
    /// the earliest registration wins at dispatch.
    pub fn register(
        &mut self,
        name: &'a str,
        handler: &'a mut dyn Command,
        description: &'a str,
    ) -> Result<(), ConsoleError> {
        self.entries
            .push(CommandEntry {
                name,
                description,
                handler: Handler::Host(handler),
            })
            .map_err(|_| ConsoleError::TableFull)
    }

    /// Registered names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone + use<'_, 'a> {
        self.entries.iter().map(|e| e.name)
    }

    /// Registered entries, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry<'a>> {
        self.entries.iter()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: `help` occupies slot 0.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the handler matching the parsed line's command name.
    ///
    /// Matching is exact - a name that is a strict prefix of a registered
    /// command never dispatches, unlike tab completion.
    pub fn dispatch<W: ConsoleOutput>(
        &mut self,
        parsed: &ParsedLine<'_>,
        out: &mut W,
    ) -> Result<(), ConsoleError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.name == parsed.command)
            .ok_or(ConsoleError::CommandNotFound)?;

        if let Handler::Host(handler) = &mut self.entries[idx].handler {
            return handler.run(parsed.args(), out);
        }
        self.show_help(parsed, out)
    }

    /// `help` lists every name; `help <cmd>` prints that command's
    /// description verbatim.
    fn show_help<W: ConsoleOutput>(
        &self,
        parsed: &ParsedLine<'_>,
        out: &mut W,
    ) -> Result<(), ConsoleError> {
        match parsed.arg(0) {
            None => {
                let _ = writeln!(out, "List of available commands:");
                let _ = writeln!(out);
                for entry in &self.entries {
                    let _ = writeln!(out, "{}", entry.name);
                }
                let _ = writeln!(out);
                let _ = writeln!(out, "To get detailed information about <cmd>, type \"help <cmd>\".");
                Ok(())
            }
            Some(topic) => {
                let entry = self
                    .entries
                    .iter()
                    .find(|e| e.name == topic)
                    .ok_or(ConsoleError::UnknownHelpTopic)?;
                out.write_verbatim(entry.description);
                Ok(())
            }
        }
    }
}

impl Default for CommandTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}
