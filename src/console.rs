//! Main console struct integrating all components

use core::fmt::Write;

use crate::commands::{Command, CommandTable};
use crate::completion;
use crate::error::ConsoleError;
use crate::escape::{CursorKey, EscapeDetector, Outcome};
use crate::history::History;
use crate::line_buffer::{LineBuffer, LINE_SIZE};
use crate::parser::parse_line;
use crate::port::{ConsoleOutput, CookedWriter, SerialPort};

/// Console construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleConfig<'a> {
    /// Name shown in the prompt (`<hostname>> `)
    pub hostname: &'a str,
    /// Write the prompt immediately on construction
    pub show_prompt: bool,
    /// Echo accepted printable bytes back to the transport
    pub local_echo: bool,
}

impl Default for ConsoleConfig<'static> {
    fn default() -> Self {
        Self {
            hostname: "ttycmd",
            show_prompt: true,
            local_echo: true,
        }
    }
}

/// Console state machine: line editing, history, completion, dispatch.
///
/// Owns the transport and all session state. `poll()` drains whatever bytes
/// are pending and returns - the host re-invokes it once per scheduling
/// tick, nothing ever blocks.
pub struct Console<'a, P: SerialPort> {
    port: P,
    config: ConsoleConfig<'a>,
    line: LineBuffer,
    history: History,
    detector: EscapeDetector,
    table: CommandTable<'a>,
}

impl<'a, P: SerialPort> Console<'a, P> {
    /// Create a console over a transport.
    pub fn new(port: P, config: ConsoleConfig<'a>) -> Self {
        let mut console = Self {
            port,
            config,
            line: LineBuffer::new(),
            history: History::new(),
            detector: EscapeDetector::new(),
            table: CommandTable::new(),
        };
        if console.config.show_prompt {
            console.print_prompt();
        }
        console
    }

    /// Register a command.
    pub fn register(
        &mut self,
        name: &'a str,
        handler: &'a mut dyn Command,
        description: &'a str,
    ) -> Result<(), ConsoleError> {
        let result = self.table.register(name, handler, description);
        if result.is_err() {
            log::warn!("command table full, dropping {}", name);
        }
        result
    }

    /// Consume all pending input bytes.
    pub fn poll(&mut self) {
        while self.port.available() > 0 {
            let byte = self.port.read();
            self.handle_byte(byte);
        }
    }

    /// The in-progress command line.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// The underlying transport.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    fn handle_byte(&mut self, byte: u8) {
        match self.detector.feed(byte) {
            Outcome::Consumed => return,
            Outcome::Key(CursorKey::Up) => {
                self.history_up();
                return;
            }
            Outcome::Key(CursorKey::Down) => {
                self.history_down();
                return;
            }
            // Left/right are recognized but the cursor stays put
            Outcome::Key(_) => return,
            Outcome::Pass => {}
        }

        match byte {
            0x7F | 0x08 => self.backspace(byte),
            b'\t' => self.handle_tab(),
            b'\r' => self.submit(),
            // LF is absorbed so CR-LF endings do not submit twice
            b'\n' => {}
            // Ctrl+C
            0x03 => self.cancel_line(),
            0x20..=0x7E => self.insert(byte),
            _ => {}
        }
    }

    fn insert(&mut self, byte: u8) {
        if self.line.push(byte) && self.config.local_echo {
            self.port.write(byte);
        }
    }

    fn backspace(&mut self, byte: u8) {
        if self.line.is_empty() {
            // Bell
            self.port.write(0x07);
            return;
        }
        self.line.backspace();
        // Echo the backspace, blank the column, step back over the blank
        self.port.write(byte);
        let mut out = CookedWriter::new(&mut self.port);
        let _ = write!(out, " \x1B[1D");
    }

    fn handle_tab(&mut self) {
        // Completion applies to the command name only, never to arguments
        if self.line.is_empty() || self.line.as_bytes().contains(&b' ') {
            return;
        }

        let Some(suffix) = completion::expand(self.line.as_str(), self.table.names()) else {
            return;
        };

        // An expansion that would overflow the line is suppressed entirely
        if self.line.len() + suffix.len() > LINE_SIZE - 1 {
            return;
        }
        for b in suffix.bytes() {
            self.line.push(b);
            self.port.write(b);
        }
    }

    fn submit(&mut self) {
        {
            let mut out = CookedWriter::new(&mut self.port);
            let _ = writeln!(out);

            if !self.line.is_empty() {
                let line = self.line.as_str();
                self.history.push(line);

                let parsed = parse_line(line);
                log::debug!("dispatch: {}", parsed.command);
                match self.table.dispatch(&parsed, &mut out) {
                    Ok(()) => {}
                    Err(ConsoleError::CommandNotFound) => {
                        let _ = writeln!(
                            out,
                            "Command not found. Use \"help\" or \"help <cmd>\" for details."
                        );
                    }
                    Err(ConsoleError::UnknownHelpTopic) => {
                        let _ = writeln!(
                            out,
                            "ERROR: Command {} not found.",
                            parsed.arg(0).unwrap_or("")
                        );
                    }
                    Err(e) => {
                        let _ = writeln!(out, "{}", e);
                    }
                }
            }
        }

        self.line.clear();
        self.print_prompt();
    }

    fn cancel_line(&mut self) {
        let mut out = CookedWriter::new(&mut self.port);
        let _ = writeln!(out, "^C");
        self.line.clear();
        self.print_prompt();
    }

    fn history_up(&mut self) {
        let visible = self.line.len();
        let Some(text) = self.history.older() else {
            return;
        };
        self.line.set(text);
        self.render_recalled(visible);
    }

    fn history_down(&mut self) {
        let visible = self.line.len();
        let Some(text) = self.history.newer() else {
            return;
        };
        self.line.set(text);
        self.render_recalled(visible);
    }

    /// Redraw the line after a history recall: erase what was visible,
    /// write the new text, wipe any leftover columns.
    fn render_recalled(&mut self, visible: usize) {
        for _ in 0..visible {
            self.port.write(0x08);
        }
        let mut out = CookedWriter::new(&mut self.port);
        out.write_verbatim(self.line.as_str());
        if self.line.len() < visible {
            let _ = write!(out, "\x1B[K");
        }
    }

    /// Print the prompt
    pub fn print_prompt(&mut self) {
        let mut out = CookedWriter::new(&mut self.port);
        let _ = write!(out, "{}> ", self.config.hostname);
    }

    /// Print welcome banner
    pub fn print_banner(&mut self) {
        let mut out = CookedWriter::new(&mut self.port);
        let _ = writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let _ = writeln!(out, "Type 'help' for a list of commands.");
        self.print_prompt();
    }
}
