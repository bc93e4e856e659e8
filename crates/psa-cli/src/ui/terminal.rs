use std::io::{self, Write};

/// Line-oriented output surface: listings go to `write_line`, diagnostics
/// to `write_error`.
pub trait TerminalWriter {
    fn clear_screen(&mut self);
    fn write_line(&mut self, line: &str);
    fn write_error(&mut self, line: &str);
    fn flush(&mut self);
}

/// Writes to the process stdout/stderr.
pub struct AnsiTerminal;

impl Default for AnsiTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl AnsiTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalWriter for AnsiTerminal {
    fn clear_screen(&mut self) {
        print!("\x1B[H\x1B[2J");
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn write_error(&mut self, line: &str) {
        eprintln!("{}", line);
    }

    fn flush(&mut self) {
        let _ = io::stdout().flush();
    }
}

/// In-memory terminal for tests.
///
/// `lines` holds what is currently on screen (cleared with the screen);
/// `errors` accumulates across clears like a real stderr.
pub struct MockTerminal {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
    pub clear_count: usize,
    pub flush_count: usize,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTerminal {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            errors: Vec::new(),
            clear_count: 0,
            flush_count: 0,
        }
    }
}

impl TerminalWriter for MockTerminal {
    fn clear_screen(&mut self) {
        self.clear_count += 1;
        self.lines.clear();
    }

    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn write_error(&mut self, line: &str) {
        self.errors.push(line.to_string());
    }

    fn flush(&mut self) {
        self.flush_count += 1;
    }
}
